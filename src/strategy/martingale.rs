//! Martingale bet sizing.
//!
//! Double the stake after a loss, reset to the base stake after a win.

use tracing::debug;

use crate::types::{BetReason, BetState, DEFAULT_BET};

/// Stake after a won round; the same stake a fresh player starts with.
pub const BASE_BET: u32 = DEFAULT_BET;

/// Next stake plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedBet {
    pub amount: u32,
    pub reason: BetReason,
}

/// Size the next bet.
///
/// A win ignores `current_bet` entirely. A loss doubles it, saturating at
/// `u32::MAX`; a zero stake stays zero.
pub fn size_bet(state: &BetState) -> SizedBet {
    let sized = if state.last_round_won {
        SizedBet {
            amount: BASE_BET,
            reason: BetReason::Reset { base: BASE_BET },
        }
    } else {
        let doubled = state.current_bet.saturating_mul(2);
        SizedBet {
            amount: doubled,
            reason: BetReason::Double {
                from: state.current_bet,
                to: doubled,
            },
        }
    };

    debug!(
        current_bet = state.current_bet,
        won = state.last_round_won,
        next_bet = sized.amount,
        "Bet sized"
    );

    sized
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
