//! Strategy engine: parity alternation, range streak/bounce, martingale sizing.
//!
//! [`predict`] is pure and deterministic; identical inputs always produce an
//! identical [`Prediction`]. It holds no state and can be called from any
//! number of threads.

pub mod martingale;
pub mod range;

use tracing::debug;

use crate::types::{BetState, Explanation, Number, PredictError, Pick, Prediction};
use martingale::size_bet;
use range::call_range;

/// Predict the next range/parity combination and the next stake.
///
/// Steps:
/// 1. Label the most recent draw.
/// 2. Parity: always the opposite of the most recent parity.
/// 3. Range: bounce after a streak, otherwise continue (see [`range`]).
/// 4. Backup pick: same parity, opposite range.
/// 5. Stake: martingale (see [`martingale`]).
///
/// Fails with [`PredictError::EmptyHistory`] when `history` is empty,
/// whatever the bet state.
pub fn predict(history: &[Number], bet: BetState) -> Result<Prediction, PredictError> {
    let last = *history.last().ok_or(PredictError::EmptyHistory)?;
    let last_range = last.range();
    let last_parity = last.parity();

    let predicted_parity = last_parity.opposite();
    let range = call_range(history).ok_or(PredictError::EmptyHistory)?;
    let sized = size_bet(&bet);

    let top_pick = Pick::new(range.predicted, predicted_parity);
    let backup = top_pick.backup();

    debug!(
        last_number = last.value(),
        last = format!("{}/{}", last_range.short(), last_parity.short()),
        top_pick = format!("{}/{}", top_pick.range.short(), top_pick.parity.short()),
        next_bet = sized.amount,
        "Prediction complete"
    );

    Ok(Prediction {
        top_pick,
        backup,
        next_bet: sized.amount,
        explanation: Explanation {
            last_number: last,
            last_range,
            last_parity,
            predicted_range: range.predicted,
            predicted_parity,
            range_reason: range.reason,
            bet_reason: sized.reason,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
