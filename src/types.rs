//! Shared types for PredictCombo.
//!
//! The data model used by the parser, the strategy and the report layer.
//! Everything here is constructed, used and discarded within a single
//! prediction; nothing is persisted.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest number that can be drawn.
pub const MIN_NUMBER: i64 = 1;
/// Largest number that can be drawn.
pub const MAX_NUMBER: i64 = 75;
/// First number labelled `Over`. 1..=37 is Under, 38..=75 is Over.
pub const OVER_THRESHOLD: u8 = 38;
/// Stake used when no bet is supplied.
pub const DEFAULT_BET: u32 = 10;

// ---------------------------------------------------------------------------
// Number
// ---------------------------------------------------------------------------

/// A drawn number, guaranteed to lie in `MIN_NUMBER..=MAX_NUMBER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Number(u8);

impl Number {
    /// Validate a raw integer.
    pub fn new(value: i64) -> Result<Self, PredictError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            return Err(PredictError::OutOfRange { value });
        }
        // In range, so it fits in a u8.
        Ok(Number(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Under for 1..=37, Over for 38..=75.
    pub fn range(self) -> RangeLabel {
        if self.0 >= OVER_THRESHOLD {
            RangeLabel::Over
        } else {
            RangeLabel::Under
        }
    }

    pub fn parity(self) -> ParityLabel {
        if self.0 % 2 == 0 {
            ParityLabel::Even
        } else {
            ParityLabel::Odd
        }
    }
}

impl TryFrom<i64> for Number {
    type Error = PredictError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Number::new(value)
    }
}

/// Ordered draws, most recent last.
pub type History = Vec<Number>;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Coarse bucket of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeLabel {
    #[serde(rename = "U")]
    Under,
    #[serde(rename = "O")]
    Over,
}

impl RangeLabel {
    pub fn opposite(&self) -> Self {
        match self {
            RangeLabel::Under => RangeLabel::Over,
            RangeLabel::Over => RangeLabel::Under,
        }
    }

    /// One-letter form used in picks and reports.
    pub fn short(&self) -> &'static str {
        match self {
            RangeLabel::Under => "U",
            RangeLabel::Over => "O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParityLabel {
    #[serde(rename = "E")]
    Even,
    #[serde(rename = "O")]
    Odd,
}

impl ParityLabel {
    pub fn opposite(&self) -> Self {
        match self {
            ParityLabel::Even => ParityLabel::Odd,
            ParityLabel::Odd => ParityLabel::Even,
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            ParityLabel::Even => "E",
            ParityLabel::Odd => "O",
        }
    }
}

// ---------------------------------------------------------------------------
// Picks and bets
// ---------------------------------------------------------------------------

/// A suggested (range, parity) combination, rendered as `"<Range>/<Parity>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pick {
    pub range: RangeLabel,
    pub parity: ParityLabel,
}

impl Pick {
    pub fn new(range: RangeLabel, parity: ParityLabel) -> Self {
        Self { range, parity }
    }

    /// Same parity, opposite range.
    pub fn backup(&self) -> Self {
        Self {
            range: self.range.opposite(),
            parity: self.parity,
        }
    }
}

/// Betting state supplied alongside the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetState {
    /// Stake of the round just played. Zero is accepted.
    pub current_bet: u32,
    pub last_round_won: bool,
}

impl Default for BetState {
    fn default() -> Self {
        Self {
            current_bet: DEFAULT_BET,
            last_round_won: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

/// Why the range was predicted the way it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeReason {
    /// The two most recent draws share a range; predict the other one.
    Bounce { pair: [RangeLabel; 2] },
    /// No streak in the window; repeat the most recent range.
    Continuation { window: Vec<RangeLabel> },
}

/// How the next stake was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetReason {
    /// Last round won: back to the base stake.
    Reset { base: u32 },
    /// Last round lost: stake doubled.
    Double { from: u32, to: u32 },
}

/// Everything the prediction looked at and decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub last_number: Number,
    pub last_range: RangeLabel,
    pub last_parity: ParityLabel,
    pub predicted_range: RangeLabel,
    pub predicted_parity: ParityLabel,
    pub range_reason: RangeReason,
    pub bet_reason: BetReason,
}

/// Output of `strategy::predict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub top_pick: Pick,
    pub backup: Pick,
    pub next_bet: u32,
    pub explanation: Explanation,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Everything that can go wrong in a single prediction. All variants are
/// terminal for the call; the message is meant to be shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    #[error("Invalid number: \"{token}\"")]
    Parse { token: String },

    #[error("Numbers must be 1..75")]
    OutOfRange { value: i64 },

    #[error("Provide at least one number")]
    EmptyHistory,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
