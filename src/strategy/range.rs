//! Range prediction: streak/bounce heuristic.
//!
//! Looks at the ranges of the last few draws. Two equal ranges at the end of
//! the window are a streak and the prediction bounces to the other range;
//! otherwise the most recent range continues.

use tracing::debug;

use crate::types::{Number, RangeLabel, RangeReason};

/// Number of most recent draws examined.
pub const RANGE_WINDOW: usize = 3;

/// Predicted range plus the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCall {
    pub predicted: RangeLabel,
    pub reason: RangeReason,
}

/// Range labels of up to the last [`RANGE_WINDOW`] draws, oldest first.
pub fn range_window(history: &[Number]) -> Vec<RangeLabel> {
    let start = history.len().saturating_sub(RANGE_WINDOW);
    history[start..].iter().map(|n| n.range()).collect()
}

/// Call the next range. `None` only for an empty history.
pub fn call_range(history: &[Number]) -> Option<RangeCall> {
    let window = range_window(history);
    let last = *window.last()?;
    let previous = window.len().checked_sub(2).map(|i| window[i]);

    let call = match previous {
        Some(previous) if previous == last => RangeCall {
            predicted: last.opposite(),
            reason: RangeReason::Bounce {
                pair: [previous, last],
            },
        },
        _ => RangeCall {
            predicted: last,
            reason: RangeReason::Continuation { window },
        },
    };

    debug!(
        predicted = call.predicted.short(),
        bounce = matches!(call.reason, RangeReason::Bounce { .. }),
        "Range called"
    );

    Some(call)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
