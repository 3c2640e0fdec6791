//! Presentation layer.
//!
//! Converts a structured [`Prediction`] into the flat key/value record that
//! front ends display, and renders the reasons as human-readable text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{BetReason, ParityLabel, Pick, Prediction, RangeLabel, RangeReason};

// ---------------------------------------------------------------------------
// Display impls
// ---------------------------------------------------------------------------

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

impl fmt::Display for ParityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.range, self.parity)
    }
}

impl fmt::Display for RangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeReason::Bounce { pair } => {
                write!(f, "last ranges {} → streak → bounce", label_list(pair))
            }
            RangeReason::Continuation { window } => {
                write!(f, "no streak in {} → continuation", label_list(window))
            }
        }
    }
}

impl fmt::Display for BetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetReason::Reset { base } => write!(f, "last round won → reset to base ({base})"),
            BetReason::Double { from, to } => {
                write!(f, "last round lost → double from {from} to {to}")
            }
        }
    }
}

/// `[U, O, O]`
fn label_list(labels: &[RangeLabel]) -> String {
    let inner: Vec<&str> = labels.iter().map(RangeLabel::short).collect();
    format!("[{}]", inner.join(", "))
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The record shown to the user, field order as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub top_pick: String,
    pub backup: String,
    pub next_bet: u32,
    pub explanation: ExplanationReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationReport {
    pub last_number: u8,
    pub last_parity: ParityLabel,
    pub last_range: RangeLabel,
    pub predicted_parity: ParityLabel,
    pub predicted_range: RangeLabel,
    pub range_reason: String,
    pub bet_reason: String,
}

impl From<&Prediction> for PredictionReport {
    fn from(p: &Prediction) -> Self {
        let e = &p.explanation;
        Self {
            top_pick: p.top_pick.to_string(),
            backup: p.backup.to_string(),
            next_bet: p.next_bet,
            explanation: ExplanationReport {
                last_number: e.last_number.value(),
                last_parity: e.last_parity,
                last_range: e.last_range,
                predicted_parity: e.predicted_parity,
                predicted_range: e.predicted_range,
                range_reason: e.range_reason.to_string(),
                bet_reason: e.bet_reason.to_string(),
            },
        }
    }
}

impl PredictionReport {
    /// Two-space indented JSON document.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.explanation;
        writeln!(f, "Top pick:  {}", self.top_pick)?;
        writeln!(f, "Backup:    {}", self.backup)?;
        writeln!(f, "Next bet:  {}", self.next_bet)?;
        writeln!(
            f,
            "Last:      {} ({}/{})",
            e.last_number, e.last_range, e.last_parity
        )?;
        writeln!(f, "Range:     {}", e.range_reason)?;
        write!(f, "Bet:       {}", e.bet_reason)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
