//! Command-line front end.
//!
//! Argument definitions and the `predict` command. The binary only wires
//! these to config, logging and the process exit code.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::parser::{parse_bet, require_history};
use crate::report::PredictionReport;
use crate::strategy::predict;
use crate::types::{BetState, PredictError};

/// Exit status for rejected input.
pub const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "predictcombo", version, about = "Range/parity next-pick heuristic with a martingale bet rule")]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict the next pick from a comma-separated history
    Predict(PredictArgs),

    /// Serve the HTTP API and form page
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    /// Last numbers, comma separated, most recent last (e.g. "64,18,24,38,75")
    #[arg(short, long)]
    pub numbers: String,

    /// Current bet; non-digit characters are ignored
    #[arg(short, long)]
    pub bet: Option<String>,

    /// The last round was lost
    #[arg(long, conflicts_with = "won")]
    pub lost: bool,

    /// The last round was won
    #[arg(long)]
    pub won: bool,

    /// Print a plain text block instead of JSON
    #[arg(long)]
    pub text: bool,
}

impl PredictArgs {
    /// Flags override the configured defaults; absent flags keep them.
    pub fn bet_state(&self, defaults: BetState) -> BetState {
        let last_round_won = if self.lost {
            false
        } else if self.won {
            true
        } else {
            defaults.last_round_won
        };
        BetState {
            current_bet: self.bet.as_deref().map(parse_bet).unwrap_or(defaults.current_bet),
            last_round_won,
        }
    }
}

/// Result of the `predict` command: text for stdout, or a rejection for stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictOutcome {
    Report(String),
    Rejected(PredictError),
}

impl PredictOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            PredictOutcome::Report(_) => 0,
            PredictOutcome::Rejected(_) => EXIT_INVALID_INPUT,
        }
    }
}

/// Parse, validate and predict in one step.
pub fn run_predict(numbers: &str, bet: BetState) -> Result<PredictionReport, PredictError> {
    let history = require_history(numbers)?;
    let prediction = predict(&history, bet)?;
    Ok(PredictionReport::from(&prediction))
}

/// Run `predict` and render its output. Only a serialization failure is an
/// `Err`; rejected input is a normal [`PredictOutcome::Rejected`].
pub fn predict_command(args: &PredictArgs, defaults: BetState) -> serde_json::Result<PredictOutcome> {
    let report = match run_predict(&args.numbers, args.bet_state(defaults)) {
        Ok(report) => report,
        Err(err) => return Ok(PredictOutcome::Rejected(err)),
    };
    let rendered = if args.text {
        report.to_string()
    } else {
        report.to_pretty_json()?
    };
    Ok(PredictOutcome::Report(rendered))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
