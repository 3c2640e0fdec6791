//! PredictCombo — command-line entry point.
//!
//! Loads configuration, initialises structured logging, then either runs a
//! single prediction or starts the HTTP server.

use anyhow::Result;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

use predictcombo::api::{self, routes::ApiState};
use predictcombo::cli::{predict_command, Cli, Command, PredictOutcome};
use predictcombo::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let cfg = AppConfig::load_or_default(&cli.config)?;

    init_logging(&cfg.logging);

    match cli.command {
        Command::Predict(args) => {
            let outcome = predict_command(&args, cfg.defaults.bet_state())?;
            match &outcome {
                PredictOutcome::Report(text) => println!("{text}"),
                PredictOutcome::Rejected(err) => {
                    warn!(error = %err, "Prediction rejected");
                    eprintln!("{err}");
                }
            }
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Command::Serve { port } => {
            let host: IpAddr = cfg.server.host.parse()?;
            let addr = SocketAddr::new(host, port.unwrap_or(cfg.server.port));
            info!(
                %addr,
                default_bet = cfg.defaults.current_bet,
                default_won = cfg.defaults.last_round_won,
                "PredictCombo starting up"
            );
            let state = Arc::new(ApiState::new(cfg.defaults.bet_state()));
            api::serve(state, addr).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialise the `tracing` subscriber. Logs go to stderr so stdout stays
/// clean for the report.
fn init_logging(cfg: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.filter));

    let json_logging = cfg.json || std::env::var("PREDICTCOMBO_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
