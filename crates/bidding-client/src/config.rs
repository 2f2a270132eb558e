//! Command-line and environment configuration.

use bidding_core::{TrainingMode, DEFAULT_BIDDING_SYSTEM};
use clap::Parser;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Parser)]
#[command(name = "bidding-client")]
#[command(about = "Terminal client for the Bridge Bidding Tutor")]
pub struct Args {
    /// Base URL of the tutor API
    #[arg(long, env = "BRIDGE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Training mode: single (you are South) or multi (you bid every seat)
    #[arg(long, env = "BRIDGE_TRAINING_MODE", default_value = "single", value_parser = parse_mode)]
    pub mode: TrainingMode,

    /// Bidding system sent to the server
    #[arg(long, env = "BRIDGE_BIDDING_SYSTEM", default_value = DEFAULT_BIDDING_SYSTEM)]
    pub system: String,

    /// Disable colored suit symbols
    #[arg(long)]
    pub no_color: bool,
}

fn parse_mode(input: &str) -> Result<TrainingMode, String> {
    TrainingMode::parse(input).ok_or_else(|| format!("unknown training mode '{}'", input))
}

/// Resolved client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub training_mode: TrainingMode,
    pub bidding_system: String,
    pub color: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            training_mode: TrainingMode::default(),
            bidding_system: DEFAULT_BIDDING_SYSTEM.to_string(),
            color: true,
        }
    }
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        Self {
            api_url: args.api_url,
            training_mode: args.mode,
            bidding_system: args.system,
            color: !args.no_color,
        }
    }
}
