use std::path::PathBuf;

use clap::Parser;

use crate::data::afltables::DEFAULT_FIXTURES_URL;

#[derive(Parser, Clone)]
#[command(
    display_name = "AFL Elo Processor",
    long_about = "Generates Elo ratings and pre-match win forecasts from the historical AFL fixture list"
)]
pub struct Args {
    /// URL of the afltables big-list fixture file
    #[arg(short, long, env = "FIXTURES_URL", default_value = DEFAULT_FIXTURES_URL)]
    pub url: String,

    /// Read fixtures from a local copy instead of fetching over HTTP
    #[arg(short, long, env = "FIXTURES_FILE")]
    pub file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
