mod cli;
mod client;
mod config;
mod error;
mod models;
mod scheduler;
mod storage;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::client::StatusClient;
use crate::config::{Flags, Resolution, DEFAULT_INTERVAL_MINUTES, DEFAULT_OUTPUT_FILE, VERSION};
use crate::error::{exit_code, Result};

const GREETING: &str = "SameTime IM Status Tracking Tool";

#[derive(Parser)]
#[command(name = "sametime-track")]
#[command(about = "Log the Sametime presence status of a user at a fixed interval", long_about = None)]
struct Cli {
    /// REQUIRED. Sametime user id. Try your own id if you don't know one.
    #[arg(long = "userid", default_value = "")]
    user_id: String,

    /// Output file to store logs
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Shows version information
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    version: bool,

    /// Interval in minutes to check status (1-200)
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MINUTES)]
    interval: u64,
}

impl From<Cli> for Flags {
    fn from(cli: Cli) -> Self {
        Self {
            user_id: cli.user_id,
            output: cli.output,
            interval: cli.interval,
            version: cli.version,
        }
    }
}

fn run(flags: Flags) -> Result<()> {
    let client = StatusClient::new()?;

    match config::resolve(flags, &client)? {
        Resolution::ShowVersion => {
            println!("Version {}", VERSION);
            Ok(())
        }
        Resolution::Track(settings) => cli::track::run(&settings, &client),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("{}", GREETING);

    let cli = Cli::parse_from(config::normalize_args(std::env::args_os()));

    if let Err(e) = run(cli.into()) {
        if e.is_configuration() {
            println!("{}", e);
        } else {
            log::error!("{}", e);
        }
        std::process::exit(e.exit_code());
    }

    std::process::exit(exit_code::NO_PROBLEMS);
}
