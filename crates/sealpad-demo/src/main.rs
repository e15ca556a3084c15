//! Sealpad demo entry point.

use clap::{Parser, Subcommand};
use sealpad_demo::demos;

/// Sealpad authentication-scheme demonstrations
#[derive(Parser, Debug)]
#[command(name = "sealpad-demo")]
#[command(about = "Contrast one-time authentication with a keyed-hash MAC")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every demonstration in sequence
    All,
    /// One-time channel: encode, tag, verify, tamper
    OneTime,
    /// MAC baseline: key, tag, verify, tamper
    Mac,
    /// Timing sweep and behavioral comparison of both schemes
    Compare {
        /// Timed iterations per message size
        #[arg(short, long, default_value_t = 32)]
        iterations: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Args::parse().command.unwrap_or(Command::All) {
        Command::All => {
            demos::run_one_time_demo()?;
            demos::run_mac_demo()?;
            demos::run_comparison(32)?;
        },
        Command::OneTime => demos::run_one_time_demo()?,
        Command::Mac => demos::run_mac_demo()?,
        Command::Compare { iterations } => demos::run_comparison(iterations)?,
    }

    Ok(())
}
