//! Rampart CLI - the contest player process.
//!
//! Reads the match from stdin, writes decisions to stdout, and uses stderr
//! as the harness diagnostic channel.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rampart::run_session;
use rampart::strategy::{Idle, RoundRobinSpawner, Strategy};

/// Rampart - a turn-based tower siege contest client
#[derive(Parser, Debug)]
#[command(name = "rampart")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Strategy that plans each turn
    #[arg(short, long, default_value = "round-robin")]
    strategy: StrategyKind,

    /// Save a JSON transcript of the match to this file
    #[arg(long)]
    save: Option<PathBuf>,
}

/// Bundled strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// One spawn attempt per attacker type per turn, walking the perimeter.
    RoundRobin,
    /// Never spawn, never target.
    Idle,
}

impl StrategyKind {
    fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::RoundRobin => Box::new(RoundRobinSpawner::new()),
            StrategyKind::Idle => Box::new(Idle),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut strategy = args.strategy.build();

    // stderr stays unlocked: the session writes the diagnostic blocks and
    // tracing shares the stream when enabled.
    let result = run_session(
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
        strategy.as_mut(),
    );

    match result {
        Ok(transcript) => {
            if let Some(path) = args.save {
                if let Err(e) = transcript.save(&path) {
                    eprintln!("Error: failed to save transcript: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing. Silent unless `RUST_LOG` opts in, since stderr
/// doubles as the harness log channel.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}
