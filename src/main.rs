// Loom: paint a 32x32 canvas with a two-dimensional esoteric language

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use loom::display::headless::RecordingDisplay;
use loom::display::DisplayError;
use loom::host::{self, LoomError};
use loom::interpreter::config::ExecutionConfig;
use loom::interpreter::errors::RuntimeError;
use loom::ui::{self, TerminalDisplay};

#[derive(Debug, Parser)]
#[command(name = "loom", version, about = "Run a Loom program on a 32x32 palette canvas")]
struct Cli {
    /// Path to a Loom program, or the program text itself
    program: String,

    /// Run without the terminal canvas and print the final screen as numbers
    #[arg(long)]
    headless: bool,

    /// Seed for `?` so runs are reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each commit in the terminal canvas, in milliseconds [default: 1]
    #[arg(long = "pacing-ms")]
    pacing_ms: Option<u64>,

    /// Stop with an error after this many instructions
    #[arg(long = "step-limit")]
    step_limit: Option<u64>,

    /// Print the canonical program text and exit without running it
    #[arg(long)]
    normalize: bool,
}

impl Cli {
    fn config(&self) -> ExecutionConfig {
        // Headless runs never pause
        let mut config = if self.headless {
            ExecutionConfig::default()
        } else {
            let config = ExecutionConfig::interactive();
            match self.pacing_ms {
                Some(ms) => config.with_pacing(Duration::from_millis(ms)),
                None => config,
            }
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(limit) = self.step_limit {
            config = config.with_step_limit(limit);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Anything written to stderr would tear through the alternate screen
    let default_filter = if cli.headless || cli.normalize {
        "info"
    } else {
        "error"
    };
    init_tracing(default_filter);

    let result = host::load_program(&cli.program).and_then(|source| {
        if cli.normalize {
            println!("{}", host::canonical_text(&source)?);
            Ok(())
        } else if cli.headless {
            run_headless(&source, cli.config())
        } else {
            run_terminal(&source, cli.config())
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_headless(source: &str, config: ExecutionConfig) -> Result<(), LoomError> {
    let mut display = RecordingDisplay::with_frame_limit(0);
    let summary = host::run_source(source, config, &mut display)?;
    tracing::info!(outcome = ?summary.outcome, "run finished");
    println!("{}", host::format_grid(&summary.screen));
    Ok(())
}

fn run_terminal(source: &str, config: ExecutionConfig) -> Result<(), LoomError> {
    let terminal = ui::init_terminal().map_err(RuntimeError::from)?;
    let mut display = TerminalDisplay::new(terminal);

    let result = host::run_source(source, config, &mut display);

    // Restore the terminal before any error reaches stderr
    let restored = ui::restore_terminal(display.terminal_mut());
    settle(result.map(|_| ()), restored)
}

/// A failed run wins over a failed terminal restore
fn settle(run: Result<(), LoomError>, restored: Result<(), DisplayError>) -> Result<(), LoomError> {
    run?;
    restored.map_err(RuntimeError::from)?;
    Ok(())
}
