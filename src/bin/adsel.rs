// Thin harness around the adsel library.
// All of the real logic lives in the lib crate (selector, loader, report).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use adsel::{load_table, run_ucb1, write_histogram, write_summary, RewardSource};

/// Replay the UCB1 ad-selection policy over a precomputed reward table.
#[derive(Parser, Debug)]
#[command(name = "adsel", version = adsel::ADSEL_VERSION)]
struct Cli {
    /// Path to the reward table (rounds x arms, comma-delimited).
    #[arg(short, long, default_value = "dataset.csv")]
    file: PathBuf,

    /// Number of selection rounds to replay.
    #[arg(short = 'o', long, default_value_t = 10_000)]
    rounds: usize,

    /// Number of arms (columns) to select over.
    #[arg(short = 'n', long, default_value_t = 10)]
    arms: usize,

    /// Width of the histogram bars, in characters.
    #[arg(long, default_value_t = 50)]
    bar_width: usize,
}

fn run(cli: &Cli) -> Result<(), String> {
    let table = load_table(&cli.file)
        .map_err(|e| format!("failed to load {}: {e}", cli.file.display()))?;
    println!("dataset shape: {} rounds x {} arms", table.rows(), table.arms());

    let result = run_ucb1(&table, cli.rounds, cli.arms).map_err(|e| e.to_string())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &result).map_err(|e| e.to_string())?;
    write_histogram(&mut out, &result.trace, cli.arms, cli.bar_width)
        .map_err(|e| e.to_string())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("adsel: {msg}");
            ExitCode::FAILURE
        }
    }
}
