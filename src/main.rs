use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tally::{build_tape, io::count_items, io::emit_digits, Engine, RunConfig, BINARY_COUNTER};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    about = "Count input bytes and print the count in binary using a 7-state tape machine"
)]
struct Cli {
    /// Input file; `-` reads standard input.
    #[arg(default_value = "-")]
    input: PathBuf,
    /// Abort if the machine has not halted after this many steps.
    #[arg(long)]
    max_steps: Option<u64>,
    /// Log every transition at trace level (enable with RUST_LOG=trace).
    #[arg(long)]
    trace_steps: bool,
    /// Print count, steps and final cursor index to stderr.
    #[arg(long)]
    stats: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source: Box<dyn Read> = if cli.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&cli.input).with_context(|| {
            format!("failed to open input {}", cli.input.display())
        })?)
    };
    let count = count_items(source).context("failed to read input")?;

    let mut config = RunConfig::default().with_trace_steps(cli.trace_steps);
    if let Some(limit) = cli.max_steps {
        config = config.with_max_steps(limit);
    }

    let mut tape = build_tape(count).with_context(|| format!("failed to build tape for {count} items"))?;
    let summary = Engine::new(&BINARY_COUNTER, config)
        .run(&mut tape)
        .context("machine run failed")?;

    emit_digits(&tape, summary.final_index, io::stdout().lock()).context("failed to write output")?;

    if cli.stats {
        eprintln!(
            "count={}\tsteps={}\tfinal_index={}\ttape_len={}",
            count, summary.steps, summary.final_index, summary.final_len
        );
    }

    Ok(())
}
