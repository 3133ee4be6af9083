use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use strix::{Each, RangeBuilder, RangeSnapshot, TryEach};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
const LOG_ENV: &str = "STRIX_LOG";

#[derive(Parser, Debug)]
#[command(name = "strix", about = "Overflow-safe unsigned range generator")]
struct Cli {
    /// Log at debug level (ignores STRIX_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the values of a range.
    Range {
        #[command(flatten)]
        range: RangeArgs,
        /// Text written between values.
        #[arg(long, default_value = "\n")]
        separator: String,
        /// Print `index<TAB>value` lines instead.
        #[arg(long)]
        indexed: bool,
    },
    /// Print count, sum, first and last value of a range.
    Stats {
        #[command(flatten)]
        range: RangeArgs,
    },
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// Range as `start..end[:step]`, e.g. `10..0:-2`.
    range: Option<RangeSnapshot>,
    /// First value (overrides the positional range).
    #[arg(long)]
    from: Option<u32>,
    /// Inclusive bound (overrides the positional range).
    #[arg(long)]
    to: Option<u32>,
    /// Signed step (overrides the positional range).
    #[arg(long, allow_negative_numbers = true)]
    step: Option<i32>,
}

impl RangeArgs {
    fn builder(&self) -> RangeBuilder {
        let mut builder = match self.range {
            Some(range) => {
                RangeBuilder::new(Some(range.start()), Some(range.end()), Some(range.step()))
            }
            None => RangeBuilder::default(),
        };
        if let Some(from) = self.from {
            builder.from(from);
        }
        if let Some(to) = self.to {
            builder.to(to);
        }
        if let Some(step) = self.step {
            builder.step(step);
        }
        builder
    }
}

#[derive(Debug, Default)]
struct RangeStats {
    count: u64,
    sum: u64,
    first: Option<u32>,
    last: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Range {
            range,
            separator,
            indexed,
        } => run_range(range.builder(), &separator, indexed)?,
        Commands::Stats { range } => run_stats(range.builder())?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_range(builder: RangeBuilder, separator: &str, indexed: bool) -> Result<()> {
    let snapshot = builder.snapshot();
    debug!(%snapshot, len = snapshot.len(), "printing range");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if indexed {
        snapshot
            .iter()
            .try_each_with_index(|value, index| writeln!(out, "{index}\t{value}"))
            .context("failed to write range")?;
    } else {
        snapshot
            .iter()
            .try_each_with_index(|value, index| {
                if index > 0 {
                    out.write_all(separator.as_bytes())?;
                }
                write!(out, "{value}")
            })
            .context("failed to write range")?;
        if !snapshot.is_empty() {
            writeln!(out)?;
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn run_stats(builder: RangeBuilder) -> Result<()> {
    let snapshot = builder.snapshot();
    debug!(%snapshot, "collecting range statistics");

    let mut stats = RangeStats::default();
    let stats = builder.iter().each_with(&mut stats, |value, stats| {
        stats.first.get_or_insert(value);
        stats.last = Some(value);
        stats.count += 1;
        stats.sum += u64::from(value);
    });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_stats(&mut out, snapshot, stats).context("failed to write statistics")?;
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn write_stats<W: Write>(
    out: &mut W,
    snapshot: RangeSnapshot,
    stats: &RangeStats,
) -> io::Result<()> {
    writeln!(out, "range\t{snapshot}")?;
    writeln!(out, "count\t{}", stats.count)?;
    writeln!(out, "sum\t{}", stats.sum)?;
    match (stats.first, stats.last) {
        (Some(first), Some(last)) => {
            writeln!(out, "first\t{first}")?;
            writeln!(out, "last\t{last}")
        }
        _ => writeln!(out, "first\t-\nlast\t-"),
    }
}
