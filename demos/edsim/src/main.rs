//! edsim — command-line front end for the emergency department simulator.
//!
//! ```text
//! edsim run   --config scenario.json [--out DIR] [--seed N] [--script arrivals.csv]
//! edsim sweep --config scenario.json --reps N (--rooms 3,4,4 2,5,5 ... | --all-feasible)
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`; `debug` adds one line
//! per simulated hour).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ed_arrivals::{load_script_csv, ArrivalSource, DistributionArrivals};
use ed_core::{RoomCounts, ScenarioInput, SimConfig, Tier};
use ed_output::{export_run, export_sweep, CsvWriter, OutputWriter, SimOutputObserver};
use ed_policy::ConfiguredPolicy;
use ed_sim::{BatchSweep, RunSummary, SimBuilder, SweepRow};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "edsim",
    about = "Hourly queueing simulator for a three-tier emergency department"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one 24-hour cycle and write the hourly ledger
    Run {
        /// Scenario JSON: room counts, arrival distribution, policy
        #[arg(long)]
        config: PathBuf,
        /// Output directory
        #[arg(long, default_value = "output")]
        out: PathBuf,
        /// Override the scenario's seed
        #[arg(long)]
        seed: Option<u64>,
        /// Replay arrivals from a `tick,a,b,c` CSV instead of sampling them
        #[arg(long)]
        script: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Average repeated runs over a list of room configurations
    Sweep {
        /// Scenario JSON; its room counts are replaced by each swept tuple
        #[arg(long)]
        config: PathBuf,
        /// Output directory
        #[arg(long, default_value = "output")]
        out: PathBuf,
        /// Override the scenario's seed
        #[arg(long)]
        seed: Option<u64>,
        /// Runs per configuration
        #[arg(long, default_value_t = 10)]
        reps: u32,
        /// Room configurations as `a,b,c`
        #[arg(
            long,
            num_args = 1..,
            conflicts_with = "all_feasible",
            required_unless_present = "all_feasible"
        )]
        rooms: Vec<RoomCounts>,
        /// Sweep every configuration within the room and staffing limits
        #[arg(long)]
        all_feasible: bool,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
    Parquet,
}

impl Format {
    fn feature(self) -> &'static str {
        match self {
            Self::Csv => "",
            Self::Sqlite => "sqlite",
            Self::Parquet => "parquet",
        }
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn load_scenario(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let input: ScenarioInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(input.resolve()?)
}

fn open_writer(format: Format, dir: &Path) -> Result<Box<dyn OutputWriter>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let writer: Box<dyn OutputWriter> = match format {
        Format::Csv => Box::new(CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        Format::Sqlite => Box::new(ed_output::SqliteWriter::new(dir)?),
        #[cfg(feature = "parquet")]
        Format::Parquet => Box::new(ed_output::ParquetWriter::new(dir)?),
        #[allow(unreachable_patterns)]
        other => bail!(
            "{other:?} output requires building edsim with `--features {}`",
            other.feature()
        ),
    };
    Ok(writer)
}

fn print_selection(rooms: RoomCounts) {
    println!(
        "Rooms A/B/C: {}/{}/{}  |  total rooms: {}  |  staffing: ${}/day",
        rooms.a,
        rooms.b,
        rooms.c,
        rooms.total_rooms(),
        rooms.staffing_cost()
    );
}

fn print_summary(s: &RunSummary) {
    println!();
    println!("{:<6} {:>8} {:>12} {:>8} {:>10} {:>12}", "type", "rooms", "utilization", "served", "revenue", "wait cost");
    for tier in Tier::ALL {
        println!(
            "{:<6} {:>8} {:>11.1}% {:>8} {:>10} {:>12}",
            tier.letter(),
            s.rooms.of(tier),
            s.utilization_by_type[tier] * 100.0,
            s.patients_served_by_type[tier],
            s.revenue_by_type[tier],
            s.waiting_cost_by_type[tier],
        );
    }
    println!();
    println!("Average utilization: {:.1}%", s.average_utilization * 100.0);
    println!("Left without being seen: {} (${})", s.total_lwbs, s.lwbs_cost);
    println!("Harmed: {} (${})", s.total_harmed, s.harm_cost);
    println!("Revenue: ${}  |  cost: ${}  |  operating profit: ${}", s.total_revenue, s.total_cost, s.operating_profit);
}

fn print_sweep(rows: &[SweepRow]) {
    println!();
    println!("{:<10} {:>12} {:>12} {:>12} {:>12}", "rooms", "utilization", "revenue", "cost", "profit");
    for row in rows {
        println!(
            "{:<10} {:>11.1}% {:>12.0} {:>12.0} {:>12.0}",
            row.rooms.to_string(),
            row.average_utilization * 100.0,
            row.average_revenue,
            row.average_cost,
            row.average_profit,
        );
    }
    if let Some(best) = rows.iter().max_by(|x, y| x.average_profit.total_cmp(&y.average_profit)) {
        println!();
        println!("Most profitable: {} (average profit ${:.0})", best.rooms, best.average_profit);
    }
}

// ── commands ──────────────────────────────────────────────────────────────────

fn simulate<S: ArrivalSource>(
    config:   SimConfig,
    arrivals: S,
    format:   Format,
    out:      &Path,
) -> Result<RunSummary> {
    let policy = ConfiguredPolicy::from(config.policy);
    let mut sim = SimBuilder::new(config, policy, arrivals).build()?;
    let mut obs = SimOutputObserver::new(open_writer(format, out)?);

    let start = Instant::now();
    let summary = sim.run(&mut obs)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "simulation finished");

    // The ledger outlives a failed write; replay it once into fresh files.
    if let Some(err) = obs.take_error() {
        warn!(error = %err, "retrying output export");
        let mut writer = open_writer(format, out)?;
        export_run(&mut writer, &sim.state.ledger).context("writing run output")?;
    }
    Ok(summary)
}

fn run(config: &Path, out: &Path, seed: Option<u64>, script: Option<&Path>, format: Format) -> Result<()> {
    let mut config = load_scenario(config)?;
    if seed.is_some() {
        config.seed = seed;
    }
    print_selection(config.rooms);
    println!("Policy: {}  |  seed: {:?}", config.policy, config.seed);

    let summary = match script {
        Some(path) => {
            let arrivals = load_script_csv(path)
                .with_context(|| format!("loading arrival script {}", path.display()))?;
            info!(ticks = arrivals.len(), patients = arrivals.total(), "arrival script loaded");
            simulate(config, arrivals, format, out)?
        }
        None => {
            let arrivals = DistributionArrivals::new(config.arrivals);
            simulate(config, arrivals, format, out)?
        }
    };

    print_summary(&summary);
    println!("Output written to {}", out.display());
    Ok(())
}

fn sweep(
    config:       &Path,
    out:          &Path,
    seed:         Option<u64>,
    reps:         u32,
    rooms:        Vec<RoomCounts>,
    all_feasible: bool,
    format:       Format,
) -> Result<()> {
    let mut base = load_scenario(config)?;
    if seed.is_some() {
        base.seed = seed;
    }

    let sweep = if all_feasible {
        BatchSweep::all_feasible(base, reps)
    } else {
        BatchSweep::new(base, rooms, reps)
    };
    if sweep.configurations.len() <= 10 {
        for rooms in &sweep.configurations {
            print_selection(*rooms);
        }
    }
    println!(
        "Sweeping {} configurations × {} repetitions ({} runs)",
        sweep.configurations.len(),
        sweep.repetitions,
        sweep.run_count()
    );

    let start = Instant::now();
    let rows = sweep.run()?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "sweep finished");

    let mut writer = open_writer(format, out)?;
    export_sweep(&mut writer, &rows).context("writing sweep output")?;

    print_sweep(&rows);
    println!("Output written to {}", out.display());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Commands::Run { config, out, seed, script, format } => {
            run(&config, &out, seed, script.as_deref(), format)
        }
        Commands::Sweep { config, out, seed, reps, rooms, all_feasible, format } => {
            sweep(&config, &out, seed, reps, rooms, all_feasible, format)
        }
    }
}
