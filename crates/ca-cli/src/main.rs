//! rust-ca — run a partitioned traffic simulation from the command line.
//!
//! Thin driver around `ca_sim::run_simulation`: parses flags into a
//! `SimConfig`, runs the simulation with a progress observer, reduces the
//! per-partition metrics (sum of counts, mean/max of timings), and appends
//! one CSV row per run for benchmark sweeps.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ca_core::{PartitionId, SimConfig};
use ca_sim::{PartitionMetrics, SimObserver, run_simulation};

#[derive(Parser)]
#[command(name = "rust-ca")]
#[command(version)]
#[command(about = "Partitioned one-way-road traffic cellular automaton")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 100)]
    width: u32,

    /// Grid height in cells (the partitioned axis)
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Ticks to simulate
    #[arg(long, default_value_t = 200)]
    steps: u64,

    /// Total agents, divided evenly across partitions
    #[arg(long, default_value_t = 500)]
    agents: u32,

    /// Maximum speed in cells per tick
    #[arg(long, default_value_t = 5)]
    vmax: u32,

    /// Random slowdown probability
    #[arg(long = "p-slow", default_value_t = 0.2)]
    p_slow: f64,

    /// Intersection turn probability
    #[arg(long = "p-turn", default_value_t = 0.2)]
    p_turn: f64,

    /// Road spacing in cells
    #[arg(long, default_value_t = 10)]
    block: u32,

    /// Agents permitted per direction per cell
    #[arg(long = "lane-capacity", default_value_t = 2)]
    lane_capacity: u32,

    /// Number of partitions (one thread each)
    #[arg(long, default_value_t = 4)]
    partitions: u32,

    /// Log a snapshot summary every N ticks (0 = never)
    #[arg(long = "snapshot-interval", default_value_t = 0)]
    snapshot_interval: u64,

    /// Base RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// CSV file benchmark rows are appended to
    #[arg(long, default_value = "results.csv")]
    results: PathBuf,
}

impl Cli {
    fn to_config(&self) -> SimConfig {
        SimConfig {
            width: self.width,
            height: self.height,
            steps: self.steps,
            agents: self.agents,
            vmax: self.vmax,
            p_slow: self.p_slow,
            p_turn: self.p_turn,
            block: self.block,
            lane_capacity: self.lane_capacity,
            partitions: self.partitions,
            seed: self.seed,
            snapshot_interval: self.snapshot_interval,
        }
    }
}

/// Logs tick progress and snapshot sizes for one partition.
struct ProgressObserver {
    rank: PartitionId,
    every: u64,
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: u64, local_agents: usize, migrated_in: usize) {
        if tick % self.every == 0 {
            info!(
                rank = self.rank.0,
                tick, local_agents, migrated_in, "tick complete"
            );
        }
    }

    fn on_snapshot(&mut self, tick: u64, agents: &[(u32, u32, ca_core::Direction)]) {
        info!(rank = self.rank.0, tick, agents = agents.len(), "snapshot");
    }
}

/// Reduced view over all partitions' metrics.
struct RunSummary {
    total_agents: usize,
    mean_compute_s: f64,
    mean_comm_s: f64,
    max_compute_s: f64,
    max_comm_s: f64,
}

fn summarize(metrics: &[PartitionMetrics]) -> RunSummary {
    let n = metrics.len() as f64;
    let compute: Vec<f64> = metrics.iter().map(|m| m.compute_time.as_secs_f64()).collect();
    let comm: Vec<f64> = metrics.iter().map(|m| m.comm_time.as_secs_f64()).collect();
    RunSummary {
        total_agents: metrics.iter().map(|m| m.local_agent_count).sum(),
        mean_compute_s: compute.iter().sum::<f64>() / n,
        mean_comm_s: comm.iter().sum::<f64>() / n,
        max_compute_s: compute.iter().cloned().fold(0.0, f64::max),
        max_comm_s: comm.iter().cloned().fold(0.0, f64::max),
    }
}

fn append_result_row(path: &PathBuf, partitions: u32, summary: &RunSummary) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize((partitions, summary.mean_compute_s, summary.mean_comm_s))?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    config.validate().context("invalid configuration")?;

    let progress_every = (config.steps / 10).max(1);
    let metrics = run_simulation(&config, |rank| ProgressObserver {
        rank,
        every: progress_every,
    })?;

    let summary = summarize(&metrics);
    info!(
        partitions = config.partitions,
        total_agents = summary.total_agents,
        mean_compute_s = summary.mean_compute_s,
        mean_comm_s = summary.mean_comm_s,
        max_compute_s = summary.max_compute_s,
        max_comm_s = summary.max_comm_s,
        "run complete"
    );

    append_result_row(&cli.results, config.partitions, &summary)?;
    Ok(())
}
