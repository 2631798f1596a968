//! xsmall — smallest demo for the rust_lift elevator environment.
//!
//! Runs one episode of a 6-floor, 2-car building under the collective
//! baseline controller and writes CSV output to `output/xsmall`.  Pass a
//! JSON config path as the first argument to override the built-in
//! configuration; missing fields fall back to the library defaults.
//!
//! Set `RUST_LOG=lift_sim=debug` to see every tick.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{ActionMode, EnvConfig, Tick};
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_policy::CollectiveController;
use lift_sim::{EnvBuilder, EnvObserver, EpisodeSummary, StepResult, run_episode};
use lift_state::{CarStore, FloorStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:            usize = 6;
const NUM_CARS:              usize = 2;
const MAX_STEPS:             u64   = 240;
const SPAWN_RATE:            f64   = 0.1;
const SEED:                  u64   = 42;
const OUTPUT_INTERVAL_TICKS: u64   = 10;
const OUTPUT_DIR:            &str  = "output/xsmall";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> EnvObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, result: &StepResult) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &CarStore, floors: &FloorStore) {
        self.snapshot_rows += cars.count;
        self.inner.on_snapshot(tick, cars, floors);
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        self.inner.on_episode_end(summary);
    }
}

fn load_config(path: Option<String>) -> Result<EnvConfig> {
    let Some(path) = path else {
        return Ok(EnvConfig {
            num_floors:            NUM_FLOORS,
            num_cars:              NUM_CARS,
            max_steps:             MAX_STEPS,
            passenger_spawn_rate:  SPAWN_RATE,
            action_mode:           ActionMode::PerCar,
            seed:                  SEED,
            output_interval_ticks: OUTPUT_INTERVAL_TICKS,
            ..EnvConfig::default()
        });
    };
    let file = File::open(&path).with_context(|| format!("opening {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {path}"))?;
    info!(%path, "loaded config");
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config(std::env::args().nth(1))?;

    println!("=== xsmall — rust_lift elevator environment ===");
    println!(
        "Floors: {}  |  Cars: {}  |  Capacity: {}  |  Seed: {}",
        config.num_floors, config.num_cars, config.capacity, config.seed
    );
    println!(
        "Episode: {} ticks, spawn rate {:.2}/floor/tick, snapshot every {} ticks",
        config.max_steps, config.passenger_spawn_rate, config.output_interval_ticks
    );
    println!();

    // 1. Build the environment.
    let mut env = EnvBuilder::new(config).build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let summary = run_episode(&mut env, &mut CollectiveController::new(), &mut obs, None)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Episode complete in {:.3} s", elapsed.as_secs_f64());
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!("  car_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!();
    println!("  total reward   : {:.2}", summary.total_reward);
    println!("  delivered      : {}", summary.delivered);
    println!("  spawned        : {}", summary.spawned);
    println!("  penalties      : {}", summary.penalties);
    println!("  max passengers : {}", summary.max_passengers);
    println!("  still waiting  : {}", summary.final_waiting);
    println!();

    // 5. Final car table.
    let cars = env.cars();
    println!("{:<6} {:<7} {:<10} {:<6} {:<5}", "Car", "Floor", "Direction", "Door", "Load");
    println!("{}", "-".repeat(38));
    for car in cars.car_ids() {
        let i = car.index();
        println!(
            "{:<6} {:<7} {:<10} {:<6} {:<5}",
            car.0,
            cars.floor[i].0,
            cars.direction[i].to_string(),
            if cars.door_open[i] { "open" } else { "shut" },
            cars.load(car),
        );
    }

    Ok(())
}
