//! corridor: the Gaimukh – Cadbury Junction metro line on a weekday morning.
//!
//! Seven trains run round trips over ten stations with a synthetic
//! passenger-driven dwell oracle.  The run prints segment run times, a
//! timetable excerpt, and the headway check, then writes CSV output.
//!
//! Usage: `corridor [config.json] [output-dir]`.  Without a config file the
//! observed defaults are used.

mod corridor;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use rail_analysis::{HeadwayAnalyzer, TraceBuilder};
use rail_core::{SimConfig, SimTime};
use rail_dwell::SyntheticDwellOracle;
use rail_fleet::{FleetBuilder, FleetObserver, FleetTimetable, RunFailure};
use rail_journey::TrainRun;
use rail_kinematics::KinematicCalculator;
use rail_output::{CsvWriter, FleetExport};

use corridor::{build_network, morning_fleet};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64 = 42;
const HORIZON_HOUR:       u32 = 12;
const LONG_SEGMENT_M:     f64 = 1_100.0;
const DEFAULT_OUTPUT_DIR: &str = "output/corridor";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Progress {
    completed: usize,
    failed:    usize,
    entries:   usize,
}

impl FleetObserver for Progress {
    fn on_run_complete(&mut self, run: &TrainRun) {
        self.completed += 1;
        self.entries += run.len();
        log::debug!("{} done: {} calls, last at {}", run.train_id, run.len(), run.current_time);
    }

    fn on_run_failed(&mut self, failure: &RunFailure) {
        self.failed += 1;
        eprintln!("{} not scheduled: {}", failure.train_id, failure.error);
    }

    fn on_fleet_end(&mut self, timetable: &FleetTimetable) {
        log::info!("{} runs finished", timetable.runs.len());
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config: SimConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    println!("=== corridor: Gaimukh to Cadbury Junction ===");

    // 1. Configuration and network.
    let config = load_config(config_path.as_deref())?;
    config.validate()?;
    let network = build_network()?;
    println!(
        "Network: {} stations, {} segments, {:.3} km",
        network.len(),
        network.segment_count(),
        network.total_length_m() / 1_000.0
    );
    println!();

    // 2. Segment run times.
    let calc = KinematicCalculator::from_config(&config);
    println!("{:<34} {:>9} {:>8} {:>8} {:>9}", "Segment", "Dist (m)", "Run (s)", "Peak", "Avg km/h");
    println!("{}", "-".repeat(72));
    for seg in network.segments() {
        let profile = calc.profile(seg.distance_m, seg.speed_limit_kmh)?;
        let from = &network.station(seg.from)?.name;
        let to = &network.station(seg.to)?.name;
        println!(
            "{:<34} {:>9.1} {:>8.2} {:>8.2} {:>9.2}",
            format!("{from} -> {to}"),
            seg.distance_m,
            profile.total_time_s(),
            profile.peak_speed_kmh(),
            profile.average_speed_kmh()
        );
    }
    println!();

    // 3. Fleet.
    let specs = morning_fleet();
    let horizon = SimTime::from_hms(HORIZON_HOUR, 0, 0);
    let oracle = SyntheticDwellOracle::new(SEED);
    let scheduler = FleetBuilder::new(&network, config.clone()).build()?;

    let mut progress = Progress::default();
    let t0 = Instant::now();
    let timetable = scheduler.build_fleet_observed(&specs, horizon, &oracle, &mut progress);
    println!(
        "Fleet: {} trains, {} failed, {} timetable entries in {:.3} s",
        progress.completed,
        progress.failed,
        progress.entries,
        t0.elapsed().as_secs_f64()
    );

    // 4. Headway check and traces.
    let violations = HeadwayAnalyzer::new(&network, scheduler.calculator()).check_fleet(&timetable)?;
    let traces = TraceBuilder::new(&network).build(&timetable)?;
    let long_segments: usize = traces.iter().map(|t| t.long_segment_markers(LONG_SEGMENT_M).len()).sum();
    println!("Headway violations: {}", violations.len());
    for v in violations.iter().take(10) {
        println!(
            "  {}  {:<36} {} / {}  gap {:>7.2} s < {:>6.2} s",
            v.at,
            v.location.label(&network),
            v.train_a,
            v.train_b,
            v.observed_gap_secs,
            v.required_gap_secs
        );
    }
    println!("Long-segment traversals (>= {LONG_SEGMENT_M} m): {long_segments}");
    println!();

    // 5. Timetable excerpt for the first train.
    if let Some(run) = timetable.runs.first() {
        println!("{} ({:?}):", run.train_id, run.end);
        println!("{:<20} {:>9} {:>9} {:>11} {:>8}", "Station", "Arrive", "Depart", "Direction", "Dwell");
        println!("{}", "-".repeat(62));
        for e in run.entries() {
            println!(
                "{:<20} {:>9} {:>9} {:>11} {:>8.1}",
                network.station(e.station)?.name,
                e.arrival.map(|t| t.to_string()).unwrap_or_else(|| "-".into()),
                e.departure.map(|t| t.to_string()).unwrap_or_else(|| "-".into()),
                e.direction.as_str(),
                e.dwell_secs
            );
        }
        println!();
    }

    // 6. Output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let mut writer = CsvWriter::new(&output_dir)?;
    let summary = FleetExport::new(&network, &timetable)
        .violations(&violations)
        .traces(&traces)
        .write_all(&mut writer)?;
    println!("Output written to {}", output_dir.display());
    println!("  timetable.csv  : {} rows", summary.timetable_rows);
    println!("  violations.csv : {} rows", summary.violation_rows);
    println!("  traces.csv     : {} rows", summary.trace_rows);

    Ok(())
}
