//! scenario-runner: headless driver for the hazard damage simulation.
//!
//! Usage:
//!   scenario-runner run --scenario scenarios/strait.json --ticks 30
//!   scenario-runner random --seed 7 --ships 20 --hazards 10 --ticks 300
//!
//! Set `RUST_LOG=battleship::damage=debug` to see per-hazard damage lines.

use std::path::PathBuf;
use std::process;

use battleship_core::state::SimSnapshot;
use battleship_sim::{SimConfig, SimulationEngine};

const DEFAULT_TICKS: u64 = 30;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "random" => cmd_random(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "scenario-runner: battleship hazard damage simulation\n\
         \n\
         Commands:\n\
         \n\
         run       Load a JSON scenario and simulate it\n\
         \n\
           --scenario <path>  Scenario file\n\
           --ticks <N>        Ticks to run (default: 30)\n\
         \n\
         random    Simulate a seeded random field\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --ships <N>        Ship count (default: 10)\n\
           --hazards <N>      Hazard count (default: 5)\n\
           --ticks <N>        Ticks to run (default: 30)\n\
         \n\
         The final snapshot is written to stdout as JSON.\n"
    );
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let path = match parse_path(args, "--scenario") {
        Some(p) => p,
        None => {
            eprintln!("Error: --scenario <path> is required");
            process::exit(1);
        }
    };
    let ticks = parse_flag(args, "--ticks", DEFAULT_TICKS);

    let mut engine = match SimulationEngine::load_scenario(SimConfig::default(), &path) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error loading {}: {e}", path.display());
            process::exit(1);
        }
    };

    let snapshot = engine.snapshot();
    log::info!(
        "{}: {} ship(s), {} hazard(s), {ticks} tick(s)",
        path.display(),
        snapshot.ships.len(),
        snapshot.hazards.len()
    );

    simulate(&mut engine, ticks);
}

// --- Random field command ---

fn cmd_random(args: &[String]) {
    let seed = parse_flag(args, "--seed", SimConfig::default().seed);
    let ships = parse_flag(args, "--ships", 10usize);
    let hazards = parse_flag(args, "--hazards", 5usize);
    let ticks = parse_flag(args, "--ticks", DEFAULT_TICKS);

    log::info!("random field: seed={seed}, {ships} ship(s), {hazards} hazard(s), {ticks} tick(s)");

    let mut engine = SimulationEngine::new(SimConfig { seed });
    engine.spawn_random_field(ships, hazards);
    simulate(&mut engine, ticks);
}

fn simulate(engine: &mut SimulationEngine, ticks: u64) {
    let completed = engine.run(ticks);
    let snapshot = engine.snapshot();
    print_snapshot(&snapshot);

    log::info!(
        "{completed}/{ticks} tick(s) completed, {} of {} ship(s) dead",
        snapshot.dead_count(),
        snapshot.ships.len()
    );

    if completed < ticks {
        eprintln!("Error: simulation aborted at tick {}", engine.time().tick);
        process::exit(1);
    }
}

fn print_snapshot(snapshot: &SimSnapshot) {
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing snapshot: {e}");
            process::exit(1);
        }
    }
}
