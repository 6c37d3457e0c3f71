use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pocketpet::{
    engine::{Engine, EngineSettings},
    scenario::KindLoader,
    Creature,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "pocketpet simulation runner")]
struct Cli {
    /// Path to the kind YAML file
    #[arg(long, default_value = "kinds/dog.yaml")]
    kind: PathBuf,

    /// Name of the creature
    #[arg(long, default_value = "Rex")]
    name: String,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 48)]
    ticks: u64,

    /// RNG seed for the autonomous-action rolls
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Ticks per day of creature age
    #[arg(long, default_value_t = 24)]
    ticks_per_day: u64,

    /// Autonomous-roll interval in ticks (0 disables)
    #[arg(long, default_value_t = 6)]
    roll_interval: u64,

    /// History-dump interval in ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    snapshot_interval: u64,

    /// Directory for history dumps
    #[arg(long, default_value = "snapshots")]
    snapshot_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = KindLoader::new(".");
    let kind_file = loader.load(&cli.kind)?;
    let kind = kind_file.build()?;
    let mut creature = Creature::new(kind, cli.name.as_str());

    let settings = EngineSettings {
        seed: cli.seed,
        ticks_per_day: cli.ticks_per_day,
        roll_interval_ticks: cli.roll_interval,
        snapshot_interval_ticks: cli.snapshot_interval,
        snapshot_dir: cli.snapshot_dir,
    };
    let mut engine = Engine::new(settings);
    engine.run_with_hook(&mut creature, cli.ticks, |summary| {
        if let Some(event) = &summary.event {
            println!("[tick {:>4}] {}", summary.tick, event);
        }
        if let Some(path) = &summary.snapshot_path {
            println!("[tick {:>4}] history written to {}", summary.tick, path.display());
        }
    })?;

    println!(
        "Simulated {} ticks ({} history entries).",
        cli.ticks,
        creature.history().len()
    );
    print!("{creature}");
    Ok(())
}
