mod simulation;

use anyhow::Result;
use clap::Parser;
use log::info;

use simulation::{BridgeType, Position, SimWorld};

#[derive(Parser)]
#[command(name = "bridge_sim")]
#[command(about = "Headless bridge load and traffic simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "1000")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.1")]
    delta: f32,

    /// Bridge archetype: truss, arch, or beam
    #[arg(long, default_value = "truss")]
    bridge: String,

    /// Seed for reproducible crack geometry
    #[arg(long)]
    seed: Option<u64>,

    /// Optional static load placed at midspan before the run
    #[arg(long)]
    static_load: Option<f32>,

    /// Print a world summary every N simulated seconds
    #[arg(long, default_value = "5.0")]
    summary_every: f32,
}

fn parse_bridge_type(name: &str) -> Result<BridgeType> {
    match name.to_ascii_lowercase().as_str() {
        "truss" => Ok(BridgeType::Truss),
        "arch" => Ok(BridgeType::Arch),
        "beam" => Ok(BridgeType::Beam),
        other => anyhow::bail!("Unknown bridge type '{}': expected truss, arch, or beam", other),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bridge_type = parse_bridge_type(&cli.bridge)?;

    println!("Running bridge simulation in headless mode...");
    println!(
        "Bridge: {:?}, Ticks: {}, Delta: {}s",
        bridge_type, cli.ticks, cli.delta
    );
    println!();

    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(bridge_type, seed),
        None => SimWorld::new(bridge_type),
    };

    if let Some(weight) = cli.static_load {
        world.add_load(Position::new(0.0, 0.0, 0.0), weight);
        println!("Placed {:.0} static load at midspan", weight);
    }

    let summary_interval = cli.summary_every.max(cli.delta);
    let mut next_summary = summary_interval;

    for _ in 0..cli.ticks {
        world.tick(cli.delta);

        if world.time >= next_summary {
            println!("--- After {:.1}s simulated time ---", world.time);
            world.print_summary();
            println!();
            next_summary += summary_interval;
        }
    }

    println!("=== Final State ===");
    world.print_summary();

    info!("=== SIMULATION COMPLETE ===");
    info!("Simulated time: {:.1}s", world.time);
    info!("Ticks run: {}", world.stats.ticks);
    info!("Vehicles recycled: {}", world.stats.vehicles_recycled);
    info!("Peak total load: {:.0}", world.stats.peak_total_load);
    info!("Peak warning level: {:?}", world.stats.peak_warning_level);

    Ok(())
}
