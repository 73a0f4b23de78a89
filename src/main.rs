// Muscheduler
// Prints the weekly lesson schedule for a grid config and seed file

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use muscheduler::services::config::{default_config_path, load_config};
use muscheduler::services::seed::{load_seed_file, sample_lessons};
use muscheduler::{GridGeometry, ScheduleModel};

#[derive(Parser, Debug)]
#[command(name = "muscheduler")]
#[command(about = "Print the weekly lesson schedule", long_about = None)]
struct Cli {
    /// Grid config (TOML); defaults to grid.toml in the user config directory
    config: Option<PathBuf>,

    /// Seed lessons (JSON array); defaults to the built-in sample week
    seed: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Muscheduler");

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;

    let drafts = match cli.seed {
        Some(path) => load_seed_file(&path)?,
        None => sample_lessons(),
    };

    let mut model = ScheduleModel::new();
    model.seed(drafts).map_err(|e| anyhow!("Invalid seed events: {}", e))?;

    let geometry = GridGeometry::new(config.clone());
    for day in &config.days {
        println!("{}", day);
        for event in model.list_events(Some(*day)) {
            let layout = geometry.event_layout(event, false)?;
            println!(
                "  #{:<3} {:>8} - {:<8} {:<16} top {:>6.1}px height {:>6.1}px {}",
                event.id,
                event.start,
                event.end,
                event.title,
                layout.top_px,
                layout.height_px,
                event.color
            );
        }
    }

    let events: Vec<_> = model.list_events(None).collect();
    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}
