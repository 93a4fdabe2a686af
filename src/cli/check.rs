//! Handler for the `check` command.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate configuration file without replaying ticks.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    let config = Config::load(path)?;

    println!("✓ Configuration file is valid");
    println!();
    println!("Triggers:");
    for trigger in &config.triggers {
        println!(
            "  {} x{} below {}",
            trigger.instrument, trigger.quantity, trigger.threshold
        );
    }
    println!();

    if config.back_office.enabled {
        println!("✓ Paper back office enabled");
        for (instrument, available) in &config.back_office.inventory {
            println!("    {instrument}: {available} available");
        }
        for trigger in &config.triggers {
            if !config.back_office.inventory.contains_key(&trigger.instrument) {
                println!("⚠ {} has no inventory; its orders will be rejected", trigger.instrument);
            }
        }
    } else {
        println!("⚠ Back office disabled; qualifying ticks will be reported as failures");
    }

    Ok(())
}
