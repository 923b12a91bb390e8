//! `viralvibe communities` - lists the target community catalog.

use anyhow::Result;
use viralvibe_core::community::CommunityCatalog;

pub fn run() -> Result<()> {
    let catalog = CommunityCatalog::with_defaults();

    for (category, entries) in catalog.grouped() {
        println!("[{}]", category);
        for community in entries {
            println!("  {} {:<12} {} ({})", community.emoji, community.id, community.name, community.url);
        }
        println!();
    }

    Ok(())
}
