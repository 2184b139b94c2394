//! Inspect command implementation.

use maltak_core::{ContentStore, StatsSnapshot, TableCounts};
use serde::Serialize;

/// Store inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Core library version.
    pub version: &'static str,
    /// Records per table.
    pub counts: TableCounts,
    /// Operation counters since the store was opened.
    pub stats: StatsSnapshot,
    /// Default page size for article listings.
    pub page_size: usize,
}

/// Runs the inspect command.
pub fn run(store: &ContentStore, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = InspectResult {
        version: maltak_core::VERSION,
        counts: store.counts(),
        stats: store.stats().snapshot(),
        page_size: store.config().defaults.page_size,
    };

    // Output
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn print_text_output(result: &InspectResult) {
    let counts = &result.counts;
    println!("Maltak store (core v{})", result.version);
    println!();
    println!("Tables:");
    println!("  Users:          {}", counts.users);
    println!("  Categories:     {}", counts.categories);
    println!("  Articles:       {}", counts.articles);
    println!("  Comments:       {}", counts.comments);
    println!("  Tools:          {}", counts.tools);
    println!("  Subscriptions:  {}", counts.subscriptions);
    println!("  News:           {}", counts.news);
    println!();
    println!("Statistics:");
    println!("  Reads:              {}", result.stats.reads);
    println!("  Writes:             {}", result.stats.writes);
    println!("  Scans:              {}", result.stats.scans);
    println!("  Views recorded:     {}", result.stats.views_recorded);
    println!("  Integrity failures: {}", result.stats.integrity_failures);
    println!();
    println!("Default page size: {}", result.page_size);
}
