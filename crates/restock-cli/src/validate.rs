use std::path::Path;

use anyhow::Context;
use restock_feed::parse_feed;

/// Parses a local CSV feed file and reports admitted and skipped rows.
/// Exits non-zero when any row was skipped, so the sheet can be linted
/// before publishing.
pub fn run(file: &Path) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let outcome = parse_feed(&payload);
    println!(
        "{} rows admitted, {} skipped",
        outcome.products.len(),
        outcome.skipped.len()
    );
    for row in &outcome.skipped {
        println!("line {}: {}", row.line, row.reason);
    }

    if outcome.skipped.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} malformed rows", outcome.skipped.len())
    }
}
