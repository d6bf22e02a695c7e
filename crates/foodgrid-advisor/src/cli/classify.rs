// crates/foodgrid-advisor/src/cli/classify.rs
// Offline topic routing preview

use anyhow::Result;
use foodgrid::advisory::route;

pub fn run_classify(query: String) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("query must not be empty");
    }
    let row = route(&query);
    println!("{}", row.topic);
    Ok(())
}
