//! `triage reclassify` command implementation

use anyhow::Result;
use std::path::Path;

pub async fn run(file: Option<&Path>) -> Result<()> {
    let mut store = super::open_store(file)?;
    let changed = store.reclassify()?;
    println!(
        "Reclassified {} tasks ({} changed)",
        store.tasks().len(),
        changed
    );
    Ok(())
}
