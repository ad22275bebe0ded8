//! `triage done` and `triage remove` command implementations

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID
    pub id: u32,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID
    pub id: u32,
}

pub async fn run_done(file: Option<&Path>, args: DoneArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    let task = store.complete(args.id)?;
    println!("Completed: {}", task.summary_line());
    Ok(())
}

pub async fn run_remove(file: Option<&Path>, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    let task = store.remove(args.id)?;
    println!("Task with ID {} deleted: {}", task.id, task.title);
    Ok(())
}
