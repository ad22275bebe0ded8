//! `triage add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

pub async fn run(file: Option<&Path>, args: AddArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    let task = store.add(&args.title, &args.description)?;
    println!("Created: {}", task.summary_line());
    Ok(())
}
