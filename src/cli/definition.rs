//! CLI definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::classify::ClassifyArgs;
use super::list::ListArgs;
use super::remove::{DoneArgs, RemoveArgs};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Terminal task list with negation-aware priority classification")]
#[command(version)]
pub struct Cli {
    /// Path to the tasks JSON file
    #[arg(long, global = true, env = "TRIAGE_TASKS_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task; priority is assigned from its text
    Add(AddArgs),

    /// List tasks, highest priority first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task as completed
    Done(DoneArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Classify text without storing a task
    Classify(ClassifyArgs),

    /// Recompute the priority of every stored task
    Reclassify,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
