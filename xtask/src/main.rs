//! xtask - Release chores for task-triage: CLI reference and shell completions

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, Shell};
use std::fs;
use std::path::{Path, PathBuf};
use task_triage::cli::Cli;

const BIN_NAME: &str = "triage";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Release chores for task-triage")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the `triage` CLI reference as markdown
    GenDocs {
        #[arg(long, default_value = "docs/cli")]
        out_dir: PathBuf,
    },

    /// Write completion scripts for bash, zsh, fish and PowerShell
    GenCompletions {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Commands::GenDocs { out_dir } => gen_docs(&out_dir),
        Commands::GenCompletions { out_dir } => gen_completions(&out_dir),
    }
}

fn gen_docs(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let path = out_dir.join("reference.md");
    fs::write(&path, clap_markdown::help_markdown::<Cli>())
        .with_context(|| format!("writing {}", path.display()))?;

    println!("wrote {}", path.display());
    Ok(())
}

fn gen_completions(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut cmd = Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let path = generate_to(shell, &mut cmd, BIN_NAME, out_dir)
            .with_context(|| format!("generating {} completions", shell))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
