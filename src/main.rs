//! task-triage - Terminal task list with negation-aware priority classification

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_triage::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TRIAGE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_triage=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let file = cli.file.as_deref();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "triage", &mut std::io::stdout());
            Ok(())
        }
        Commands::Add(args) => cli::add::run(file, args).await,
        Commands::List(args) => cli::list::run(file, args).await,
        Commands::Done(args) => cli::remove::run_done(file, args).await,
        Commands::Remove(args) => cli::remove::run_remove(file, args).await,
        Commands::Classify(args) => cli::classify::run(args).await,
        Commands::Reclassify => cli::reclassify::run(file).await,
    }
}
