//! `triage classify` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::priority::{Classifier, NegationScope, Reason};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Task title
    pub title: String,

    /// Task description
    #[arg(default_value = "")]
    pub description: String,

    /// Print why the tier was chosen
    #[arg(long)]
    pub explain: bool,

    /// Negation scope; defaults to the configured scope
    #[arg(long, value_enum)]
    pub scope: Option<NegationScope>,
}

pub async fn run(args: ClassifyArgs) -> Result<()> {
    let scope = match args.scope {
        Some(scope) => scope,
        None => Config::load()?.classifier.negation_scope,
    };

    let result = Classifier::new(scope).explain(&args.title, &args.description);
    println!("{}", result.priority);

    if args.explain {
        println!("  Scope: {}", scope.label());
        match &result.reason {
            Reason::Keyword { keyword, offset } => {
                println!("  Keyword '{}' at offset {} is not negated", keyword, offset)
            }
            Reason::Negated { keyword, negator } => {
                println!("  Keyword '{}' negated by '{}'", keyword, negator)
            }
            Reason::Length { chars } => {
                println!("  No keyword; text is {} chars", chars)
            }
        }
    }

    Ok(())
}
