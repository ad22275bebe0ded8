//! CLI command implementations

pub mod add;
pub mod classify;
pub mod definition;
pub mod list;
pub mod reclassify;
pub mod remove;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

use crate::config::Config;
use crate::task::TaskStore;

/// Open the configured task store with overdue flags refreshed.
pub fn open_store(file: Option<&Path>) -> Result<TaskStore> {
    let config = Config::load()?;
    let path = config.tasks_path(file)?;
    let mut store = TaskStore::open(&path)
        .with_context(|| format!("Failed to load tasks from {}", path.display()))?
        .with_classifier(config.classifier());
    store.refresh_overdue(Utc::now(), config.overdue_threshold());
    Ok(store)
}

pub fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_equal_to_max() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_longer_than_max() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_with_small_max() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
