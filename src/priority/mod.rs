//! Priority tiers and the negation-aware classifier
//!
//! - `Priority`: the three-valued tier stored on every task
//! - `classify`: pure function from title + description to a tier
//! - `Classifier`: the same algorithm with a configurable negation scope

pub mod classifier;

pub use classifier::{classify, Classification, Classifier, NegationScope, Reason};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Task priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank, higher is more pressing
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" | "med" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get the label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rank of a possibly missing priority; missing sorts below `Low`.
pub fn rank_of(priority: Option<Priority>) -> u8 {
    priority.map(|p| p.rank()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);

        let mut tiers = vec![Priority::Low, Priority::High, Priority::Medium];
        tiers.sort_by(|a, b| b.cmp(a));
        assert_eq!(tiers, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse(" med "), Some(Priority::Medium));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_rank_of_missing() {
        assert_eq!(rank_of(None), 0);
        assert_eq!(rank_of(Some(Priority::Low)), 1);
        assert_eq!(rank_of(Some(Priority::High)), 3);
    }

    #[test]
    fn test_priority_serializes_as_label() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        assert_eq!(Priority::High.to_string(), "High");
    }
}
