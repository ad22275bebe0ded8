//! Keyword / negation classifier
//!
//! Text is tokenised into maximal runs of alphanumeric characters, so a
//! keyword or negator only matches a whole word: "now" is not "no" and
//! "highlight" is not "high". Tokens are scanned once, in order; a keyword
//! occurrence is suppressed when a negator occurred before it.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::Priority;

/// Words that raise a task to `High`
pub const HIGH_KEYWORDS: &[&str] = &["urgent", "important", "high"];

/// Words that cancel a following keyword
pub const NEGATORS: &[&str] = &["not", "no", "never", "none", "without", "lack"];

/// Combined text longer than this (in chars) falls back to `Medium`
pub const MEDIUM_LENGTH_THRESHOLD: usize = 20;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("valid token pattern"));

/// How far back a negator reaches
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NegationScope {
    /// Any earlier negator in the combined text
    #[default]
    Text,
    /// Only a negator in the same clause; title and description are separate clauses
    Clause,
}

impl NegationScope {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Clause => "clause",
        }
    }
}

/// Why a tier was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Unnegated keyword at this byte offset of the normalized text
    Keyword { keyword: String, offset: usize },
    /// Every keyword occurrence was negated; this is the last one seen
    Negated { keyword: String, negator: String },
    /// No keyword present; decided by length
    Length { chars: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub priority: Priority,
    pub reason: Reason,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    scope: NegationScope,
}

impl Classifier {
    pub fn new(scope: NegationScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> NegationScope {
        self.scope
    }

    pub fn classify(&self, title: &str, description: &str) -> Priority {
        self.explain(title, description).priority
    }

    pub fn explain(&self, title: &str, description: &str) -> Classification {
        let text = format!("{} {}", title, description).to_lowercase();
        // Per-char lowercasing, so the title's byte length carries over.
        let title_end = title.to_lowercase().len();

        let mut clause = 0usize;
        let mut prev_end = 0usize;
        let mut last_negator: Option<(&str, usize)> = None;
        let mut negated: Option<(&str, &str)> = None;

        for m in TOKEN_RE.find_iter(&text) {
            if self.scope == NegationScope::Clause {
                let gap = &text[prev_end..m.start()];
                let crosses_title = prev_end <= title_end && m.start() > title_end;
                if crosses_title || gap.chars().any(is_clause_break) {
                    clause += 1;
                }
            }
            prev_end = m.end();

            let word = m.as_str();
            if NEGATORS.contains(&word) {
                last_negator = Some((word, clause));
                continue;
            }
            if !HIGH_KEYWORDS.contains(&word) {
                continue;
            }

            match last_negator {
                Some((negator, negator_clause)) if negator_clause == clause => {
                    debug!(keyword = word, negator, offset = m.start(), "keyword negated");
                    negated = Some((word, negator));
                }
                _ => {
                    debug!(keyword = word, offset = m.start(), "keyword raises priority");
                    return Classification {
                        priority: Priority::High,
                        reason: Reason::Keyword {
                            keyword: word.to_string(),
                            offset: m.start(),
                        },
                    };
                }
            }
        }

        if let Some((keyword, negator)) = negated {
            return Classification {
                priority: Priority::Low,
                reason: Reason::Negated {
                    keyword: keyword.to_string(),
                    negator: negator.to_string(),
                },
            };
        }

        let chars = text.chars().count();
        let priority = if chars > MEDIUM_LENGTH_THRESHOLD {
            Priority::Medium
        } else {
            Priority::Low
        };
        Classification {
            priority,
            reason: Reason::Length { chars },
        }
    }
}

fn is_clause_break(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';' | ':' | '\n')
}

/// Classify with the default (whole-text) negation scope.
pub fn classify(title: &str, description: &str) -> Priority {
    Classifier::default().classify(title, description)
}
