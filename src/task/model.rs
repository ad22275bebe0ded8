//! Task data model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::priority::Priority;

/// A task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID, assigned as max + 1
    pub id: u32,

    /// Task title
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Priority tier; `None` only for legacy records
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub overdue: bool,

    /// When the task was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Unknown or malformed priority values load as `None` instead of failing the whole file.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(Priority::parse))
}

impl Task {
    /// Create a new task
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            priority: None,
            completed: false,
            overdue: false,
            created_at: Some(Utc::now()),
        }
    }

    /// Mark task as done
    pub fn complete(&mut self) {
        self.completed = true;
        self.overdue = false;
    }

    /// Recompute the overdue flag
    pub fn refresh_overdue(&mut self, now: DateTime<Utc>, threshold: Duration) {
        self.overdue = !self.completed
            && self
                .created_at
                .map(|created| now - created > threshold)
                .unwrap_or(false);
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else if self.overdue {
            "Overdue"
        } else {
            "Incomplete"
        }
    }

    pub fn priority_label(&self) -> &'static str {
        self.priority.map(|p| p.label()).unwrap_or("-")
    }

    /// One-line summary for CLI output
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "#{} [{}] {} ({})",
            self.id,
            self.priority_label(),
            self.title,
            self.status_label()
        );
        if !self.description.is_empty() {
            line.push_str(&format!(" - {}", self.description));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_overdue() {
        let now = Utc::now();
        let mut task = Task::new(1, "Test", "");
        task.created_at = Some(now - Duration::days(10));

        task.refresh_overdue(now, Duration::days(7));
        assert!(task.overdue);
        assert_eq!(task.status_label(), "Overdue");

        task.complete();
        task.refresh_overdue(now, Duration::days(7));
        assert!(!task.overdue);
        assert_eq!(task.status_label(), "Completed");
    }

    #[test]
    fn test_task_without_created_at_never_overdue() {
        let mut task = Task::new(1, "Test", "");
        task.created_at = None;
        task.refresh_overdue(Utc::now(), Duration::zero());
        assert!(!task.overdue);
    }

    #[test]
    fn test_summary_line() {
        let mut task = Task::new(3, "Ship release", "tag and publish");
        task.priority = Some(Priority::High);

        let line = task.summary_line();
        assert!(line.starts_with("#3 [High] Ship release"));
        assert!(line.contains("Incomplete"));
        assert!(line.ends_with("tag and publish"));
    }

    #[test]
    fn test_legacy_record_loads() {
        let json = r#"{"id": 4, "title": "Old task", "completed": true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 4);
        assert_eq!(task.description, "");
        assert_eq!(task.priority, None);
        assert!(task.created_at.is_none());
        assert_eq!(task.priority_label(), "-");
    }

    #[test]
    fn test_unknown_priority_loads_as_none() {
        let json = r#"{"id": 1, "title": "x", "priority": "Critical"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, None);

        let json = r#"{"id": 1, "title": "x", "priority": 5}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, None);

        let json = r#"{"id": 1, "title": "x", "priority": "Medium"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Some(Priority::Medium));
    }
}
