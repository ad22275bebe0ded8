//! Task storage - JSON file persistence

use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::error::{Result, TaskError};
use super::model::Task;
use crate::priority::{rank_of, Classifier};

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    classifier: Classifier,
}

impl TaskStore {
    /// Load tasks from `path`; a missing or blank file is an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = load_tasks(&path)?;
        debug!("Loaded {} tasks from {}", tasks.len(), path.display());
        Ok(Self {
            path,
            tasks,
            classifier: Classifier::default(),
        })
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    /// Highest priority first, ties by ascending id
    pub fn sorted_by_priority(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by(|a, b| {
            rank_of(b.priority)
                .cmp(&rank_of(a.priority))
                .then(a.id.cmp(&b.id))
        });
        sorted
    }

    /// Next free id; ids of removed tasks below the max are not reused.
    pub fn next_id(&self) -> Result<u32> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(TaskError::IdExhausted)
    }

    // Mutations only stick once the file is written; a failed save rolls back.

    pub fn add(&mut self, title: &str, description: &str) -> Result<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let mut task = Task::new(self.next_id()?, title, description);
        task.priority = Some(self.classifier.classify(title, description));
        info!("Adding task {} with priority {}", task.id, task.priority_label());

        self.tasks.push(task);
        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }

        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    pub fn complete(&mut self, id: u32) -> Result<&Task> {
        let index = self.index_of(id)?;
        let previous = self.tasks[index].clone();
        self.tasks[index].complete();
        if let Err(e) = self.save() {
            self.tasks[index] = previous;
            return Err(e);
        }
        info!("Completed task {}", id);
        Ok(&self.tasks[index])
    }

    pub fn remove(&mut self, id: u32) -> Result<Task> {
        let index = self.index_of(id)?;
        let task = self.tasks.remove(index);
        if let Err(e) = self.save() {
            self.tasks.insert(index, task);
            return Err(e);
        }
        info!("Removed task {}", id);
        Ok(task)
    }

    /// Re-run classification on every task; returns how many changed.
    pub fn reclassify(&mut self) -> Result<usize> {
        let mut previous = Vec::new();
        for (index, task) in self.tasks.iter_mut().enumerate() {
            let priority = Some(self.classifier.classify(&task.title, &task.description));
            if task.priority != priority {
                debug!(
                    "Task {} priority {} -> {:?}",
                    task.id,
                    task.priority_label(),
                    priority
                );
                previous.push((index, task.priority));
                task.priority = priority;
            }
        }
        if previous.is_empty() {
            return Ok(0);
        }
        if let Err(e) = self.save() {
            for (index, priority) in previous {
                self.tasks[index].priority = priority;
            }
            return Err(e);
        }
        Ok(previous.len())
    }

    /// Recompute overdue flags in memory; returns how many tasks are overdue.
    pub fn refresh_overdue(&mut self, now: DateTime<Utc>, threshold: Duration) -> usize {
        for task in &mut self.tasks {
            task.refresh_overdue(now, threshold);
        }
        self.tasks.iter().filter(|t| t.overdue).count()
    }

    pub fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(&self.tasks)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| TaskError::Persist(format!("{}: {}", self.path.display(), e.error)))?;
        Ok(())
    }

    fn index_of(&self, id: u32) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }
}

fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    Ok(tasks)
}
