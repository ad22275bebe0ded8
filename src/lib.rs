//! task-triage library - priority classification and the task list around it

pub mod cli;
pub mod config;
pub mod priority;
pub mod task;

pub use priority::{classify, Priority};
