//! Task management module
//!
//! This module provides the JSON-backed task list:
//! - Task records with classifier-assigned priority
//! - Load / save of the tasks file
//! - Overdue tracking based on task age

pub mod error;
pub mod model;
pub mod store;

pub use error::TaskError;
pub use model::Task;
pub use store::TaskStore;
