//! `triage list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{Task, TaskStore};

const TABLE_COL_ID: usize = 5;
const TABLE_COL_PRIORITY: usize = 9;
const TABLE_COL_STATUS: usize = 11;
const TABLE_COL_TITLE: usize = 40;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Hide completed tasks
    #[arg(long)]
    pending: bool,

    /// Keep insertion order instead of sorting by priority
    #[arg(long)]
    by_id: bool,
}

fn render_table_header(out: &mut String) {
    out.push_str(&format!(
        "{:<width_id$} {:<width_priority$} {:<width_status$} TITLE\n",
        "ID",
        "PRIORITY",
        "STATUS",
        width_id = TABLE_COL_ID,
        width_priority = TABLE_COL_PRIORITY,
        width_status = TABLE_COL_STATUS,
    ));
    out.push_str(&"-".repeat(
        TABLE_COL_ID + TABLE_COL_PRIORITY + TABLE_COL_STATUS + TABLE_COL_TITLE + 3,
    ));
    out.push('\n');
}

fn render_table_row(out: &mut String, task: &Task) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    out.push_str(&format!(
        "{:<width_id$} {:<width_priority$} {:<width_status$} {}\n",
        task.id,
        task.priority_label(),
        task.status_label(),
        title,
        width_id = TABLE_COL_ID,
        width_priority = TABLE_COL_PRIORITY,
        width_status = TABLE_COL_STATUS,
    ));
}

/// Tasks to show, in display order
fn select_tasks<'a>(store: &'a TaskStore, pending: bool, by_id: bool) -> Vec<&'a Task> {
    let mut tasks: Vec<&Task> = if by_id {
        store.tasks().iter().collect()
    } else {
        store.sorted_by_priority()
    };
    if pending {
        tasks.retain(|t| !t.completed);
    }
    tasks
}

fn render_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut out = String::new();
    render_table_header(&mut out);
    for task in tasks {
        render_table_row(&mut out, task);
    }
    out.push_str(&format!("\nTotal: {} tasks", tasks.len()));
    out
}

pub async fn run(file: Option<&Path>, args: ListArgs) -> Result<()> {
    let store = super::open_store(file)?;
    let tasks = select_tasks(&store, args.pending, args.by_id);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        println!("{}", render_table(&tasks));
    }
    Ok(())
}
