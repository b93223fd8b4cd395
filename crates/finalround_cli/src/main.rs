//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `finalround_core` linkage without the Flutter shell.
//! - Print one initial task and one "other task" pick for a quick sanity check.

use finalround_core::{TaskList, TaskSelector};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("finalround_core ping={}", finalround_core::ping());
    println!("finalround_core version={}", finalround_core::core_version());

    let mut selector = TaskSelector::new(TaskList::default_deck());
    let picks = selector
        .select_initial()
        .and_then(|first| selector.select_other().map(|other| (first, other)));
    match picks {
        Ok((first, other)) => {
            println!("task[{}]={}", first.index, first.text);
            println!("other_task[{}]={}", other.index, other.text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("task selection failed: {err}");
            ExitCode::FAILURE
        }
    }
}
