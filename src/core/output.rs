//! Compact output rendering helpers for CLI surfaces.
//!
//! Keeps command result output bounded and readable while preserving signal.

use colored::Colorize;

use crate::core::model::Priority;
use crate::core::stats::BoardStats;
use crate::core::view::AnnotatedTask;

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Priority label colorized per the demo's palette: high red, medium yellow,
/// low green.
pub fn priority_badge(priority: Priority) -> String {
    let label = priority.as_str().to_uppercase();
    match priority {
        Priority::High => label.red().bold().to_string(),
        Priority::Medium => label.yellow().to_string(),
        Priority::Low => label.green().to_string(),
    }
}

/// One task row: id prefix, badge, display title, score, assignee, tags.
pub fn render_task_row(task: &AnnotatedTask) -> String {
    let id_prefix: String = task.task.id.chars().take(8).collect();
    let mut row = format!(
        "{}  {}  {}  score:{}",
        id_prefix.dimmed(),
        priority_badge(task.task.priority),
        compact_line(&task.display_title, 60),
        task.urgency_score
    );
    if !task.task.assignee.name.is_empty() {
        row.push_str(&format!(
            "  {} {}",
            task.task.assignee.avatar, task.task.assignee.name
        ));
    }
    if !task.task.tags.is_empty() {
        row.push_str(&format!("  [{}]", task.task.tags.join(", ")));
    }
    row
}

pub fn render_stats(stats: &BoardStats) -> String {
    format!(
        "total: {}  completed: {}  high-priority: {}  avg-score: {}",
        stats.total, stats.completed, stats.high_priority, stats.avg_urgency
    )
}
