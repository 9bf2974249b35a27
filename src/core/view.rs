//! Filter / derivation pipeline.
//!
//! Pure projection of a board snapshot through a filter configuration. The
//! output carries every original field plus the two computed fields, keeps
//! the snapshot's relative order, and holds no memoized state: after any
//! store mutation or filter change the caller simply derives again.

use clap::ValueEnum;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::model::{Board, Priority, Task};

/// Prefix applied to `display_title` for completed tasks.
pub const COMPLETED_MARKER: &str = "✓";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl CompletionFilter {
    fn matches(self, completed: bool) -> bool {
        match self {
            CompletionFilter::All => true,
            CompletionFilter::Completed => completed,
            CompletionFilter::Pending => !completed,
        }
    }
}

/// Caller-held filter criteria. `Default` matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub priority: PriorityFilter,
    #[serde(default)]
    pub completion: CompletionFilter,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub required_tags: Vec<String>,
}

impl FilterConfig {
    /// Reset every criterion to its match-all default.
    pub fn clear(&mut self) {
        *self = FilterConfig::default();
    }

    /// All four clauses must hold: case-insensitive search over title and
    /// tags, priority, completion, and required-tag containment.
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || task.title.to_lowercase().contains(&needle)
            || task.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
        let matches_tags = self.required_tags.is_empty()
            || self
                .required_tags
                .iter()
                .all(|required| task.tags.iter().any(|tag| tag == required));
        matches_search
            && self.priority.matches(task.priority)
            && self.completion.matches(task.completed)
            && matches_tags
    }
}

/// A task annotated with the pipeline's computed fields. Never stored; only
/// produced by derivation.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedTask {
    #[serde(flatten)]
    pub task: Task,
    pub urgency_score: u32,
    pub display_title: String,
}

fn annotate(task: &Task) -> AnnotatedTask {
    let display_title = if task.completed {
        format!("{} {}", COMPLETED_MARKER, task.title)
    } else {
        task.title.clone()
    };
    AnnotatedTask {
        urgency_score: task.priority.urgency(),
        display_title,
        task: task.clone(),
    }
}

/// Filter `board` through `filter` and annotate the survivors, preserving
/// the snapshot's relative order.
pub fn derive_view(board: &Board, filter: &FilterConfig) -> Vec<AnnotatedTask> {
    board
        .tasks
        .iter()
        .filter(|t| filter.matches(t))
        .map(annotate)
        .collect()
}

/// Every tag on the board in first-occurrence order, deduplicated. Drives
/// tag pickers on the presentation side.
pub fn unique_tags(board: &Board) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    board
        .tasks
        .iter()
        .flat_map(|t| t.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
