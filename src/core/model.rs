//! Data model for the board engine.
//!
//! A `Board` is an ordered, immutable snapshot of `Task` records. Snapshots
//! are replaced wholesale by the store on every accepted command; nothing in
//! this module mutates a committed record in place.

use clap::ValueEnum;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Default avatar glyph for a draft assignee.
pub const DEFAULT_AVATAR: &str = "👤";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Urgency weight used by the derivation pipeline and aggregates.
    pub fn urgency(self) -> u32 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub name: String,
    pub avatar: String,
}

impl Default for Assignee {
    fn default() -> Self {
        Assignee {
            name: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

/// A committed board record. `id` is assigned by the store at creation time
/// and never reassigned; within one board, ids are unique at all times.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
    /// Tag set with stable first-occurrence display order.
    pub tags: Vec<String>,
    pub assignee: Assignee,
}

/// A not-yet-committed task under construction. Has no id; the store
/// synthesizes one when the draft is committed via `Command::Create`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default = "TaskDraft::default_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub assignee: Assignee,
}

impl TaskDraft {
    fn default_priority() -> Priority {
        Priority::Medium
    }

    pub fn titled(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            ..TaskDraft::default()
        }
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        TaskDraft {
            title: String::new(),
            priority: Priority::Medium,
            tags: Vec::new(),
            assignee: Assignee::default(),
        }
    }
}

/// Partial update applied by `Update`/`BatchUpdate`. `None` fields are left
/// unchanged on the target record. Replacement of `tags`/`assignee` is
/// whole-value: patched records never share structure with the caller's
/// draft.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        TaskPatch {
            completed: Some(value),
            ..TaskPatch::default()
        }
    }

    pub fn priority(value: Priority) -> Self {
        TaskPatch {
            priority: Some(value),
            ..TaskPatch::default()
        }
    }

    /// New record equal to `task` except for the fields present in the patch.
    pub fn apply_to(&self, task: &Task) -> Task {
        Task {
            id: task.id.clone(),
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            priority: self.priority.unwrap_or(task.priority),
            completed: self.completed.unwrap_or(task.completed),
            tags: self
                .tags
                .as_deref()
                .map(dedup_tags)
                .unwrap_or_else(|| task.tags.clone()),
            assignee: self.assignee.clone().unwrap_or_else(|| task.assignee.clone()),
        }
    }
}

/// One immutable snapshot of the ordered task collection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        Board { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Drop duplicate tags, keeping the first occurrence's position.
pub fn dedup_tags(tags: &[String]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    tags.iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// Showcase seed board for demo surfaces. Ids are synthesized fresh on
/// every call.
pub fn demo_board() -> Board {
    let task = |title: &str, priority, completed, tags: &[&str], name: &str, avatar: &str| Task {
        id: crate::core::ids::new_task_id(),
        title: title.to_string(),
        priority,
        completed,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        assignee: Assignee {
            name: name.to_string(),
            avatar: avatar.to_string(),
        },
    };
    Board::new(vec![
        task(
            "Learn React",
            Priority::High,
            false,
            &["frontend", "javascript"],
            "John",
            "👨‍💻",
        ),
        task(
            "Build API",
            Priority::Medium,
            true,
            &["backend", "nodejs"],
            "Sarah",
            "👩‍💻",
        ),
        task(
            "Deploy App",
            Priority::Low,
            false,
            &["devops", "aws"],
            "Mike",
            "👨‍💼",
        ),
    ])
}
