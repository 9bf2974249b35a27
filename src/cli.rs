//! CLI struct definitions for the taskdeck command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `main.rs`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use taskdeck::core::model::{DEFAULT_AVATAR, Priority};
use taskdeck::core::view::{CompletionFilter, PriorityFilter};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "taskdeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Taskdeck is the pure task-board engine: pipe a board snapshot in, apply one command, get the next snapshot out. 🦀"
)]
pub struct Cli {
    /// Board snapshot JSON file. Reads stdin when omitted.
    #[clap(long, global = true)]
    pub board: Option<PathBuf>,
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub command: DeckCommand,
}

#[derive(Subcommand, Debug)]
pub enum DeckCommand {
    /// Add a new task to the end of the board.
    Add {
        /// Task title (positional argument)
        #[clap(value_name = "TITLE")]
        title: String,
        #[clap(long, value_enum, default_value = "medium")]
        priority: Priority,
        /// Tag to attach; repeatable.
        #[clap(long = "tag")]
        tags: Vec<String>,
        #[clap(long, default_value = "")]
        assignee: String,
        #[clap(long, default_value = DEFAULT_AVATAR)]
        avatar: String,
    },
    /// Patch fields on one task. Unknown ids are a benign no-op.
    Update {
        #[clap(long)]
        id: String,
        #[clap(long)]
        title: Option<String>,
        #[clap(long, value_enum)]
        priority: Option<Priority>,
        #[clap(long)]
        completed: Option<bool>,
        /// Replacement tag set; repeatable. Omitting leaves tags unchanged.
        #[clap(long = "tag")]
        tags: Option<Vec<String>>,
        #[clap(long)]
        assignee: Option<String>,
        #[clap(long)]
        avatar: Option<String>,
    },
    /// Mark one task completed.
    Done {
        #[clap(long)]
        id: String,
    },
    /// Delete one task. Unknown ids are a benign no-op.
    Delete {
        #[clap(long)]
        id: String,
    },
    /// Apply one patch to many tasks in a single snapshot transition.
    Batch {
        /// Target id; repeatable. Ids without a matching record are skipped.
        #[clap(long = "id", required = true)]
        ids: Vec<String>,
        #[clap(long)]
        title: Option<String>,
        #[clap(long, value_enum)]
        priority: Option<Priority>,
        #[clap(long)]
        completed: Option<bool>,
    },
    /// Reorder the board to the given id sequence. The sequence must be a
    /// permutation of the current board's ids.
    Reorder {
        #[clap(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Derive the filtered, annotated view of the board.
    List {
        /// Case-insensitive substring matched against titles and tags.
        #[clap(long, default_value = "")]
        search: String,
        #[clap(long, value_enum, default_value = "all")]
        priority: PriorityFilter,
        #[clap(long, value_enum, default_value = "all")]
        completion: CompletionFilter,
        /// Required tag; repeatable. Tasks must carry every one.
        #[clap(long = "tag")]
        tags: Vec<String>,
    },
    /// Board-level aggregates over the full collection.
    Stats,
    /// Every tag on the board, first-occurrence order.
    Tags,
    /// Emit the demo seed board.
    Seed,
}
