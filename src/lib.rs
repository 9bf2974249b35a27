//! Taskdeck: a pure, single-writer task-board engine.
//!
//! Two layers compose the core:
//!
//! - **Collection store**: an ordered sequence of task records plus a closed
//!   set of mutation commands. Every accepted command is a pure transition
//!   `(snapshot, command) -> snapshot`; the next board is computed in full
//!   and published by whole-value substitution, never edited in place.
//! - **Derivation pipeline**: given a snapshot and a filter configuration,
//!   produces a read-only projection: filtered, annotated with computed
//!   `urgency_score` and `display_title`, in stable snapshot order; plus
//!   board-level aggregates over the full collection.
//!
//! Missing mutation targets are benign no-ops by contract. The selection set
//! rides along with the store and is pruned in the same logical transaction
//! as any delete, so it never references a record the board does not hold.
//!
//! # Examples
//!
//! ```bash
//! # Emit the demo seed board
//! taskdeck seed --format json > board.json
//!
//! # Append a task
//! taskdeck --board board.json add "Ship release" --priority high --tag release
//!
//! # Derive the filtered, annotated view
//! taskdeck --board board.json list --search ship --completion pending
//!
//! # Board-level aggregates
//! taskdeck --board board.json stats
//! ```
//!
//! # Crate structure
//!
//! - [`core`]: record model, collection store, derivation pipeline,
//!   aggregates, selection tracking, and shared output helpers

pub mod core;
