//! Core modules for the taskdeck board engine.
//!
//! The dependency order runs leaves-first: record model, then the collection
//! store (mutation engine), then the filter/derivation pipeline, then
//! board-level aggregates.

pub mod error;
pub mod ids;
pub mod model;
pub mod output;
pub mod selection;
pub mod stats;
pub mod store;
pub mod view;
