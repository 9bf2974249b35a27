//! Board-level aggregates, computed over the full collection rather than
//! any filtered view.

use serde::Serialize;

use crate::core::model::{Board, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub completed: usize,
    pub high_priority: usize,
    /// Mean per-task urgency, rounded to nearest with ties away from zero.
    /// Defined as 0 on an empty board.
    pub avg_urgency: u32,
}

pub fn compute_stats(board: &Board) -> BoardStats {
    let total = board.len();
    let completed = board.tasks.iter().filter(|t| t.completed).count();
    let high_priority = board
        .tasks
        .iter()
        .filter(|t| t.priority == Priority::High)
        .count();
    let avg_urgency = if total == 0 {
        0
    } else {
        let sum: u32 = board.tasks.iter().map(|t| t.priority.urgency()).sum();
        (f64::from(sum) / total as f64).round() as u32
    };
    BoardStats {
        total,
        completed,
        high_priority,
        avg_urgency,
    }
}
