//! Selection tracking for batch actions.
//!
//! The selection is caller-held state, independent of the board itself. The
//! store prunes it whenever a delete lands so it never references an id with
//! no matching record.

use crate::core::model::Board;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: FxHashSet<String>,
}

impl Selection {
    /// Flip membership of `id`. Returns whether the id is selected afterward.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in deterministic (sorted) order for output surfaces.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Drop every selected id that no longer has a record on `board`.
    pub fn retain_board(&mut self, board: &Board) {
        self.ids.retain(|id| board.contains_id(id));
    }
}
