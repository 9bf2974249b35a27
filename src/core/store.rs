//! Collection store: the closed command set and the pure board transition.
//!
//! Every mutation is expressed as `(snapshot, command) -> snapshot`: a new
//! `Board` is computed in full and then published by whole-value
//! substitution. Nothing edits a committed snapshot in place, so a reader
//! holding the previous snapshot always sees a complete, consistent board.
//!
//! Missing-target semantics are deliberate: `Update`, `Delete` and
//! `BatchUpdate` aimed at an id with no matching record are benign no-ops,
//! never errors. The two hard failures are a blank-titled `Create` and a
//! `Reorder` whose sequence is not a permutation of the current board.

use crate::core::error::TaskdeckError;
use crate::core::ids;
use crate::core::model::{Board, Priority, Task, TaskDraft, TaskPatch, dedup_tags};
use crate::core::selection::Selection;

/// One mutation request against a board snapshot.
#[derive(Debug, Clone)]
pub enum Command {
    /// Commit a draft as a new record appended to the end of the board.
    Create(TaskDraft),
    /// Patch the record with the given id; no-op when absent.
    Update { id: String, patch: TaskPatch },
    /// Remove the record with the given id; no-op when absent.
    Delete { id: String },
    /// Apply one patch to every listed id in a single snapshot transition.
    BatchUpdate { ids: Vec<String>, patch: TaskPatch },
    /// Replace the whole sequence with a permutation of the current records.
    Reorder(Vec<Task>),
}

/// Pure transition function. Returns the next snapshot; `board` is untouched.
pub fn apply(board: &Board, command: Command) -> Result<Board, TaskdeckError> {
    match command {
        Command::Create(draft) => create(board, draft),
        Command::Update { id, patch } => Ok(update(board, &id, &patch)),
        Command::Delete { id } => Ok(delete(board, &id)),
        Command::BatchUpdate { ids, patch } => Ok(batch_update(board, &ids, &patch)),
        Command::Reorder(sequence) => reorder(board, sequence),
    }
}

fn create(board: &Board, draft: TaskDraft) -> Result<Board, TaskdeckError> {
    if draft.title.trim().is_empty() {
        return Err(TaskdeckError::ValidationError(
            "task title must not be blank".to_string(),
        ));
    }
    let task = Task {
        id: ids::new_task_id(),
        title: draft.title,
        priority: draft.priority,
        completed: false,
        tags: dedup_tags(&draft.tags),
        assignee: draft.assignee,
    };
    let mut tasks = board.tasks.clone();
    tasks.push(task);
    Ok(Board::new(tasks))
}

fn update(board: &Board, id: &str, patch: &TaskPatch) -> Board {
    Board::new(
        board
            .tasks
            .iter()
            .map(|t| if t.id == id { patch.apply_to(t) } else { t.clone() })
            .collect(),
    )
}

fn delete(board: &Board, id: &str) -> Board {
    Board::new(
        board
            .tasks
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect(),
    )
}

fn batch_update(board: &Board, ids: &[String], patch: &TaskPatch) -> Board {
    Board::new(
        board
            .tasks
            .iter()
            .map(|t| {
                if ids.iter().any(|id| *id == t.id) {
                    patch.apply_to(t)
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

fn reorder(board: &Board, sequence: Vec<Task>) -> Result<Board, TaskdeckError> {
    let mut current: Vec<&str> = board.tasks.iter().map(|t| t.id.as_str()).collect();
    let mut proposed: Vec<&str> = sequence.iter().map(|t| t.id.as_str()).collect();
    current.sort_unstable();
    proposed.sort_unstable();
    if current != proposed {
        return Err(TaskdeckError::ValidationError(
            "reorder sequence must be a permutation of the current board".to_string(),
        ));
    }
    Ok(Board::new(sequence))
}

/// Stateful owner of the current snapshot and the caller's selection.
///
/// Dispatching a command publishes the next snapshot and, in the same
/// logical transaction, prunes selection ids whose record went away.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    board: Board,
    selection: Selection,
}

impl BoardStore {
    pub fn with_seed(tasks: Vec<Task>) -> Self {
        BoardStore {
            board: Board::new(tasks),
            selection: Selection::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn dispatch(&mut self, command: Command) -> Result<&Board, TaskdeckError> {
        let next = apply(&self.board, command)?;
        self.publish(next);
        Ok(&self.board)
    }

    /// Commit a draft and return the freshly assigned id.
    pub fn create(&mut self, draft: TaskDraft) -> Result<String, TaskdeckError> {
        let next = create(&self.board, draft)?;
        // create appends, so the new record is last
        let id = next
            .tasks
            .last()
            .map(|t| t.id.clone())
            .unwrap_or_default();
        self.publish(next);
        Ok(id)
    }

    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> &Board {
        let next = update(&self.board, id, patch);
        self.publish(next);
        &self.board
    }

    pub fn delete(&mut self, id: &str) -> &Board {
        let next = delete(&self.board, id);
        self.publish(next);
        &self.board
    }

    pub fn batch_update(&mut self, ids: &[String], patch: &TaskPatch) -> &Board {
        let next = batch_update(&self.board, ids, patch);
        self.publish(next);
        &self.board
    }

    pub fn reorder(&mut self, sequence: Vec<Task>) -> Result<&Board, TaskdeckError> {
        let next = reorder(&self.board, sequence)?;
        self.publish(next);
        Ok(&self.board)
    }

    /// Flip selection membership. Unknown ids cannot be selected, so the
    /// selection never points at a record the board does not hold.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if !self.selection.contains(id) && !self.board.contains_id(id) {
            return false;
        }
        self.selection.toggle(id)
    }

    /// Mark every selected task completed in one transition, then clear the
    /// selection.
    pub fn complete_selected(&mut self) -> &Board {
        let ids = self.selection.sorted_ids();
        let next = batch_update(&self.board, &ids, &TaskPatch::completed(true));
        self.publish(next);
        self.selection.clear();
        &self.board
    }

    /// Raise every selected task to high priority in one transition, then
    /// clear the selection.
    pub fn raise_selected(&mut self) -> &Board {
        let ids = self.selection.sorted_ids();
        let next = batch_update(&self.board, &ids, &TaskPatch::priority(Priority::High));
        self.publish(next);
        self.selection.clear();
        &self.board
    }

    /// Remove every selected task as a single snapshot transition.
    pub fn delete_selected(&mut self) -> &Board {
        let next = Board::new(
            self.board
                .tasks
                .iter()
                .filter(|t| !self.selection.contains(&t.id))
                .cloned()
                .collect(),
        );
        self.publish(next);
        &self.board
    }

    fn publish(&mut self, next: Board) {
        self.board = next;
        self.selection.retain_board(&self.board);
    }
}
