use taskdeck::core::error::TaskdeckError;
use taskdeck::core::model::{Assignee, Board, Priority, Task, TaskDraft, TaskPatch};
use taskdeck::core::store::{BoardStore, Command, apply};

fn task(id: &str, title: &str, priority: Priority, completed: bool, tags: &[&str]) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        priority,
        completed,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        assignee: Assignee {
            name: "John".to_string(),
            avatar: "👨‍💻".to_string(),
        },
    }
}

fn two_task_board() -> Board {
    Board::new(vec![
        task("1", "Learn", Priority::High, false, &["frontend"]),
        task("2", "Build", Priority::Medium, true, &["backend"]),
    ])
}

#[test]
fn test_create_appends_fresh_id() {
    let board = two_task_board();
    let next = apply(
        &board,
        Command::Create(TaskDraft::titled("Deploy")),
    )
    .unwrap();

    assert_eq!(next.len(), board.len() + 1);
    let created = next.tasks.last().unwrap();
    assert_eq!(created.title, "Deploy");
    assert!(!created.completed);
    assert!(board.tasks.iter().all(|t| t.id != created.id));
    // prior records untouched, in order
    assert_eq!(&next.tasks[..2], &board.tasks[..]);
}

#[test]
fn test_create_rejects_blank_title() {
    let board = two_task_board();
    let err = apply(&board, Command::Create(TaskDraft::titled("   "))).unwrap_err();
    assert!(matches!(err, TaskdeckError::ValidationError(_)));
}

#[test]
fn test_create_dedups_draft_tags() {
    let draft = TaskDraft {
        title: "Tagged".to_string(),
        tags: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        ..TaskDraft::default()
    };
    let next = apply(&Board::default(), Command::Create(draft)).unwrap();
    assert_eq!(next.tasks[0].tags, vec!["a", "b"]);
}

#[test]
fn test_create_then_delete_round_trips() {
    let board = two_task_board();
    let mut store = BoardStore::with_seed(board.tasks.clone());
    let id = store.create(TaskDraft::titled("Ephemeral")).unwrap();
    assert_eq!(store.board().len(), 3);
    store.delete(&id);
    assert_eq!(store.board(), &board);
}

#[test]
fn test_missing_targets_are_benign_noops() {
    let board = two_task_board();

    let updated = apply(
        &board,
        Command::Update {
            id: "missing".to_string(),
            patch: TaskPatch::completed(true),
        },
    )
    .unwrap();
    assert_eq!(updated, board);

    let deleted = apply(
        &board,
        Command::Delete {
            id: "missing".to_string(),
        },
    )
    .unwrap();
    assert_eq!(deleted, board);

    let batched = apply(
        &board,
        Command::BatchUpdate {
            ids: vec!["missing".to_string()],
            patch: TaskPatch::priority(Priority::Low),
        },
    )
    .unwrap();
    assert_eq!(batched, board);
}

#[test]
fn test_update_patches_only_named_fields() {
    let board = two_task_board();
    let next = apply(
        &board,
        Command::Update {
            id: "1".to_string(),
            patch: TaskPatch {
                title: Some("Learn Rust".to_string()),
                ..TaskPatch::default()
            },
        },
    )
    .unwrap();

    assert_eq!(next.len(), 2);
    assert_eq!(next.tasks[0].title, "Learn Rust");
    assert_eq!(next.tasks[0].priority, Priority::High);
    assert_eq!(next.tasks[0].tags, vec!["frontend"]);
    // untargeted record is bit-identical
    assert_eq!(next.tasks[1], board.tasks[1]);
}

#[test]
fn test_batch_update_single_transition() {
    let board = two_task_board();
    let next = apply(
        &board,
        Command::BatchUpdate {
            ids: vec!["1".to_string(), "2".to_string()],
            patch: TaskPatch::completed(true),
        },
    )
    .unwrap();

    assert!(next.tasks.iter().all(|t| t.completed));
    assert_eq!(next.tasks[0].title, "Learn");
    assert_eq!(next.tasks[0].priority, Priority::High);
    assert_eq!(next.tasks[1].title, "Build");
}

#[test]
fn test_batch_update_skips_unknown_subset() {
    let board = two_task_board();
    let next = apply(
        &board,
        Command::BatchUpdate {
            ids: vec!["2".to_string(), "ghost".to_string()],
            patch: TaskPatch::priority(Priority::Low),
        },
    )
    .unwrap();

    assert_eq!(next.tasks[0], board.tasks[0]);
    assert_eq!(next.tasks[1].priority, Priority::Low);
}

#[test]
fn test_reorder_accepts_permutation() {
    let board = two_task_board();
    let sequence = vec![board.tasks[1].clone(), board.tasks[0].clone()];
    let next = apply(&board, Command::Reorder(sequence)).unwrap();
    assert_eq!(next.tasks[0].id, "2");
    assert_eq!(next.tasks[1].id, "1");
}

#[test]
fn test_reorder_rejects_missing_duplicate_and_foreign_ids() {
    let board = two_task_board();

    // missing a record
    let short = vec![board.tasks[0].clone()];
    assert!(matches!(
        apply(&board, Command::Reorder(short)),
        Err(TaskdeckError::ValidationError(_))
    ));

    // duplicate id
    let dup = vec![board.tasks[0].clone(), board.tasks[0].clone()];
    assert!(matches!(
        apply(&board, Command::Reorder(dup)),
        Err(TaskdeckError::ValidationError(_))
    ));

    // foreign id
    let foreign = vec![
        board.tasks[0].clone(),
        task("99", "Intruder", Priority::Low, false, &[]),
    ];
    assert!(matches!(
        apply(&board, Command::Reorder(foreign)),
        Err(TaskdeckError::ValidationError(_))
    ));
}

#[test]
fn test_selection_toggle_and_prune_on_delete() {
    let mut store = BoardStore::with_seed(two_task_board().tasks);
    assert!(store.toggle_selection("1"));
    assert!(store.toggle_selection("2"));
    assert_eq!(store.selection().len(), 2);

    // toggling an unknown id never selects it
    assert!(!store.toggle_selection("ghost"));
    assert_eq!(store.selection().len(), 2);

    store.delete("1");
    assert!(!store.selection().contains("1"));
    assert!(store.selection().contains("2"));
}

#[test]
fn test_complete_selected_clears_selection() {
    let mut store = BoardStore::with_seed(two_task_board().tasks);
    store.toggle_selection("1");
    store.complete_selected();
    assert!(store.board().get("1").unwrap().completed);
    // untargeted record untouched
    assert_eq!(store.board().get("2").unwrap().title, "Build");
    assert!(store.selection().is_empty());
}

#[test]
fn test_raise_selected_sets_high_priority() {
    let mut store = BoardStore::with_seed(two_task_board().tasks);
    store.toggle_selection("2");
    store.raise_selected();
    assert_eq!(store.board().get("2").unwrap().priority, Priority::High);
    assert!(store.selection().is_empty());
}

#[test]
fn test_delete_selected_is_one_transition() {
    let mut store = BoardStore::with_seed(two_task_board().tasks);
    store.toggle_selection("1");
    store.toggle_selection("2");
    store.delete_selected();
    assert!(store.board().is_empty());
    assert!(store.selection().is_empty());
}

#[test]
fn test_dispatch_routes_commands() {
    let mut store = BoardStore::with_seed(two_task_board().tasks);
    store
        .dispatch(Command::Delete {
            id: "1".to_string(),
        })
        .unwrap();
    assert_eq!(store.board().len(), 1);
    assert_eq!(store.board().tasks[0].id, "2");
}
