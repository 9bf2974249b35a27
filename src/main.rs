mod cli;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use taskdeck::core::error::TaskdeckError;
use taskdeck::core::ids::command_envelope;
use taskdeck::core::model::{Assignee, Board, Task, TaskDraft, TaskPatch, demo_board};
use taskdeck::core::output;
use taskdeck::core::stats::compute_stats;
use taskdeck::core::store::BoardStore;
use taskdeck::core::view::{FilterConfig, derive_view, unique_tags};

use crate::cli::{Cli, DeckCommand, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    // Seed needs no input board.
    if matches!(&cli.command, DeckCommand::Seed) {
        let board = demo_board();
        return emit_board(&board, "board.seed", cli.format, None);
    }

    let board = load_board(&cli)?;

    match cli.command {
        DeckCommand::Add {
            title,
            priority,
            tags,
            assignee,
            avatar,
        } => {
            let mut store = BoardStore::with_seed(board.tasks);
            let draft = TaskDraft {
                title,
                priority,
                tags,
                assignee: Assignee {
                    name: assignee,
                    avatar,
                },
            };
            let id = store.create(draft)?;
            emit_board(store.board(), "board.add", cli.format, Some(id))
        }
        DeckCommand::Update {
            id,
            title,
            priority,
            completed,
            tags,
            assignee,
            avatar,
        } => {
            let mut store = BoardStore::with_seed(board.tasks);
            let patch = TaskPatch {
                title,
                priority,
                completed,
                tags,
                assignee: patched_assignee(store.board().get(&id), assignee, avatar),
            };
            store.update(&id, &patch);
            emit_board(store.board(), "board.update", cli.format, Some(id))
        }
        DeckCommand::Done { id } => {
            let mut store = BoardStore::with_seed(board.tasks);
            store.update(&id, &TaskPatch::completed(true));
            emit_board(store.board(), "board.done", cli.format, Some(id))
        }
        DeckCommand::Delete { id } => {
            let mut store = BoardStore::with_seed(board.tasks);
            store.delete(&id);
            emit_board(store.board(), "board.delete", cli.format, Some(id))
        }
        DeckCommand::Batch {
            ids,
            title,
            priority,
            completed,
        } => {
            let mut store = BoardStore::with_seed(board.tasks);
            let patch = TaskPatch {
                title,
                priority,
                completed,
                tags: None,
                assignee: None,
            };
            store.batch_update(&ids, &patch);
            emit_board(store.board(), "board.batch", cli.format, None)
        }
        DeckCommand::Reorder { ids } => {
            let sequence = resolve_sequence(&board, &ids)?;
            let mut store = BoardStore::with_seed(board.tasks);
            store.reorder(sequence)?;
            emit_board(store.board(), "board.reorder", cli.format, None)
        }
        DeckCommand::List {
            search,
            priority,
            completion,
            tags,
        } => {
            let filter = FilterConfig {
                priority,
                completion,
                search,
                required_tags: tags,
            };
            let view = derive_view(&board, &filter);
            match cli.format {
                OutputFormat::Json => {
                    let env = command_envelope(
                        "board.list",
                        "ok",
                        serde_json::json!({
                            "count": view.len(),
                            "tasks": serde_json::to_value(&view)?
                        }),
                    );
                    println!("{}", serde_json::to_string_pretty(&env)?);
                }
                OutputFormat::Text => {
                    for task in &view {
                        println!("{}", output::render_task_row(task));
                    }
                    println!("{} task(s)", view.len());
                }
            }
            Ok(())
        }
        DeckCommand::Stats => {
            let stats = compute_stats(&board);
            match cli.format {
                OutputFormat::Json => {
                    let env = command_envelope(
                        "board.stats",
                        "ok",
                        serde_json::json!({ "stats": serde_json::to_value(stats)? }),
                    );
                    println!("{}", serde_json::to_string_pretty(&env)?);
                }
                OutputFormat::Text => println!("{}", output::render_stats(&stats)),
            }
            Ok(())
        }
        DeckCommand::Tags => {
            let tags = unique_tags(&board);
            match cli.format {
                OutputFormat::Json => {
                    let env = command_envelope(
                        "board.tags",
                        "ok",
                        serde_json::json!({ "tags": tags }),
                    );
                    println!("{}", serde_json::to_string_pretty(&env)?);
                }
                OutputFormat::Text => {
                    for tag in &tags {
                        println!("{}", tag);
                    }
                }
            }
            Ok(())
        }
        DeckCommand::Seed => unreachable!("handled before board load"),
    }
}

/// Read the input snapshot from `--board` or stdin. Empty input is an empty
/// board, so pipelines can start from nothing.
fn load_board(cli: &Cli) -> Result<Board> {
    let raw = match &cli.board {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading board snapshot from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading board snapshot from stdin")?;
            buf
        }
    };
    if raw.trim().is_empty() {
        return Ok(Board::default());
    }
    serde_json::from_str(&raw).context("parsing board snapshot JSON")
}

/// Merge assignee flag updates over the target record's current assignee.
fn patched_assignee(
    current: Option<&Task>,
    name: Option<String>,
    avatar: Option<String>,
) -> Option<Assignee> {
    if name.is_none() && avatar.is_none() {
        return None;
    }
    let base = current.map(|t| t.assignee.clone()).unwrap_or_default();
    Some(Assignee {
        name: name.unwrap_or(base.name),
        avatar: avatar.unwrap_or(base.avatar),
    })
}

/// Map an id order onto the current board's records.
fn resolve_sequence(board: &Board, ids: &[String]) -> Result<Vec<Task>, TaskdeckError> {
    ids.iter()
        .map(|id| {
            board
                .get(id)
                .cloned()
                .ok_or_else(|| TaskdeckError::NotFound(format!("no task with id {}", id)))
        })
        .collect()
}

fn emit_board(
    board: &Board,
    cmd: &str,
    format: OutputFormat,
    id: Option<String>,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut extra = serde_json::json!({ "board": serde_json::to_value(board)? });
            if let (Some(obj), Some(id)) = (extra.as_object_mut(), id) {
                obj.insert("id".to_string(), serde_json::Value::String(id));
            }
            let env = command_envelope(cmd, "ok", extra);
            println!("{}", serde_json::to_string_pretty(&env)?);
        }
        OutputFormat::Text => {
            let view = derive_view(board, &FilterConfig::default());
            for task in &view {
                println!("{}", output::render_task_row(task));
            }
            println!("{} task(s)", board.len());
        }
    }
    Ok(())
}
