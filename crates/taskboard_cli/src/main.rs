//! Task board command-line entry point.
//!
//! # Responsibility
//! - Compose config, logging, store, and engine for one command.
//! - Validate user-entered names before dispatch.
//! - Report failures on stderr with a non-zero exit code.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::io::{self, BufRead, Write as IoWrite};
use std::path::PathBuf;
use std::sync::Arc;
use taskboard_core::{
    init_logging, normalize_name, Action, BoardActions, BoardConfig, BoardEngine, BoardStore,
    ColumnEdge, Confirm, DropEvent, FilterKey, NewTask, SessionContext, StoreKind, TaskEdge,
    TaskIds,
};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Task board - columns of tasks kept in a local store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage backend (json or sqlite)
    #[arg(long, global = true)]
    store: Option<StoreKind>,

    /// Path of the JSON file or SQLite database
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Row key inside the SQLite store
    #[arg(long, global = true)]
    key: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Answer yes to every delete confirmation
    #[arg(short, long, global = true)]
    yes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board
    Show {
        /// Only show tasks with this status
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,

        /// Highlight matches of this query in names and contexts
        #[arg(long)]
        search: Option<String>,

        /// Print the filtered board as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a column
    AddColumn { name: String },

    /// Rename a column
    RenameColumn { id: String, name: String },

    /// Delete a column and its tasks
    DeleteColumn { id: String },

    /// Move a column next to another one
    MoveColumn {
        id: String,
        target: String,

        #[arg(long, default_value = "right")]
        edge: ColumnEdge,
    },

    /// Append a task to a column
    AddTask {
        column: String,
        name: String,

        #[arg(short, long)]
        context: Option<String>,
    },

    /// Edit a task's name or context
    EditTask {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        context: Option<String>,
    },

    /// Delete one task, or several as a batch
    DeleteTask {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Mark tasks done or not done
    Status {
        #[arg(required = true)]
        ids: Vec<String>,

        #[arg(long, conflicts_with = "undone", required_unless_present = "undone")]
        done: bool,

        #[arg(long)]
        undone: bool,
    },

    /// Move a task above or below another task
    MoveTask {
        id: String,
        target: String,

        #[arg(long, default_value = "bottom")]
        edge: TaskEdge,
    },

    /// Move tasks to the end of a column
    MoveToColumn {
        column: String,

        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Apply a drop report: {"sourceType","sourceId","destinationId","edge"}
    Drop { json: String },

    /// Select every displayed task of a column, then run a bulk action on it
    ColumnBulk {
        column: String,

        #[arg(value_enum)]
        action: BulkAction,

        /// Only select tasks with this status
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,

        /// Destination column for `move`
        #[arg(long, required_if_eq("action", "move"))]
        target: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BulkAction {
    Complete,
    Incomplete,
    Move,
    Delete,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusArg {
    All,
    Completed,
    Incomplete,
}

impl StatusArg {
    fn filter_value(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Completed => Some(true),
            Self::Incomplete => Some(false),
        }
    }
}

/// Prompts on stderr and reads the answer from stdin.
struct PromptConfirm {
    assume_yes: bool,
}

impl Confirm for PromptConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli) {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = build_config(&cli)?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let store = config.open_store().map_err(|err| err.to_string())?;
    let engine = BoardEngine::init(store).map_err(|err| err.to_string())?;
    let mut session = SessionContext::new();
    session.init(engine);

    let confirm = PromptConfirm {
        assume_yes: cli.yes,
    };
    let result = execute(session.engine_mut(), cli.command, &confirm);
    session.teardown();
    result
}

fn build_config(cli: &Cli) -> Result<BoardConfig, String> {
    let mut config = BoardConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(store) = cli.store {
        config.set_store(store);
    }
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if let Some(key) = &cli.key {
        config.storage_key = key.clone();
    }
    if let Some(level) = &cli.log_level {
        config.set_log_level(level).map_err(|err| err.to_string())?;
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    Ok(config)
}

fn execute<S: BoardStore>(
    engine: &mut BoardEngine<S>,
    command: Commands,
    confirm: &impl Confirm,
) -> Result<(), String> {
    match command {
        Commands::Show {
            status,
            search,
            json,
        } => {
            engine.change_filter(FilterKey::Status, status.filter_value());
            engine.change_search(search.as_deref().unwrap_or_default());
            if json {
                let text =
                    serde_json::to_string_pretty(&*engine.view()).map_err(|err| err.to_string())?;
                println!("{text}");
            } else {
                print_board(engine);
            }
            Ok(())
        }
        Commands::AddColumn { name } => {
            let name = normalize_name(&name).map_err(|err| err.to_string())?;
            apply(engine, Action::AddColumn { name })
        }
        Commands::RenameColumn { id, name } => {
            let name = normalize_name(&name).map_err(|err| err.to_string())?;
            let mut column = engine
                .board()
                .column(&id)
                .map(|column| (**column).clone())
                .ok_or_else(|| format!("column `{id}` not found"))?;
            column.name = name;
            apply(engine, Action::UpdateColumn { column })
        }
        Commands::DeleteColumn { id } => {
            if engine.board().column(&id).is_none() {
                return Err(format!("column `{id}` not found"));
            }
            if !engine.confirm_delete_column(confirm, &id) {
                println!("cancelled");
            }
            Ok(())
        }
        Commands::MoveColumn { id, target, edge } => apply(
            engine,
            Action::MoveColumn {
                column_id: id,
                target_column_id: target,
                edge,
            },
        ),
        Commands::AddTask {
            column,
            name,
            context,
        } => {
            let name = normalize_name(&name).map_err(|err| err.to_string())?;
            let mut task = NewTask::new(name);
            if let Some(context) = context {
                task = task.with_context(context);
            }
            let created = engine.dispatch(Action::AddTask {
                column_id: column.clone(),
                task,
            });
            match created.created_id {
                Some(id) => {
                    println!("{id}");
                    Ok(())
                }
                None => Err(format!("column `{column}` not found")),
            }
        }
        Commands::EditTask { id, name, context } => {
            let mut task = engine
                .board()
                .task(&id)
                .map(|task| (**task).clone())
                .ok_or_else(|| format!("task `{id}` not found"))?;
            if let Some(name) = name {
                task.name = normalize_name(&name).map_err(|err| err.to_string())?;
            }
            if let Some(context) = context {
                task.context = context;
            }
            apply(engine, Action::UpdateTask { task })
        }
        Commands::DeleteTask { mut ids } => {
            let deleted = if ids.len() == 1 {
                let id = ids.remove(0);
                engine.confirm_delete_task(confirm, &id)
            } else {
                engine.select_item(TaskIds::Many(ids), true);
                engine.delete_selected(confirm)
            };
            if !deleted {
                println!("cancelled");
            }
            Ok(())
        }
        Commands::Status { ids, done, undone } => apply(
            engine,
            Action::ChangeStatusTask {
                ids: TaskIds::Many(ids),
                value: done && !undone,
            },
        ),
        Commands::MoveTask { id, target, edge } => apply(
            engine,
            Action::MoveTask {
                task_id: id,
                target_task_id: target,
                edge,
            },
        ),
        Commands::MoveToColumn { column, ids } => apply(
            engine,
            Action::MoveTaskToColumn {
                ids: TaskIds::Many(ids),
                column_id: column,
            },
        ),
        Commands::Drop { json } => {
            let event = DropEvent::from_json(&json).map_err(|err| err.to_string())?;
            let dispatched = engine.handle_drop(event);
            report(dispatched.board_changed);
            Ok(())
        }
        Commands::ColumnBulk {
            column,
            action,
            status,
            target,
        } => {
            if engine.board().column(&column).is_none() {
                return Err(format!("column `{column}` not found"));
            }
            engine.change_filter(FilterKey::Status, status.filter_value());
            engine.toggle_column_selection(&column, true);
            if !engine.column_all_selected(&column) {
                println!("no tasks");
                return Ok(());
            }
            let before = Arc::clone(engine.board());
            match action {
                BulkAction::Complete => engine.change_status_selected(true),
                BulkAction::Incomplete => engine.change_status_selected(false),
                BulkAction::Move => {
                    let target = target.ok_or("--target is required for move")?;
                    engine.move_selected_to_column(&target);
                }
                BulkAction::Delete => {
                    if !engine.delete_selected(confirm) {
                        println!("cancelled");
                        return Ok(());
                    }
                }
            }
            report(!Arc::ptr_eq(&before, engine.board()));
            Ok(())
        }
    }
}

fn apply<S: BoardStore>(engine: &mut BoardEngine<S>, action: Action) -> Result<(), String> {
    let name = action.name();
    let dispatched = engine.dispatch(action);
    info!(
        "event=cli_command module=cli action={name} changed={}",
        dispatched.board_changed
    );
    if let Some(id) = dispatched.created_id {
        println!("{id}");
    } else {
        report(dispatched.board_changed);
    }
    Ok(())
}

fn report(changed: bool) {
    if !changed {
        println!("no change");
    }
}

fn print_board<S: BoardStore>(engine: &BoardEngine<S>) {
    let view = engine.view();
    if view.columns.is_empty() {
        println!("(no columns)");
        return;
    }
    for column in &view.columns {
        println!("{} [{}] ({})", column.name, column.id, column.items.len());
        for task in &column.items {
            let mark = if task.completed { "x" } else { " " };
            let selected = if engine.selection().is_selected(&task.id) {
                "*"
            } else {
                " "
            };
            println!(
                "  {selected}[{mark}] {} [{}]",
                render_highlight(engine, &task.name),
                task.id
            );
            if !task.context.is_empty() {
                println!("       {}", render_highlight(engine, &task.context));
            }
        }
    }
}

fn render_highlight<S: BoardStore>(engine: &BoardEngine<S>, text: &str) -> String {
    engine
        .highlight(text)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                format!(">{}<", segment.text)
            } else {
                segment.text
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{execute, BulkAction, Cli, Commands, PromptConfirm, StatusArg};
    use clap::Parser;
    use taskboard_core::{
        Board, BoardActions, BoardEngine, MemoryBoardStore, NewTask, TaskEdge, TaskIds,
    };

    fn engine() -> BoardEngine<MemoryBoardStore> {
        BoardEngine::with_board(MemoryBoardStore::new(), Board::empty())
    }

    #[test]
    fn parses_move_task_with_default_edge() {
        let cli = Cli::try_parse_from(["taskboard", "move-task", "a", "b"])
            .expect("arguments should parse");
        match cli.command {
            Commands::MoveTask { edge, .. } => assert_eq!(edge, TaskEdge::Bottom),
            _ => panic!("expected move-task"),
        }
    }

    #[test]
    fn status_requires_done_or_undone() {
        assert!(Cli::try_parse_from(["taskboard", "status", "a"]).is_err());
        assert!(Cli::try_parse_from(["taskboard", "status", "a", "--done", "--undone"]).is_err());
        assert!(Cli::try_parse_from(["taskboard", "status", "a", "--undone"]).is_ok());
    }

    #[test]
    fn blank_names_are_rejected_before_dispatch() {
        let mut engine = engine();
        let confirm = PromptConfirm { assume_yes: true };
        let error = execute(
            &mut engine,
            Commands::AddColumn {
                name: "   ".to_string(),
            },
            &confirm,
        )
        .expect_err("blank name should fail");
        assert_eq!(error, "Name is required");
        assert!(engine.board().columns.is_empty());
    }

    #[test]
    fn column_bulk_completes_only_displayed_tasks() {
        let mut engine = engine();
        let column = engine.add_column("Todo");
        let a = engine.add_task(&column, NewTask::new("a")).expect("task a");
        let b = engine.add_task(&column, NewTask::new("b")).expect("task b");
        engine.change_status_task(TaskIds::from(a.as_str()), true);
        let confirm = PromptConfirm { assume_yes: true };

        execute(
            &mut engine,
            Commands::ColumnBulk {
                column: column.clone(),
                action: BulkAction::Incomplete,
                status: StatusArg::Completed,
                target: None,
            },
            &confirm,
        )
        .expect("bulk action should run");
        let board = engine.board();
        assert!(!board.task(&a).expect("task a").completed);
        assert!(!board.task(&b).expect("task b").completed);
        assert_eq!(engine.selected_ids(), [a]);
    }

    #[test]
    fn column_bulk_move_requires_target() {
        assert!(Cli::try_parse_from(["taskboard", "column-bulk", "c1", "move"]).is_err());
        assert!(
            Cli::try_parse_from(["taskboard", "column-bulk", "c1", "move", "--target", "c2"])
                .is_ok()
        );
    }

    #[test]
    fn batch_delete_goes_through_selection() {
        let mut engine = engine();
        let column = engine.add_column("Todo");
        let a = engine.add_task(&column, NewTask::new("a")).expect("task a");
        let b = engine.add_task(&column, NewTask::new("b")).expect("task b");
        let confirm = PromptConfirm { assume_yes: true };

        execute(
            &mut engine,
            Commands::DeleteTask { ids: vec![a, b] },
            &confirm,
        )
        .expect("delete should run");
        assert_eq!(engine.board().task_count(), 0);
        assert!(engine.selection().is_empty());
    }
}
