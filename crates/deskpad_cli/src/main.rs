//! DeskPad command-line presentation layer.
//!
//! # Responsibility
//! - Expose the two views (`tasks`, `notes`) as command groups.
//! - Render derived views and forward user actions to the core services.
//!
//! # Invariants
//! - All state changes go through the core services; this layer never
//!   touches the store directly beyond opening it.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use deskpad_core::{
    default_log_level, init_logging, NoteId, NoteService, SqliteKv, TaskFilter, TaskId,
    TaskService,
};
use directories::ProjectDirs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deskpad")]
#[command(version, about = "Local-first task tracker and notes manager")]
struct Cli {
    /// Override the data directory (store and logs live here)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand)]
enum View {
    /// Task tracker view
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Notes manager view
    Notes {
        #[command(subcommand)]
        action: NoteAction,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// Add a new task
    Add { title: String },
    /// List tasks with progress stats
    List {
        /// all, active, or completed
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Flip a task between open and completed
    Toggle { id: TaskId },
    /// Replace a task's title
    Edit { id: TaskId, title: String },
    /// Remove a task
    Delete { id: TaskId },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Add a new note
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// List notes, pinned first, most recently touched first
    List {
        /// Case-insensitive substring search
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Replace a note's title and content
    Edit {
        id: NoteId,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Flip a note's pinned state
    Pin { id: NoteId },
    /// Remove a note
    Delete { id: NoteId },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => ProjectDirs::from("", "", "deskpad")
            .ok_or_else(|| anyhow!("could not resolve a user data directory"))?
            .data_dir()
            .to_path_buf(),
    };
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // logging is best-effort for a CLI session
        eprintln!("warning: {err}");
    }

    let store = SqliteKv::open(data_dir.join("deskpad.db"))
        .with_context(|| format!("opening store in {}", data_dir.display()))?;

    match cli.view {
        View::Tasks { action } => run_tasks(action, &store),
        View::Notes { action } => run_notes(action, &store),
    }

    Ok(())
}

fn run_tasks(action: TaskAction, store: &SqliteKv) {
    let mut tasks = TaskService::load(store);
    match action {
        TaskAction::Add { title } => match tasks.add(&title) {
            Some(id) => println!("added {id}"),
            None => println!("nothing to add: title is empty"),
        },
        TaskAction::List { filter } => {
            let counts = tasks.counts();
            println!(
                "{} total, {} active, {} done ({}% complete)",
                counts.all,
                counts.active,
                counts.completed,
                tasks.completion_rate()
            );
            for task in tasks.filtered(filter) {
                let mark = if task.completed { "x" } else { " " };
                println!("[{mark}] {}  {}", task.id, task.title);
            }
        }
        TaskAction::Toggle { id } => {
            tasks.toggle(id);
            log::info!("event=task_toggle module=cli status=ok id={id}");
        }
        TaskAction::Edit { id, title } => tasks.edit(id, &title),
        TaskAction::Delete { id } => tasks.delete(id),
    }
}

fn run_notes(action: NoteAction, store: &SqliteKv) {
    let mut notes = NoteService::load(store);
    match action {
        NoteAction::Add { title, content } => match notes.add(&title, &content) {
            Some(id) => println!("added {id}"),
            None => println!("nothing to add: note is empty"),
        },
        NoteAction::List { search } => {
            for note in notes.visible(&search) {
                let pin = if note.pinned { "*" } else { " " };
                println!("{pin} {}  {}", note.id, note.title);
                if !note.content.is_empty() {
                    println!("    {}", note.content);
                }
            }
        }
        NoteAction::Edit { id, title, content } => {
            // CLI edits arrive in one shot, but still run through the
            // stage-then-commit cycle the service exposes
            notes.start_edit(id);
            notes.save_edit(id, &title, &content);
        }
        NoteAction::Pin { id } => {
            notes.toggle_pin(id);
            log::info!("event=note_pin module=cli status=ok id={id}");
        }
        NoteAction::Delete { id } => notes.delete(id),
    }
}
