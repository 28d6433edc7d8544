//! Terminal front-end for the todo list.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Open the SQLite store, initialize the list and forward user intents.
//! - Render the list after every change.

mod shell;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::db::open_db;
use todo_core::{
    default_log_level, init_logging, render_text, InputController, Key, SequentialIdGenerator,
    SqliteStore, TaskId, TaskIdGenerator, TodoService, UuidIdGenerator,
};

type CliService = TodoService<SqliteStore, Box<dyn TaskIdGenerator>>;

#[derive(Parser)]
#[command(name = "todo_cli")]
#[command(about = "Single-user todo list stored in a local SQLite file")]
#[command(version)]
struct Cli {
    /// Database file holding the persisted list
    #[arg(long, env = "TODO_DB_PATH", default_value = "todos.sqlite3")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "TODO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "TODO_LOG_DIR")]
    log_dir: Option<String>,

    /// Id scheme for newly added tasks
    #[arg(long, value_enum, default_value_t = IdScheme::Uuid)]
    ids: IdScheme,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IdScheme {
    Uuid,
    Sequential,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the list (default)
    List,
    /// Add a task
    Add {
        /// Task text; words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Complete (remove) a task by id
    Done {
        id: String,
    },
    /// Interactive session
    Shell,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut service = match open_service(&cli) {
        Ok(service) => service,
        Err(err) => {
            error!(
                "event=cli_open module=cli status=error db={} error={err}",
                cli.db.display()
            );
            eprintln!("error: cannot open {}: {err}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };
    report_persist_error(&mut service);

    let command = cli.command.unwrap_or(Commands::List);
    info!(
        "event=cli_command module=cli status=start command={} task_count={}",
        command.name(),
        service.len()
    );
    match command {
        Commands::List => print!("{}", render_text(&service.view())),
        Commands::Add { text } => {
            let input = InputController::new();
            service.apply(input.on_change(text.join(" ")));
            if let Some(intent) = input.on_key(Key::Enter, service.draft()) {
                service.apply(intent);
            }
            report_persist_error(&mut service);
            print!("{}", render_text(&service.view()));
        }
        Commands::Done { id } => {
            service.remove_task(&TaskId::new(id));
            report_persist_error(&mut service);
            print!("{}", render_text(&service.view()));
        }
        Commands::Shell => {
            if let Err(err) = shell::run(&mut service) {
                error!("event=cli_shell module=cli status=error error={err}");
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Done { .. } => "done",
            Self::Shell => "shell",
        }
    }
}

fn open_service(cli: &Cli) -> Result<CliService, todo_core::db::DbError> {
    let store = SqliteStore::new(open_db(&cli.db)?);
    let scheme = cli.ids;
    Ok(TodoService::initialize_with(store, |tasks| {
        let ids: Box<dyn TaskIdGenerator> = match scheme {
            IdScheme::Uuid => Box::new(UuidIdGenerator),
            IdScheme::Sequential => Box::new(SequentialIdGenerator::seeded_after(tasks)),
        };
        ids
    }))
}

fn report_persist_error(service: &mut CliService) {
    if let Some(err) = service.take_persist_error() {
        warn!("event=cli_persist module=cli status=error error={err}");
        eprintln!("warning: changes were not saved: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn missing_subcommand_defaults_to_list() {
        let cli = Cli::try_parse_from(["todo_cli", "--db", "/tmp/t.sqlite3"]).unwrap();
        assert_eq!(cli.command.unwrap_or(Commands::List).name(), "list");
    }

    #[test]
    fn add_joins_words_and_reports_its_name() {
        let cli = Cli::try_parse_from(["todo_cli", "add", "Buy", "milk"]).unwrap();
        match cli.command.unwrap() {
            Commands::Add { text } => assert_eq!(text.join(" "), "Buy milk"),
            other => panic!("unexpected command: {}", other.name()),
        }
    }
}
