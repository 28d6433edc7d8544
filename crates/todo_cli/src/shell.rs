//! Line-oriented interactive session.
//!
//! A plain line is typed into the draft and submitted as if Enter was
//! pressed. Lines starting with `:` are commands; a leading `::` adds the
//! rest of the line, starting with a single `:`, as task text.

use crate::{report_persist_error, CliService};
use std::io::{self, BufRead, Write};
use todo_core::{render_text, InputController, Key, TaskId};

const HELP: &str = "type a task and press Enter to add it\n  :add <text> add text verbatim (or start the line with `::`)\n  :done <id>  complete a task\n  :list       show the list\n  :quit       leave";

enum Command<'a> {
    Add(&'a str),
    Done(&'a str),
    List,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let rest = line.trim_start().strip_prefix(':')?;
    if rest.starts_with(':') {
        return Some(Command::Add(rest));
    }
    let rest = rest.trim_end();
    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));
    Some(match name {
        "add" | "a" => Command::Add(arg),
        "done" | "d" => Command::Done(arg),
        "list" | "l" => Command::List,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    })
}

pub fn run(service: &mut CliService) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let input = InputController::new();

    write!(stdout, "{}", render_text(&service.view()))?;
    writeln!(stdout, "({HELP})")?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Some(Command::List) => {}
            Some(Command::Done(id)) if !id.is_empty() => {
                service.apply(input.on_complete_clicked(TaskId::new(id)));
            }
            Some(Command::Done(_)) => {
                writeln!(stdout, "usage: :done <id>")?;
                continue;
            }
            Some(Command::Unknown(name)) => {
                writeln!(stdout, "unknown command `:{name}`; try :help")?;
                continue;
            }
            Some(Command::Add(text)) => submit(service, &input, text),
            None => submit(service, &input, &line),
        }

        report_persist_error(service);
        write!(stdout, "{}", render_text(&service.view()))?;
        stdout.flush()?;
    }

    Ok(())
}

fn submit(service: &mut CliService, input: &InputController, text: &str) {
    service.apply(input.on_change(text));
    if let Some(intent) = input.on_key(Key::Enter, service.draft()) {
        service.apply(intent);
    }
}
