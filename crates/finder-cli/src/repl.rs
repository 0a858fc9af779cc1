//! Line commands for `finder interactive`.

use finder_core::{Action, AppState, PlacesSearch, Session};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
commands:
  radius <meters>   change the search radius (searches again if it changed)
  search            search again with the current radius
  select <n|id>     select result n (1-based) or the place with that id
  clear             clear the selection
  show              print the page
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Radius(i64),
    Search,
    Select(String),
    Clear,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Command::Show);
        };
        let arg = parts.next();

        match (word.to_ascii_lowercase().as_str(), arg) {
            ("radius" | "r", Some(value)) => value
                .parse()
                .map(Command::Radius)
                .map_err(|_| format!("not a number: {value}")),
            ("radius" | "r", None) => Err("usage: radius <meters>".into()),
            ("search" | "s", _) => Ok(Command::Search),
            ("select", Some(target)) => Ok(Command::Select(target.to_string())),
            ("select", None) => Err("usage: select <n|id>".into()),
            ("clear", _) => Ok(Command::Clear),
            ("show", _) => Ok(Command::Show),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "exit" | "q", _) => Ok(Command::Quit),
            (other, _) => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

/// Turns `select 2` into the id of the second result; ids pass through.
fn resolve_selection(state: &AppState, target: &str) -> String {
    let results = state.status.results();
    match target.parse::<usize>() {
        Ok(n) if (1..=results.len()).contains(&n) => results[n - 1].id.clone(),
        _ => target.to_string(),
    }
}

/// Reads commands until `quit` or end of input, printing the page after
/// every change.
pub fn run<P, R, W>(session: &mut Session<P>, input: R, mut out: W) -> std::io::Result<()>
where
    P: PlacesSearch,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", session.screen())?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Show => {}
            Command::Radius(radius) => session.dispatch(Action::RadiusChanged(radius)),
            Command::Search => session.dispatch(Action::SearchRequested),
            Command::Select(target) => {
                let id = resolve_selection(session.state(), &target);
                session.dispatch(Action::ResultSelected(Some(id)));
            }
            Command::Clear => session.dispatch(Action::ResultSelected(None)),
        }
        write!(out, "{}", session.screen())?;
    }
    Ok(())
}
