use feedwatch_core::classify::RowId;
use feedwatch_core::query::{FilterForm, date_hint};
use feedwatch_core::sink::FilterCell;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  search [service=..] [version=..] [from=..] [to=..]   re-run the query
  service|version|from|to <text>                      edit a filter input
  expand <row>                                         toggle a row's details
  filter <row> [service|version]                       filter on a row's cells
  help
  quit";

/// Picker date shown in the range hints.
const HINT_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Service,
    Version,
    From,
    To,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "service" => Some(Field::Service),
            "version" => Some(Field::Version),
            "from" => Some(Field::From),
            "to" => Some(Field::To),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: Field,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(Vec<FieldEdit>),
    Set(FieldEdit),
    Expand(RowId),
    Filter { row: RowId, cell: FilterCell },
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{0}' needs a row id")]
    MissingRow(&'static str),

    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    #[error("expected key=value, got '{0}'")]
    MalformedPair(String),
}

/// Parse one stdin line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let command = match verb {
        "" => return Ok(None),
        "search" => Command::Search(parse_pairs(rest)?),
        "expand" => Command::Expand(row_arg(rest, "expand")?),
        "filter" => {
            let mut args = rest.split_whitespace();
            let row = args.next().ok_or(CommandError::MissingRow("filter"))?;
            let cell = match args.next() {
                None | Some("service") => FilterCell::Service,
                Some("version") => FilterCell::Version,
                Some(other) => return Err(CommandError::UnknownField(other.to_string())),
            };
            Command::Filter {
                row: RowId::from(row),
                cell,
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => match Field::parse(other) {
            Some(field) => Command::Set(FieldEdit {
                field,
                value: rest.to_string(),
            }),
            None => return Err(CommandError::Unknown(other.to_string())),
        },
    };

    Ok(Some(command))
}

fn row_arg(rest: &str, verb: &'static str) -> Result<RowId, CommandError> {
    rest.split_whitespace()
        .next()
        .map(RowId::from)
        .ok_or(CommandError::MissingRow(verb))
}

/// `key=value` pairs. Words without `=` continue the previous value, so
/// `from=2024/01/02 10:00` keeps its time.
fn parse_pairs(rest: &str) -> Result<Vec<FieldEdit>, CommandError> {
    let mut edits: Vec<FieldEdit> = Vec::new();

    for word in rest.split_whitespace() {
        match word.split_once('=') {
            Some((key, value)) => {
                let field = Field::parse(key)
                    .ok_or_else(|| CommandError::UnknownField(key.to_string()))?;
                edits.push(FieldEdit {
                    field,
                    value: value.to_string(),
                });
            }
            None => match edits.last_mut() {
                Some(edit) => {
                    edit.value.push(' ');
                    edit.value.push_str(word);
                }
                None => return Err(CommandError::MalformedPair(word.to_string())),
            },
        }
    }

    Ok(edits)
}

pub fn apply_edit(form: &mut FilterForm, edit: &FieldEdit) {
    let slot = match edit.field {
        Field::Service => &mut form.service,
        Field::Version => &mut form.version,
        Field::From => &mut form.start,
        Field::To => &mut form.end,
    };
    *slot = edit.value.clone();
}

/// The range each date picker allows given the other one's value.
pub fn range_hint(form: &FilterForm) -> Option<String> {
    let earliest_end = date_hint(&form.start, HINT_FORMAT);
    let latest_start = date_hint(&form.end, HINT_FORMAT);

    match (latest_start, earliest_end) {
        (None, None) => None,
        (Some(max), None) => Some(format!("from: up to {max}")),
        (None, Some(min)) => Some(format!("to: from {min}")),
        (Some(max), Some(min)) => Some(format!("from: up to {max}, to: from {min}")),
    }
}
