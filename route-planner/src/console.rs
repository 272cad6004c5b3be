//! Line commands for driving a session from a terminal.

use crate::domain::{DomainError, GeoPoint, PointSlot, TransportMode};
use crate::session::UiEvent;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  mode car|bike|walk|none   choose the transport mode
  origin | destination      pick which endpoint the next click sets
  click LAT LNG             click on the map
  search LAT LNG LABEL      pick an address search result
  close-popup               close the search result popup
  reset                     start a new search
  show [--html]             print the info panel, as text or HTML
  help                      print this text
  quit                      exit";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(UiEvent),
    /// Print the info panel; `html` selects the HTML fragment.
    Show { html: bool },
    Help,
    Quit,
}

/// Errors parsing a console line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Err(CommandError::Empty);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "mode" => {
            let value = words.next().ok_or(CommandError::Usage("mode car|bike|walk|none"))?;
            Command::Event(UiEvent::SelectMode(TransportMode::from_selection(value)?))
        }
        "origin" => Command::Event(UiEvent::PressEndpoint(PointSlot::Origin)),
        "destination" => Command::Event(UiEvent::PressEndpoint(PointSlot::Destination)),
        "click" => {
            let point = parse_point(&mut words).ok_or(CommandError::Usage("click LAT LNG"))??;
            Command::Event(UiEvent::MapClick(point))
        }
        "search" => {
            const USAGE: &str = "search LAT LNG LABEL";
            let point = parse_point(&mut words).ok_or(CommandError::Usage(USAGE))??;
            let label = words.collect::<Vec<_>>().join(" ");
            if label.is_empty() {
                return Err(CommandError::Usage(USAGE));
            }
            Command::Event(UiEvent::SearchResult { point, label })
        }
        "close-popup" => Command::Event(UiEvent::SearchPopupClosed),
        "reset" => Command::Event(UiEvent::Reset),
        "show" => match words.next() {
            None => Command::Show { html: false },
            Some("--html") => Command::Show { html: true },
            Some(_) => return Err(CommandError::Usage("show [--html]")),
        },
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

/// Read `LAT LNG` from the next two words. `None` when either is missing.
fn parse_point<'a>(
    words: &mut impl Iterator<Item = &'a str>,
) -> Option<Result<GeoPoint, CommandError>> {
    let lat = words.next()?;
    let lng = words.next()?;
    Some(parse_number(lat).and_then(|lat| {
        let lng = parse_number(lng)?;
        Ok(GeoPoint::new(lat, lng)?)
    }))
}

fn parse_number(word: &str) -> Result<f64, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))
}
