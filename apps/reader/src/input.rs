use reading_core::{SessionCommand, SessionSnapshot, SwipeDirection};
use thiserror::Error;

/// One line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Draw,
    Reset,
    Next,
    Prev,
    /// 1-based card slot.
    GoTo(usize),
    /// 1-based card slot; `None` clears the selection.
    Select(Option<usize>),
    Retry,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("'{command}' needs a card number")]
    MissingSlot { command: &'static str },
    #[error("'{0}' is not a card number (1-3)")]
    BadSlot(String),
    #[error("no card in slot {0}")]
    EmptySlot(usize),
}

pub const HELP: &str = "draw | reset | next | prev | go N | select [N] | retry | help | quit";

/// Parses a prompt line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Action>, InputError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "draw" | "d" => Action::Draw,
        "reset" | "clear" => Action::Reset,
        "next" | "n" => Action::Next,
        "prev" | "p" => Action::Prev,
        "go" | "g" => {
            let raw = words
                .next()
                .ok_or(InputError::MissingSlot { command: "go" })?;
            Action::GoTo(parse_slot(raw)?)
        }
        "select" | "s" => Action::Select(words.next().map(parse_slot).transpose()?),
        "retry" | "load" => Action::Retry,
        "help" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(action))
}

fn parse_slot(raw: &str) -> Result<usize, InputError> {
    match raw.parse::<usize>() {
        Ok(slot) if slot >= 1 => Ok(slot),
        _ => Err(InputError::BadSlot(raw.to_string())),
    }
}

/// Controller command for an action, resolving card slots against the
/// current spread. `Help` and `Quit` never reach the controller.
pub fn to_command(
    action: Action,
    snapshot: &SessionSnapshot,
) -> Result<Option<SessionCommand>, InputError> {
    let command = match action {
        Action::Draw => SessionCommand::Draw,
        Action::Reset => SessionCommand::Reset,
        Action::Next => SessionCommand::Swipe(SwipeDirection::Left),
        Action::Prev => SessionCommand::Swipe(SwipeDirection::Right),
        Action::GoTo(slot) => SessionCommand::GoToCard(slot.saturating_sub(1)),
        Action::Select(None) => SessionCommand::SelectCard(None),
        Action::Select(Some(slot)) => {
            let card = snapshot
                .drawn_cards
                .get(slot.wrapping_sub(1))
                .ok_or(InputError::EmptySlot(slot))?;
            SessionCommand::SelectCard(Some(card.id.clone()))
        }
        Action::Retry => SessionCommand::LoadDeck,
        Action::Help | Action::Quit => return Ok(None),
    };
    Ok(Some(command))
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
