use crate::session::Command;
use crate::sort::{AlgorithmKind, Direction};
use ncurses as nc;

const CTRL_C: u32 = 3;
const ESC: u32 = 27;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    Quit,
    Resize,
    KeyPress(char),
}

/// Yields the events that arrived since the last frame, without blocking.
pub fn poll() -> impl Iterator<Item = Event> {
    std::iter::from_fn(next_event)
}

fn next_event() -> Option<Event> {
    loop {
        match nc::get_wch()? {
            nc::WchResult::Char(ch) => match ch {
                CTRL_C | ESC => return Some(Event::Quit),
                _ => {
                    if let Some(key) = std::char::from_u32(ch) {
                        return Some(Event::KeyPress(key));
                    }
                }
            },
            nc::WchResult::KeyCode(nc::KEY_RESIZE) => return Some(Event::Resize),
            nc::WchResult::KeyCode(_) => {}
        }
    }
}

pub fn command(key: char) -> Option<Command> {
    let command = match key.to_ascii_lowercase() {
        'r' => Command::Reset,
        ' ' => Command::Start,
        'a' => Command::SetDirection(Direction::Ascending),
        'd' => Command::SetDirection(Direction::Descending),
        'b' => Command::SelectAlgorithm(AlgorithmKind::Bubble),
        'i' => Command::SelectAlgorithm(AlgorithmKind::Insertion),
        'm' => Command::SelectAlgorithm(AlgorithmKind::Merge),
        'q' => Command::SelectAlgorithm(AlgorithmKind::Quick),
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        key,
        expected,
        case('r', Some(Command::Reset)),
        case('R', Some(Command::Reset)),
        case(' ', Some(Command::Start)),
        case('a', Some(Command::SetDirection(Direction::Ascending))),
        case('D', Some(Command::SetDirection(Direction::Descending))),
        case('b', Some(Command::SelectAlgorithm(AlgorithmKind::Bubble))),
        case('i', Some(Command::SelectAlgorithm(AlgorithmKind::Insertion))),
        case('m', Some(Command::SelectAlgorithm(AlgorithmKind::Merge))),
        case('q', Some(Command::SelectAlgorithm(AlgorithmKind::Quick))),
        case('x', None),
        case('7', None),
        case('š', None)
    )]
    fn key_bindings(key: char, expected: Option<Command>) {
        assert_eq!(command(key), expected);
    }
}
