//! Line protocol spoken on the daemon's Unix socket, one command per line:
//! `press <button>`, `release <button>`, `move <x> <y>` and `quit`.

use crate::config::TriggerButton;
use crate::geometry::Point;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/radial.sock";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IpcCommand {
    Press(TriggerButton),
    Release(TriggerButton),
    Move(Point),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IpcError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` is not a mouse button")]
    Button(String),
    #[error("`{0}` needs exactly two numeric coordinates")]
    Coordinates(String),
    #[error("unexpected arguments in `{0}`")]
    Trailing(String),
}

impl FromStr for IpcCommand {
    type Err = IpcError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(IpcError::Empty)?;

        let button = |arg: Option<&str>| {
            arg.and_then(|b| b.parse::<TriggerButton>().ok())
                .ok_or_else(|| IpcError::Button(arg.unwrap_or_default().to_string()))
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "press" => Self::Press(button(words.next())?),
            "release" => Self::Release(button(words.next())?),
            "move" => {
                let mut coord = || words.next().and_then(|w| w.parse::<f64>().ok());
                match (coord(), coord()) {
                    (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                        Self::Move(Point::new(x, y))
                    }
                    _ => return Err(IpcError::Coordinates(line.trim().to_string())),
                }
            }
            "quit" => Self::Quit,
            _ => return Err(IpcError::Unknown(verb.to_string())),
        };

        match words.next() {
            Some(_) => Err(IpcError::Trailing(line.trim().to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for IpcCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press(button) => write!(f, "press {}", button),
            Self::Release(button) => write!(f, "release {}", button),
            Self::Move(p) => write!(f, "move {} {}", p.x, p.y),
            Self::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "press xbutton2".parse::<IpcCommand>(),
            Ok(IpcCommand::Press(TriggerButton::XButton2))
        );
        assert_eq!(
            "  RELEASE x1 ".parse::<IpcCommand>(),
            Ok(IpcCommand::Release(TriggerButton::XButton1))
        );
        assert_eq!(
            "move 12.5 -40".parse::<IpcCommand>(),
            Ok(IpcCommand::Move(Point::new(12.5, -40.0)))
        );
        assert_eq!("quit".parse::<IpcCommand>(), Ok(IpcCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<IpcCommand>(), Err(IpcError::Empty));
        assert_eq!(
            "show".parse::<IpcCommand>(),
            Err(IpcError::Unknown("show".to_string()))
        );
        assert_eq!(
            "press wheel".parse::<IpcCommand>(),
            Err(IpcError::Button("wheel".to_string()))
        );
        assert_eq!(
            "press".parse::<IpcCommand>(),
            Err(IpcError::Button(String::new()))
        );
        assert!(matches!(
            "move 10".parse::<IpcCommand>(),
            Err(IpcError::Coordinates(_))
        ));
        assert!(matches!(
            "move 10 nan".parse::<IpcCommand>(),
            Err(IpcError::Coordinates(_))
        ));
        assert!(matches!(
            "quit now".parse::<IpcCommand>(),
            Err(IpcError::Trailing(_))
        ));
    }

    #[test]
    fn test_display_is_parseable() {
        let commands = [
            IpcCommand::Press(TriggerButton::Middle),
            IpcCommand::Release(TriggerButton::XButton1),
            IpcCommand::Move(Point::new(1920.0, 0.5)),
            IpcCommand::Quit,
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<IpcCommand>(), Ok(command));
        }
    }
}
