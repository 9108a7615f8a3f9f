use crate::ports::{ActionDispatcher, DispatchError};
use crate::selection::normalize_degrees;
use crate::macros::string_newtype;
use std::fmt;
use thiserror::Error;

/// Labels longer than this are cut when drawn.
pub const LABEL_MAX_CHARS: usize = 20;

string_newtype!(
    /// Display name of a sector.
    pub Label
);

impl Label {
    pub fn truncated(&self) -> &str {
        match self.0.char_indices().nth(LABEL_MAX_CHARS) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

string_newtype!(pub KeyName);

#[derive(Debug, Error)]
pub enum ActionParseError {
    #[error("command is empty")]
    EmptyCommand,
    #[error("cannot split command line: {0}")]
    Split(#[from] shell_words::ParseError),
    #[error("hotkey `{0}` contains an empty key name")]
    EmptyKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LaunchProgram { path: String, args: Vec<String> },
    SendHotkey { keys: Vec<KeyName> },
}

impl Action {
    /// Splits a command line into program and arguments, honouring shell quoting.
    pub fn program(command: &str) -> Result<Self, ActionParseError> {
        let mut argv = shell_words::split(command)?.into_iter();
        let path = argv.next().ok_or(ActionParseError::EmptyCommand)?;
        Ok(Self::LaunchProgram {
            path,
            args: argv.collect(),
        })
    }

    /// Parses a `+`-joined key combination such as `ctrl+shift+t`.
    pub fn hotkey(combo: &str) -> Result<Self, ActionParseError> {
        if combo.trim().is_empty() {
            return Err(ActionParseError::EmptyCommand);
        }
        let keys = combo
            .split('+')
            .map(str::trim)
            .map(|key| {
                (!key.is_empty())
                    .then(|| KeyName::new(key))
                    .ok_or_else(|| ActionParseError::EmptyKey(combo.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::SendHotkey { keys })
    }

    pub fn dispatch(&self, dispatcher: &mut impl ActionDispatcher) -> Result<(), DispatchError> {
        match self {
            Self::LaunchProgram { path, args } => dispatcher.launch_program(path, args),
            Self::SendHotkey { keys } => dispatcher.send_hotkey(keys),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LaunchProgram { path, args } => {
                let argv: Vec<&str> = std::iter::once(path.as_str())
                    .chain(args.iter().map(String::as_str))
                    .collect();
                write!(f, "program `{}`", shell_words::join(argv))
            }
            Self::SendHotkey { keys } => {
                let keys: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
                write!(f, "hotkey `{}`", keys.join("+"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub label: Label,
    /// Degrees in `[0, 360)`, counter-clockwise from the positive x axis.
    pub angle: f64,
    pub action: Action,
}

impl Sector {
    pub fn new(label: Label, angle: f64, action: Action) -> Self {
        Self {
            label,
            angle: normalize_degrees(angle),
            action,
        }
    }
}
