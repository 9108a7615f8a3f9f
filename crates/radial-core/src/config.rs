use crate::dispatch;
use crate::geometry::{DEFAULT_MENU_SIZE, MenuLayout};
use crate::ports::DispatchError;
use crate::sector::{Action, ActionParseError, Label, Sector};
use crate::selection;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TriggerButton {
    #[strum(to_string = "left")]
    Left,
    #[strum(to_string = "right")]
    Right,
    #[strum(to_string = "middle")]
    Middle,
    #[strum(to_string = "xbutton1", serialize = "x1")]
    XButton1,
    #[strum(to_string = "xbutton2", serialize = "x2")]
    XButton2,
}

impl TriggerButton {
    /// Maps X11/GDK pointer button numbers; 8 and 9 are the side buttons.
    pub fn from_button_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            8 => Some(Self::XButton1),
            9 => Some(Self::XButton2),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Program,
    Hotkey,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortcutConfig {
    pub name: String,
    pub angle: f64,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub command: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MouseButtonConfig {
    pub button: TriggerButton,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub shortcuts: Vec<ShortcutConfig>,
    pub mouse_button: MouseButtonConfig,
    #[serde(default = "default_menu_size")]
    pub menu_size: f64,
}

fn default_menu_size() -> f64 {
    DEFAULT_MENU_SIZE
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("No config file at {} (run `radialctl init` to create one)", .0.display())]
    Missing(PathBuf),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Shortcut '{name}': {source}")]
    Shortcut {
        name: String,
        #[source]
        source: ActionParseError,
    },
    #[error("Shortcut '{name}': {source}")]
    Hotkey {
        name: String,
        #[source]
        source: DispatchError,
    },
    #[error("Shortcut '{0}' has an angle that is not a finite number")]
    Angle(String),
    #[error("No shortcuts configured")]
    NoShortcuts,
    #[error("menu_size must be a positive number of pixels, got {0}")]
    MenuSize(f64),
}

/// Everything the controller needs for one session, validated and immutable.
#[derive(Debug, Clone)]
pub struct Menu {
    pub sectors: Vec<Sector>,
    pub trigger: TriggerButton,
    pub layout: MenuLayout,
}

impl Menu {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        if config.shortcuts.is_empty() {
            return Err(ConfigError::NoShortcuts);
        }
        if !config.menu_size.is_finite() || config.menu_size <= 0.0 {
            return Err(ConfigError::MenuSize(config.menu_size));
        }

        let sectors = config
            .shortcuts
            .iter()
            .map(sector_from_config)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sectors,
            trigger: config.mouse_button.button,
            layout: MenuLayout::new(config.menu_size),
        })
    }

    /// Human-readable descriptions of sectors shadowed by an earlier one.
    pub fn overlap_warnings(&self) -> Vec<String> {
        selection::overlapping_sectors(&self.sectors)
            .into_iter()
            .map(|(first, second)| {
                format!(
                    "'{}' ({}°) overlaps '{}' ({}°); '{}' wins where both apply",
                    self.sectors[second].label,
                    self.sectors[second].angle,
                    self.sectors[first].label,
                    self.sectors[first].angle,
                    self.sectors[first].label,
                )
            })
            .collect()
    }
}

fn sector_from_config(cfg: &ShortcutConfig) -> Result<Sector, ConfigError> {
    if !cfg.angle.is_finite() {
        return Err(ConfigError::Angle(cfg.name.clone()));
    }
    let action = match cfg.kind {
        ActionKind::Program => Action::program(&cfg.command),
        ActionKind::Hotkey => Action::hotkey(&cfg.command),
    }
    .map_err(|source| ConfigError::Shortcut {
        name: cfg.name.clone(),
        source,
    })?;
    // reject combos the compositor cannot send before the menu is ever shown
    if let Action::SendHotkey { keys } = &action {
        dispatch::shortcut_args(keys).map_err(|source| ConfigError::Hotkey {
            name: cfg.name.clone(),
            source,
        })?;
    }
    Ok(Sector::new(Label::new(cfg.name.as_str()), cfg.angle, action))
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "radial", "radial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads the config file (TOML or JSON, by extension) with `RADIAL_`
/// environment overrides such as `RADIAL_MOUSE_BUTTON__BUTTON=middle`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_path_buf()));
    }

    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()))
        .add_source(
            config::Environment::with_prefix("RADIAL")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(text: &str, format: config::FileFormat) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(text, format))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_menu(path: &Path) -> Result<Menu, ConfigError> {
    let menu = Menu::from_config(&load_config(path)?)?;
    for warning in menu.overlap_warnings() {
        log::warn!("{}", warning);
    }
    Ok(menu)
}

pub fn write_default_config(path: &Path) -> std::io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if path.exists() {
        return Ok(false);
    }
    fs_err::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_button_deserialization() {
        let cases = vec![
            ("\"left\"", TriggerButton::Left),
            ("\"Right\"", TriggerButton::Right),
            ("\"MIDDLE\"", TriggerButton::Middle),
            ("\"xbutton1\"", TriggerButton::XButton1),
            ("\"x1\"", TriggerButton::XButton1),
            ("\"XButton2\"", TriggerButton::XButton2),
            ("\"x2\"", TriggerButton::XButton2),
        ];

        for (json, expected) in cases {
            let deserialized: TriggerButton = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<TriggerButton>("\"wheel\"").is_err());
    }

    #[test]
    fn test_button_display_uses_canonical_names() {
        assert_eq!(TriggerButton::XButton2.to_string(), "xbutton2");
        assert_eq!(TriggerButton::Middle.to_string(), "middle");
    }

    #[test]
    fn test_button_numbers() {
        assert_eq!(TriggerButton::from_button_number(3), Some(TriggerButton::Right));
        assert_eq!(TriggerButton::from_button_number(9), Some(TriggerButton::XButton2));
        assert_eq!(TriggerButton::from_button_number(4), None);
    }

    #[test]
    fn test_parse_toml_config() {
        let text = r#"
            [mouse_button]
            button = "xbutton2"

            [[shortcuts]]
            name = "Terminal"
            angle = 90
            type = "program"
            command = "kitty --single-instance"

            [[shortcuts]]
            name = "Copy"
            angle = 0.0
            type = "Hotkey"
            command = "ctrl+c"
        "#;
        let config = parse_config(text, FileFormat::Toml).unwrap();
        assert_eq!(config.menu_size, DEFAULT_MENU_SIZE);

        let menu = Menu::from_config(&config).unwrap();
        assert_eq!(menu.trigger, TriggerButton::XButton2);
        assert_eq!(menu.sectors.len(), 2);
        assert_eq!(menu.sectors[0].angle, 90.0);
        assert_eq!(menu.sectors[0].label.as_str(), "Terminal");
        assert_eq!(
            menu.sectors[0].action,
            Action::LaunchProgram {
                path: "kitty".to_string(),
                args: vec!["--single-instance".to_string()],
            }
        );
        assert!(matches!(menu.sectors[1].action, Action::SendHotkey { .. }));
        assert!(menu.overlap_warnings().is_empty());
    }

    #[test]
    fn test_parse_json_config() {
        let text = r#"{
            "shortcuts": [
                {"name": "Browser", "angle": 270, "type": "program", "command": "firefox"},
                {"name": "Close", "angle": 180, "type": "hotkey", "command": "alt+f4"}
            ],
            "mouse_button": {"button": "x1"},
            "menu_size": 480
        }"#;
        let config = parse_config(text, FileFormat::Json).unwrap();
        let menu = Menu::from_config(&config).unwrap();
        assert_eq!(menu.trigger, TriggerButton::XButton1);
        assert_eq!(menu.layout.size, 480.0);
        assert_eq!(menu.layout.radius(), 160.0);
        assert_eq!(menu.layout.dead_zone_radius(), 60.0);
    }

    #[test]
    fn test_missing_trigger_is_an_error() {
        let text = r#"
            [[shortcuts]]
            name = "Terminal"
            angle = 90
            type = "program"
            command = "kitty"
        "#;
        assert!(matches!(
            parse_config(text, FileFormat::Toml),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_action_type_is_an_error() {
        let text = r#"
            [mouse_button]
            button = "middle"

            [[shortcuts]]
            name = "Mystery"
            angle = 90
            type = "macro"
            command = "whatever"
        "#;
        assert!(parse_config(text, FileFormat::Toml).is_err());
    }

    #[test]
    fn test_invalid_shortcuts_are_rejected() {
        let config = |command: &str, kind: ActionKind| Config {
            shortcuts: vec![ShortcutConfig {
                name: "Broken".to_string(),
                angle: 0.0,
                kind,
                command: command.to_string(),
            }],
            mouse_button: MouseButtonConfig {
                button: TriggerButton::Right,
            },
            menu_size: DEFAULT_MENU_SIZE,
        };

        assert!(matches!(
            Menu::from_config(&config("", ActionKind::Program)),
            Err(ConfigError::Shortcut { .. })
        ));
        assert!(matches!(
            Menu::from_config(&config("ctrl++c", ActionKind::Hotkey)),
            Err(ConfigError::Shortcut { .. })
        ));

        assert!(matches!(
            Menu::from_config(&config("ctrl+k+c", ActionKind::Hotkey)),
            Err(ConfigError::Hotkey {
                source: DispatchError::TooManyKeys(_),
                ..
            })
        ));
        assert!(matches!(
            Menu::from_config(&config("ctrl+shift", ActionKind::Hotkey)),
            Err(ConfigError::Hotkey {
                source: DispatchError::MissingKey(_),
                ..
            })
        ));

        let mut nan = config("kitty", ActionKind::Program);
        nan.shortcuts[0].angle = f64::NAN;
        assert!(matches!(Menu::from_config(&nan), Err(ConfigError::Angle(_))));

        let mut empty = config("kitty", ActionKind::Program);
        empty.shortcuts.clear();
        assert!(matches!(
            Menu::from_config(&empty),
            Err(ConfigError::NoShortcuts)
        ));

        let mut tiny = config("kitty", ActionKind::Program);
        tiny.menu_size = 0.0;
        assert!(matches!(
            Menu::from_config(&tiny),
            Err(ConfigError::MenuSize(_))
        ));
    }

    #[test]
    fn test_overlap_warnings_name_both_sectors() {
        let text = r#"
            [mouse_button]
            button = "right"

            [[shortcuts]]
            name = "Files"
            angle = 90
            type = "program"
            command = "nautilus"

            [[shortcuts]]
            name = "Music"
            angle = 100
            type = "program"
            command = "spotify"
        "#;
        let menu = Menu::from_config(&parse_config(text, FileFormat::Toml).unwrap()).unwrap();
        let warnings = menu.overlap_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'Music'"));
        assert!(warnings[0].contains("'Files' wins"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = parse_config(DEFAULT_CONFIG, FileFormat::Toml).unwrap();
        let menu = Menu::from_config(&config).unwrap();
        assert!(!menu.sectors.is_empty());
        assert!(menu.overlap_warnings().is_empty());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let path = Path::new("/nonexistent/radial/config.toml");
        assert!(matches!(load_config(path), Err(ConfigError::Missing(_))));
    }
}
