use crate::ports::{ActionDispatcher, DispatchError};
use crate::sector::KeyName;
use hyprland::dispatch::{Dispatch, DispatchType};
use std::process::{Command, Stdio};

/// Spawns programs directly and injects hotkeys through Hyprland.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDispatcher;

impl ActionDispatcher for SystemDispatcher {
    fn launch_program(&mut self, path: &str, args: &[String]) -> Result<(), DispatchError> {
        Command::new(path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| DispatchError::Launch {
                path: path.to_string(),
                source,
            })?;
        Ok(())
    }

    fn send_hotkey(&mut self, keys: &[KeyName]) -> Result<(), DispatchError> {
        let args = shortcut_args(keys)?;
        log::debug!("sendshortcut {}", args);
        Dispatch::call(DispatchType::Custom("sendshortcut", &args))?;
        Ok(())
    }
}

/// Builds the `MODS, key` argument of Hyprland's `sendshortcut` dispatcher,
/// which presses the modifiers and the key together and then releases them.
/// Config loading runs this too, so a combo that fails here never reaches
/// the menu.
pub fn shortcut_args(keys: &[KeyName]) -> Result<String, DispatchError> {
    let combo = || {
        keys.iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("+")
    };

    let mut mods: Vec<&'static str> = Vec::new();
    let mut key = None;
    for name in keys {
        match modifier(name) {
            Some(m) => {
                if !mods.contains(&m) {
                    mods.push(m);
                }
            }
            None if key.is_none() => key = Some(key_sym(name)),
            None => return Err(DispatchError::TooManyKeys(combo())),
        }
    }

    let key = key.ok_or_else(|| DispatchError::MissingKey(combo()))?;
    Ok(format!("{}, {}", mods.join(" "), key))
}

fn modifier(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "ctrl" | "control" | "lctrl" | "rctrl" => Some("CTRL"),
        "shift" | "lshift" | "rshift" => Some("SHIFT"),
        "alt" | "lalt" | "option" => Some("ALT"),
        "altgr" | "ralt" => Some("MOD5"),
        "win" | "windows" | "super" | "meta" | "cmd" | "command" => Some("SUPER"),
        _ => None,
    }
}

/// Translates common key names into xkb keysym names.
fn key_sym(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let sym = match lower.as_str() {
        "enter" | "return" => "Return",
        "esc" | "escape" => "Escape",
        "tab" => "Tab",
        "space" => "space",
        "backspace" => "BackSpace",
        "delete" | "del" => "Delete",
        "insert" | "ins" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" | "page up" | "pgup" => "Prior",
        "pagedown" | "page down" | "pgdn" => "Next",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "print" | "printscreen" | "print screen" => "Print",
        _ if is_function_key(&lower) => return lower.to_ascii_uppercase(),
        _ if lower.chars().count() == 1 => return lower,
        _ => return name.to_string(),
    };
    sym.to_string()
}

fn is_function_key(name: &str) -> bool {
    name.strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=24).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(combo: &str) -> Vec<KeyName> {
        combo.split('+').map(KeyName::new).collect()
    }

    #[test]
    fn test_modifiers_and_key() {
        assert_eq!(shortcut_args(&keys("ctrl+c")).unwrap(), "CTRL, c");
        assert_eq!(
            shortcut_args(&keys("Ctrl+Shift+T")).unwrap(),
            "CTRL SHIFT, t"
        );
        assert_eq!(shortcut_args(&keys("win+d")).unwrap(), "SUPER, d");
        assert_eq!(shortcut_args(&keys("alt+f4")).unwrap(), "ALT, F4");
    }

    #[test]
    fn test_key_without_modifiers() {
        assert_eq!(shortcut_args(&keys("print screen")).unwrap(), ", Print");
        assert_eq!(shortcut_args(&keys("esc")).unwrap(), ", Escape");
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(shortcut_args(&keys("shift+enter")).unwrap(), "SHIFT, Return");
        assert_eq!(shortcut_args(&keys("ctrl+page down")).unwrap(), "CTRL, Next");
        assert_eq!(shortcut_args(&keys("super+XF86AudioMute")).unwrap(), "SUPER, XF86AudioMute");
        assert_eq!(shortcut_args(&keys("ctrl+f25")).unwrap(), "CTRL, f25");
    }

    #[test]
    fn test_repeated_modifier_is_collapsed() {
        assert_eq!(shortcut_args(&keys("ctrl+lctrl+x")).unwrap(), "CTRL, x");
    }

    #[test]
    fn test_invalid_combinations() {
        assert!(matches!(
            shortcut_args(&keys("ctrl+shift")),
            Err(DispatchError::MissingKey(combo)) if combo == "ctrl+shift"
        ));
        assert!(matches!(
            shortcut_args(&keys("a+b")),
            Err(DispatchError::TooManyKeys(_))
        ));
    }
}
