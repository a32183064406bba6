//! Key mapping from terminal events to game commands

use crate::game::Command;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the driver should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Restart,
    Quit,
}

/// Key bindings configuration - supports multiple keys per action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub move_down: Vec<KeyCode>,
    pub rotate: Vec<KeyCode>,
    pub rotate_clockwise: Vec<KeyCode>,
    pub restart: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into a KeyCode, `None` if it names no key
    fn parse_key(s: &str) -> Option<KeyCode> {
        let lower = s.to_lowercase();
        let code = match lower.as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        tracing::warn!(key = s, "unknown key name in settings");
                        return None;
                    }
                }
            }
        };
        Some(code)
    }

    /// Parse a list of key strings into KeyCodes
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter().filter_map(|s| Self::parse_key(s)).collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let keys = &settings.keys;
        Self {
            move_left: Self::parse_keys(&keys.move_left),
            move_right: Self::parse_keys(&keys.move_right),
            move_down: Self::parse_keys(&keys.move_down),
            rotate: Self::parse_keys(&keys.rotate),
            rotate_clockwise: Self::parse_keys(&keys.rotate_clockwise),
            restart: Self::parse_keys(&keys.restart),
            quit: Self::parse_keys(&keys.quit),
        }
    }

    /// Map a key press to an input; Ctrl+C always quits
    pub fn map(&self, key: KeyEvent) -> Option<Input> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Input::Quit);
        }

        let code = normalize_key(key.code);
        let input = if self.move_left.contains(&code) {
            Input::Command(Command::MoveLeft)
        } else if self.move_right.contains(&code) {
            Input::Command(Command::MoveRight)
        } else if self.move_down.contains(&code) {
            Input::Command(Command::MoveDown)
        } else if self.rotate.contains(&code) {
            Input::Command(Command::Rotate)
        } else if self.rotate_clockwise.contains(&code) {
            Input::Command(Command::RotateClockwise)
        } else if self.restart.contains(&code) {
            Input::Restart
        } else if self.quit.contains(&code) {
            Input::Quit
        } else {
            return None;
        };
        Some(input)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
