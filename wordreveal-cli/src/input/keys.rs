//! Key bindings by name
//!
//! Bindings are stored as browser-style key names (`ArrowRight`, `Enter`,
//! `Space`, or a single character) and matched against terminal key events.

use crate::error::CliError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key name paired with the terminal key it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    name: String,
    code: KeyCode,
}

impl KeyBinding {
    /// Parse a key name
    pub fn parse(name: &str) -> Result<Self, CliError> {
        let code = code_for(name).ok_or_else(|| CliError::InvalidKey(name.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            code,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// Whether a key press triggers this binding
    ///
    /// Releases and presses with Ctrl or Alt held never match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.kind == KeyEventKind::Release
            || event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        event.code == self.code
    }
}

fn code_for(name: &str) -> Option<KeyCode> {
    let code = match name {
        "ArrowRight" => KeyCode::Right,
        "ArrowLeft" => KeyCode::Left,
        "ArrowUp" => KeyCode::Up,
        "ArrowDown" => KeyCode::Down,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Escape" => KeyCode::Esc,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Space" | " " => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_control() => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Browser-style name of a terminal key, if it has one
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Right => "ArrowRight",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Esc => "Escape",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Char(' ') => "Space",
        KeyCode::Char(c) => return Some(c.to_string()),
        _ => return None,
    };
    Some(name.to_string())
}
