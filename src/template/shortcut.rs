//! Keyboard shortcuts attached to user snippets
//!
//! Shortcuts are written as modifier tokens and a key joined by `-`,
//! e.g. `Shift-Ctrl-K`. `Ctrl` is the platform command key (Cmd on macOS);
//! `XCtrl` always means the physical Control key.

use std::fmt;

/// Modifier keys as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Get the platform-specific "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push(if cfg!(target_os = "macos") {
                "Option"
            } else {
                "Alt"
            });
        }
        if self.meta() {
            parts.push(if cfg!(target_os = "macos") {
                "Cmd"
            } else {
                "Win"
            });
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A single keystroke: a character key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    /// Normalized to uppercase
    pub key: char,
    pub mods: Modifiers,
}

impl Keystroke {
    pub fn new(key: char, mods: Modifiers) -> Self {
        Self {
            key: key.to_ascii_uppercase(),
            mods,
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Parse a snippet shortcut such as `Shift-Ctrl-K`.
///
/// An empty string means "no shortcut" and yields `Ok(None)`.
pub fn parse_shortcut(shortcut: &str) -> Result<Option<Keystroke>, ShortcutError> {
    let trimmed = shortcut.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || ShortcutError::InvalidKey(shortcut.to_string());

    // The key is the last token; a trailing "--" binds the '-' key itself
    let (prefix, key) = match trimmed.strip_suffix("--") {
        Some(prefix) => (prefix, "-"),
        None if trimmed == "-" => ("", "-"),
        None => trimmed.rsplit_once('-').unwrap_or(("", trimmed)),
    };
    let mut chars = key.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid()),
    };

    let mut mods = Modifiers::NONE;
    for part in prefix.split('-').filter(|p| !p.is_empty()) {
        match part {
            "Shift" => mods = mods | Modifiers::SHIFT,
            "XCtrl" => mods = mods | Modifiers::CTRL,
            "Ctrl" => mods = mods | Modifiers::cmd(),
            "Alt" => mods = mods | Modifiers::ALT,
            _ => return Err(invalid()),
        }
    }

    Ok(Some(Keystroke::new(key, mods)))
}

/// Errors that can occur when parsing a shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    InvalidKey(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::InvalidKey(k) => write!(f, "Invalid shortcut: {}", k),
        }
    }
}

impl std::error::Error for ShortcutError {}
