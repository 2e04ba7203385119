//! Key events and their translation from crossterm.

use std::fmt;

/// A single key press, delivered to the model as a message.
///
/// Sent to the model's update function for every key press the runtime
/// understands.
///
/// # Example
///
/// ```rust
/// use mainspring::{KeyMsg, KeyType};
///
/// fn describe(key: &KeyMsg) -> &'static str {
///     match key.key_type {
///         KeyType::Enter => "confirm",
///         KeyType::Esc => "back",
///         KeyType::Runes => "text",
///         _ => "other",
///     }
/// }
///
/// assert_eq!(describe(&KeyMsg::from_char('a')), "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// Which key was pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether the Alt modifier was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a key message from a key type.
    #[must_use]
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a key message from a character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// The single character of a rune key, if that is what this is.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        if self.key_type == KeyType::Runes && self.runes.len() == 1 {
            self.runes.first().copied()
        } else {
            None
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// The keys the runtime models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character input.
    Runes,
    /// Enter / Return.
    Enter,
    /// Escape.
    Esc,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Space bar.
    Space,
    /// Backspace.
    Backspace,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Ctrl+C.
    CtrlC,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::Enter => "enter",
            Self::Esc => "esc",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Space => "space",
            Self::Backspace => "backspace",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
            Self::CtrlC => "ctrl+c",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key event into a [`KeyMsg`].
///
/// Returns `None` for keys the runtime does not model (function keys,
/// media keys, and so on); the event loop drops those.
#[must_use]
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> Option<KeyMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char('c') if ctrl => (KeyType::CtrlC, Vec::new()),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => return None,
    };

    Some(KeyMsg {
        key_type,
        runes,
        alt,
    })
}
