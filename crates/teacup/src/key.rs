//! Keyboard input messages.
//!
//! A small vocabulary of key events for interactive widgets. Hosts translate
//! whatever their input backend produces into [`KeyMsg`] values; widgets
//! match on the display form (see [`KeyMsg`]'s `Display` impl) via their key
//! bindings.

use std::fmt;

/// Keyboard key event message.
///
/// Delivered to a widget's update function when the host observes a key
/// press.
///
/// # Example
///
/// ```rust
/// use teacup::{KeyMsg, KeyType};
///
/// let plus = KeyMsg::from_char('+');
/// assert_eq!(plus.to_string(), "+");
///
/// let enter = KeyMsg::from_type(KeyType::Enter);
/// assert_eq!(enter.to_string(), "enter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For KeyType::Runes, the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
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

/// Key type enumeration.
///
/// Covers printable input plus the special keys the widgets in this
/// workspace bind. Hosts with richer backends collapse everything else to
/// the nearest equivalent or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Printable character input; see [`KeyMsg::runes`].
    Runes,
    /// The Enter/Return key.
    Enter,
    /// The Tab key.
    Tab,
    /// The space bar.
    Space,
    /// The Backspace key.
    Backspace,
    /// The Delete key.
    Delete,
    /// The Escape key.
    Esc,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// The Home key.
    Home,
    /// The End key.
    End,
    /// Interrupt (Ctrl+C).
    CtrlC,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Runes => "runes",
            KeyType::Enter => "enter",
            KeyType::Tab => "tab",
            KeyType::Space => "space",
            KeyType::Backspace => "backspace",
            KeyType::Delete => "delete",
            KeyType::Esc => "esc",
            KeyType::Up => "up",
            KeyType::Down => "down",
            KeyType::Left => "left",
            KeyType::Right => "right",
            KeyType::Home => "home",
            KeyType::End => "end",
            KeyType::CtrlC => "ctrl+c",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_msg_from_char() {
        let msg = KeyMsg::from_char('k');
        assert_eq!(msg.key_type, KeyType::Runes);
        assert_eq!(msg.runes, vec!['k']);
        assert_eq!(msg.to_string(), "k");
    }

    #[test]
    fn test_key_msg_special_display() {
        assert_eq!(KeyMsg::from_type(KeyType::Left).to_string(), "left");
        assert_eq!(KeyMsg::from_type(KeyType::Space).to_string(), "space");
        assert_eq!(KeyMsg::from_type(KeyType::CtrlC).to_string(), "ctrl+c");
    }

    #[test]
    fn test_key_msg_alt_prefix() {
        let msg = KeyMsg::from_char('x').with_alt();
        assert_eq!(msg.to_string(), "alt+x");
    }
}
