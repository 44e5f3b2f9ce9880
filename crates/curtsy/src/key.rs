//! Keybinding definitions and matching utilities.
//!
//! Types for defining keybindings and matching them against key events,
//! used to build user-configurable keymaps for the components in this crate.
//!
//! # Example
//!
//! ```rust
//! use curtsy::key::{Binding, matches};
//!
//! let increment = Binding::new()
//!     .keys(&["+", "k"])
//!     .help("+/k", "count up");
//!
//! assert!(matches("k", &[&increment]));
//! assert!(!matches("x", &[&increment]));
//! ```

use std::fmt;

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "+/k").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

impl Help {
    /// Creates new help information.
    #[must_use]
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// A keybinding with associated help text.
///
/// Bindings can be enabled/disabled and contain zero or more key sequences
/// that trigger the binding.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help::new(key, desc);
        self
    }

    /// Creates a disabled binding.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns whether this binding is enabled.
    ///
    /// A binding is enabled if it's not explicitly disabled and has at least
    /// one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Checks if the given key matches any of the given bindings.
///
/// The key is compared against all keys in each binding. Only enabled
/// bindings are considered.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key_str = key.to_string();
    for binding in bindings {
        if binding.enabled() {
            for k in &binding.keys {
                if *k == key_str {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_new() {
        let binding = Binding::new();
        assert!(binding.get_keys().is_empty());
        assert!(!binding.enabled());
    }

    #[test]
    fn test_binding_with_keys() {
        let binding = Binding::new().keys(&["k", "up"]);
        assert_eq!(binding.get_keys(), &["k", "up"]);
        assert!(binding.enabled());
    }

    #[test]
    fn test_binding_with_help() {
        let binding = Binding::new().keys(&["r"]).help("r", "reset the counter");
        assert_eq!(binding.get_help().key, "r");
        assert_eq!(binding.get_help().desc, "reset the counter");
    }

    #[test]
    fn test_binding_disabled() {
        let binding = Binding::new().keys(&["q"]).disabled();
        assert!(!binding.enabled());
    }

    #[test]
    fn test_binding_enable() {
        let mut binding = Binding::new().keys(&["q"]).disabled();
        binding.enable(true);
        assert!(binding.enabled());
    }

    #[test]
    fn test_matches() {
        let up = Binding::new().keys(&["+", "k"]);
        let down = Binding::new().keys(&["-", "j"]);

        assert!(matches("+", &[&up, &down]));
        assert!(matches("j", &[&up, &down]));
        assert!(!matches("x", &[&up, &down]));
    }

    #[test]
    fn test_matches_disabled() {
        let binding = Binding::new().keys(&["q"]).disabled();
        assert!(!matches("q", &[&binding]));
    }
}
