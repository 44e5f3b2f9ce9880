//! Greeting counter component.
//!
//! A name-greeting display paired with a bounded click counter. The greeting
//! line can be collapsed ("Hello, Alice Smith!") or expanded ("Hello, World!
//! I'm Alice Smith. Nice to meet you!"), and the counter moves inside a
//! configured `[min, max]` range.
//!
//! Every transition notifies the host through a returned command:
//! [`CountChangedMsg`] after increment/decrement/reset (emitted on every
//! invocation, even when clamping leaves the value unchanged) and
//! [`GreetingToggledMsg`] after a toggle. Hosts route by instance id.
//!
//! # Example
//!
//! ```rust
//! use curtsy::greeting_counter::GreetingCounter;
//!
//! let mut widget = GreetingCounter::new()
//!     .first("Alice")
//!     .last("Smith")
//!     .max(2);
//!
//! assert_eq!(widget.greeting_text(), "Hello, Alice Smith!");
//! assert_eq!(widget.counter_readout(), "0 clicks");
//!
//! widget.increment();
//! assert_eq!(widget.counter_readout(), "1 click");
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use teacup::{Cmd, KeyMsg, Message, Model};
use wording::{clamp, format_name, pluralize};

use crate::key::{matches, Binding};

/// Global ID counter for greeting counter instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Message sent after every increment, decrement, and reset.
///
/// Emission is unconditional on invocation: incrementing at the upper bound
/// still emits, carrying the unchanged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountChangedMsg {
    /// The widget ID.
    pub id: u64,
    /// The counter value after the transition.
    pub count: i32,
}

/// Message sent after every greeting toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingToggledMsg {
    /// The widget ID.
    pub id: u64,
    /// The expanded flag after the transition.
    pub expanded: bool,
}

/// Message to reset the counter to zero.
///
/// This is the host-callable reset: dispatch it through
/// [`GreetingCounter::update`] (see [`GreetingCounter::reset_cmd`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetMsg {
    /// The widget ID.
    pub id: u64,
}

/// Key bindings for the greeting counter.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Binding to increment the counter.
    pub increment: Binding,
    /// Binding to decrement the counter.
    pub decrement: Binding,
    /// Binding to toggle the greeting.
    pub toggle: Binding,
    /// Binding to reset the counter.
    pub reset: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: Binding::new()
                .keys(&["+", "=", "right", "k"])
                .help("+/→", "count up"),
            decrement: Binding::new()
                .keys(&["-", "left", "j"])
                .help("-/←", "count down"),
            toggle: Binding::new()
                .keys(&["space", "g"])
                .help("space", "toggle greeting"),
            reset: Binding::new().keys(&["r", "0"]).help("r", "reset count"),
        }
    }
}

/// Greeting counter model.
///
/// Name parts and bounds are host-supplied configuration; `expanded` and
/// `count` are the widget's own state, mutated only through its transition
/// methods (or messages delivered to [`GreetingCounter::update`]).
///
/// `min <= max` is assumed, not validated. Misconfigured bounds render as
/// permanently-disabled controls rather than raising an error.
#[derive(Debug, Clone)]
pub struct GreetingCounter {
    /// First name part.
    first: Option<String>,
    /// Middle name part.
    middle: Option<String>,
    /// Last name part.
    last: Option<String>,
    /// Lower counter bound.
    min: i32,
    /// Upper counter bound.
    max: i32,
    /// Whether the greeting is expanded.
    expanded: bool,
    /// Current counter value.
    count: i32,
    /// Unique ID.
    id: u64,
    /// Key bindings.
    pub key_map: KeyMap,
}

impl Default for GreetingCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingCounter {
    /// Creates a new greeting counter with no name, bounds `[0, 10]`, a
    /// collapsed greeting, and a count of zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first: None,
            middle: None,
            last: None,
            min: 0,
            max: 10,
            expanded: false,
            count: 0,
            id: next_id(),
            key_map: KeyMap::default(),
        }
    }

    /// Sets the first name part.
    #[must_use]
    pub fn first(mut self, first: impl Into<String>) -> Self {
        self.first = Some(first.into());
        self
    }

    /// Sets the middle name part.
    #[must_use]
    pub fn middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = Some(middle.into());
        self
    }

    /// Sets the last name part.
    #[must_use]
    pub fn last(mut self, last: impl Into<String>) -> Self {
        self.last = Some(last.into());
        self
    }

    /// Sets the lower counter bound.
    #[must_use]
    pub fn min(mut self, min: i32) -> Self {
        self.min = min;
        self
    }

    /// Sets the upper counter bound.
    #[must_use]
    pub fn max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    /// Sets the initial counter value, clamped into the configured bounds.
    ///
    /// Set bounds before the initial count; clamping uses the bounds in
    /// effect at the time of the call.
    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = clamp(count, self.min, self.max);
        self
    }

    /// Returns the widget's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the current counter value.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Returns whether the greeting is expanded.
    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the lower counter bound.
    #[must_use]
    pub fn get_min(&self) -> i32 {
        self.min
    }

    /// Returns the upper counter bound.
    #[must_use]
    pub fn get_max(&self) -> i32 {
        self.max
    }

    /// Replaces the name parts.
    pub fn set_names(
        &mut self,
        first: Option<&str>,
        middle: Option<&str>,
        last: Option<&str>,
    ) {
        self.first = first.map(String::from);
        self.middle = middle.map(String::from);
        self.last = last.map(String::from);
    }

    /// Replaces the counter bounds.
    ///
    /// The current count is left untouched; it re-enters the new range on
    /// the next increment or decrement.
    pub fn set_bounds(&mut self, min: i32, max: i32) {
        self.min = min;
        self.max = max;
    }

    /// Flips the expanded flag and notifies the host.
    pub fn toggle_greeting(&mut self) -> Option<Cmd> {
        self.expanded = !self.expanded;
        let id = self.id;
        let expanded = self.expanded;
        Some(Cmd::new(move || {
            Message::new(GreetingToggledMsg { id, expanded })
        }))
    }

    /// Increments the counter, clamped into bounds, and notifies the host.
    ///
    /// Notification fires even when the counter was already at the upper
    /// bound and the value did not change.
    pub fn increment(&mut self) -> Option<Cmd> {
        self.count = clamp(self.count + 1, self.min, self.max);
        self.count_changed_cmd()
    }

    /// Decrements the counter, clamped into bounds, and notifies the host.
    pub fn decrement(&mut self) -> Option<Cmd> {
        self.count = clamp(self.count - 1, self.min, self.max);
        self.count_changed_cmd()
    }

    /// Resets the counter to zero and notifies the host.
    ///
    /// The reset value is written directly, without re-clamping: with a
    /// positive `min` the counter lands below the configured range until the
    /// next increment or decrement.
    pub fn reset(&mut self) -> Option<Cmd> {
        self.count = 0;
        self.count_changed_cmd()
    }

    /// Creates a command the host can dispatch to reset this widget.
    ///
    /// The produced [`ResetMsg`] is routed by instance id through
    /// [`GreetingCounter::update`].
    #[must_use]
    pub fn reset_cmd(&self) -> Option<Cmd> {
        let id = self.id;
        Some(Cmd::new(move || Message::new(ResetMsg { id })))
    }

    fn count_changed_cmd(&self) -> Option<Cmd> {
        let id = self.id;
        let count = self.count;
        Some(Cmd::new(move || {
            Message::new(CountChangedMsg { id, count })
        }))
    }

    /// Returns the joined display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format_name(
            self.first.as_deref(),
            self.middle.as_deref(),
            self.last.as_deref(),
        )
    }

    /// Returns whether a non-blank name is configured.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.display_name().trim().is_empty()
    }

    /// Returns the greeting line for the current expanded state.
    #[must_use]
    pub fn greeting_text(&self) -> String {
        let name = self.display_name();
        if self.expanded {
            let name = if self.has_name() {
                name.as_str()
            } else {
                "Anonymous"
            };
            format!("Hello, World! I'm {name}. Nice to meet you!")
        } else if self.has_name() {
            format!("Hello, {name}!")
        } else {
            "Hello!".to_string()
        }
    }

    /// Returns the toggle control label for the current expanded state.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { "Collapse" } else { "Expand" }
    }

    /// Returns the counter readout, e.g. `"3 clicks"`.
    #[must_use]
    pub fn counter_readout(&self) -> String {
        format!(
            "{} {}",
            self.count,
            pluralize(self.count, "click", "clicks")
        )
    }

    /// Returns whether the decrement control is disabled.
    #[must_use]
    pub fn decrement_disabled(&self) -> bool {
        self.count <= self.min
    }

    /// Returns whether the increment control is disabled.
    #[must_use]
    pub fn increment_disabled(&self) -> bool {
        self.count >= self.max
    }

    /// Returns the configuration reflected to the host's attribute surface.
    #[must_use]
    pub fn host_attributes(&self) -> Vec<(&'static str, String)> {
        vec![("min", self.min.to_string()), ("max", self.max.to_string())]
    }

    /// Updates the widget from a host-delivered message.
    ///
    /// Handles [`ResetMsg`] (routed by id) and key input through the key
    /// map. Key-driven increment/decrement are not gated on the disabled
    /// predicates: invocation always clamps and always notifies.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(reset) = msg.downcast_ref::<ResetMsg>() {
            if reset.id != self.id {
                return None;
            }
            return self.reset();
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let key_str = key.to_string();
            if matches(&key_str, &[&self.key_map.increment]) {
                return self.increment();
            }
            if matches(&key_str, &[&self.key_map.decrement]) {
                return self.decrement();
            }
            if matches(&key_str, &[&self.key_map.toggle]) {
                return self.toggle_greeting();
            }
            if matches(&key_str, &[&self.key_map.reset]) {
                return self.reset();
            }
        }

        None
    }

    /// Renders the widget.
    ///
    /// The surface is a greeting region (greeting line plus toggle control)
    /// over a counter region (decrement control, readout, increment
    /// control). Disabled controls render parenthesized instead of
    /// bracketed.
    #[must_use]
    pub fn view(&self) -> String {
        let decrement = if self.decrement_disabled() {
            "(-)"
        } else {
            "[-]"
        };
        let increment = if self.increment_disabled() {
            "(+)"
        } else {
            "[+]"
        };
        format!(
            "{}\n[{}]\n\n{} {} {}",
            self.greeting_text(),
            self.toggle_label(),
            decrement,
            self.counter_readout(),
            increment
        )
    }
}

/// Implement the Model trait for standalone teacup usage.
impl Model for GreetingCounter {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        GreetingCounter::update(self, msg)
    }

    fn view(&self) -> String {
        GreetingCounter::view(self)
    }
}
