#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Curtsy
//!
//! Interactive components for teacup hosts.
//!
//! Curtsy provides:
//! - **greeting_counter** - a name-greeting display paired with a bounded
//!   click counter
//! - **key** - key binding definitions and matching
//!
//! ## Example
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
//!
//! widget.increment();
//! widget.increment();
//! widget.increment();
//! assert_eq!(widget.count(), 2);
//! ```

pub mod greeting_counter;
pub mod key;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::greeting_counter::{
        CountChangedMsg, GreetingCounter, GreetingToggledMsg, KeyMap, ResetMsg,
    };
    pub use crate::key::{Binding, Help as KeyHelp, matches};
}
