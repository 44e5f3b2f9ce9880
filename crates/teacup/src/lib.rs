#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Teacup
//!
//! A minimal Elm-style core for embeddable widgets.
//!
//! Teacup deliberately contains no terminal I/O, no renderer, and no event
//! loop. It is the contract between a widget and whatever host drives it:
//!
//! - **message** - type-erased payloads flowing between host and widget
//! - **command** - lazy side effects that produce messages
//! - **model** - the init/update/view trait widgets implement
//! - **key** - a small keyboard event vocabulary for interactive widgets
//!
//! A host owns the loop: it delivers messages to [`Model::update`], executes
//! any returned [`Cmd`], decides what to do with the resulting message
//! (consume it, or feed it back into the widget), and re-invokes
//! [`Model::view`] after every update.
//!
//! ## Example
//!
//! ```rust
//! use teacup::{Cmd, Message, Model};
//!
//! struct Counter { count: i32 }
//!
//! impl Model for Counter {
//!     fn init(&self) -> Option<Cmd> { None }
//!
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if let Some(delta) = msg.downcast_ref::<i32>() {
//!             self.count += delta;
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Count: {}", self.count)
//!     }
//! }
//!
//! let mut counter = Counter { count: 0 };
//! counter.update(Message::new(3i32));
//! assert_eq!(counter.view(), "Count: 3");
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod model;

pub use command::Cmd;
pub use key::{KeyMsg, KeyType};
pub use message::Message;
pub use model::Model;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::command::Cmd;
    pub use crate::key::{KeyMsg, KeyType};
    pub use crate::message::Message;
    pub use crate::model::Model;
}
