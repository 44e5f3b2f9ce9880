//! The Model trait.

use crate::command::Cmd;
use crate::message::Message;

/// The trait embeddable widgets implement.
///
/// A model owns its state exclusively; the host mutates it only by
/// delivering messages to [`Model::update`]. Each update runs to completion
/// on the host's thread before the next view is observed.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Message, Model};
///
/// struct Toggle { on: bool }
///
/// impl Model for Toggle {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if msg.is::<()>() {
///             self.on = !self.on;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         if self.on { "on".into() } else { "off".into() }
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    ///
    /// Called once by the host before the first render.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return an optional follow-up command.
    ///
    /// This is the only mutator of widget state.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// This should be a pure function with no side effects.
    fn view(&self) -> String;
}
