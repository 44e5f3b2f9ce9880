//! Commands for side effects.
//!
//! Commands represent deferred work that produces a message. A widget's
//! update function stays pure by returning commands instead of performing
//! effects; the host executes them and routes the resulting messages.
//!
//! For the widgets in this workspace, commands are how outbound
//! notifications travel: a transition returns a command whose message the
//! host consumes (and may also feed back into the widget).

use crate::message::Message;

/// A command that produces a message when executed.
///
/// Commands are lazy - they don't execute until the host runs them. This
/// keeps update functions pure: they describe effects without performing
/// them.
///
/// # Example
///
/// ```rust
/// use teacup::{Cmd, Message};
///
/// struct Ping;
///
/// let cmd = Cmd::new(|| Message::new(Ping));
/// let msg = cmd.execute().unwrap();
/// assert!(msg.is::<Ping>());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}
