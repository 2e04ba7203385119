//! Dynamically typed messages that drive model updates.
//!
//! Every event that can change a model travels as a [`Message`]: key
//! presses, timer ticks, resize notifications, and signals between
//! components.

use std::any::Any;
use std::fmt;

/// A dynamically typed message envelope.
///
/// Messages wrap any `Send + 'static` value. Models recover the original
/// type with [`Message::downcast`] or peek at it with
/// [`Message::downcast_ref`].
///
/// # Example
///
/// ```rust
/// use mainspring::Message;
///
/// struct Bump(u32);
///
/// let msg = Message::new(Bump(3));
/// assert!(msg.is::<Bump>());
/// assert_eq!(msg.downcast::<Bump>().map(|b| b.0), Some(3));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable value.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Take the message as a specific type, consuming it.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Borrow the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check whether the message holds a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

// Messages the runtime itself emits

/// Quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Ctrl+C interrupt; treated like quit by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMsg;

/// Terminal window size, sent at startup and on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizeMsg {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

/// Internal carrier for batched command execution.
pub(crate) struct BatchMsg(pub Vec<super::Cmd>);
