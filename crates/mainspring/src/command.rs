//! Commands: deferred side effects that produce messages.
//!
//! Update functions stay pure by returning a [`Cmd`] instead of performing
//! effects inline. The program executes commands on worker threads and
//! feeds any resulting message back into the update loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::message::{BatchMsg, Message, QuitMsg};

/// A lazy side effect producing at most one [`Message`].
///
/// # Example
///
/// ```rust
/// use mainspring::{Cmd, Message};
/// use std::time::Duration;
///
/// fn after_pause() -> Cmd {
///     Cmd::new(|| {
///         std::thread::sleep(Duration::from_millis(1));
///         Message::new("ready")
///     })
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a command from a closure that always yields a message.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not yield a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// The absent command, for update arms that do nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Run the deferred work, yielding its message if it produced one.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Batch commands to run concurrently, with no ordering guarantee.
///
/// `None` entries are dropped; an all-`None` batch collapses to `None`.
#[must_use]
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid.len() {
        0 => None,
        1 => valid.into_iter().next(),
        _ => Some(Cmd::new_optional(move || Some(Message::new(BatchMsg(valid))))),
    }
}

/// Command whose message asks the event loop to shut down.
#[must_use]
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command that fires once after `duration`.
///
/// For periodic ticks, return another `tick` from the update arm that
/// handles the tick message.
pub fn tick<F>(duration: Duration, f: F) -> Cmd
where
    F: FnOnce(Instant) -> Message + Send + 'static,
{
    Cmd::new(move || {
        std::thread::sleep(duration);
        f(Instant::now())
    })
}

/// Command that fires aligned to the wall clock.
///
/// With a one-minute period and the clock at 12:34:20, the tick arrives at
/// 12:35:00 rather than a full period from now. Successive re-arms
/// therefore fire on period boundaries.
pub fn every<F>(duration: Duration, f: F) -> Cmd
where
    F: FnOnce(Instant) -> Message + Send + 'static,
{
    Cmd::new(move || {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let period = duration.as_nanos().max(1);
        let now_nanos = since_epoch.as_nanos();
        let next_tick = (now_nanos / period + 1) * period;
        let sleep_nanos = u64::try_from(next_tick - now_nanos).unwrap_or(u64::MAX);
        std::thread::sleep(Duration::from_nanos(sleep_nanos));
        f(Instant::now())
    })
}
