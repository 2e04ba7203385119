//! Terminal setup, the render loop, and teardown.
//!
//! [`Program`] owns the terminal for the lifetime of the run: it enables
//! raw mode, optionally enters the alternate screen, polls crossterm for
//! input, executes commands on worker threads, and renders the model after
//! every processed message.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::debug;

use crate::command::Cmd;
use crate::key::from_crossterm_key;
use crate::message::{BatchMsg, InterruptMsg, Message, QuitMsg, WindowSizeMsg};
use crate::KeyType;

/// Errors that can occur while running a program.
///
/// Propagate with `?`; the terminal is always restored before an error
/// leaves [`Program::run`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// General terminal I/O failure.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode, usually because stdin is not
    /// a TTY.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// The attempted transition, "enable" or "disable".
        action: &'static str,
        /// The error the terminal reported.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// The attempted transition, "enter" or "exit".
        action: &'static str,
        /// The error the terminal reported.
        #[source]
        source: io::Error,
    },

    /// Failed to poll or read terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to write the rendered view.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Model trait for terminal applications.
///
/// # Example
///
/// ```rust
/// use mainspring::{Cmd, Message, Model};
///
/// struct Tick;
///
/// struct Ticker {
///     seconds: u64,
/// }
///
/// impl Model for Ticker {
///     fn init(&self) -> Option<Cmd> {
///         None
///     }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if msg.is::<Tick>() {
///             self.seconds += 1;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("{}s elapsed", self.seconds)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Initialize the model, returning an optional startup command.
    fn init(&self) -> Option<Cmd>;

    /// Process one message and optionally return a follow-up command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string. Must be side-effect free.
    fn view(&self) -> String;
}

/// Knobs controlling how the program drives the terminal.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Target frames per second for input polling.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            fps: 60,
        }
    }
}

/// A runnable terminal program wrapping a [`Model`].
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a program with default options.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use the alternate screen buffer, restoring the terminal on exit.
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Set the target frames per second. Valid range is 1-120.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Run the program on stdout and return the final model state.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when terminal setup, event polling, or
    /// rendering fails.
    pub fn run(self) -> Result<M> {
        let stdout = io::stdout();
        self.run_with_writer(stdout)
    }

    /// Run the event loop against a caller-supplied writer.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when terminal setup, event polling, or
    /// rendering fails.
    pub fn run_with_writer<W: Write + Send + 'static>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            if let Err(source) = execute!(writer, EnterAlternateScreen) {
                let _ = disable_raw_mode();
                return Err(Error::AltScreenFailure {
                    action: "enter",
                    source,
                });
            }
        }

        let setup = execute!(writer, Hide);
        let result = match setup {
            Ok(()) => self.event_loop(&mut writer),
            Err(e) => Err(Error::Io(e)),
        };

        // Teardown runs regardless of how the loop ended.
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        // Seed the model with the initial window size.
        if let Ok((width, height)) = terminal::size() {
            let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            Self::handle_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            // Poll for input with frame-rate limiting.
            if event::poll(frame).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        if let Some(key_msg) =
                            from_crossterm_key(key_event.code, key_event.modifiers)
                        {
                            if key_msg.key_type == KeyType::CtrlC {
                                let _ = tx.send(Message::new(InterruptMsg));
                            } else {
                                let _ = tx.send(Message::new(key_msg));
                            }
                        }
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    _ => {}
                }
            }

            // Drain pending messages before the next poll.
            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    debug!("quit requested, leaving event loop");
                    return Ok(self.model);
                }

                // Batches are fanned out by the command executor.
                if msg.is::<BatchMsg>() {
                    continue;
                }

                if let Some(cmd) = self.model.update(msg) {
                    Self::handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn handle_command(cmd: Cmd, tx: Sender<Message>) {
        thread::spawn(move || {
            if let Some(msg) = cmd.execute() {
                if msg.is::<BatchMsg>() {
                    if let Some(batch) = msg.downcast::<BatchMsg>() {
                        for cmd in batch.0 {
                            let tx = tx.clone();
                            thread::spawn(move || {
                                if let Some(msg) = cmd.execute() {
                                    let _ = tx.send(msg);
                                }
                            });
                        }
                    }
                } else {
                    let _ = tx.send(msg);
                }
            }
        });
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip identical frames.
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        write!(writer, "{view}").map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static;

    impl Model for Static {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, _msg: Message) -> Option<Cmd> {
            None
        }

        fn view(&self) -> String {
            "static".to_string()
        }
    }

    #[test]
    fn fps_is_clamped() {
        let program = Program::new(Static).with_fps(500);
        assert_eq!(program.options.fps, 120);
        let program = Program::new(Static).with_fps(0);
        assert_eq!(program.options.fps, 1);
    }

    #[test]
    fn alt_screen_flag_sets_option() {
        let program = Program::new(Static).with_alt_screen();
        assert!(program.options.alt_screen);
    }

    #[test]
    fn error_messages_name_the_action() {
        let err = Error::RawModeFailure {
            action: "enable",
            source: io::Error::other("nope"),
        };
        assert!(err.to_string().contains("enable raw mode"));

        let err = Error::AltScreenFailure {
            action: "enter",
            source: io::Error::other("nope"),
        };
        assert!(err.to_string().contains("enter alternate screen"));
    }
}
