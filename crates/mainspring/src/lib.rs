#![forbid(unsafe_code)]

//! # Mainspring
//!
//! A small Elm-architecture runtime for terminal applications.
//!
//! Applications implement [`Model`] (init/update/view), communicate through
//! type-erased [`Message`]s, and express side effects as [`Cmd`]s that the
//! [`Program`] executes off the update thread. Timer-driven components use
//! [`tick`] and [`every`]; tests drive models headlessly with
//! [`simulator::ProgramSimulator`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use mainspring::{Model, Program};
//!
//! let final_model = Program::new(MyModel::default())
//!     .with_alt_screen()
//!     .run()?;
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod program;
pub mod simulator;

pub use command::{batch, every, quit, tick, Cmd};
pub use key::{from_crossterm_key, KeyMsg, KeyType};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use program::{Error, Model, Program, ProgramOptions, Result};
