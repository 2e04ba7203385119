//! Headless program simulator for testing models without a terminal.
//!
//! The simulator drives a [`Model`] through the same init/update/view
//! lifecycle the real program uses, but messages are queued by the test
//! and views are captured as strings.

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::message::{Message, QuitMsg};
use crate::Model;

/// Counters tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times `init` was called.
    pub init_calls: usize,
    /// Number of times `update` was called.
    pub update_calls: usize,
    /// Number of times `view` was called.
    pub view_calls: usize,
    /// Commands returned from init/update.
    pub commands_returned: usize,
    /// Whether a quit message was seen.
    pub quit_requested: bool,
}

/// Drives a model through its lifecycle without a terminal.
///
/// # Example
///
/// ```rust
/// use mainspring::{simulator::ProgramSimulator, Cmd, Message, Model};
///
/// struct Tally {
///     total: u32,
/// }
///
/// impl Model for Tally {
///     fn init(&self) -> Option<Cmd> {
///         None
///     }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast_ref::<u32>() {
///             self.total += n;
///         }
///         None
///     }
///     fn view(&self) -> String {
///         format!("total: {}", self.total)
///     }
/// }
///
/// let mut sim = ProgramSimulator::new(Tally { total: 0 });
/// sim.send(Message::new(2u32));
/// sim.send(Message::new(4u32));
/// sim.run_until_empty();
/// assert_eq!(sim.model().total, 6);
/// assert_eq!(sim.last_view(), Some("total: 6"));
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a simulator around the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model once, capturing the startup command.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Push a message onto the pending queue.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Process one queued message through update and view.
    ///
    /// Returns the command produced by update, if any. Initializes the
    /// model first if that has not happened yet.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;

        if msg.is::<QuitMsg>() {
            self.stats.quit_requested = true;
            return Some(crate::quit());
        }

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Process messages until the queue drains, executing returned
    /// commands inline and feeding their messages back into the queue.
    ///
    /// Returns how many messages were drained.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            if let Some(cmd) = self.step() {
                if let Some(msg) = cmd.execute() {
                    self.input_queue.push_back(msg);
                }
            }
            processed += 1;
        }
        processed
    }

    /// Process one queued message, discarding any returned command.
    ///
    /// Useful when the command would block (a timer re-arm) and the test
    /// only cares about the state transition.
    pub fn step_discarding_cmd(&mut self) {
        let _ = self.step();
    }

    /// The current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator, returning the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// The simulation statistics so far.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// All captured view outputs, oldest first.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// The most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Whether a quit message has been processed.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Number of messages still queued.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}
