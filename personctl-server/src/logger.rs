//! Injected logging sink.
//!
//! `tracing` normally logs through a process-wide dispatcher. The handler
//! instead holds a [`Logger`] handed to it at construction and emits its
//! events inside [`Logger::in_scope`], so the sink is an explicit
//! collaborator that tests can swap for a capturing one.

use tracing::{dispatcher, Dispatch};

#[derive(Clone, Debug)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Capture the dispatcher that is currently the default.
    ///
    /// Call after the process subscriber is installed; a logger captured
    /// before that point discards everything.
    pub fn current() -> Self {
        Self::new(dispatcher::get_default(Dispatch::clone))
    }

    /// Run `f` with this logger's dispatcher as the thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::current()
    }
}
