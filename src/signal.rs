//! Synchronous change notification.
//!
//! A `Signal<T>` keeps an ordered list of subscriber callbacks. `emit` calls
//! them one after another in the order they were connected. The first
//! subscriber error stops the emission and is returned to the caller.

use crate::error::Result;
use std::fmt;

type Subscriber<T> = Box<dyn FnMut(&T) -> Result<()>>;

/// An ordered list of change subscribers.
pub struct Signal<T> {
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a callback. Callbacks run in registration order.
    pub fn connect<F>(&mut self, callback: F)
    where
        F: FnMut(&T) -> Result<()> + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Notifies every subscriber with `value`.
    pub fn emit(&mut self, value: &T) -> Result<()> {
        for subscriber in &mut self.subscribers {
            subscriber(value)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
