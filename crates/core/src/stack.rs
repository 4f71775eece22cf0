// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-event ordered listener collection
//!
//! A [`ListenerStack`] keeps registration order and never holds two
//! listeners for the same callback identity. Dispatch goes through a
//! [`Snapshot`] so the stack can be mutated while its listeners run.

use crate::callback::Callback;
use crate::listener::{Listener, ListenerId};
use std::sync::Arc;

/// Ordered, identity-deduplicated listeners for one event
#[derive(Debug)]
pub struct ListenerStack<T> {
    event: String,
    listeners: Vec<Arc<Listener<T>>>,
    leak_warned: bool,
}

impl<T> ListenerStack<T> {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            listeners: Vec::new(),
            leak_warned: false,
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// Insert `callback` at `index` unless it is already registered
    pub fn attach_listener(&mut self, callback: Callback<T>, index: usize) -> bool {
        self.attach(Listener::new(callback), index)
    }

    /// Insert a prepared wrapper at `index` (clamped to the length).
    ///
    /// Dedup compares the invoked callback across the whole sequence, so a
    /// once-adapter never blocks a plain registration of its origin.
    pub fn attach(&mut self, listener: Listener<T>, index: usize) -> bool {
        if self.listeners.iter().any(|l| l.raw().same_as(listener.raw())) {
            return false;
        }
        let index = index.min(self.listeners.len());
        self.listeners.insert(index, Arc::new(listener));
        tracing::debug!(event = %self.event, index, "listener attached");
        true
    }

    /// Remove the listener registered with `callback`
    pub fn detach_listener(&mut self, callback: &Callback<T>) -> bool {
        let Some(pos) = self.listeners.iter().position(|l| l.verify(callback)) else {
            return false;
        };
        let listener = self.listeners.remove(pos);
        listener.detach();
        tracing::debug!(event = %self.event, "listener detached");
        true
    }

    /// Remove one specific registration
    pub fn detach_id(&mut self, id: ListenerId) -> bool {
        let Some(pos) = self.listeners.iter().position(|l| l.id() == id) else {
            return false;
        };
        let listener = self.listeners.remove(pos);
        listener.detach();
        tracing::debug!(event = %self.event, "once listener detached");
        true
    }

    pub fn detach_all_listeners(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        tracing::debug!(event = %self.event, "all listeners detached");
    }

    /// Dispatch `args` to a snapshot of the current listeners
    pub fn respond(&self, args: &[T]) -> bool {
        self.snapshot().respond(args)
    }

    /// Copy of the current listener sequence for dispatch
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot(self.listeners.clone())
    }

    pub fn has_listener(&self, callback: &Callback<T>) -> bool {
        self.listeners.iter().any(|l| l.verify(callback))
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Callbacks as registered, in order
    pub fn listeners(&self) -> Vec<Callback<T>> {
        self.listeners.iter().map(|l| l.listener().clone()).collect()
    }

    /// Callbacks as invoked, in order (once-adapters instead of their origin)
    pub fn raw_listeners(&self) -> Vec<Callback<T>> {
        self.listeners.iter().map(|l| l.raw().clone()).collect()
    }

    pub fn handles(&self) -> Vec<Arc<Listener<T>>> {
        self.listeners.clone()
    }

    /// Warn the first time the stack grows past `max` (0 disables the check)
    pub(crate) fn check_capacity(&mut self, max: usize) {
        if max == 0 || self.leak_warned || self.listeners.len() <= max {
            return;
        }
        self.leak_warned = true;
        tracing::warn!(
            event = %self.event,
            count = self.listeners.len(),
            max,
            "possible listener leak: listener count exceeds max_listeners"
        );
    }
}

/// Listeners captured at the start of a dispatch
pub struct Snapshot<T>(Vec<Arc<Listener<T>>>);

impl<T> Snapshot<T> {
    /// Invoke each captured listener in order; true if any fired.
    ///
    /// Listeners detached after the snapshot was taken are skipped.
    pub fn respond(&self, args: &[T]) -> bool {
        let mut fired = false;
        for listener in &self.0 {
            fired |= listener.respond(args);
        }
        fired
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
