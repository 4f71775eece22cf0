// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named-event emitter
//!
//! Maps event names to [`ListenerStack`]s. Dispatch is synchronous on the
//! calling thread. The registry lock is released before any listener runs,
//! so listeners may register, remove, or emit on the same emitter.

use crate::callback::Callback;
use crate::config::EmitterConfig;
use crate::error::MissingEventError;
use crate::listener::{Listener, ListenerId};
use crate::meta;
use crate::stack::ListenerStack;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

type Stacks<T> = BTreeMap<String, ListenerStack<T>>;

struct Shared<T> {
    stacks: RwLock<Stacks<T>>,
    config: EmitterConfig,
}

/// Registry of named events and their listeners.
///
/// Clones share the same registry.
pub struct Emitter<T = Value> {
    shared: Arc<Shared<T>>,
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                stacks: RwLock::new(BTreeMap::new()),
                config,
            }),
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.shared.config
    }

    /// Append `listener` to `event`'s listeners
    pub fn on(&self, event: &str, listener: &Callback<T>) -> &Self {
        self.add(event, Listener::new(listener.clone()), false)
    }

    pub fn add_listener(&self, event: &str, listener: &Callback<T>) -> &Self {
        self.on(event, listener)
    }

    /// Insert `listener` ahead of every listener already on `event`
    pub fn prepend_listener(&self, event: &str, listener: &Callback<T>) -> &Self {
        self.add(event, Listener::new(listener.clone()), true)
    }

    /// Append `listener` so that it fires at most once
    pub fn once(&self, event: &str, listener: &Callback<T>) -> &Self {
        self.add(event, self.once_wrap(event, listener), false)
    }

    pub fn prepend_once_listener(&self, event: &str, listener: &Callback<T>) -> &Self {
        self.add(event, self.once_wrap(event, listener), true)
    }

    /// Dispatch `args` to the listeners of `event`.
    ///
    /// Returns true iff at least one listener fired. Unknown events return
    /// false. Listeners attached while this call is dispatching do not fire
    /// until the next emit.
    pub fn emit(&self, event: &str, args: &[T]) -> bool {
        let snapshot = match self.read().get(event) {
            Some(stack) => stack.snapshot(),
            None => {
                tracing::trace!(event, "emit on unknown event");
                return false;
            }
        };
        let fired = snapshot.respond(args);
        tracing::trace!(event, fired, "event emitted");
        fired
    }

    /// Remove `listener` from `event`.
    ///
    /// Fails on an unknown event only under the strict missing-event policy.
    pub fn remove_listener(
        &self,
        event: &str,
        listener: &Callback<T>,
    ) -> Result<&Self, MissingEventError> {
        let found = match self.write().get_mut(event) {
            Some(stack) => {
                stack.detach_listener(listener);
                true
            }
            None => false,
        };
        if !found {
            return self.missing(event);
        }
        self.announce(meta::removed_event(event));
        Ok(self)
    }

    pub fn off(&self, event: &str, listener: &Callback<T>) -> Result<&Self, MissingEventError> {
        self.remove_listener(event, listener)
    }

    /// Drop every listener of `event`, or of every event when `None`.
    ///
    /// The event entries themselves are deleted, so `has_event` turns false.
    pub fn remove_all_listeners(&self, event: Option<&str>) -> Result<&Self, MissingEventError> {
        let Some(event) = event else {
            for name in self.event_names() {
                self.clear_event(&name);
            }
            return Ok(self);
        };
        if !self.clear_event(event) {
            return self.missing(event);
        }
        Ok(self)
    }

    /// True iff `event` has a stack, even an empty one
    pub fn has_event(&self, event: &str) -> bool {
        self.read().contains_key(event)
    }

    pub fn has_listeners(&self, event: &str) -> bool {
        self.read()
            .get(event)
            .is_some_and(ListenerStack::has_listeners)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.read()
            .get(event)
            .map_or(0, ListenerStack::listener_count)
    }

    /// Registered callbacks for `event`, in dispatch order
    pub fn listeners(&self, event: &str) -> Vec<Callback<T>> {
        self.read()
            .get(event)
            .map(ListenerStack::listeners)
            .unwrap_or_default()
    }

    /// Like [`listeners`](Self::listeners) but with once-adapters unexpanded
    pub fn raw_listeners(&self, event: &str) -> Vec<Callback<T>> {
        self.read()
            .get(event)
            .map(ListenerStack::raw_listeners)
            .unwrap_or_default()
    }

    /// Listener wrappers for `event`, exposing call counts
    pub fn listener_handles(&self, event: &str) -> Vec<Arc<Listener<T>>> {
        self.read()
            .get(event)
            .map(ListenerStack::handles)
            .unwrap_or_default()
    }

    /// Names of every registered event, sorted
    pub fn event_names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    fn add(&self, event: &str, listener: Listener<T>, prepend: bool) -> &Self {
        let attached = {
            let mut stacks = self.write();
            let stack = stacks.entry(event.to_string()).or_insert_with(|| {
                tracing::debug!(event, "event registered");
                ListenerStack::new(event)
            });
            let index = if prepend { 0 } else { stack.listener_count() };
            let attached = stack.attach(listener, index);
            if attached {
                stack.check_capacity(self.shared.config.max_listeners);
            }
            attached
        };
        if attached {
            self.announce(meta::added_event(event));
        }
        self
    }

    /// Build an adapter that detaches itself before running `listener`
    fn once_wrap(&self, event: &str, listener: &Callback<T>) -> Listener<T> {
        let shared: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        let event = event.to_string();
        let origin = listener.clone();
        let id = ListenerId::next();
        let fired = AtomicBool::new(false);

        let adapter = Callback::new(move |args: &[T]| {
            if fired.swap(true, Ordering::SeqCst) {
                return;
            }
            if let Some(shared) = shared.upgrade() {
                Emitter { shared }.remove_once(&event, id);
            }
            origin.call(args);
        });

        Listener::once(id, adapter, listener.clone())
    }

    /// Detach a fired once-listener; a plain `on` of the same callback stays
    fn remove_once(&self, event: &str, id: ListenerId) {
        let found = match self.write().get_mut(event) {
            Some(stack) => {
                stack.detach_id(id);
                true
            }
            None => false,
        };
        if !found {
            tracing::debug!(event, "once listener outlived its event");
            return;
        }
        self.announce(meta::removed_event(event));
    }

    /// Detach every listener of `event` and delete its entry
    fn clear_event(&self, event: &str) -> bool {
        let removed = self.write().remove(event);
        let Some(mut stack) = removed else {
            return false;
        };
        stack.detach_all_listeners();
        tracing::debug!(event, "event removed");
        self.announce(meta::removed_event(event));
        true
    }

    fn announce(&self, name: String) {
        if self.shared.config.meta_events {
            self.emit(&name, &[]);
        }
    }

    fn missing(&self, event: &str) -> Result<&Self, MissingEventError> {
        if self.shared.config.is_strict() {
            return Err(MissingEventError::new(event));
        }
        Ok(self)
    }

    fn read(&self) -> RwLockReadGuard<'_, Stacks<T>> {
        self.shared.stacks.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Stacks<T>> {
        self.shared.stacks.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stacks = self.shared.stacks.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("Emitter")
            .field("events", &stacks.keys().collect::<Vec<_>>())
            .field("config", &self.shared.config)
            .finish()
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
