// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener wrapper: one callback plus its invocation count

use crate::callback::Callback;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Process-unique handle for one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A registered callback as held by a [`ListenerStack`](crate::ListenerStack)
pub struct Listener<T> {
    id: ListenerId,
    callback: Callback<T>,
    /// Caller's callback when `callback` is a once-adapter around it
    origin: Option<Callback<T>>,
    calls: AtomicU64,
    attached: AtomicBool,
}

impl<T> Listener<T> {
    pub fn new(callback: Callback<T>) -> Self {
        Self::with_id(ListenerId::next(), callback)
    }

    fn with_id(id: ListenerId, callback: Callback<T>) -> Self {
        Self {
            id,
            callback,
            origin: None,
            calls: AtomicU64::new(0),
            attached: AtomicBool::new(true),
        }
    }

    /// Wrap a once-adapter, remembering the callback it was built from.
    ///
    /// `id` is reserved up front so the adapter can detach this exact
    /// registration.
    pub fn once(id: ListenerId, adapter: Callback<T>, origin: Callback<T>) -> Self {
        Self {
            origin: Some(origin),
            ..Self::with_id(id, adapter)
        }
    }

    /// Count the call and invoke the callback.
    ///
    /// Returns false without invoking anything once the listener has been
    /// detached, which covers snapshots taken before the removal. A
    /// once-listener detaches itself with a compare-and-swap before
    /// counting, so concurrent emits cannot both claim it.
    pub fn respond(&self, args: &[T]) -> bool {
        let claimed = if self.is_once() {
            self.attached
                .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
        } else {
            self.is_attached()
        };
        if !claimed {
            return false;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.callback.call(args);
        true
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// True iff this listener was registered with `callback`
    pub fn verify(&self, callback: &Callback<T>) -> bool {
        self.callback.same_as(callback)
            || self
                .origin
                .as_ref()
                .is_some_and(|origin| origin.same_as(callback))
    }

    /// The callback the caller registered
    pub fn listener(&self) -> &Callback<T> {
        self.origin.as_ref().unwrap_or(&self.callback)
    }

    /// The callback actually invoked on dispatch (the adapter for once-listeners)
    pub fn raw(&self) -> &Callback<T> {
        &self.callback
    }

    pub fn called_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn is_once(&self) -> bool {
        self.origin.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    pub(crate) fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", self.listener())
            .field("once", &self.is_once())
            .field("calls", &self.called_count())
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
