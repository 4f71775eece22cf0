// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity-bearing callback handles
//!
//! Closures have no identity of their own, so every registered callback is
//! boxed once behind an `Arc`. Clones of a [`Callback`] share the allocation
//! and compare equal; two handles built from identical closures do not.

use std::fmt;
use std::sync::Arc;

/// Closure type stored behind a [`Callback`]
pub type CallbackFn<T> = dyn Fn(&[T]) + Send + Sync;

/// A clonable handle to a listener closure, compared by identity
pub struct Callback<T>(Arc<CallbackFn<T>>);

impl<T> Callback<T> {
    pub fn new(f: impl Fn(&[T]) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the closure with `args`
    pub fn call(&self, args: &[T]) {
        (self.0)(args)
    }

    /// True iff both handles point at the same closure allocation
    pub fn same_as(&self, other: &Callback<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Callback<T> {}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
#[path = "callback_tests.rs"]
mod tests;
