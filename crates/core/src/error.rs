// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for emitter operations

use thiserror::Error;

/// An operation that requires a registered event was given an unknown name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event '{event}' does not exist within emitter")]
pub struct MissingEventError {
    pub event: String,
}

impl MissingEventError {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
        }
    }
}
