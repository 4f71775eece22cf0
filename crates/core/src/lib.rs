// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herald-core: in-process named-event emitter
//!
//! This crate provides:
//! - `Emitter` - register callbacks per event name and dispatch to them
//! - `ListenerStack` - ordered, identity-deduplicated listeners for one event
//! - `Listener` - a registered callback with its invocation count
//! - `EmitterConfig` - meta-event, removal policy and leak-warning settings

pub mod callback;
pub mod config;
pub mod emitter;
pub mod error;
pub mod listener;
pub mod meta;
pub mod stack;

pub use callback::{Callback, CallbackFn};
pub use config::{ConfigError, EmitterConfig, MissingEventPolicy, DEFAULT_MAX_LISTENERS};
pub use emitter::Emitter;
pub use error::MissingEventError;
pub use listener::{Listener, ListenerId};
pub use meta::MetaKind;
pub use stack::{ListenerStack, Snapshot};
