// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Meta-event naming
//!
//! Registration changes are announced as ordinary events named
//! `addlistener:<event>` and `rmlistener:<event>`. Nothing parses these names
//! during dispatch; [`parse`] exists for callers that route on them.

pub const ADD_LISTENER_PREFIX: &str = "addlistener:";
pub const REMOVE_LISTENER_PREFIX: &str = "rmlistener:";

/// Which registration change a meta-event announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    Added,
    Removed,
}

/// Name of the event emitted after a listener is attached to `event`
pub fn added_event(event: &str) -> String {
    format!("{ADD_LISTENER_PREFIX}{event}")
}

/// Name of the event emitted after listeners are removed from `event`
pub fn removed_event(event: &str) -> String {
    format!("{REMOVE_LISTENER_PREFIX}{event}")
}

/// Split a meta-event name into its kind and target event
pub fn parse(name: &str) -> Option<(MetaKind, &str)> {
    if let Some(event) = name.strip_prefix(ADD_LISTENER_PREFIX) {
        Some((MetaKind::Added, event))
    } else {
        name.strip_prefix(REMOVE_LISTENER_PREFIX)
            .map(|event| (MetaKind::Removed, event))
    }
}
