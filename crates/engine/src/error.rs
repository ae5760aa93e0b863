// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the dispatch engine

use allot_adapters::{StoreError, TransportError};
use allot_core::{ActivityId, ChoiceId, UserId};
use std::fmt;
use thiserror::Error;

/// Channel a failed send was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Message,
    Email,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Message => write!(f, "message"),
            Channel::Email => write!(f, "email"),
        }
    }
}

/// One failed send, kept for the caller after the run finishes.
#[derive(Debug)]
pub struct SendFailure {
    pub recipient: UserId,
    pub channel: Channel,
    pub error: TransportError,
}

/// Errors that can occur during a dispatch run
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Loading activity state failed; nothing was sent.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// An allocation references a choice the activity does not have.
    #[error("allocation references unknown choice: {0}")]
    UnknownChoice(ChoiceId),
    /// One or more sends were rejected by a transport. The run still
    /// processed every participant; `failures` lists each rejection.
    #[error("{} send(s) failed for activity {activity}", .failures.len())]
    Transport {
        activity: ActivityId,
        failures: Vec<SendFailure>,
    },
}
