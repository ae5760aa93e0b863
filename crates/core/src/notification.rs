// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved notification content.

use crate::participant::UserId;
use serde::{Deserialize, Serialize};

/// One fully resolved notification for one recipient.
///
/// Ephemeral: built during a dispatch run, handed to the transports,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: UserId,
    pub subject: String,
    pub body: String,
    pub body_html: String,
}
