// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participants of an allocation activity.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a user in the host platform.
    pub struct UserId;
}

/// A user who submitted ratings for an activity's choices.
///
/// Enrolled users who never rated are not participants and receive no
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: UserId,
    /// Given name (`##firstname##`).
    pub firstname: String,
    /// Family name (`##lastname##`).
    pub lastname: String,
}

impl Participant {
    pub fn new(
        id: impl Into<UserId>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}
