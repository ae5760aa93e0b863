// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allocation of a participant to a choice.

use crate::choice::ChoiceId;
use crate::participant::UserId;
use serde::{Deserialize, Serialize};

/// Assignment of one participant to one choice.
///
/// A participant has zero or one allocation per activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub user: UserId,
    pub choice: ChoiceId,
}

impl Allocation {
    pub fn new(user: impl Into<UserId>, choice: impl Into<ChoiceId>) -> Self {
        Self {
            user: user.into(),
            choice: choice.into(),
        }
    }
}
