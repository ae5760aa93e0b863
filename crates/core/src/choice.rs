// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Choice options participants are allocated to.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a choice within an activity.
    pub struct ChoiceId;
}

/// One option of an allocation activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    /// Title shown to participants (`##choice##`).
    pub title: String,
    /// Explanation text shown to participants (`##choiceexplanation##`).
    pub explanation: String,
}

impl Choice {
    pub fn new(
        id: impl Into<ChoiceId>,
        title: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            explanation: explanation.into(),
        }
    }
}
