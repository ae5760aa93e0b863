// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity store adapters

mod memory;

pub use memory::{ActivityData, InMemoryActivityStore};

use allot_core::{ActivityConfig, ActivityId, Allocation, Choice, Participant};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from activity store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error("load failed: {0}")]
    LoadFailed(String),
}

/// Adapter for reading allocation state from the host platform.
///
/// The dispatcher only reads; enrollment, rating collection, and the
/// allocation algorithm itself all live behind this seam.
#[async_trait]
pub trait ActivityStore: Clone + Send + Sync + 'static {
    /// Load the configuration of one activity.
    async fn load_activity(&self, id: &ActivityId) -> Result<ActivityConfig, StoreError>;

    /// List the choices of an activity.
    async fn list_choices(&self, id: &ActivityId) -> Result<Vec<Choice>, StoreError>;

    /// List the allocations of an activity (at most one per participant).
    async fn list_allocations(&self, id: &ActivityId) -> Result<Vec<Allocation>, StoreError>;

    /// List the participants of an activity: every user who submitted
    /// ratings, allocated or not.
    async fn list_participants(&self, id: &ActivityId) -> Result<Vec<Participant>, StoreError>;
}
