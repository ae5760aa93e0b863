// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory activity store.

use super::{ActivityStore, StoreError};
use allot_core::{ActivityConfig, ActivityId, Allocation, Choice, Participant};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Full allocation state of one activity, as seeded into the store.
#[derive(Debug, Clone)]
pub struct ActivityData {
    pub config: ActivityConfig,
    pub choices: Vec<Choice>,
    pub allocations: Vec<Allocation>,
    pub participants: Vec<Participant>,
}

impl ActivityData {
    pub fn new(config: ActivityConfig) -> Self {
        Self {
            config,
            choices: Vec::new(),
            allocations: Vec::new(),
            participants: Vec::new(),
        }
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_allocations(mut self, allocations: Vec<Allocation>) -> Self {
        self.allocations = allocations;
        self
    }

    pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
        self.participants = participants;
        self
    }
}

/// Activity store backed by a shared in-memory map.
///
/// Reference implementation for hosts dispatching from a snapshot, and
/// the store used throughout the test suites. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryActivityStore {
    inner: Arc<Mutex<HashMap<ActivityId, ActivityData>>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the state of one activity.
    pub fn insert(&self, data: ActivityData) {
        self.inner.lock().insert(data.config.id.clone(), data);
    }

    fn get(&self, id: &ActivityId) -> Result<ActivityData, StoreError> {
        self.inner
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::ActivityNotFound(id.clone()))
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load_activity(&self, id: &ActivityId) -> Result<ActivityConfig, StoreError> {
        Ok(self.get(id)?.config)
    }

    async fn list_choices(&self, id: &ActivityId) -> Result<Vec<Choice>, StoreError> {
        Ok(self.get(id)?.choices)
    }

    async fn list_allocations(&self, id: &ActivityId) -> Result<Vec<Allocation>, StoreError> {
        Ok(self.get(id)?.allocations)
    }

    async fn list_participants(&self, id: &ActivityId) -> Result<Vec<Participant>, StoreError> {
        Ok(self.get(id)?.participants)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
