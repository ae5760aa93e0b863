// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op transport adapters.

use super::{EmailAdapter, MessageAdapter, TransportError};
use allot_core::UserId;
use async_trait::async_trait;

/// Message adapter that silently discards all sends.
///
/// Used when the internal message channel is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMessageAdapter;

impl NoOpMessageAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageAdapter for NoOpMessageAdapter {
    async fn send_message(
        &self,
        _recipient: &UserId,
        _subject: &str,
        _body: &str,
    ) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Email adapter that silently discards all sends.
///
/// Used when the email channel is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpEmailAdapter;

impl NoOpEmailAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailAdapter for NoOpEmailAdapter {
    async fn send_email(
        &self,
        _recipient: &UserId,
        _subject: &str,
        _body: &str,
        _body_html: &str,
    ) -> Result<(), TransportError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
