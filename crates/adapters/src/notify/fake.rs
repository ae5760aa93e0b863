// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake transport adapters for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{EmailAdapter, MessageAdapter, TransportError};
use allot_core::UserId;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Recorded internal message
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub recipient: UserId,
    pub subject: String,
    pub body: String,
}

/// Recorded email
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: UserId,
    pub subject: String,
    pub body: String,
    pub body_html: String,
}

struct FakeTransportState<T> {
    sent: Vec<T>,
    fail_recipients: HashSet<UserId>,
}

impl<T> Default for FakeTransportState<T> {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            fail_recipients: HashSet::new(),
        }
    }
}

/// Fake message adapter that records every send.
#[derive(Clone, Default)]
pub struct FakeMessageAdapter {
    inner: Arc<Mutex<FakeTransportState<SentMessage>>>,
}

impl FakeMessageAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded messages
    pub fn sent(&self) -> Vec<SentMessage> {
        self.inner.lock().sent.clone()
    }

    /// Reject future sends to this recipient.
    pub fn fail_for(&self, recipient: impl Into<UserId>) {
        self.inner.lock().fail_recipients.insert(recipient.into());
    }
}

#[async_trait]
impl MessageAdapter for FakeMessageAdapter {
    async fn send_message(
        &self,
        recipient: &UserId,
        subject: &str,
        body: &str,
    ) -> Result<(), TransportError> {
        let mut state = self.inner.lock();
        if state.fail_recipients.contains(recipient) {
            return Err(TransportError::SendFailed(format!(
                "injected failure for {recipient}"
            )));
        }
        state.sent.push(SentMessage {
            recipient: recipient.clone(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Fake email adapter that records every send.
#[derive(Clone, Default)]
pub struct FakeEmailAdapter {
    inner: Arc<Mutex<FakeTransportState<SentEmail>>>,
}

impl FakeEmailAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded emails
    pub fn sent(&self) -> Vec<SentEmail> {
        self.inner.lock().sent.clone()
    }

    /// Reject future sends to this recipient.
    pub fn fail_for(&self, recipient: impl Into<UserId>) {
        self.inner.lock().fail_recipients.insert(recipient.into());
    }
}

#[async_trait]
impl EmailAdapter for FakeEmailAdapter {
    async fn send_email(
        &self,
        recipient: &UserId,
        subject: &str,
        body: &str,
        body_html: &str,
    ) -> Result<(), TransportError> {
        let mut state = self.inner.lock();
        if state.fail_recipients.contains(recipient) {
            return Err(TransportError::SendFailed(format!(
                "injected failure for {recipient}"
            )));
        }
        state.sent.push(SentEmail {
            recipient: recipient.clone(),
            subject: subject.to_string(),
            body: body.to_string(),
            body_html: body_html.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
