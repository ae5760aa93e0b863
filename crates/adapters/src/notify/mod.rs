// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message and email transport adapters

mod command;
mod noop;

pub use command::{CommandEmailAdapter, CommandMessageAdapter};
pub use noop::{NoOpEmailAdapter, NoOpMessageAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeEmailAdapter, FakeMessageAdapter, SentEmail, SentMessage};

use allot_core::UserId;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for delivering internal platform messages.
#[async_trait]
pub trait MessageAdapter: Clone + Send + Sync + 'static {
    /// Deliver one internal message to one recipient.
    async fn send_message(
        &self,
        recipient: &UserId,
        subject: &str,
        body: &str,
    ) -> Result<(), TransportError>;
}

/// Adapter for delivering email.
#[async_trait]
pub trait EmailAdapter: Clone + Send + Sync + 'static {
    /// Deliver one email to one recipient. The recipient's address is
    /// resolved by the host platform behind this seam.
    async fn send_email(
        &self,
        recipient: &UserId,
        subject: &str,
        body: &str,
        body_html: &str,
    ) -> Result<(), TransportError>;
}
