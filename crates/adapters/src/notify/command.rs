// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-backed transport adapters.
//!
//! Deliver by spawning a host-provided command with the notification as
//! a JSON payload argument. The command owns address resolution and the
//! actual delivery; a non-zero exit is reported back as a transport
//! failure so the host task runner sees it.

use super::{EmailAdapter, MessageAdapter, TransportError};
use crate::subprocess::{run_with_timeout, NOTIFY_COMMAND_TIMEOUT};
use allot_core::UserId;
use async_trait::async_trait;
use tokio::process::Command;

async fn deliver(program: &str, payload: String) -> Result<(), TransportError> {
    let mut cmd = Command::new(program);
    cmd.arg(&payload);

    let output = run_with_timeout(cmd, NOTIFY_COMMAND_TIMEOUT, "notify command")
        .await
        .map_err(TransportError::SendFailed)?;

    if output.status.success() {
        tracing::info!(%program, "notify command succeeded");
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!(%program, %stderr, "notify command exited with non-zero status");
        Err(TransportError::SendFailed(format!(
            "notify command exited with {}: {}",
            output.status, stderr
        )))
    }
}

/// Message adapter that hands each send to a host command.
#[derive(Clone, Debug)]
pub struct CommandMessageAdapter {
    program: String,
}

impl CommandMessageAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl MessageAdapter for CommandMessageAdapter {
    async fn send_message(
        &self,
        recipient: &UserId,
        subject: &str,
        body: &str,
    ) -> Result<(), TransportError> {
        let payload = serde_json::json!({
            "kind": "message",
            "recipient": recipient,
            "subject": subject,
            "body": body,
        })
        .to_string();
        deliver(&self.program, payload).await
    }
}

/// Email adapter that hands each send to a host command.
#[derive(Clone, Debug)]
pub struct CommandEmailAdapter {
    program: String,
}

impl CommandEmailAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl EmailAdapter for CommandEmailAdapter {
    async fn send_email(
        &self,
        recipient: &UserId,
        subject: &str,
        body: &str,
        body_html: &str,
    ) -> Result<(), TransportError> {
        let payload = serde_json::json!({
            "kind": "email",
            "recipient": recipient,
            "subject": subject,
            "body": body,
            "body_html": body_html,
        })
        .to_string();
        deliver(&self.program, payload).await
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
