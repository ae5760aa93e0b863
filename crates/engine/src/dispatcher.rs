// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch orchestrator.
//!
//! Entry point for the host task runner: given an activity id, loads
//! the allocation state through the store seam, resolves one
//! notification per participant, and hands each to the message and
//! email transports.

use crate::context::RenderContext;
use crate::error::{Channel, DispatchError, SendFailure};
use allot_adapters::{ActivityStore, EmailAdapter, LinkBuilder, MessageAdapter};
use allot_core::{ActivityId, Choice, ChoiceId, UserId};
use std::collections::HashMap;

/// Sends allocation-result notifications for published activities.
pub struct Dispatcher<S, M, E, L> {
    store: S,
    messages: M,
    emails: E,
    links: L,
}

impl<S, M, E, L> Dispatcher<S, M, E, L>
where
    S: ActivityStore,
    M: MessageAdapter,
    E: EmailAdapter,
    L: LinkBuilder,
{
    pub fn new(store: S, messages: M, emails: E, links: L) -> Self {
        Self {
            store,
            messages,
            emails,
            links,
        }
    }

    /// Notify every participant of an activity about their allocation
    /// outcome: one internal message and one email each.
    ///
    /// Participants are processed sequentially. A transport rejection
    /// is recorded and the run moves on to the next send; all
    /// rejections are returned together once every participant has
    /// been processed. Load failures abort before anything is sent.
    pub async fn send_allocation_notifications(
        &self,
        activity_id: &ActivityId,
    ) -> Result<(), DispatchError> {
        let activity = self.store.load_activity(activity_id).await?;
        let choices = self.store.list_choices(activity_id).await?;
        let allocations = self.store.list_allocations(activity_id).await?;
        let participants = self.store.list_participants(activity_id).await?;

        let choices: HashMap<ChoiceId, Choice> =
            choices.into_iter().map(|c| (c.id.clone(), c)).collect();
        let assigned: HashMap<UserId, ChoiceId> = allocations
            .into_iter()
            .map(|a| (a.user, a.choice))
            .collect();

        let mut failures = Vec::new();
        for participant in &participants {
            let choice = match assigned.get(&participant.id) {
                Some(choice_id) => Some(
                    choices
                        .get(choice_id)
                        .ok_or_else(|| DispatchError::UnknownChoice(choice_id.clone()))?,
                ),
                None => None,
            };

            let notification = RenderContext::build(&activity, participant, choice, &self.links)
                .resolve(&activity.templates);

            if let Err(error) = self
                .messages
                .send_message(
                    &notification.recipient,
                    &notification.subject,
                    &notification.body,
                )
                .await
            {
                tracing::warn!(recipient = %notification.recipient, %error, "message send failed");
                failures.push(SendFailure {
                    recipient: notification.recipient.clone(),
                    channel: Channel::Message,
                    error,
                });
            }

            if let Err(error) = self
                .emails
                .send_email(
                    &notification.recipient,
                    &notification.subject,
                    &notification.body,
                    &notification.body_html,
                )
                .await
            {
                tracing::warn!(recipient = %notification.recipient, %error, "email send failed");
                failures.push(SendFailure {
                    recipient: notification.recipient.clone(),
                    channel: Channel::Email,
                    error,
                });
            }
        }

        tracing::info!(
            activity = %activity_id,
            participants = participants.len(),
            failed_sends = failures.len(),
            "allocation notifications dispatched"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Transport {
                activity: activity_id.clone(),
                failures,
            })
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
