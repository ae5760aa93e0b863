//! Dispatch fan-out specs
//!
//! Publishing the allocation sends one message and one email to every
//! user with ratings, and nothing to anyone else.

use crate::prelude::*;
use allot_core::MessageTemplates;

#[tokio::test]
async fn publish_notifies_every_rater_once() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    let messages = scenario.sent_messages();
    let emails = scenario.sent_emails();
    assert_eq!(messages.len(), 3);
    assert_eq!(emails.len(), 3);

    // Every participant got exactly one of each.
    for user in ["s1", "s2", "s3"] {
        assert_eq!(messages.iter().filter(|m| m.recipient == *user).count(), 1);
        assert_eq!(emails.iter().filter(|e| e.recipient == *user).count(), 1);
    }
}

#[tokio::test]
async fn enrolled_student_without_rating_gets_nothing() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    assert_no_message_for_user(&scenario.sent_messages(), "s4");
    assert_no_email_for_user(&scenario.sent_emails(), "s4");
}

#[tokio::test]
async fn message_and_email_carry_the_same_subject() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    let message = &scenario.sent_messages()[0];
    let email = scenario
        .sent_emails()
        .into_iter()
        .find(|e| e.recipient == message.recipient)
        .unwrap();
    assert_eq!(message.subject, email.subject);
}

#[tokio::test]
async fn publish_unknown_activity_fails_and_sends_nothing() {
    let scenario = Scenario::new();

    let result = scenario.publish("missing").await;

    assert!(result.is_err());
    assert!(scenario.sent_messages().is_empty());
    assert!(scenario.sent_emails().is_empty());
}
