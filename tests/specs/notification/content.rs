//! Default-template content specs
//!
//! Publishing with default templates tells each participant their
//! allocated choice, or that no assignment could be made.

use crate::prelude::*;
use allot_core::MessageTemplates;

#[tokio::test]
async fn each_participant_sees_their_own_outcome() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    let messages = scenario.sent_messages();
    assert_eq!(messages.len(), 3);
    assert_message_contains(&messages, "s1", "Choice 1");
    assert_message_contains(&messages, "s2", "Choice 2");
    assert_message_contains(&messages, "s3", "could not");
    assert_no_message_for_user(&messages, "s4");
}

#[tokio::test]
async fn allocated_participant_sees_choice_explanation() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    let messages = scenario.sent_messages();
    assert_message_contains(&messages, "s1", "This is Choice 1");
    assert_message_contains(&messages, "s2", "This is Choice 2");
}

#[tokio::test]
async fn unallocated_participant_sees_no_other_students_choice() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    let body = scenario
        .sent_messages()
        .into_iter()
        .find(|m| m.recipient == "s3")
        .unwrap()
        .body;
    assert!(!body.contains("Choice 1"));
    assert!(!body.contains("Choice 2"));
}

#[tokio::test]
async fn bodies_link_to_the_activity_and_course() {
    let scenario = Scenario::new();
    scenario
        .store
        .insert(two_choice_scenario(MessageTemplates::default()));

    scenario.publish("ra1").await.unwrap();

    let messages = scenario.sent_messages();
    assert_message_contains(&messages, "s1", &format!("{BASE_URL}/activity/ra1"));
    assert_message_contains(&messages, "s1", &format!("{BASE_URL}/course/c1"));

    // The email HTML body renders the same activity link as an anchor.
    let email = scenario
        .sent_emails()
        .into_iter()
        .find(|e| e.recipient == "s1")
        .unwrap();
    assert!(email
        .body_html
        .contains(&format!("<a href=\"{BASE_URL}/activity/ra1\">")));
}
