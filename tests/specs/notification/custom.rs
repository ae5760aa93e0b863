//! Custom-template content specs
//!
//! With custom messages enabled, every placeholder token resolves to
//! the per-recipient value, in both the plain and the HTML variant.

use crate::prelude::*;
use allot_core::MessageTemplates;

const CUSTOM_TEXT: &str = "This ##firstname## is ##lastname## a ##choice## test \
##choiceexplanation## string ##activityname## for ##link## the ##coursename## \
variable ##courselink## substitution";

const CUSTOM_TEXT_HTML: &str = "This ##firstname## is ##lastname## a ##choice## test \
##choiceexplanation## string ##activityname## for ##link-html## the ##coursename## \
variable ##courselink-html## substitution";

fn custom_templates() -> MessageTemplates {
    MessageTemplates::custom(CUSTOM_TEXT, CUSTOM_TEXT, CUSTOM_TEXT_HTML)
}

#[tokio::test]
async fn custom_template_notifies_exactly_the_raters() {
    let scenario = Scenario::new();
    scenario.store.insert(two_choice_scenario(custom_templates()));

    scenario.publish("ra1").await.unwrap();

    assert_eq!(scenario.sent_messages().len(), 3);
    assert_eq!(scenario.sent_emails().len(), 3);
    assert_no_message_for_user(&scenario.sent_messages(), "s4");
    assert_no_email_for_user(&scenario.sent_emails(), "s4");
}

#[tokio::test]
async fn every_token_resolves_for_allocated_students() {
    let scenario = Scenario::new();
    scenario.store.insert(two_choice_scenario(custom_templates()));

    scenario.publish("ra1").await.unwrap();
    let messages = scenario.sent_messages();

    // Token by token, anchored on the surrounding words.
    assert_message_contains(&messages, "s1", "This Ada is");
    assert_message_contains(&messages, "s1", "is Lovelace a");
    assert_message_contains(&messages, "s1", "a Choice 1 test");
    assert_message_contains(&messages, "s1", "test This is Choice 1 string");
    assert_message_contains(&messages, "s2", "This Grace is");
    assert_message_contains(&messages, "s2", "is Hopper a");
    assert_message_contains(&messages, "s2", "a Choice 2 test");
    assert_message_contains(&messages, "s2", "test This is Choice 2 string");

    for student in ["s1", "s2", "s3"] {
        assert_message_contains(&messages, student, "string Seminar allocation for");
        assert_message_contains(
            &messages,
            student,
            &format!("for {BASE_URL}/activity/ra1 the"),
        );
        assert_message_contains(&messages, student, "the SE101 variable");
        assert_message_contains(
            &messages,
            student,
            &format!("variable {BASE_URL}/course/c1 substitution"),
        );
    }
}

#[tokio::test]
async fn unallocated_student_gets_fallback_and_empty_explanation() {
    let scenario = Scenario::new();
    scenario.store.insert(two_choice_scenario(custom_templates()));

    scenario.publish("ra1").await.unwrap();
    let messages = scenario.sent_messages();

    assert_message_contains(
        &messages,
        "s3",
        "a You could not be assigned to any choice. test",
    );
    assert_message_contains(&messages, "s3", "test  string");
}

#[tokio::test]
async fn html_variant_uses_anchor_links() {
    let scenario = Scenario::new();
    scenario.store.insert(two_choice_scenario(custom_templates()));

    scenario.publish("ra1").await.unwrap();

    let email = scenario
        .sent_emails()
        .into_iter()
        .find(|e| e.recipient == "s1")
        .unwrap();
    assert!(email.body_html.contains(&format!(
        "for <a href=\"{BASE_URL}/activity/ra1\">Seminar allocation</a> the"
    )));
    assert!(email.body_html.contains(&format!(
        "variable <a href=\"{BASE_URL}/course/c1\">SE101</a> substitution"
    )));
    // The plain body keeps plain URLs.
    assert!(email.body.contains(&format!("for {BASE_URL}/activity/ra1 the")));
}

#[tokio::test]
async fn subject_resolves_tokens_too() {
    let scenario = Scenario::new();
    scenario.store.insert(two_choice_scenario(custom_templates()));

    scenario.publish("ra1").await.unwrap();

    let subject = scenario
        .sent_messages()
        .into_iter()
        .find(|m| m.recipient == "s1")
        .unwrap()
        .subject;
    assert!(subject.contains("This Ada is"));
    assert!(subject.contains("the SE101 variable"));
}

#[tokio::test]
async fn disabled_flag_ignores_custom_templates() {
    let scenario = Scenario::new();
    let templates = MessageTemplates {
        custom_enabled: false,
        ..custom_templates()
    };
    scenario.store.insert(two_choice_scenario(templates));

    scenario.publish("ra1").await.unwrap();

    let messages = scenario.sent_messages();
    // Default template content, not the custom marker words.
    assert!(!messages[0].body.contains("variable"));
    assert_message_contains(&messages, "s1", "Choice 1");
    assert_message_contains(&messages, "s3", "could not");
}
