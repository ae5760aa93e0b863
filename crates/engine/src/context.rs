// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-recipient render context.
//!
//! Collects every value the placeholder tokens resolve to for one
//! recipient, then renders the effective templates into a
//! [`Notification`]. Built independently per participant because
//! `##choice##` and `##choiceexplanation##` depend on the allocation
//! outcome.

use allot_adapters::LinkBuilder;
use allot_core::{
    render, ActivityConfig, Choice, MessageTemplates, Notification, Participant, UserId,
    UNALLOCATED_PHRASE,
};
use std::collections::HashMap;

/// Escape a string for safe embedding in HTML attribute and text
/// contexts: `&`, `<`, `>`, `"`, `'` are replaced with entities.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// HTML anchor form of a link: `<a href="URL">LABEL</a>`.
fn anchor(url: &str, label: &str) -> String {
    format!("<a href=\"{}\">{}</a>", html_escape(url), html_escape(label))
}

/// Resolved placeholder values for one recipient.
pub struct RenderContext {
    recipient: UserId,
    firstname: String,
    lastname: String,
    choice_title: String,
    choice_explanation: String,
    activity_name: String,
    activity_url: String,
    course_name: String,
    course_url: String,
}

impl RenderContext {
    /// Build the context for one participant.
    ///
    /// `choice` is the participant's allocated choice, or `None` for a
    /// participant who rated but received no allocation; the fallback
    /// phrase and an empty explanation are substituted in that case.
    pub fn build(
        activity: &ActivityConfig,
        participant: &Participant,
        choice: Option<&Choice>,
        links: &impl LinkBuilder,
    ) -> Self {
        let (choice_title, choice_explanation) = match choice {
            Some(choice) => (choice.title.clone(), choice.explanation.clone()),
            None => (UNALLOCATED_PHRASE.to_string(), String::new()),
        };
        Self {
            recipient: participant.id.clone(),
            firstname: participant.firstname.clone(),
            lastname: participant.lastname.clone(),
            choice_title,
            choice_explanation,
            activity_name: activity.name.clone(),
            activity_url: links.activity_url(&activity.id),
            course_name: activity.course.shortname.clone(),
            course_url: links.course_url(&activity.course.id),
        }
    }

    /// Token map for the subject and plain body.
    ///
    /// The `-html` link tokens are deliberately absent, so they pass
    /// through verbatim outside the HTML body.
    pub fn plain_vars(&self) -> HashMap<String, String> {
        [
            ("firstname", self.firstname.clone()),
            ("lastname", self.lastname.clone()),
            ("choice", self.choice_title.clone()),
            ("choiceexplanation", self.choice_explanation.clone()),
            ("activityname", self.activity_name.clone()),
            ("link", self.activity_url.clone()),
            ("coursename", self.course_name.clone()),
            ("courselink", self.course_url.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Token map for the HTML body: the plain tokens plus the anchor
    /// forms of both links.
    pub fn html_vars(&self) -> HashMap<String, String> {
        let mut vars = self.plain_vars();
        vars.insert(
            "link-html".to_string(),
            anchor(&self.activity_url, &self.activity_name),
        );
        vars.insert(
            "courselink-html".to_string(),
            anchor(&self.course_url, &self.course_name),
        );
        vars
    }

    /// Render the effective templates into a notification for this
    /// recipient.
    pub fn resolve(&self, templates: &MessageTemplates) -> Notification {
        let plain_vars = self.plain_vars();
        Notification {
            recipient: self.recipient.clone(),
            subject: render(templates.subject_template(), &plain_vars),
            body: render(templates.body_template(), &plain_vars),
            body_html: render(templates.body_html_template(), &self.html_vars()),
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
