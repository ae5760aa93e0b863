// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity configuration and custom message templates.

use crate::template;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for an allocation activity.
    ///
    /// Assigned by the host platform when the activity is created.
    pub struct ActivityId;
}

crate::define_id! {
    /// Unique identifier for the course an activity belongs to.
    pub struct CourseId;
}

/// Course linkage carried on the activity configuration.
///
/// Only the fields the notification templates need: the id (for the
/// course link) and the short display name (for `##coursename##`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub shortname: String,
}

impl Course {
    pub fn new(id: impl Into<CourseId>, shortname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shortname: shortname.into(),
        }
    }
}

/// Per-activity notification templates.
///
/// A custom field is only honored when `custom_enabled` is set AND the
/// field is non-empty; in every other case the built-in default text
/// for that field is used. The three fields are selected independently,
/// so an activity may override only the subject and keep both default
/// bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    /// Administrator flag enabling the custom fields below.
    pub custom_enabled: bool,
    /// Custom subject template.
    pub subject: Option<String>,
    /// Custom plain-text body template.
    pub body: Option<String>,
    /// Custom HTML body template.
    pub body_html: Option<String>,
}

impl MessageTemplates {
    /// Templates with the custom flag set and all three fields overridden.
    pub fn custom(
        subject: impl Into<String>,
        body: impl Into<String>,
        body_html: impl Into<String>,
    ) -> Self {
        Self {
            custom_enabled: true,
            subject: Some(subject.into()),
            body: Some(body.into()),
            body_html: Some(body_html.into()),
        }
    }

    /// Effective subject template text.
    pub fn subject_template(&self) -> &str {
        self.pick(&self.subject, template::DEFAULT_SUBJECT)
    }

    /// Effective plain-body template text.
    pub fn body_template(&self) -> &str {
        self.pick(&self.body, template::DEFAULT_BODY)
    }

    /// Effective HTML-body template text.
    pub fn body_html_template(&self) -> &str {
        self.pick(&self.body_html, template::DEFAULT_BODY_HTML)
    }

    fn pick<'a>(&self, custom: &'a Option<String>, default: &'a str) -> &'a str {
        match custom {
            Some(text) if self.custom_enabled && !text.is_empty() => text,
            _ => default,
        }
    }
}

/// Configuration of one allocation activity.
///
/// Read-only input for a dispatch run; loaded from the activity store
/// and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub id: ActivityId,
    /// Activity display name (`##activityname##`).
    pub name: String,
    pub course: Course,
    pub templates: MessageTemplates,
}

impl ActivityConfig {
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>, course: Course) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course,
            templates: MessageTemplates::default(),
        }
    }

    pub fn with_templates(mut self, templates: MessageTemplates) -> Self {
        self.templates = templates;
        self
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
