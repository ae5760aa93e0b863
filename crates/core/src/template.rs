// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder template rendering

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex pattern for ##token## placeholders (e.g. `##firstname##`, `##link-html##`)
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"##([a-zA-Z][a-zA-Z0-9-]*)##").expect("constant regex pattern is valid")
});

/// Phrase substituted for `##choice##` when the recipient has no allocation.
pub const UNALLOCATED_PHRASE: &str = "You could not be assigned to any choice.";

/// Built-in subject template, used when no custom subject is configured.
pub const DEFAULT_SUBJECT: &str = "Results published for ##activityname##";

/// Built-in plain-body template, used when no custom body is configured.
pub const DEFAULT_BODY: &str = "\
Hello ##firstname## ##lastname##,

the allocation results for ##activityname## in ##coursename## have been published.

##choice##
##choiceexplanation##

You can review your result at ##link##.
Course overview: ##courselink##
";

/// Built-in HTML-body template, used when no custom HTML body is configured.
pub const DEFAULT_BODY_HTML: &str = "\
<p>Hello ##firstname## ##lastname##,</p>
<p>the allocation results for ##link-html## in ##courselink-html## have been published.</p>
<p>##choice##<br>##choiceexplanation##</p>
";

/// Render `##token##` placeholders with values from the vars map.
///
/// Unknown tokens are left as-is. Substitution happens in a single
/// pass, so a substituted value is never re-scanned for tokens.
pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            let token = &caps[1];
            match vars.get(token) {
                Some(val) => val.clone(),
                None => caps[0].to_string(),
            }
        })
        .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
