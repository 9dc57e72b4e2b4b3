//! Response template expansion.
//!
//! A template is plain text with `%N` markers, N a single decimal digit naming
//! a capture group. Markers are expanded left to right with the reflected text
//! of the group. The first marker that is not followed by an in-range digit
//! ends expansion; it and everything after it are kept verbatim.

use crate::reflection::Reflections;

/// Expands `%N` markers in `template` with reflected capture groups.
///
/// `groups[0]` is the whole match and `groups[1..]` the parenthesized
/// captures. Inserted text is never rescanned, so a `%` typed by the user
/// comes back literally.
#[must_use]
pub fn substitute(template: &str, groups: &[&str], reflections: &Reflections) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        let group = rest[pos + 1..]
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .and_then(|n| groups.get(n as usize));

        let Some(text) = group else {
            break;
        };

        out.push_str(&rest[..pos]);
        out.push_str(&reflections.translate(text));
        // '%' and an ASCII digit are one byte each
        rest = &rest[pos + 2..];
    }

    out.push_str(rest);
    out
}

/// Repairs doubled terminal punctuation left behind by substitution.
///
/// A trailing `?.` becomes `.` and a trailing `??` becomes `?`, repeated
/// until neither applies.
#[must_use]
pub fn fix_punctuation(mut text: String) -> String {
    loop {
        if text.ends_with("?.") {
            text.truncate(text.len() - 2);
            text.push('.');
        } else if text.ends_with("??") {
            text.pop();
        } else {
            return text;
        }
    }
}
