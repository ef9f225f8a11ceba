//! Pure string utilities for contact label derivation

use crate::constants::{LABEL_ID_SEPARATOR, MAX_LABEL_LENGTH};

/// Normalize free text into an identifier-safe slug.
///
/// Lowercases the input, keeps ASCII alphanumerics, and collapses every
/// other run of characters into a single `-`. The result is capped at
/// `MAX_LABEL_LENGTH` and stripped of leading and trailing dashes.
///
/// # Examples
///
/// ```
/// use gotosync_domain::utils::label::clean_string;
///
/// assert_eq!(clean_string("Q3 Webinar!"), "q3-webinar");
/// assert_eq!(clean_string("Café & Croissants"), "caf-croissants");
/// assert_eq!(clean_string("---"), "");
/// ```
#[must_use]
pub fn clean_string(text: &str) -> String {
    let mut slug = String::with_capacity(text.len().min(MAX_LABEL_LENGTH));
    let mut last_was_dash = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    slug.truncate(MAX_LABEL_LENGTH);
    slug.trim_matches('-').to_string()
}

/// Label used to tag synchronized contacts: `<slug>_#<event-id>`.
///
/// The slug comes from the event description; the raw event id is appended
/// untouched so downstream systems can recover it.
///
/// # Examples
///
/// ```
/// use gotosync_domain::utils::label::event_label;
///
/// assert_eq!(event_label("Q3 Webinar!", "7"), "q3-webinar_#7");
/// ```
#[must_use]
pub fn event_label(description: &str, event_id: &str) -> String {
    format!("{}{}{}", clean_string(description), LABEL_ID_SEPARATOR, event_id)
}
