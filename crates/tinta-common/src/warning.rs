//! Renderer warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the markup, layout and render components to report input they
//! could only partially honor (unknown colors, skipped markup).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about degraded input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("style", "unknown color 'bleu' for 'color', using default");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[tinta {component}] ⚠ {message}").yellow());
    }
}

/// Whether the given warning has already been printed since the last clear.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call before rendering a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("test", "first sighting");
        assert!(has_warned("test", "first sighting"));
        assert!(!has_warned("test", "never emitted"));
        assert!(!has_warned("other", "first sighting"));
    }
}
