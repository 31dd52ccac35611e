//! Reply classifier — deterministic mapping from assistant free text to a
//! semantic outcome.
//!
//! Classification is substring-based and **case-sensitive**: the marker
//! strings below are the assistant's fixed phrasing, and changing them breaks
//! compatibility with the upstream vocabulary. Unrecognized text is always
//! [`Activity::Unknown`], never a guess.

/// Poll phrase asking whether the vacuum sits on its dock.
pub const DOCKED_QUERY: &str = "Is vacuum docked?";
/// Poll phrase asking what the vacuum is currently doing.
pub const ACTIVITY_QUERY: &str = "What is vacuum doing?";

/// Reply marker meaning the vacuum is on the dock.
pub const DOCKED_MARKER: &str = "is docked";
/// Reply marker meaning the vacuum is actively cleaning.
pub const RUNNING_MARKER: &str = "is running";
/// Reply marker meaning the vacuum is paused mid-run.
pub const PAUSED_MARKER: &str = "is paused";
/// Reply marker meaning the vacuum is neither docked nor running.
pub const NOT_RUNNING_MARKER: &str = "isn't running";

/// Outcome of classifying an activity-query reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Cleaning,
    Paused,
    Idle,
    /// None of the known markers matched. Callers must escalate this rather
    /// than coerce it to a state.
    Unknown,
}

/// Whether a command reply contains the expected ack marker.
///
/// Absence of the marker means the command was not accepted — a normal
/// boolean failure, not an error.
#[must_use]
pub fn command_acknowledged(text: &str, marker: &str) -> bool {
    text.contains(marker)
}

/// Whether a docked-query reply reports the vacuum as docked.
#[must_use]
pub fn reports_docked(text: &str) -> bool {
    text.contains(DOCKED_MARKER)
}

/// Classify an activity-query reply into a semantic outcome.
#[must_use]
pub fn classify_activity(text: &str) -> Activity {
    if text.contains(RUNNING_MARKER) {
        Activity::Cleaning
    } else if text.contains(PAUSED_MARKER) {
        Activity::Paused
    } else if text.contains(NOT_RUNNING_MARKER) {
        Activity::Idle
    } else {
        Activity::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_acknowledge_when_marker_contained() {
        assert!(command_acknowledged("Ok, starting now", "starting"));
        assert!(command_acknowledged("starting", "starting"));
    }

    #[test]
    fn should_not_acknowledge_when_marker_absent() {
        assert!(!command_acknowledged("Sorry, I can't help with that", "starting"));
        assert!(!command_acknowledged("", "starting"));
    }

    #[test]
    fn should_match_markers_case_sensitively() {
        assert!(!command_acknowledged("Ok, Starting now", "starting"));
        assert!(!reports_docked("The vacuum Is Docked"));
    }

    #[test]
    fn should_report_docked_when_marker_contained() {
        assert!(reports_docked("The vacuum is docked and charging"));
        assert!(!reports_docked("The vacuum is running"));
    }

    #[test]
    fn should_classify_running_reply_as_cleaning() {
        assert_eq!(
            classify_activity("The vacuum is running"),
            Activity::Cleaning
        );
    }

    #[test]
    fn should_classify_paused_reply_as_paused() {
        assert_eq!(classify_activity("The vacuum is paused"), Activity::Paused);
    }

    #[test]
    fn should_classify_not_running_reply_as_idle() {
        assert_eq!(
            classify_activity("The vacuum isn't running"),
            Activity::Idle
        );
    }

    #[test]
    fn should_classify_unrecognized_reply_as_unknown() {
        assert_eq!(
            classify_activity("I found a few results for vacuum"),
            Activity::Unknown
        );
        assert_eq!(classify_activity(""), Activity::Unknown);
    }

    #[test]
    fn should_prefer_running_marker_over_later_markers() {
        // When several markers appear, the first checked wins.
        assert_eq!(
            classify_activity("is running but also is paused"),
            Activity::Cleaning
        );
    }
}
