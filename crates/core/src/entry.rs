//! Waitlist entry status machine.
//!
//! [`EntryStatus`] is the tagged representation of an entry's lifecycle
//! state, and [`validate_transition`] is the single gate every mutation
//! goes through. Statuses are stored as lowercase strings in the database;
//! [`EntryStatus::as_str`] / [`EntryStatus::parse`] convert at the
//! repository boundary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a waitlist entry.
///
/// `Waiting` and `Paged` are live states; `Seated`, `NoShow`, and
/// `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Waiting,
    Paged,
    Seated,
    NoShow,
    Cancelled,
}

impl EntryStatus {
    /// The lowercase string stored in `waitlist_entries.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Paged => "paged",
            Self::Seated => "seated",
            Self::NoShow => "no_show",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a stored status string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "paged" => Ok(Self::Paged),
            "seated" => Ok(Self::Seated),
            "no_show" => Ok(Self::NoShow),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(CoreError::Internal(format!(
                "Unknown entry status in storage: {other}"
            ))),
        }
    }

    /// Whether this status permits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Seated | Self::NoShow | Self::Cancelled)
    }

    /// The update-log record type written when an entry enters this status.
    pub fn update_type(self) -> &'static str {
        match self {
            Self::Waiting => "joined",
            other => other.as_str(),
        }
    }

    /// The audit event type written when an entry enters this status.
    pub fn event_type(self) -> &'static str {
        match self {
            Self::Waiting => "entry_join",
            Self::Paged => "entry_paged",
            Self::Seated => "entry_seated",
            Self::NoShow => "entry_no_show",
            Self::Cancelled => "entry_cancel",
        }
    }
}

// ---------------------------------------------------------------------------
// Join source
// ---------------------------------------------------------------------------

/// How a party joined the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinSource {
    Remote,
    Onsite,
    Staff,
}

impl JoinSource {
    /// The lowercase string stored in `waitlist_entries.join_source`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Onsite => "onsite",
            Self::Staff => "staff",
        }
    }
}

// ---------------------------------------------------------------------------
// Transition validation
// ---------------------------------------------------------------------------

/// Whether `from -> to` is a legal lifecycle move.
///
/// Waiting entries may be paged or pushed straight to any terminal state
/// (staff seat walk-ups without paging); paged entries may only resolve to
/// a terminal state. Terminal states permit nothing.
pub fn can_transition(from: EntryStatus, to: EntryStatus) -> bool {
    use EntryStatus::*;
    match (from, to) {
        (Waiting, Paged | Seated | NoShow | Cancelled) => true,
        (Paged, Seated | NoShow | Cancelled) => true,
        _ => false,
    }
}

/// Validate a lifecycle move, returning a typed error for illegal ones.
pub fn validate_transition(from: EntryStatus, to: EntryStatus) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: from.as_str(),
            to: to.as_str(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use EntryStatus::*;

    #[test]
    fn status_round_trips_through_storage_strings() {
        for status in [Waiting, Paged, Seated, NoShow, Cancelled] {
            assert_eq!(EntryStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_string_is_an_internal_error() {
        assert!(EntryStatus::parse("eating").is_err());
    }

    #[test]
    fn waiting_can_move_anywhere_forward() {
        assert!(can_transition(Waiting, Paged));
        assert!(can_transition(Waiting, Seated));
        assert!(can_transition(Waiting, NoShow));
        assert!(can_transition(Waiting, Cancelled));
    }

    #[test]
    fn paged_resolves_to_terminal_states_only() {
        assert!(can_transition(Paged, Seated));
        assert!(can_transition(Paged, NoShow));
        assert!(can_transition(Paged, Cancelled));
        assert!(!can_transition(Paged, Waiting));
        assert!(!can_transition(Paged, Paged));
    }

    #[test]
    fn terminal_states_permit_nothing() {
        for from in [Seated, NoShow, Cancelled] {
            assert!(from.is_terminal());
            for to in [Waiting, Paged, Seated, NoShow, Cancelled] {
                assert!(!can_transition(from, to), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn illegal_transition_carries_both_states() {
        let err = validate_transition(Seated, Paged).unwrap_err();
        match err {
            crate::error::CoreError::InvalidTransition { from, to } => {
                assert_eq!(from, "seated");
                assert_eq!(to, "paged");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn update_and_event_types_match_storage_vocabulary() {
        assert_eq!(Waiting.update_type(), "joined");
        assert_eq!(Cancelled.update_type(), "cancelled");
        assert_eq!(Waiting.event_type(), "entry_join");
        assert_eq!(Cancelled.event_type(), "entry_cancel");
        assert_eq!(NoShow.event_type(), "entry_no_show");
    }
}
