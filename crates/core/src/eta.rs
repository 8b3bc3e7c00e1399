//! Wait-time estimation: constants, the linear heuristic, and display
//! formatting.
//!
//! The same estimate is used for the quote frozen at join time and for the
//! live ETA; neither is revised afterwards.

// ---------------------------------------------------------------------------
// Heuristic constants
// ---------------------------------------------------------------------------

/// Minimum quoted wait in minutes; also the base wait for the head of the
/// queue.
pub const BASE_WAIT_MINS: i32 = 5;

/// Additional minutes per party ahead in the queue.
pub const MINS_PER_PARTY_AHEAD: i32 = 3;

/// Cap on the party-size penalty: parties of 7+ add no further minutes.
pub const PARTY_SIZE_FACTOR_CAP: i32 = 6;

/// Default rolling average wait assigned to a freshly created waitlist.
pub const DEFAULT_AVG_WAIT_MINS: i32 = 15;

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimate the wait in minutes for a party joining at `position` (1-based).
///
/// `base + 3 * parties_ahead + party_size_factor`, floored at
/// [`BASE_WAIT_MINS`]. The party-size factor is `party_size - 1` capped at
/// [`PARTY_SIZE_FACTOR_CAP`].
pub fn estimate_wait_mins(position: i32, party_size: i32) -> i32 {
    let parties_ahead = position - 1;
    let party_size_factor = (party_size - 1).min(PARTY_SIZE_FACTOR_CAP);

    BASE_WAIT_MINS.max(BASE_WAIT_MINS + MINS_PER_PARTY_AHEAD * parties_ahead + party_size_factor)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format a wait in minutes for display: `"45m"`, `"1h"`, `"1h 30m"`.
pub fn format_wait_mins(minutes: i32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remaining}m")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
