//! Error taxonomy for location acquisition and submission dispatch
//!
//! Guard denials (missing evidence, out of radius) are not errors: they mean
//! "not yet eligible to submit" and live in `SubmissionDecision`. The types
//! here cover the cases where an attempt itself fails.

use thiserror::Error;

/// Failure to obtain a usable position reading.
///
/// `Stale` must trigger a fresh acquisition, never a pass/fail against the
/// geofence; `Unavailable` is surfaced as its own UI state, distinct from a
/// geofence failure.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("positioning source unavailable: {0}")]
    Unavailable(String),

    #[error("reading is {age_secs}s old, exceeds max age of {max_age_secs}s")]
    Stale { age_secs: i64, max_age_secs: i64 },
}

/// Failure of a submission attempt after the guard allowed it.
///
/// Kept separate from guard denials: a `Transport` error is terminal and
/// user-visible, while a `Rejected` reply carries the server's authoritative
/// geofence echo for re-hydration.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission transport failed: {0}")]
    Transport(String),

    #[error("submission rejected by server: {message}")]
    Rejected {
        message: String,
        /// Server-recomputed distance in meters, when the rejection was geofence-based
        distance_meters: Option<f64>,
        /// Server-side radius the distance was compared against
        valid_radius_meters: Option<f64>,
    },

    #[error("a submission is already in flight")]
    AlreadyInFlight,
}
