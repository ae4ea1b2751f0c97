//! Submission endpoint reply handling
//!
//! The client-side geofence check is an optimistic pre-check only; the server
//! re-runs it and its decision is the one that gates persistence. A 422-style
//! rejection carries the server-recomputed distance and radius, which the UI
//! re-hydrates into its local `GeoCheckResult` so the display reflects the
//! authoritative check rather than a stale client-side one. Transport errors
//! are a separate, terminal failure and never look like a guard denial.

use crate::domain::error::SubmitError;
use crate::domain::types::GeoCheckResult;
use serde::Deserialize;
use tracing::{info, warn};

/// Body of a 422-style rejection from the submission endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RejectionBody {
    pub message: String,
    /// Server-recomputed distance to the asset, meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Radius the server compared against, meters
    #[serde(default)]
    pub valid_radius: Option<f64>,
    /// Bearing back to the asset, when the server includes it
    #[serde(default)]
    pub bearing: Option<f64>,
}

/// Parsed outcome of a submission attempt
#[derive(Debug)]
pub enum SubmitReply {
    Accepted,
    Rejected(RejectionBody),
}

/// Classify an HTTP-level reply from the submission endpoint.
///
/// 2xx is accepted; 422 with a parseable body is a rejection carrying the
/// server's geofence echo; anything else is a transport/server failure.
pub fn parse_reply(status: u16, body: &str) -> Result<SubmitReply, SubmitError> {
    if (200..300).contains(&status) {
        info!(status = %status, "submission_accepted");
        return Ok(SubmitReply::Accepted);
    }

    if status == 422 {
        let rejection: RejectionBody = serde_json::from_str(body)
            .map_err(|e| SubmitError::Transport(format!("unparseable 422 body: {e}")))?;

        warn!(
            message = %rejection.message,
            distance = ?rejection.distance,
            valid_radius = ?rejection.valid_radius,
            "submission_rejected"
        );

        return Ok(SubmitReply::Rejected(rejection));
    }

    Err(SubmitError::Transport(format!("submission failed with status {status}")))
}

impl RejectionBody {
    /// Re-hydrate a local `GeoCheckResult` from the server's echo, when the
    /// rejection was geofence-based. Returns `None` for rejections that carry
    /// no recomputed distance (e.g. validation of other fields).
    pub fn rehydrate_geo(&self) -> Option<GeoCheckResult> {
        let distance = self.distance?;
        let valid_radius = self.valid_radius?;

        Some(GeoCheckResult {
            distance_meters: distance.round(),
            bearing_degrees: self.bearing.unwrap_or(0.0),
            is_within_radius: distance <= valid_radius,
        })
    }

    pub fn into_error(self) -> SubmitError {
        SubmitError::Rejected {
            message: self.message,
            distance_meters: self.distance,
            valid_radius_meters: self.valid_radius,
        }
    }
}
