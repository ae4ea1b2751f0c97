//! Admission control for inspection submissions
//!
//! Combines evidence completeness with the geofence check outcome to decide
//! whether a submission may proceed. Every rule is checked independently so a
//! denial lists all outstanding problems at once. The decision is recomputed
//! on every input change (new photo, new reading, asset swapped) and must
//! never be cached across changes.
//!
//! Also home to the in-flight latch that rejects a second submit while one is
//! pending. The latch is client-side only; server idempotency is out of scope.

use crate::domain::types::{
    DenialReason, EvidenceRequirements, EvidenceSet, GeoCheckResult, SubmissionDecision,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Evaluates whether an inspection submission is admissible
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    requirements: EvidenceRequirements,
}

impl SubmissionGuard {
    pub fn new(requirements: EvidenceRequirements) -> Self {
        Self { requirements }
    }

    /// Evaluate the current form state.
    ///
    /// `geofence_required` is false for mobile assets, which are exempt from
    /// location gating; `geo_result` is `None` until a reading has been
    /// checked. `allowed` holds exactly when no denial reason applies.
    pub fn evaluate(
        &self,
        evidence: &EvidenceSet,
        geofence_required: bool,
        geo_result: Option<&GeoCheckResult>,
    ) -> SubmissionDecision {
        let mut reasons: smallvec::SmallVec<[DenialReason; 4]> = smallvec::SmallVec::new();

        if self.requirements.photo && !evidence.photo_present {
            reasons.push(DenialReason::MissingPhoto);
        }

        if self.requirements.selfie && !evidence.selfie_present {
            reasons.push(DenialReason::MissingSelfie);
        }

        if geofence_required {
            match geo_result {
                None => reasons.push(DenialReason::LocationNotValidated),
                Some(geo) if !geo.is_within_radius => {
                    reasons.push(DenialReason::LocationOutOfRadius);
                }
                Some(_) => {}
            }
        }

        let allowed = reasons.is_empty();

        debug!(
            allowed = %allowed,
            reasons = ?reasons.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
            "submission_evaluated"
        );

        SubmissionDecision { allowed, reasons }
    }
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new(EvidenceRequirements::default())
    }
}

/// Guards against duplicate-fire: a second submit while one is in flight is
/// rejected. Cloneable; clones share the same latch.
#[derive(Debug, Clone, Default)]
pub struct SubmissionLatch {
    in_flight: Arc<AtomicBool>,
}

/// Permit for a single submission attempt; releases the latch on drop
#[derive(Debug)]
pub struct SubmissionPermit {
    attempt_id: String,
    in_flight: Arc<AtomicBool>,
}

impl SubmissionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to begin a submission attempt.
    ///
    /// Returns `None` when an attempt is already in flight. The permit carries
    /// a UUIDv7 attempt id for log correlation and releases the latch when
    /// dropped, whether the attempt succeeded or failed.
    pub fn begin(&self) -> Option<SubmissionPermit> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            warn!("submission_duplicate_fire_rejected");
            return None;
        }

        let attempt_id = Uuid::now_v7().to_string();
        info!(attempt_id = %attempt_id, "submission_attempt_started");

        Some(SubmissionPermit {
            attempt_id,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl SubmissionPermit {
    pub fn attempt_id(&self) -> &str {
        &self.attempt_id
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
        debug!(attempt_id = %self.attempt_id, "submission_attempt_settled");
    }
}
