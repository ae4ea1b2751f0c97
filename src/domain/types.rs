//! Shared types for the inspection admission engine

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Newtype wrapper for APAR asset IDs to provide type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AssetId(pub i64);

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype wrapper for schedule IDs to provide type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ScheduleId(pub i64);

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype wrapper for inspector (technician) IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct InspectorId(pub i64);

impl std::fmt::Display for InspectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A WGS84 coordinate in decimal degrees.
///
/// No range clamping or validation: the console accepts whatever the
/// positioning API reports, and the engine preserves that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A position reading produced by the device positioning API
#[derive(Debug, Clone, Copy)]
pub struct LocationReading {
    pub coordinate: Coordinate,
    pub captured_at: std::time::Instant,
}

impl LocationReading {
    pub fn age(&self, now: std::time::Instant) -> std::time::Duration {
        now.saturating_duration_since(self.captured_at)
    }
}

/// Whether an asset is installed at a fixed point or moves with a vehicle/crew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Fixed installation with a configured geofence
    Static,
    /// Mobile unit, exempt from location gating
    Mobile,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Static => "static",
            AssetKind::Mobile => "mobile",
        }
    }
}

/// Circular geofence attached to a static asset.
///
/// Mobile assets carry no config; callers branch on its absence rather than
/// passing a permissive default through the validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    pub center: Coordinate,
    pub radius_meters: f64,
}

/// Outcome of checking one location reading against an asset geofence.
///
/// Derived per reading and never persisted; the asset or the technician may
/// have moved by the next call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCheckResult {
    /// Distance to the asset center, rounded to the nearest meter for display
    pub distance_meters: f64,
    /// Compass direction the technician must travel to reach the asset, [0, 360)
    pub bearing_degrees: f64,
    /// Inclusive comparison against the raw (unrounded) distance
    pub is_within_radius: bool,
}

/// Evidence captured so far for an inspection submission
#[derive(Debug, Clone, Default)]
pub struct EvidenceSet {
    pub photo_present: bool,
    pub selfie_present: bool,
    pub damage_records: Vec<DamageRecord>,
}

/// A damage finding attached to an inspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageRecord {
    pub part: String,
    pub description: String,
}

/// Which evidence slots a submission must fill, per asset kind and site config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRequirements {
    pub photo: bool,
    pub selfie: bool,
}

impl Default for EvidenceRequirements {
    fn default() -> Self {
        Self { photo: true, selfie: false }
    }
}

/// A single reason a submission is not yet eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DenialReason {
    MissingPhoto,
    MissingSelfie,
    LocationNotValidated,
    LocationOutOfRadius,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::MissingPhoto => "missing_photo",
            DenialReason::MissingSelfie => "missing_selfie",
            DenialReason::LocationNotValidated => "location_not_validated",
            DenialReason::LocationOutOfRadius => "location_out_of_radius",
        }
    }
}

/// Admit/deny decision for an inspection submission.
///
/// A submission can be denied for several reasons at once; the UI renders all
/// of them so the technician can fix everything in one pass.
#[derive(Debug, Clone)]
pub struct SubmissionDecision {
    pub allowed: bool,
    pub reasons: SmallVec<[DenialReason; 4]>,
}

impl SubmissionDecision {
    pub fn denied_for(&self, reason: DenialReason) -> bool {
        self.reasons.contains(&reason)
    }
}

/// Aggregate outcome of a bulk operation (delete N records, notify N recipients).
///
/// Every item is attempted regardless of the others' outcomes; nothing is
/// rolled back. The caller reports both counts and refreshes the underlying
/// collection once, after the whole batch has settled.
#[derive(Debug, Clone)]
pub struct BulkOperationResult<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<(T, String)>,
}

impl<T> BulkOperationResult<T> {
    pub fn new() -> Self {
        Self { succeeded: Vec::new(), failed: Vec::new() }
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<T> Default for BulkOperationResult<T> {
    fn default() -> Self {
        Self::new()
    }
}
