//! End-to-end admission flow: reading -> geofence -> guard -> dispatch

use apar_inspect::domain::{
    Coordinate, DenialReason, EvidenceRequirements, EvidenceSet, GeofenceConfig, SubmitError,
};
use apar_inspect::io::server_reply::{parse_reply, SubmitReply};
use apar_inspect::services::{GeofenceValidator, SubmissionGuard, SubmissionLatch};

fn asset_fence() -> GeofenceConfig {
    GeofenceConfig {
        center: Coordinate::new(-6.2000, 106.8000),
        radius_meters: 100.0,
    }
}

#[test]
fn test_inside_fence_with_full_evidence_is_admitted() {
    let guard = SubmissionGuard::new(EvidenceRequirements { photo: true, selfie: true });

    // ~30m from the asset
    let reading = Coordinate::new(-6.20027, 106.8000);
    let geo = GeofenceValidator::check(reading, &asset_fence());
    assert!(geo.is_within_radius);

    let evidence = EvidenceSet {
        photo_present: true,
        selfie_present: true,
        damage_records: vec![],
    };

    let decision = guard.evaluate(&evidence, true, Some(&geo));
    assert!(decision.allowed);

    // Guard passed, so the latch may open exactly one attempt
    let latch = SubmissionLatch::new();
    let permit = latch.begin().expect("first submit admitted");
    let double_fire = latch.begin().ok_or(SubmitError::AlreadyInFlight).map(|_| ());
    assert!(matches!(double_fire, Err(SubmitError::AlreadyInFlight)));
    drop(permit);
}

#[test]
fn test_far_away_sees_distance_and_direction() {
    let guard = SubmissionGuard::default();

    // ~1km north of the asset
    let reading = Coordinate::new(-6.1910, 106.8000);
    let geo = GeofenceValidator::check(reading, &asset_fence());

    assert!(!geo.is_within_radius);
    assert!(geo.distance_meters > 900.0);
    // Asset is south of the technician
    assert!((geo.bearing_degrees - 180.0).abs() < 1.0);

    let evidence = EvidenceSet { photo_present: true, ..Default::default() };
    let decision = guard.evaluate(&evidence, true, Some(&geo));

    assert!(!decision.allowed);
    assert!(decision.denied_for(DenialReason::LocationOutOfRadius));
}

#[test]
fn test_server_rejection_overrides_optimistic_client_check() {
    // Client-side check passed, but the server recomputed a larger distance
    // (asset was relocated): its echo is re-hydrated as the new local state.
    let reading = Coordinate::new(-6.20027, 106.8000);
    let client_geo = GeofenceValidator::check(reading, &asset_fence());
    assert!(client_geo.is_within_radius);

    let body = r#"{
        "message": "Anda berada di luar radius lokasi APAR",
        "distance": 240.7,
        "valid_radius": 100.0,
        "bearing": 45.0
    }"#;

    let SubmitReply::Rejected(rejection) = parse_reply(422, body).unwrap() else {
        panic!("expected rejection");
    };
    let server_geo = rejection.rehydrate_geo().unwrap();

    assert!(!server_geo.is_within_radius);
    assert_eq!(server_geo.distance_meters, 241.0);

    // Re-evaluating with the authoritative result now denies the submission
    let guard = SubmissionGuard::new(EvidenceRequirements { photo: false, selfie: false });
    let decision = guard.evaluate(&EvidenceSet::default(), true, Some(&server_geo));
    assert!(decision.denied_for(DenialReason::LocationOutOfRadius));
}
