//! Reference store round trips over full render scenarios.

use wireframe::regression::{CheckOutcome, ReferenceStore};
use wireframe::*;

fn square() -> Model {
    Model::closed_loop(vec![
        DVec3::new(-0.5, -0.5, 0.0),
        DVec3::new(0.5, -0.5, 0.0),
        DVec3::new(0.5, 0.5, 0.0),
        DVec3::new(-0.5, 0.5, 0.0),
    ])
}

#[test]
fn scenario_generates_then_passes() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = ReferenceStore::new(dir.path().join("references"));
    let mut config = RenderConfig::default();
    config.camera.translation = DVec3::new(1.5, 1.0, -5.0);
    config.camera.yaw = -0.15;
    config.camera.pitch = 0.11;

    let first = store.check_scenario("rotation", &square(), &config).unwrap();
    assert_eq!(first.camera_space, CheckOutcome::Generated);
    assert_eq!(first.projections, CheckOutcome::Generated);
    assert_eq!(first.render, CheckOutcome::Generated);
    assert!(first.passed());

    let second = store.check_scenario("rotation", &square(), &config).unwrap();
    assert_eq!(second.camera_space, CheckOutcome::Passed);
    assert_eq!(second.projections, CheckOutcome::Passed);
    assert_eq!(second.render, CheckOutcome::Passed);
}

#[test]
fn scenario_detects_camera_change() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReferenceStore::new(dir.path());
    let config = RenderConfig::default();
    store.check_scenario("square", &square(), &config).unwrap();

    let mut moved = config;
    moved.camera.move_local(LocalDirection::Right, 1);
    let report = store.check_scenario("square", &square(), &moved).unwrap();
    assert!(!report.passed());
    assert!(matches!(report.camera_space, CheckOutcome::Failed(_)));
    assert!(matches!(report.projections, CheckOutcome::Failed(_)));
    assert!(matches!(report.render, CheckOutcome::Failed(_)));
    assert!(store.reference_path("square", "diff.png").exists());
}

#[test]
fn absent_points_survive_reference_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = ReferenceStore::new(dir.path());
    let mut config = RenderConfig::default();
    config.camera.translation = DVec3::new(0.0, 0.0, 5.0);

    let report = store.check_scenario("behind", &square(), &config).unwrap();
    assert_eq!(report.projections, CheckOutcome::Generated);

    let stored = std::fs::read_to_string(store.reference_path("behind", "projection.json")).unwrap();
    let parsed: Vec<ProjectedPoint> = serde_json::from_str(&stored).unwrap();
    assert_eq!(parsed, vec![ProjectedPoint::Absent; 4]);

    let again = store.check_scenario("behind", &square(), &config).unwrap();
    assert!(again.passed());
}
