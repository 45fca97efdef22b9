//! Config domain: tests for RON tuning parsing.

use std::path::Path;

use super::{load_tuning_file, ron_options};
use crate::player::ControllerTuning;

#[test]
fn test_parse_full_tuning() {
    let text = r#"(
        move_speed: 5.0,
        jump_impulse: 5.0,
        extra_jump_scale: 1.2,
        allowed_jumps: 2,
        ground_ray_length: 0.1,
        continuous_jump_cut: true,
    )"#;

    let tuning: ControllerTuning = ron_options().from_str(text).unwrap();
    assert_eq!(tuning.move_speed, 5.0);
    assert_eq!(tuning.allowed_jumps, 2);
    assert!(tuning.continuous_jump_cut);
}

#[test]
fn test_partial_tuning_falls_back_to_defaults() {
    let tuning: ControllerTuning = ron_options().from_str("(allowed_jumps: 3)").unwrap();
    assert_eq!(tuning.allowed_jumps, 3);
    assert_eq!(
        tuning.extra_jump_scale,
        ControllerTuning::default().extra_jump_scale
    );
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_tuning_file(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.ron"));
}
