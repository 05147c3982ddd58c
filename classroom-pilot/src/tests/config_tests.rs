use super::test_options;
use crate::{AutomationError, ControllerOptions, Coordinate, TimingOptions};

const MINIMAL_CONFIG: &str = r#"{
    "tutor_profile": { "first_name": "Jamie", "last_initial": "R" },
    "coords": {
        "public_chat_pop_out": { "x": 1890, "y": 40 },
        "public_chat_text_box": { "x": 1700, "y": 980 },
        "end_session_button": { "x": 60, "y": 20 },
        "confirm_end_session_button": { "x": 960, "y": 600 }
    }
}"#;

#[test]
fn optional_sections_fall_back_to_defaults() {
    let options: ControllerOptions = serde_json::from_str(MINIMAL_CONFIG).unwrap();

    assert_eq!(options.timing, TimingOptions::default());
    assert_eq!(options.timing.stall_threshold, 2);
    assert!(options.coords.insert_code_editor_path.is_empty());
    assert_eq!(options.coords.public_chat_pop_out, Coordinate::new(1890, 40));
    assert!(options.validate().is_ok());
}

#[test]
fn partial_timing_keeps_remaining_defaults() {
    let json = MINIMAL_CONFIG.replacen(
        r#""coords""#,
        r#""timing": { "stall_threshold": 3 }, "coords""#,
        1,
    );
    let options: ControllerOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(options.timing.stall_threshold, 3);
    assert_eq!(options.timing.action_settle_ms, 1000);
}

#[test]
fn tutor_display_name() {
    assert_eq!(test_options().tutor_profile.display_name(), "Jamie R.");
}

#[test]
fn validation_rejects_bad_profiles_and_paths() {
    let mut options = test_options();
    options.tutor_profile.first_name = "  ".to_string();
    assert!(matches!(
        options.validate(),
        Err(AutomationError::InvalidArgument(_))
    ));

    let mut options = test_options();
    options.coords.insert_code_editor_path = vec![Coordinate::new(1, 1)];
    assert!(matches!(
        options.validate(),
        Err(AutomationError::InvalidArgument(_))
    ));
}
