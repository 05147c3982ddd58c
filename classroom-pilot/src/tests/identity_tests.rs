use crate::identity::{parse_code_editor_title, parse_word_processor_title};
use crate::{classify, ControllerIdentity, ControllerKind, WindowTitle};

fn editor(language: &str, index: u32) -> Option<ControllerIdentity> {
    Some(ControllerIdentity::CodeEditor {
        language: language.to_string(),
        index,
    })
}

#[test]
fn classifies_known_titles() {
    assert_eq!(classify("Python Editor 3").unwrap(), editor("Python", 3));
    assert_eq!(
        classify("word processor2").unwrap(),
        Some(ControllerIdentity::WordProcessor { index: 2 })
    );
    assert_eq!(classify("Public Chat").unwrap(), Some(ControllerIdentity::Chat));
    assert_eq!(
        classify("Screenshare - student").unwrap(),
        Some(ControllerIdentity::Screenshare)
    );
    assert_eq!(classify("Random Unrelated Window").unwrap(), None);
}

#[test]
fn catalog_windows_without_a_controller_are_unmapped() {
    for title in ["Classroom", "Whiteboard", "Graphing Calculator", "Server Connection Error"] {
        assert_eq!(classify(title).unwrap(), None, "{title} should be unmapped");
    }
}

#[test]
fn tag_matching_ignores_case() {
    assert_eq!(classify("PUBLIC CHAT").unwrap(), Some(ControllerIdentity::Chat));
    assert_eq!(classify("javascript editor 12").unwrap(), editor("javascript", 12));
    assert!(WindowTitle::WordProcessor.matches("Word Processor 1"));
}

#[test]
fn editor_title_keeps_full_language_label() {
    assert_eq!(classify("C-Like Editor 1").unwrap(), editor("C-Like", 1));
    assert_eq!(classify("  Mathematica Editor   4  ").unwrap(), editor("Mathematica", 4));
    // only the first token after the marker is the index
    assert_eq!(classify("Go Editor 2 (read only)").unwrap(), editor("Go", 2));
}

#[test]
fn javascript_is_not_mistaken_for_java() {
    assert_eq!(classify("JavaScript Editor 1").unwrap(), editor("JavaScript", 1));
    assert_eq!(classify("Java Editor 1").unwrap(), editor("Java", 1));
}

#[test]
fn chat_wins_over_every_other_tag() {
    assert_eq!(
        classify("Public Chat - Python Editor 1").unwrap(),
        Some(ControllerIdentity::Chat)
    );
}

#[test]
fn editors_win_over_screenshare_and_word_processor() {
    assert_eq!(
        classify("SQL Editor 2 Screenshare").unwrap(),
        editor("SQL", 2)
    );
    assert_eq!(
        classify("Screenshare word processor 1").unwrap(),
        Some(ControllerIdentity::Screenshare)
    );
}

#[test]
fn editor_marker_is_taken_from_the_language_tag() {
    assert_eq!(
        classify("Editor's pick - Python Editor 1").unwrap(),
        editor("Editor's pick - Python", 1)
    );
    assert_eq!(
        parse_code_editor_title("editor notes: Go Editor 2").unwrap(),
        ("editor notes: Go".to_string(), 2)
    );
}

#[test]
fn generic_editor_tag_alone_is_not_dispatched() {
    assert_eq!(classify("Editor 1").unwrap(), None);
}

#[test]
fn malformed_editor_index_is_a_parse_error() {
    let err = classify("Python Editor three").unwrap_err();
    assert_eq!(err.title, "Python Editor three");
    assert!(err.reason.contains("three"));

    assert!(classify("Python Editor").is_err());
}

#[test]
fn malformed_word_processor_titles_are_parse_errors() {
    assert!(classify("word processor").is_err());
    assert!(classify("word processor x").is_err());
    // tag present but not as a prefix
    assert!(classify("Untitled - word processor 1").is_err());
}

#[test]
fn word_processor_index_with_and_without_space() {
    assert_eq!(parse_word_processor_title("word processor2").unwrap(), 2);
    assert_eq!(parse_word_processor_title("Word Processor 7").unwrap(), 7);
    assert_eq!(parse_word_processor_title("  word processor 10 draft").unwrap(), 10);
}

#[test]
fn code_editor_parser_requires_language_and_marker() {
    assert_eq!(
        parse_code_editor_title("Ruby Editor 5").unwrap(),
        ("Ruby".to_string(), 5)
    );
    assert!(parse_code_editor_title("Editor 5").is_err());
    assert!(parse_code_editor_title("Python 5").is_err());
}

#[test]
fn identity_kinds_follow_variants() {
    assert_eq!(ControllerIdentity::Chat.kind(), ControllerKind::Chat);
    assert_eq!(editor("Go", 1).unwrap().kind(), ControllerKind::CodeEditor);
    assert_eq!(
        ControllerIdentity::WordProcessor { index: 1 }.kind(),
        ControllerKind::WordProcessor
    );
    assert_eq!(ControllerIdentity::Screenshare.kind(), ControllerKind::Screenshare);
}
