use super::*;

const FRAMES: &str = r#"[
  {"timestamp": 0, "tokens": [{"id": "h1", "type": "home", "x": 100, "y": 200, "label": "GK"}, {"id": "ball", "type": "ball", "x": 120, "y": 200}]},
  {"timestamp": 500, "tokens": [{"id": "h1", "type": "home", "x": 150, "y": 200, "label": "GK"}, {"id": "ball", "type": "ball", "x": 300, "y": 180}]}
]"#;

#[test]
fn parses_bare_array() {
    let frames = parse_generated_frames(FRAMES).unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].timestamp, 500);
    assert_eq!(frames[1].tokens[1].position.x, 300.0);
}

#[test]
fn strips_fences_and_prose() {
    let reply = format!("Sure! Here is your drill:\n```json\n{FRAMES}\n```\nHave fun.");
    assert_eq!(parse_generated_frames(&reply).unwrap().len(), 2);
}

#[test]
fn accepts_frames_or_data_wrappers() {
    let wrapped = format!(r#"{{"frames": {FRAMES}}}"#);
    assert_eq!(parse_generated_frames(&wrapped).unwrap().len(), 2);
    let wrapped = format!(r#"{{"data": {FRAMES}, "note": "x"}}"#);
    assert_eq!(parse_generated_frames(&wrapped).unwrap().len(), 2);
}

#[test]
fn rejects_unusable_replies() {
    for reply in [
        "",
        "I cannot help with that.",
        "[]",
        r#"{"message": "rate limited"}"#,
        r#"[{"timestamp": 0, "tokens": [{"id": "x", "type": "referee", "x": 0, "y": 0}]}]"#,
        r#"[{"timestamp": 100, "tokens": []}, {"timestamp": 0, "tokens": []}]"#,
        "[{\"timestamp\": 0,",
    ] {
        let err = parse_generated_frames(reply).unwrap_err();
        assert!(matches!(err, BoardError::Generator(_)), "{reply}: {err}");
    }
}
