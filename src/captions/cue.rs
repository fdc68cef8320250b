//! Caption cue data type.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// One subtitle cue: a timed text entry with a speaker label.
///
/// Field names match the wire format used by the captioning service and
/// the session file. `start` and `end` are fractional seconds; `end >=
/// start` is assumed by the exporters but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
    pub text: String,
}

impl Caption {
    /// Creates a cue.
    pub fn new(start: f64, end: f64, speaker: &str, text: &str) -> Self {
        Self {
            start,
            end,
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }

    /// The zero-duration, empty-text cue appended by a manual add.
    pub fn placeholder() -> Self {
        Self::new(0.0, 0.0, defaults::PLACEHOLDER_SPEAKER, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let cue = Caption::new(1.5, 3.25, "Alice", "hello");
        let json = serde_json::to_string(&cue).unwrap();
        assert_eq!(
            json,
            r#"{"start":1.5,"end":3.25,"speaker":"Alice","text":"hello"}"#
        );
    }

    #[test]
    fn test_deserializes_from_service_payload() {
        let json = r#"{"start":0.0,"end":2.0,"speaker":"SPEAKER_00","text":"first line"}"#;
        let cue: Caption = serde_json::from_str(json).unwrap();
        assert_eq!(cue.start, 0.0);
        assert_eq!(cue.end, 2.0);
        assert_eq!(cue.speaker, "SPEAKER_00");
        assert_eq!(cue.text, "first line");
    }

    #[test]
    fn test_round_trip_preserves_embedded_newlines() {
        let cue = Caption::new(0.0, 1.0, "A", "line one\nline two");
        let json = serde_json::to_string(&cue).unwrap();
        let back: Caption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cue);
    }

    #[test]
    fn test_placeholder_cue_values() {
        let cue = Caption::placeholder();
        assert_eq!(cue.start, 0.0);
        assert_eq!(cue.end, 0.0);
        assert_eq!(cue.speaker, "Speaker");
        assert_eq!(cue.text, "");
    }
}
