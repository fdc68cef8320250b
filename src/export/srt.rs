//! Time-coded subtitle serialization.
//!
//! Output layout per cue: a 1-based block index, a timing line, the cue
//! text, and a blank separator, with every line joined by CRLF. The
//! serialized output ends with a single final CRLF; an empty cue list
//! serializes to an empty string.

use crate::captions::Caption;
use crate::timecode::subtitle_time;

/// Serializes cues to the time-coded format.
///
/// Block numbering restarts at 1 on every call regardless of the
/// store's edit history. CRLF line breaks inside cue text are
/// normalized to LF.
pub fn export_srt(cues: &[Caption]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(cues.len() * 4);
    for (index, cue) in cues.iter().enumerate() {
        lines.push((index + 1).to_string());
        lines.push(format!(
            "{} --> {}",
            subtitle_time(cue.start),
            subtitle_time(cue.end)
        ));
        lines.push(cue.text.replace("\r\n", "\n"));
        lines.push(String::new());
    }
    lines.join("\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cue_block_layout() {
        let cues = vec![Caption::new(1.0, 2.5, "Alice", "hello")];
        assert_eq!(
            export_srt(&cues),
            "1\r\n00:00:01,000 --> 00:00:02,500\r\nhello\r\n"
        );
    }

    #[test]
    fn test_blocks_are_numbered_sequentially() {
        let cues = vec![
            Caption::new(0.0, 1.0, "A", "one"),
            Caption::new(1.0, 2.0, "B", "two"),
            Caption::new(2.0, 3.0, "C", "three"),
        ];
        let out = export_srt(&cues);
        assert!(out.starts_with("1\r\n"));
        assert!(out.contains("\r\n\r\n2\r\n"));
        assert!(out.contains("\r\n\r\n3\r\n"));
    }

    #[test]
    fn test_output_ends_with_single_crlf() {
        let cues = vec![
            Caption::new(0.0, 1.0, "A", "one"),
            Caption::new(1.0, 2.0, "B", "two"),
        ];
        let out = export_srt(&cues);
        assert!(out.ends_with("two\r\n"));
        assert!(!out.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_empty_store_exports_empty_string() {
        assert_eq!(export_srt(&[]), "");
    }

    #[test]
    fn test_crlf_text_normalized_to_lf() {
        let cues = vec![Caption::new(0.0, 1.0, "A", "line one\r\nline two")];
        let out = export_srt(&cues);
        assert!(out.contains("line one\nline two"));
        assert!(!out.contains("line one\r\nline two"));
    }

    #[test]
    fn test_lf_text_kept_verbatim() {
        let cues = vec![Caption::new(0.0, 1.0, "A", "line one\nline two")];
        let out = export_srt(&cues);
        assert_eq!(
            out,
            "1\r\n00:00:00,000 --> 00:00:01,000\r\nline one\nline two\r\n"
        );
    }

    #[test]
    fn test_numbering_restarts_after_edits() {
        let mut cues = vec![
            Caption::new(0.0, 1.0, "A", "one"),
            Caption::new(1.0, 2.0, "B", "two"),
        ];
        cues.remove(0);
        let out = export_srt(&cues);
        assert!(out.starts_with("1\r\n"));
        assert!(!out.contains("\r\n2\r\n"));
    }

    #[test]
    fn test_timecodes_use_comma_millis() {
        let cues = vec![Caption::new(3661.5, 3662.25, "A", "x")];
        let out = export_srt(&cues);
        assert!(out.contains("01:01:01,500 --> 01:01:02,250"));
    }
}
