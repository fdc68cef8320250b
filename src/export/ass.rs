//! Styled subtitle serialization.
//!
//! The header block matches the service's render geometry (1080x1920
//! portrait). By default every event uses the single stock `Default`
//! style; per-speaker styles are an opt-in that adds one style record
//! per palette entry.

use crate::captions::{Caption, SpeakerPalette};
use crate::error::Result;
use crate::timecode::styled_time;

const SCRIPT_INFO: &str = "[Script Info]\n\
Title: Exported\n\
ScriptType: v4.00+\n\
WrapStyle: 0\n\
ScaledBorderAndShadow: yes\n\
PlayResX: 1080\n\
PlayResY: 1920\n\
\n\
[V4+ Styles]\n\
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n";

const EVENTS_HEADER: &str = "\n\
[Events]\n\
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n";

/// Primary color of the stock `Default` style record.
const DEFAULT_PRIMARY: &str = "&H00FFFF";

fn style_record(name: &str, primary: &str) -> String {
    format!(
        "Style: {name},Arial,60,{primary},&HFFFFFF,&H00000000,&H80000000,0,0,0,0,100,100,0,0,1,3,2,2,10,10,450,1\n"
    )
}

fn dialogue_line(cue: &Caption, style: &str) -> String {
    format!(
        "Dialogue: 0,{},{},{style},,0,0,0,,{}\n",
        styled_time(cue.start),
        styled_time(cue.end),
        cue.text.replace('\n', "\\N")
    )
}

/// Style names cannot contain the record field separator.
fn style_name(speaker: &str) -> String {
    speaker.replace(',', " ")
}

/// Serializes cues with the single stock style.
pub fn export_ass(cues: &[Caption]) -> String {
    let mut out = String::from(SCRIPT_INFO);
    out.push_str(&style_record("Default", DEFAULT_PRIMARY));
    out.push_str(EVENTS_HEADER);
    for cue in cues {
        out.push_str(&dialogue_line(cue, "Default"));
    }
    out
}

/// Serializes cues with one extra style record per palette speaker.
///
/// Events reference their speaker's style and fall back to `Default`
/// when the speaker has no palette entry. A malformed palette color
/// fails the export naming the speaker.
pub fn export_ass_with_styles(cues: &[Caption], palette: &SpeakerPalette) -> Result<String> {
    let styled = palette.styled_entries()?;
    let mut names: Vec<(String, String)> = Vec::new();

    let mut out = String::from(SCRIPT_INFO);
    out.push_str(&style_record("Default", DEFAULT_PRIMARY));
    for (speaker, color) in &styled {
        let name = style_name(speaker);
        if name.is_empty() {
            continue;
        }
        out.push_str(&style_record(&name, color));
        names.push((speaker.clone(), name));
    }
    out.push_str(EVENTS_HEADER);
    for cue in cues {
        let style = names
            .iter()
            .find(|(speaker, _)| speaker == &cue.speaker)
            .map(|(_, name)| name.as_str())
            .unwrap_or("Default");
        out.push_str(&dialogue_line(cue, style));
    }
    Ok(out)
}
