//! Shared terminal rendering for tracked jobs and cue listings.
//! Used by `subwire process`, `subwire reprocess`, and `subwire cues show`.

use crate::captions::{Caption, SpeakerPalette};
use crate::timecode::subtitle_time;
use crate::tracker::TrackerState;
use indicatif::{ProgressBar, ProgressStyle};

const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Progress bar for a tracked captioning job.
///
/// The length is the service's percentage scale; position and message
/// follow tracker state updates via [`update_job_bar`].
pub fn job_bar() -> ProgressBar {
    let pb = ProgressBar::new(100);
    pb.set_style(
        // SAFETY: hardcoded template string, always valid
        #[allow(clippy::expect_used)]
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .expect("hardcoded progress bar template")
            .progress_chars("#>-"),
    );
    pb
}

/// Reflect a tracker state change on the job bar.
///
/// Terminal states finish or abandon the bar, leaving the final line
/// visible.
pub fn update_job_bar(pb: &ProgressBar, state: &TrackerState) {
    match state {
        TrackerState::Idle => {}
        TrackerState::Polling { progress, message } => {
            pb.set_position(u64::from(*progress));
            pb.set_message(message.clone());
        }
        TrackerState::Completed => {
            pb.finish_with_message(format!("{GREEN}complete{RESET}"));
        }
        TrackerState::Failed { message } => {
            pb.abandon_with_message(format!("{RED}failed: {message}{RESET}"));
        }
    }
}

/// Render one tracker state as a plain stderr line.
///
/// The line-based alternative to the job bar for verbose mode, where
/// interleaved diagnostics would tear a redrawn bar.
pub fn render_state_line(state: &TrackerState) {
    match state {
        TrackerState::Idle => {}
        TrackerState::Polling { progress, message } => {
            eprintln!("{DIM}[{progress:>3}%]{RESET} {message}");
        }
        TrackerState::Completed => {
            eprintln!("{GREEN}Job complete{RESET}");
        }
        TrackerState::Failed { message } => {
            eprintln!("{RED}Job failed: {message}{RESET}");
        }
    }
}

/// Print the cue list as an indexed table on stdout.
///
/// The indices are the ones `cues set` and `cues remove` accept.
pub fn render_cues(cues: &[Caption], palette: &SpeakerPalette) {
    if cues.is_empty() {
        println!("No cues in session");
        return;
    }
    for (index, cue) in cues.iter().enumerate() {
        println!("{}", cue_heading(index, cue, palette.color(&cue.speaker)));
        println!("      {}", cue.text);
    }
}

/// First line of one cue row: index, time range, speaker, palette color.
fn cue_heading(index: usize, cue: &Caption, color: Option<&str>) -> String {
    let mut heading = format!(
        "  [{index}] {} --> {}",
        subtitle_time(cue.start),
        subtitle_time(cue.end)
    );
    if !cue.speaker.is_empty() {
        heading.push_str("  ");
        heading.push_str(&cue.speaker);
    }
    if let Some(color) = color {
        heading.push_str(&format!(" {DIM}{color}{RESET}"));
    }
    heading
}

/// One line of the font listing: file name plus family when known.
pub fn format_font(file: &str, family: Option<&str>) -> String {
    match family {
        Some(family) => format!("{file} ({family})"),
        None => file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── job bar state mapping ──────────────────────────────────────────

    #[test]
    fn job_bar_tracks_polling_progress() {
        let pb = job_bar();
        update_job_bar(
            &pb,
            &TrackerState::Polling {
                progress: 40,
                message: "Rendering subtitles".to_string(),
            },
        );
        assert_eq!(pb.position(), 40);
        assert!(!pb.is_finished());
    }

    #[test]
    fn job_bar_idle_leaves_position_untouched() {
        let pb = job_bar();
        update_job_bar(&pb, &TrackerState::Idle);
        assert_eq!(pb.position(), 0);
        assert!(!pb.is_finished());
    }

    #[test]
    fn job_bar_finishes_on_completion() {
        let pb = job_bar();
        update_job_bar(
            &pb,
            &TrackerState::Polling {
                progress: 80,
                message: "Encoding".to_string(),
            },
        );
        update_job_bar(&pb, &TrackerState::Completed);
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 100);
    }

    #[test]
    fn job_bar_abandons_on_failure() {
        let pb = job_bar();
        update_job_bar(
            &pb,
            &TrackerState::Failed {
                message: "render crashed".to_string(),
            },
        );
        assert!(pb.is_finished());
    }

    // ── cue headings ───────────────────────────────────────────────────

    #[test]
    fn cue_heading_shows_index_times_and_speaker() {
        let cue = Caption::new(1.0, 2.5, "Alice", "hi");
        assert_eq!(
            cue_heading(0, &cue, None),
            "  [0] 00:00:01,000 --> 00:00:02,500  Alice"
        );
    }

    #[test]
    fn cue_heading_omits_empty_speaker() {
        let cue = Caption::new(0.0, 1.0, "", "unlabeled");
        assert_eq!(
            cue_heading(2, &cue, None),
            "  [2] 00:00:00,000 --> 00:00:01,000"
        );
    }

    #[test]
    fn cue_heading_appends_palette_color() {
        let cue = Caption::new(0.0, 1.0, "Bob", "hi");
        let heading = cue_heading(3, &cue, Some("#FFFF00"));
        assert!(heading.starts_with("  [3] "));
        assert!(heading.contains("Bob"));
        assert!(heading.contains("#FFFF00"));
    }

    // ── font listing ───────────────────────────────────────────────────

    #[test]
    fn format_font_with_family() {
        assert_eq!(
            format_font("Anton-Regular.ttf", Some("Anton")),
            "Anton-Regular.ttf (Anton)"
        );
    }

    #[test]
    fn format_font_without_family() {
        assert_eq!(format_font("Unknown.ttf", None), "Unknown.ttf");
    }

    // ── render smoke tests ─────────────────────────────────────────────

    #[test]
    fn render_state_line_doesnt_panic() {
        // render_state_line writes to stderr which tests can't capture;
        // validates all variants render without panicking.
        render_state_line(&TrackerState::Idle);
        render_state_line(&TrackerState::Polling {
            progress: 10,
            message: "Detecting speech".to_string(),
        });
        render_state_line(&TrackerState::Completed);
        render_state_line(&TrackerState::Failed {
            message: "boom".to_string(),
        });
    }

    #[test]
    fn render_cues_doesnt_panic() {
        let cues = vec![
            Caption::new(0.0, 1.5, "Alice", "hi"),
            Caption::new(1.5, 3.0, "Bob", "hello"),
        ];
        let palette = SpeakerPalette::derive(&cues, &SpeakerPalette::new());
        render_cues(&cues, &palette);
        render_cues(&[], &palette);
    }
}
