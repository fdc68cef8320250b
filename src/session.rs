//! On-disk editing session.
//!
//! The CLI persists the caption store, the palette's color overrides and
//! the rendered video's server path as one pretty-printed JSON document.
//! `process` writes it on completion; the `cues`, `export` and `reprocess`
//! commands read and mutate it. The in-memory types never touch the disk
//! themselves.

use crate::captions::{Caption, CaptionStore, SpeakerPalette};
use crate::error::{Result, SubwireError};
use crate::tracker::TaskSession;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Snapshot of an editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Server-side path of the rendered video, if the job completed.
    #[serde(default)]
    pub video_path: Option<String>,
    /// Caption cues in playback order.
    #[serde(default)]
    pub cues: Vec<Caption>,
    /// Per-speaker color overrides as `#RRGGBB`.
    #[serde(default)]
    pub speaker_colors: BTreeMap<String, String>,
}

impl SessionFile {
    /// Snapshot a completed tracker session.
    pub fn from_session(session: &TaskSession) -> Self {
        Self {
            video_path: session.video_path().map(str::to_string),
            cues: session.store().cues().to_vec(),
            speaker_colors: session
                .palette()
                .entries()
                .iter()
                .cloned()
                .collect(),
        }
    }

    /// Load a session from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::SessionFileNotFound`] when the file does not
    /// exist and [`SubwireError::SessionParse`] when it is not a valid
    /// session document.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SubwireError::SessionFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SubwireError::Io(e)
            }
        })?;

        serde_json::from_str(&contents).map_err(|e| SubwireError::SessionParse {
            message: e.to_string(),
        })
    }

    /// Write the session to `path`, pretty-printed with a trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SubwireError::Other(format!("Failed to encode session: {e}")))?;
        fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Rebuild the caption store from the snapshot.
    pub fn store(&self) -> CaptionStore {
        CaptionStore::from_cues(self.cues.clone())
    }

    /// Rebuild the speaker palette: the saved overrides extended with
    /// cycle colors for any speaker they do not cover.
    pub fn palette(&self) -> SpeakerPalette {
        let overrides = SpeakerPalette::from_entries(
            self.speaker_colors
                .iter()
                .map(|(speaker, color)| (speaker.clone(), color.clone())),
        );
        SpeakerPalette::derive(&self.cues, &overrides)
    }

    /// Replace the snapshot's contents from live store and palette state.
    pub fn update_from(&mut self, store: &CaptionStore, palette: &SpeakerPalette) {
        self.cues = store.cues().to_vec();
        self.speaker_colors = palette.entries().iter().cloned().collect();
    }
}
