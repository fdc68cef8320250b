//! Stable speaker-to-color assignment.
//!
//! Colors come from a fixed five-entry cycle in order of first
//! appearance; user overrides survive re-derivation as long as the
//! speaker is still present in the cue list.

use std::collections::BTreeMap;

use crate::captions::cue::Caption;
use crate::color;
use crate::defaults;
use crate::error::{Result, SubwireError};

/// Mapping from speaker label to a `#RRGGBB` display color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeakerPalette {
    entries: Vec<(String, String)>,
}

impl SpeakerPalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a palette from previously saved speaker colors.
    ///
    /// Colors are not validated here; `color_map` and the styled exporter
    /// validate at the point of use and name the offending speaker.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Derives the palette for `cues`, keeping colors from `existing`.
    ///
    /// Each distinct speaker gets `existing`'s color when present, else
    /// the default cycle entry for its first-appearance position.
    /// Speakers absent from `cues` are dropped.
    pub fn derive(cues: &[Caption], existing: &SpeakerPalette) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for cue in cues {
            if entries.iter().any(|(s, _)| s == &cue.speaker) {
                continue;
            }
            let position = entries.len();
            let color = existing
                .color(&cue.speaker)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    defaults::SPEAKER_COLORS[position % defaults::SPEAKER_COLORS.len()].to_string()
                });
            entries.push((cue.speaker.clone(), color));
        }
        Self { entries }
    }

    /// Records a user override for one speaker. The color must be `#RRGGBB`.
    pub fn set_color(&mut self, speaker: &str, hex: &str) -> Result<()> {
        if !color::is_hex_color(hex) {
            return Err(invalid_color(speaker, hex));
        }
        match self.entries.iter_mut().find(|(s, _)| s == speaker) {
            Some(entry) => entry.1 = hex.to_string(),
            None => self.entries.push((speaker.to_string(), hex.to_string())),
        }
        Ok(())
    }

    /// The stored color for `speaker`, if any.
    pub fn color(&self, speaker: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == speaker)
            .map(|(_, c)| c.as_str())
    }

    /// Palette entries in first-appearance order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of speakers in the palette.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no speaker has a color assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Styled-format colors in palette order, for per-speaker style records.
    pub fn styled_entries(&self) -> Result<Vec<(String, String)>> {
        self.entries
            .iter()
            .map(|(speaker, hex)| {
                color::styled_color(hex)
                    .map(|styled| (speaker.clone(), styled))
                    .map_err(|_| invalid_color(speaker, hex))
            })
            .collect()
    }

    /// Renders every entry through the styled color codec.
    ///
    /// This is the `color_map` sent on re-submission. A malformed color
    /// fails with the owning speaker named.
    pub fn color_map(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.styled_entries()?.into_iter().collect())
    }
}

fn invalid_color(speaker: &str, hex: &str) -> SubwireError {
    SubwireError::ExportValidation {
        subject: format!("speaker {speaker:?}"),
        message: format!("invalid color {hex:?}, expected #RRGGBB"),
    }
}
