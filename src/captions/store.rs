//! Ordered in-memory collection of caption cues.
//!
//! The store is the single source of truth consumed by the exporters and
//! replaced wholesale when a tracked job completes. Order is insertion
//! order; cues are never re-sorted by time.

use crate::captions::cue::Caption;
use crate::error::{Result, SubwireError};

/// The editable cue list for one captioning session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionStore {
    cues: Vec<Caption>,
}

impl CaptionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { cues: Vec::new() }
    }

    /// Creates a store owning the given cues.
    pub fn from_cues(cues: Vec<Caption>) -> Self {
        Self { cues }
    }

    /// Discards the current contents and takes ownership of a new cue list.
    pub fn replace_all(&mut self, cues: Vec<Caption>) {
        self.cues = cues;
    }

    /// Replaces one field of the cue at `index`.
    ///
    /// `field` is one of `start`, `end`, `speaker`, `text`. Time fields
    /// must parse as fractional seconds.
    pub fn update(&mut self, index: usize, field: &str, value: &str) -> Result<()> {
        let len = self.cues.len();
        let cue = self
            .cues
            .get_mut(index)
            .ok_or(SubwireError::CueIndexOutOfRange { index, len })?;
        match field {
            "start" => cue.start = parse_seconds(field, value)?,
            "end" => cue.end = parse_seconds(field, value)?,
            "speaker" => cue.speaker = value.to_string(),
            "text" => cue.text = value.to_string(),
            _ => {
                return Err(SubwireError::UnknownCueField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Removes and returns the cue at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Caption> {
        if index >= self.cues.len() {
            return Err(SubwireError::CueIndexOutOfRange {
                index,
                len: self.cues.len(),
            });
        }
        Ok(self.cues.remove(index))
    }

    /// Appends a zero-duration placeholder cue for manual text entry.
    pub fn append_placeholder(&mut self) {
        self.cues.push(Caption::placeholder());
    }

    /// The current cues in display/export order.
    pub fn cues(&self) -> &[Caption] {
        &self.cues
    }

    /// Number of cues in the store.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Returns true if the store holds no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Distinct speaker labels in order of first appearance.
    pub fn distinct_speakers(&self) -> Vec<String> {
        let mut speakers: Vec<String> = Vec::new();
        for cue in &self.cues {
            if !speakers.iter().any(|s| s == &cue.speaker) {
                speakers.push(cue.speaker.clone());
            }
        }
        speakers
    }
}

fn parse_seconds(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SubwireError::InvalidCueValue {
            field: field.to_string(),
            message: format!("{value:?} is not a number of seconds"),
        })
}
