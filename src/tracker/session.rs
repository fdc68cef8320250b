//! Per-job session state.

use crate::captions::{Caption, CaptionStore, SpeakerPalette};

/// State owned by one submitted job: its task id, the caption store the
/// job populates, the speaker palette derived from those captions, and
/// the server-side path of the rendered video.
///
/// A session is created on submission and replaced wholesale by the next
/// submission. The tracker is its only writer while the job is live;
/// afterwards the caller takes it over for editing and export.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSession {
    task_id: String,
    store: CaptionStore,
    palette: SpeakerPalette,
    video_path: Option<String>,
}

impl TaskSession {
    /// Create an empty session for a freshly submitted task.
    pub fn new(task_id: &str) -> Self {
        Self {
            task_id: task_id.to_string(),
            store: CaptionStore::new(),
            palette: SpeakerPalette::new(),
            video_path: None,
        }
    }

    /// Carry an existing palette into the session.
    ///
    /// Used on re-submission so speaker color overrides survive the
    /// palette re-derivation when the new results arrive.
    pub fn with_palette(mut self, palette: SpeakerPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Record a completed job: replace the captions, re-derive the
    /// palette around them, and remember the rendered video's path.
    pub fn complete(&mut self, cues: Vec<Caption>, video_path: Option<String>) {
        self.store.replace_all(cues);
        self.palette = SpeakerPalette::derive(self.store.cues(), &self.palette);
        self.video_path = video_path;
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn store(&self) -> &CaptionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CaptionStore {
        &mut self.store
    }

    pub fn palette(&self) -> &SpeakerPalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut SpeakerPalette {
        &mut self.palette
    }

    /// Server-side path of the rendered video, once the job completed.
    pub fn video_path(&self) -> Option<&str> {
        self.video_path.as_deref()
    }
}
