//! Caption cues, the in-memory store, and speaker color assignment.

pub mod cue;
pub mod palette;
pub mod store;

pub use cue::Caption;
pub use palette::SpeakerPalette;
pub use store::CaptionStore;
