//! Caption file serialization.

pub mod ass;
pub mod srt;

pub use ass::{export_ass, export_ass_with_styles};
pub use srt::export_srt;
