//! Default configuration constants for subwire.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

use std::time::Duration;

/// Default captioning service URL.
///
/// Matches the service's own host discovery fallback (`/api/host` reports
/// 127.0.0.1:5001 when it cannot determine a LAN address).
pub const SERVICE_URL: &str = "http://127.0.0.1:5001";

/// Default interval between status queries while a job is tracked.
///
/// The service updates task progress in coarse steps, so anything faster
/// than a couple of seconds only adds load without adding information.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default timeout for a single HTTP request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default color cycle assigned to speakers in first-appearance order.
///
/// Yellow, white, cyan, green, magenta. A sixth distinct speaker wraps
/// around to yellow again.
pub const SPEAKER_COLORS: [&str; 5] = ["#FFFF00", "#FFFFFF", "#00FFFF", "#00FF00", "#FF00FF"];

/// Speaker label given to manually appended placeholder cues.
pub const PLACEHOLDER_SPEAKER: &str = "Speaker";

/// Default subtitle font size in the service's render coordinate space.
pub const FONT_SIZE: u32 = 60;

/// Default outline thickness in pixels.
pub const OUTLINE_PX: u32 = 3;

/// Default shadow depth in pixels.
pub const SHADOW_PX: u32 = 2;

/// Default numpad-style subtitle alignment (2 = bottom center).
pub const ALIGNMENT: u32 = 2;

/// Default x264 constant rate factor for the rendered video.
pub const CRF: u32 = 20;

/// Default vertical subtitle margin in pixels.
pub const MARGIN_V: u32 = 450;

/// Default left subtitle margin in pixels.
pub const MARGIN_L: u32 = 80;

/// Default right subtitle margin in pixels.
pub const MARGIN_R: u32 = 80;

/// Default background box opacity (0.0 transparent to 1.0 opaque).
pub const BG_OPACITY: f64 = 0.5;

/// Default render resolution, portrait 9:16.
pub const RESOLUTION: &str = "1080x1920";

/// Default session file name written after a job completes.
pub const SESSION_FILE: &str = "subwire-session.json";
