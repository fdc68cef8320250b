//! Wire types for the captioning service endpoints.
//!
//! Field names and encodings are the service's wire contract: status
//! payloads are tagged by the `status` field, multipart booleans travel
//! as the strings `"true"`/`"false"`, and an unset fps travels as the
//! empty string.

use serde::{Deserialize, Serialize};

use crate::captions::Caption;
use crate::defaults;

/// Response to a `/process` or `/reprocess` submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One `/status/{task_id}` observation.
///
/// An unknown task id arrives as the `error` status with a message, not
/// as an HTTP error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusResponse {
    Pending {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Processing {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Complete {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progress: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        video_path: Option<String>,
        #[serde(default)]
        subtitles: Vec<Caption>,
    },
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl StatusResponse {
    /// A fresh `pending` observation at 0%.
    pub fn pending() -> Self {
        Self::Pending {
            progress: Some(0),
            message: None,
        }
    }

    /// A `processing` observation with progress and message.
    pub fn processing(progress: u8, message: &str) -> Self {
        Self::Processing {
            progress: Some(progress),
            message: Some(message.to_string()),
        }
    }

    /// A terminal `complete` observation carrying the results.
    pub fn complete(video_path: &str, subtitles: Vec<Caption>) -> Self {
        Self::Complete {
            progress: Some(100),
            message: None,
            video_path: Some(video_path.to_string()),
            subtitles,
        }
    }

    /// A terminal `error` observation.
    pub fn error(message: &str) -> Self {
        Self::Error {
            message: Some(message.to_string()),
        }
    }

    /// True once the service will report no further progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }

    /// Advisory progress percentage, when reported.
    pub fn progress(&self) -> Option<u8> {
        match self {
            Self::Pending { progress, .. }
            | Self::Processing { progress, .. }
            | Self::Complete { progress, .. } => *progress,
            Self::Error { .. } => None,
        }
    }

    /// Human-readable status text, when reported.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pending { message, .. }
            | Self::Processing { message, .. }
            | Self::Complete { message, .. }
            | Self::Error { message } => message.as_deref(),
        }
    }

    /// The wire label of this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending { .. } => "pending",
            Self::Processing { .. } => "processing",
            Self::Complete { .. } => "complete",
            Self::Error { .. } => "error",
        }
    }
}

/// Response to `/api/fonts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontsResponse {
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

/// One font installed on the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub file: String,
}

/// Response to `/api/host`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl HostInfo {
    /// The advertised address, with the service's own fallbacks applied
    /// (127.0.0.1:5001 when it cannot determine a LAN address).
    pub fn address(&self) -> String {
        let ip = self.ip.as_deref().unwrap_or("127.0.0.1");
        let port = self.port.unwrap_or(5001);
        format!("{ip}:{port}")
    }
}

/// Style fields shared by `/process` and `/reprocess`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleParams {
    pub has_background: bool,
    pub has_animation: bool,
    pub is_bold: bool,
    pub timing_relax: bool,
    pub bg_opacity: f64,
    pub margin_v: u32,
    pub margin_l: u32,
    pub margin_r: u32,
    pub font_size: u32,
    pub outline_px: u32,
    pub shadow_px: u32,
    pub alignment: u32,
    pub crf: u32,
    pub resolution: String,
    pub fps: Option<u32>,
    pub selected_font: String,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            has_background: false,
            has_animation: false,
            is_bold: false,
            timing_relax: false,
            bg_opacity: defaults::BG_OPACITY,
            margin_v: defaults::MARGIN_V,
            margin_l: defaults::MARGIN_L,
            margin_r: defaults::MARGIN_R,
            font_size: defaults::FONT_SIZE,
            outline_px: defaults::OUTLINE_PX,
            shadow_px: defaults::SHADOW_PX,
            alignment: defaults::ALIGNMENT,
            crf: defaults::CRF,
            resolution: defaults::RESOLUTION.to_string(),
            fps: None,
            selected_font: String::new(),
        }
    }
}

impl StyleParams {
    /// Multipart text fields in wire order.
    ///
    /// The service applies its own defaults for absent fields, but every
    /// field is always sent so a submission is self-describing.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("has_background", bool_field(self.has_background)),
            ("has_animation", bool_field(self.has_animation)),
            ("is_bold", bool_field(self.is_bold)),
            ("timing_relax", bool_field(self.timing_relax)),
            ("bg_opacity", self.bg_opacity.to_string()),
            ("margin_v", self.margin_v.to_string()),
            ("font_size", self.font_size.to_string()),
            ("outline_px", self.outline_px.to_string()),
            ("shadow_px", self.shadow_px.to_string()),
            ("resolution", self.resolution.clone()),
            ("alignment", self.alignment.to_string()),
            ("crf", self.crf.to_string()),
            ("fps", self.fps.map(|f| f.to_string()).unwrap_or_default()),
            ("margin_l", self.margin_l.to_string()),
            ("margin_r", self.margin_r.to_string()),
            ("selected_font", self.selected_font.clone()),
        ]
    }
}

fn bool_field(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_success_format() {
        let json = r#"{"success":true,"task_id":"abc123"}"#;
        let response: SubmitResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.task_id.as_deref(), Some("abc123"));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_submit_response_error_format() {
        let json = r#"{"success":false,"error":"No video file"}"#;
        let response: SubmitResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.task_id, None);
        assert_eq!(response.error.as_deref(), Some("No video file"));
    }

    #[test]
    fn test_status_pending_exact_json() {
        let status = StatusResponse::pending();
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"status":"pending","progress":0}"#);
    }

    #[test]
    fn test_status_processing_exact_json() {
        let status = StatusResponse::processing(60, "Rendering subtitles");
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(
            json,
            r#"{"status":"processing","progress":60,"message":"Rendering subtitles"}"#
        );
    }

    #[test]
    fn test_status_complete_carries_results() {
        let json = r#"{
            "status": "complete",
            "progress": 100,
            "video_path": "/outputs/final_video.mp4",
            "subtitles": [
                {"start": 0.0, "end": 2.0, "speaker": "SPEAKER_00", "text": "hi"}
            ]
        }"#;
        let status: StatusResponse = serde_json::from_str(json).unwrap();
        match &status {
            StatusResponse::Complete {
                video_path,
                subtitles,
                ..
            } => {
                assert_eq!(video_path.as_deref(), Some("/outputs/final_video.mp4"));
                assert_eq!(subtitles.len(), 1);
                assert_eq!(subtitles[0].speaker, "SPEAKER_00");
            }
            other => panic!("expected complete, got {other:?}"),
        }
        assert!(status.is_terminal());
    }

    #[test]
    fn test_status_complete_tolerates_missing_subtitles() {
        let json = r#"{"status":"complete","video_path":"/outputs/a.mp4"}"#;
        let status: StatusResponse = serde_json::from_str(json).unwrap();
        match status {
            StatusResponse::Complete { subtitles, .. } => assert!(subtitles.is_empty()),
            other => panic!("expected complete, got {other:?}"),
        }
    }

    #[test]
    fn test_status_error_is_terminal() {
        let json = r#"{"status":"error","message":"Task not found"}"#;
        let status: StatusResponse = serde_json::from_str(json).unwrap();
        assert!(status.is_terminal());
        assert_eq!(status.message(), Some("Task not found"));
        assert_eq!(status.progress(), None);
    }

    #[test]
    fn test_status_unknown_tag_is_rejected() {
        let json = r#"{"status":"exploded"}"#;
        assert!(serde_json::from_str::<StatusResponse>(json).is_err());
    }

    #[test]
    fn test_status_missing_optional_fields_tolerated() {
        let json = r#"{"status":"processing"}"#;
        let status: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(status.progress(), None);
        assert_eq!(status.message(), None);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StatusResponse::pending().label(), "pending");
        assert_eq!(StatusResponse::processing(1, "x").label(), "processing");
        assert_eq!(StatusResponse::complete("v", vec![]).label(), "complete");
        assert_eq!(StatusResponse::error("x").label(), "error");
    }

    #[test]
    fn test_fonts_response_entry_without_family() {
        let json = r#"{"fonts":[{"file":"Anton-Regular.ttf"},{"family":"Inter","file":"Inter.ttf"}]}"#;
        let fonts: FontsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(fonts.fonts.len(), 2);
        assert_eq!(fonts.fonts[0].family, None);
        assert_eq!(fonts.fonts[0].file, "Anton-Regular.ttf");
        assert_eq!(fonts.fonts[1].family.as_deref(), Some("Inter"));
    }

    #[test]
    fn test_host_info_defaults() {
        let empty: HostInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.address(), "127.0.0.1:5001");

        let full: HostInfo = serde_json::from_str(r#"{"ip":"192.168.1.20","port":5001}"#).unwrap();
        assert_eq!(full.address(), "192.168.1.20:5001");
    }

    #[test]
    fn test_style_params_defaults_match_service() {
        let params = StyleParams::default();
        assert!(!params.has_background);
        assert_eq!(params.bg_opacity, 0.5);
        assert_eq!(params.margin_v, 450);
        assert_eq!(params.margin_l, 80);
        assert_eq!(params.margin_r, 80);
        assert_eq!(params.font_size, 60);
        assert_eq!(params.outline_px, 3);
        assert_eq!(params.shadow_px, 2);
        assert_eq!(params.alignment, 2);
        assert_eq!(params.crf, 20);
        assert_eq!(params.resolution, "1080x1920");
        assert_eq!(params.fps, None);
        assert_eq!(params.selected_font, "");
    }

    #[test]
    fn test_form_fields_boolean_encoding() {
        let params = StyleParams {
            has_background: true,
            ..Default::default()
        };
        let fields = params.form_fields();
        assert!(fields.contains(&("has_background", "true".to_string())));
        assert!(fields.contains(&("is_bold", "false".to_string())));
    }

    #[test]
    fn test_form_fields_fps_empty_when_unset() {
        let params = StyleParams::default();
        let fields = params.form_fields();
        assert!(fields.contains(&("fps", String::new())));

        let with_fps = StyleParams {
            fps: Some(30),
            ..Default::default()
        };
        assert!(with_fps.form_fields().contains(&("fps", "30".to_string())));
    }

    #[test]
    fn test_form_fields_wire_order() {
        let fields = StyleParams::default().form_fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "has_background",
                "has_animation",
                "is_bold",
                "timing_relax",
                "bg_opacity",
                "margin_v",
                "font_size",
                "outline_px",
                "shadow_px",
                "resolution",
                "alignment",
                "crf",
                "fps",
                "margin_l",
                "margin_r",
                "selected_font",
            ]
        );
    }

    #[test]
    fn test_form_fields_numeric_rendering() {
        let fields = StyleParams::default().form_fields();
        assert!(fields.contains(&("bg_opacity", "0.5".to_string())));
        assert!(fields.contains(&("margin_v", "450".to_string())));
        assert!(fields.contains(&("crf", "20".to_string())));
    }
}
