use crate::defaults;
use crate::error::{Result, SubwireError};
use crate::service::StyleParams;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub service: ServiceConfig,
    pub style: StyleConfig,
    pub export: ExportConfig,
}

/// Captioning service connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Timeout for short API calls, as a humantime string ("30s").
    pub request_timeout: String,
    /// Status poll interval, as a humantime string ("2s").
    pub poll_interval: String,
}

/// Default caption styling sent with every submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub background: bool,
    pub animation: bool,
    pub bold: bool,
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
    /// Font file name from the service's font list; empty means its default.
    pub font: String,
}

/// Local export configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory exported caption files are written to; cwd when unset.
    pub output_dir: Option<PathBuf>,
    /// Emit one style record per speaker in the styled export.
    pub per_speaker_styles: bool,
    /// Speaker color overrides as `#RRGGBB`, applied over the default cycle.
    pub speaker_colors: BTreeMap<String, String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::SERVICE_URL.to_string(),
            request_timeout: "30s".to_string(),
            poll_interval: "2s".to_string(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: false,
            animation: false,
            bold: false,
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
            font: String::new(),
        }
    }
}

impl StyleConfig {
    /// Wire-level style parameters for a submission.
    pub fn to_params(&self) -> StyleParams {
        StyleParams {
            has_background: self.background,
            has_animation: self.animation,
            is_bold: self.bold,
            timing_relax: self.timing_relax,
            bg_opacity: self.bg_opacity,
            margin_v: self.margin_v,
            margin_l: self.margin_l,
            margin_r: self.margin_r,
            font_size: self.font_size,
            outline_px: self.outline_px,
            shadow_px: self.shadow_px,
            alignment: self.alignment,
            crf: self.crf,
            resolution: self.resolution.clone(),
            fps: self.fps,
            selected_font: self.font.clone(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Missing fields use default values; unknown fields are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SubwireError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SubwireError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file
    /// doesn't exist
    ///
    /// Only falls back to defaults for a missing file; invalid TOML is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(SubwireError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SUBWIRE_SERVICE_URL → service.base_url
    /// - SUBWIRE_POLL_INTERVAL → service.poll_interval
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("SUBWIRE_SERVICE_URL")
            && !url.is_empty()
        {
            self.service.base_url = url;
        }

        if let Ok(interval) = std::env::var("SUBWIRE_POLL_INTERVAL")
            && !interval.is_empty()
        {
            self.service.poll_interval = interval;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/subwire/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("subwire")
            .join("config.toml")
    }

    /// Parsed status poll interval.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::ConfigInvalidValue`] if the configured
    /// string is not a humantime duration.
    pub fn poll_interval(&self) -> Result<Duration> {
        parse_duration_value("service.poll_interval", &self.service.poll_interval)
    }

    /// Parsed request timeout.
    pub fn request_timeout(&self) -> Result<Duration> {
        parse_duration_value("service.request_timeout", &self.service.request_timeout)
    }
}

fn parse_duration_value(key: &str, value: &str) -> Result<Duration> {
    humantime::parse_duration(value).map_err(|e| SubwireError::ConfigInvalidValue {
        key: key.to_string(),
        message: format!("{value:?}: {e}"),
    })
}
