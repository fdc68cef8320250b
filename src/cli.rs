//! Command-line interface for subwire
//!
//! Provides argument parsing using clap derive macros.

use crate::defaults;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

/// Caption videos through a remote rendering service
#[derive(Parser, Debug)]
#[command(
    name = "subwire",
    version = crate::version_string(),
    about = "Caption videos through a remote rendering service"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: progress details, -vv: full diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Captioning service URL (overrides the configuration file)
    #[arg(long, global = true, value_name = "URL")]
    pub service_url: Option<String>,

    /// Session file to read and write
    #[arg(long, global = true, value_name = "PATH")]
    pub session: Option<PathBuf>,
}

impl Cli {
    /// The session file path for this invocation.
    pub fn session_path(&self) -> PathBuf {
        self.session
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::SESSION_FILE))
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a video for captioning and track the job to completion
    Process {
        /// Video file to caption
        video: PathBuf,

        #[command(flatten)]
        style: StyleArgs,

        /// Status poll interval (e.g. 2s, 500ms)
        #[arg(long, value_name = "DURATION", value_parser = parse_duration_arg)]
        poll_interval: Option<Duration>,

        /// Timeout for service API calls
        #[arg(long, value_name = "DURATION", value_parser = parse_duration_arg)]
        timeout: Option<Duration>,

        /// Download the rendered video to this path on completion
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Re-render the last processed video with the session's edited cues
    Reprocess {
        #[command(flatten)]
        style: StyleArgs,

        /// Status poll interval (e.g. 2s, 500ms)
        #[arg(long, value_name = "DURATION", value_parser = parse_duration_arg)]
        poll_interval: Option<Duration>,

        /// Timeout for service API calls
        #[arg(long, value_name = "DURATION", value_parser = parse_duration_arg)]
        timeout: Option<Duration>,

        /// Download the rendered video to this path on completion
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Query a task's status once
    Status {
        /// Task id returned by a submission
        task_id: String,
    },

    /// Export the session's captions to a subtitle file
    Export {
        /// Subtitle format to produce
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (default: captions.<format> in the export directory)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Emit one style record per speaker (styled format only)
        #[arg(long)]
        per_speaker_styles: bool,
    },

    /// Show and edit the session's caption cues
    Cues {
        /// Action to perform
        #[command(subcommand)]
        action: CuesAction,
    },

    /// List fonts installed on the service
    Fonts,

    /// Show the address the service advertises for LAN access
    Host,

    /// Download the rendered video of the last completed job
    Download {
        /// Output file (default: the server-side file name)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Caption cue editing actions
#[derive(Subcommand, Debug)]
pub enum CuesAction {
    /// List the cues with their indices
    Show,
    /// Set one field of a cue
    Set {
        /// Cue index (0-based, as printed by `cues show`)
        index: usize,
        /// Field to set (start, end, speaker, text)
        field: String,
        /// New value
        value: String,
    },
    /// Remove a cue
    Remove {
        /// Cue index (0-based)
        index: usize,
    },
    /// Append an empty placeholder cue
    Add,
}

/// Configuration inspection actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the resolved configuration
    Show,
}

/// Subtitle formats the exporter can produce
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Time-coded SubRip captions (.srt)
    Srt,
    /// Styled Advanced SubStation captions (.ass)
    Ass,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Ass => "ass",
        }
    }
}

/// Style overrides shared by `process` and `reprocess`.
///
/// Every flag is optional; unset flags fall back to the configuration
/// file and then to the service's recognized defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Draw a background box behind captions (true/false)
    #[arg(long, value_name = "BOOL")]
    pub background: Option<bool>,

    /// Animate caption entry (true/false)
    #[arg(long, value_name = "BOOL")]
    pub animation: Option<bool>,

    /// Bold caption text (true/false)
    #[arg(long, value_name = "BOOL")]
    pub bold: Option<bool>,

    /// Pad cue end times for readability (true/false)
    #[arg(long, value_name = "BOOL")]
    pub timing_relax: Option<bool>,

    /// Background box opacity (0.0 to 1.0)
    #[arg(long, value_name = "OPACITY", value_parser = parse_opacity)]
    pub bg_opacity: Option<f64>,

    /// Vertical caption margin in pixels
    #[arg(long, value_name = "PX")]
    pub margin_v: Option<u32>,

    /// Left caption margin in pixels
    #[arg(long, value_name = "PX")]
    pub margin_l: Option<u32>,

    /// Right caption margin in pixels
    #[arg(long, value_name = "PX")]
    pub margin_r: Option<u32>,

    /// Caption font size in pixels
    #[arg(long, value_name = "PX")]
    pub font_size: Option<u32>,

    /// Outline width in pixels
    #[arg(long, value_name = "PX")]
    pub outline: Option<u32>,

    /// Shadow depth in pixels
    #[arg(long, value_name = "PX")]
    pub shadow: Option<u32>,

    /// Caption alignment on the numpad layout (1-9)
    #[arg(long, value_name = "POS", value_parser = clap::value_parser!(u32).range(1..=9))]
    pub alignment: Option<u32>,

    /// Render quality as CRF (0-51, lower is better)
    #[arg(long, value_name = "CRF", value_parser = clap::value_parser!(u32).range(0..=51))]
    pub crf: Option<u32>,

    /// Output resolution as WIDTHxHEIGHT (e.g. 1080x1920)
    #[arg(long, value_name = "WxH", value_parser = parse_resolution)]
    pub resolution: Option<String>,

    /// Output frame rate
    #[arg(long, value_name = "FPS")]
    pub fps: Option<u32>,

    /// Font file name from the service's font list (see `subwire fonts`)
    #[arg(long, value_name = "NAME")]
    pub font: Option<String>,

    /// Local font file to upload with the job
    #[arg(long, value_name = "PATH")]
    pub font_file: Option<PathBuf>,
}

impl StyleArgs {
    /// Overlay the set flags onto a style configuration.
    pub fn apply(&self, style: &mut crate::config::StyleConfig) {
        if let Some(v) = self.background {
            style.background = v;
        }
        if let Some(v) = self.animation {
            style.animation = v;
        }
        if let Some(v) = self.bold {
            style.bold = v;
        }
        if let Some(v) = self.timing_relax {
            style.timing_relax = v;
        }
        if let Some(v) = self.bg_opacity {
            style.bg_opacity = v;
        }
        if let Some(v) = self.margin_v {
            style.margin_v = v;
        }
        if let Some(v) = self.margin_l {
            style.margin_l = v;
        }
        if let Some(v) = self.margin_r {
            style.margin_r = v;
        }
        if let Some(v) = self.font_size {
            style.font_size = v;
        }
        if let Some(v) = self.outline {
            style.outline_px = v;
        }
        if let Some(v) = self.shadow {
            style.shadow_px = v;
        }
        if let Some(v) = self.alignment {
            style.alignment = v;
        }
        if let Some(v) = self.crf {
            style.crf = v;
        }
        if let Some(v) = &self.resolution {
            style.resolution = v.clone();
        }
        if let Some(v) = self.fps {
            style.fps = Some(v);
        }
        if let Some(v) = &self.font {
            style.font = v.clone();
        }
    }
}

/// Parse a duration argument.
///
/// Supports any format accepted by `humantime`: single-unit (`30s`,
/// `500ms`, `2m`) and compound (`1m30s`).
fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Parse an opacity argument in the closed interval [0, 1].
fn parse_opacity(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err("opacity must be between 0.0 and 1.0".to_string())
    }
}

/// Parse and normalize a WIDTHxHEIGHT resolution argument.
fn parse_resolution(s: &str) -> Result<String, String> {
    let normalized = s.trim().to_lowercase();
    match normalized.split_once('x') {
        Some((w, h)) if w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok() => Ok(normalized),
        _ => Err(format!("'{s}' is not WIDTHxHEIGHT (e.g. 1080x1920)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_subcommand_shows_help() {
        let result = Cli::try_parse_from(["subwire"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from(["subwire", "process", "clip.mp4"]).unwrap();
        match cli.command {
            Commands::Process {
                video,
                style,
                poll_interval,
                timeout,
                output,
            } => {
                assert_eq!(video, PathBuf::from("clip.mp4"));
                assert!(style.background.is_none());
                assert!(style.font_size.is_none());
                assert!(poll_interval.is_none());
                assert!(timeout.is_none());
                assert!(output.is_none());
            }
            _ => panic!("Expected Process command"),
        }
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_process_requires_video() {
        let result = Cli::try_parse_from(["subwire", "process"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_process_with_style_flags() {
        let cli = Cli::try_parse_from([
            "subwire",
            "process",
            "clip.mp4",
            "--background",
            "true",
            "--bold",
            "false",
            "--font-size",
            "72",
            "--bg-opacity",
            "0.8",
            "--resolution",
            "1920X1080",
            "--fps",
            "30",
            "--font",
            "Anton-Regular.ttf",
        ])
        .unwrap();

        match cli.command {
            Commands::Process { style, .. } => {
                assert_eq!(style.background, Some(true));
                assert_eq!(style.bold, Some(false));
                assert!(style.animation.is_none());
                assert_eq!(style.font_size, Some(72));
                assert_eq!(style.bg_opacity, Some(0.8));
                // Resolution is normalized to lowercase
                assert_eq!(style.resolution.as_deref(), Some("1920x1080"));
                assert_eq!(style.fps, Some(30));
                assert_eq!(style.font.as_deref(), Some("Anton-Regular.ttf"));
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_parse_process_with_durations() {
        let cli = Cli::try_parse_from([
            "subwire",
            "process",
            "clip.mp4",
            "--poll-interval",
            "500ms",
            "--timeout",
            "10s",
        ])
        .unwrap();

        match cli.command {
            Commands::Process {
                poll_interval,
                timeout,
                ..
            } => {
                assert_eq!(poll_interval, Some(Duration::from_millis(500)));
                assert_eq!(timeout, Some(Duration::from_secs(10)));
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_alignment_out_of_range_is_rejected() {
        let result =
            Cli::try_parse_from(["subwire", "process", "clip.mp4", "--alignment", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_crf_out_of_range_is_rejected() {
        let result = Cli::try_parse_from(["subwire", "process", "clip.mp4", "--crf", "52"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_resolution_is_rejected() {
        let result =
            Cli::try_parse_from(["subwire", "process", "clip.mp4", "--resolution", "vertical"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bool_flag_is_rejected() {
        let result =
            Cli::try_parse_from(["subwire", "process", "clip.mp4", "--background", "yes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_reprocess() {
        let cli = Cli::try_parse_from(["subwire", "reprocess", "--timing-relax", "true"]).unwrap();
        match cli.command {
            Commands::Reprocess { style, .. } => {
                assert_eq!(style.timing_relax, Some(true));
            }
            _ => panic!("Expected Reprocess command"),
        }
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::try_parse_from(["subwire", "status", "abc-123"]).unwrap();
        match cli.command {
            Commands::Status { task_id } => {
                assert_eq!(task_id, "abc-123");
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_status_requires_task_id() {
        let result = Cli::try_parse_from(["subwire", "status"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_export_srt() {
        let cli = Cli::try_parse_from(["subwire", "export", "srt"]).unwrap();
        match cli.command {
            Commands::Export {
                format,
                output,
                per_speaker_styles,
            } => {
                assert_eq!(format, ExportFormat::Srt);
                assert!(output.is_none());
                assert!(!per_speaker_styles);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_parse_export_ass_with_options() {
        let cli = Cli::try_parse_from([
            "subwire",
            "export",
            "ass",
            "--output",
            "styled.ass",
            "--per-speaker-styles",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                format,
                output,
                per_speaker_styles,
            } => {
                assert_eq!(format, ExportFormat::Ass);
                assert_eq!(output, Some(PathBuf::from("styled.ass")));
                assert!(per_speaker_styles);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        let result = Cli::try_parse_from(["subwire", "export", "vtt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_format_extensions() {
        assert_eq!(ExportFormat::Srt.extension(), "srt");
        assert_eq!(ExportFormat::Ass.extension(), "ass");
    }

    #[test]
    fn test_parse_cues_show() {
        let cli = Cli::try_parse_from(["subwire", "cues", "show"]).unwrap();
        match cli.command {
            Commands::Cues { action } => match action {
                CuesAction::Show => {}
                _ => panic!("Expected Show action"),
            },
            _ => panic!("Expected Cues command"),
        }
    }

    #[test]
    fn test_parse_cues_set() {
        let cli =
            Cli::try_parse_from(["subwire", "cues", "set", "2", "text", "hello there"]).unwrap();
        match cli.command {
            Commands::Cues { action } => match action {
                CuesAction::Set {
                    index,
                    field,
                    value,
                } => {
                    assert_eq!(index, 2);
                    assert_eq!(field, "text");
                    assert_eq!(value, "hello there");
                }
                _ => panic!("Expected Set action"),
            },
            _ => panic!("Expected Cues command"),
        }
    }

    #[test]
    fn test_cues_set_requires_value() {
        let result = Cli::try_parse_from(["subwire", "cues", "set", "2", "text"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cues_set_rejects_non_numeric_index() {
        let result = Cli::try_parse_from(["subwire", "cues", "set", "two", "text", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_cues_remove() {
        let cli = Cli::try_parse_from(["subwire", "cues", "remove", "0"]).unwrap();
        match cli.command {
            Commands::Cues { action } => match action {
                CuesAction::Remove { index } => {
                    assert_eq!(index, 0);
                }
                _ => panic!("Expected Remove action"),
            },
            _ => panic!("Expected Cues command"),
        }
    }

    #[test]
    fn test_parse_cues_add() {
        let cli = Cli::try_parse_from(["subwire", "cues", "add"]).unwrap();
        match cli.command {
            Commands::Cues { action } => match action {
                CuesAction::Add => {}
                _ => panic!("Expected Add action"),
            },
            _ => panic!("Expected Cues command"),
        }
    }

    #[test]
    fn test_cues_requires_subcommand() {
        let result = Cli::try_parse_from(["subwire", "cues"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_parse_fonts() {
        let cli = Cli::try_parse_from(["subwire", "fonts"]).unwrap();
        assert!(matches!(cli.command, Commands::Fonts));
    }

    #[test]
    fn test_parse_host() {
        let cli = Cli::try_parse_from(["subwire", "host"]).unwrap();
        assert!(matches!(cli.command, Commands::Host));
    }

    #[test]
    fn test_parse_download() {
        let cli = Cli::try_parse_from(["subwire", "download"]).unwrap();
        match cli.command {
            Commands::Download { output } => {
                assert!(output.is_none());
            }
            _ => panic!("Expected Download command"),
        }
    }

    #[test]
    fn test_parse_download_with_output() {
        let cli = Cli::try_parse_from(["subwire", "download", "--output", "final.mp4"]).unwrap();
        match cli.command {
            Commands::Download { output } => {
                assert_eq!(output, Some(PathBuf::from("final.mp4")));
            }
            _ => panic!("Expected Download command"),
        }
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["subwire", "config", "path"]).unwrap();
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Path => {}
                _ => panic!("Expected Path action"),
            },
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["subwire", "config", "show"]).unwrap();
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Show => {}
                _ => panic!("Expected Show action"),
            },
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["subwire", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => {
                assert_eq!(shell, Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli =
            Cli::try_parse_from(["subwire", "fonts", "--config", "/path/to/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_parse_global_quiet() {
        let cli = Cli::try_parse_from(["subwire", "--quiet", "fonts"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Fonts));
    }

    #[test]
    fn test_parse_quiet_short_flag() {
        let cli = Cli::try_parse_from(["subwire", "-q", "host"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_verbose_single() {
        let cli = Cli::try_parse_from(["subwire", "-v", "fonts"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_verbose_double() {
        let cli = Cli::try_parse_from(["subwire", "-vv", "fonts"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_global_service_url() {
        let cli = Cli::try_parse_from([
            "subwire",
            "fonts",
            "--service-url",
            "http://192.168.1.20:5001",
        ])
        .unwrap();
        assert_eq!(cli.service_url.as_deref(), Some("http://192.168.1.20:5001"));
    }

    #[test]
    fn test_session_path_default() {
        let cli = Cli::try_parse_from(["subwire", "cues", "show"]).unwrap();
        assert_eq!(cli.session_path(), PathBuf::from("subwire-session.json"));
    }

    #[test]
    fn test_session_path_override() {
        let cli =
            Cli::try_parse_from(["subwire", "cues", "show", "--session", "/tmp/s.json"]).unwrap();
        assert_eq!(cli.session_path(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn test_invalid_command_returns_error() {
        let result = Cli::try_parse_from(["subwire", "invalid"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["subwire", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["subwire", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_style_args_apply_overrides_config() {
        let mut style = crate::config::StyleConfig::default();
        let args = StyleArgs {
            background: Some(true),
            font_size: Some(72),
            resolution: Some("1920x1080".to_string()),
            fps: Some(30),
            ..Default::default()
        };

        args.apply(&mut style);

        assert!(style.background);
        assert_eq!(style.font_size, 72);
        assert_eq!(style.resolution, "1920x1080");
        assert_eq!(style.fps, Some(30));
        // Untouched fields keep their configured values
        assert!(!style.bold);
        assert_eq!(style.margin_v, 450);
    }

    // ── Value parser tests ──────────────────────────────────────────────

    #[test]
    fn test_parse_duration_arg_units() {
        assert_eq!(parse_duration_arg("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(
            parse_duration_arg("500ms").unwrap(),
            Duration::from_millis(500)
        );
        assert_eq!(
            parse_duration_arg("1m30s").unwrap(),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn test_parse_duration_arg_invalid() {
        assert!(parse_duration_arg("soon").is_err());
        assert!(parse_duration_arg("").is_err());
    }

    #[test]
    fn test_parse_opacity_bounds() {
        assert_eq!(parse_opacity("0").unwrap(), 0.0);
        assert_eq!(parse_opacity("0.5").unwrap(), 0.5);
        assert_eq!(parse_opacity("1").unwrap(), 1.0);
        assert!(parse_opacity("1.5").is_err());
        assert!(parse_opacity("-0.1").is_err());
        assert!(parse_opacity("opaque").is_err());
    }

    #[test]
    fn test_parse_resolution_normalizes() {
        assert_eq!(parse_resolution("1080x1920").unwrap(), "1080x1920");
        assert_eq!(parse_resolution("1920X1080").unwrap(), "1920x1080");
    }

    #[test]
    fn test_parse_resolution_invalid() {
        assert!(parse_resolution("1080").is_err());
        assert!(parse_resolution("1080x").is_err());
        assert!(parse_resolution("widexhigh").is_err());
        assert!(parse_resolution("").is_err());
    }
}
