//! Command orchestration for the subwire CLI.
//!
//! Wires configuration, the service client, the task tracker and the
//! session file into the complete captioning flow:
//! submit → poll → edit → export

use crate::captions::SpeakerPalette;
use crate::cli::{CuesAction, ExportFormat, StyleArgs};
use crate::config::Config;
use crate::error::{Result, SubwireError};
use crate::export::{export_ass, export_ass_with_styles, export_srt};
use crate::output;
use crate::service::ServiceClient;
use crate::service::client::output_basename;
use crate::session::SessionFile;
use crate::tracker::{StatusSource, TaskSession, TaskTracker, TrackerState};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Build the HTTP client for the configured service endpoint.
///
/// `timeout` overrides the configured request timeout when given.
pub fn service_client(config: &Config, timeout: Option<Duration>) -> Result<ServiceClient> {
    let request_timeout = match timeout {
        Some(value) => value,
        None => config.request_timeout()?,
    };
    ServiceClient::new(&config.service.base_url, request_timeout)
}

/// Run the `process` command: upload a video, track the job to
/// completion, persist the session, and optionally download the render.
///
/// # Arguments
/// * `config` - Base configuration (style flags overlay it)
/// * `video` - Video file to caption
/// * `style` - Per-invocation style overrides from the CLI
/// * `poll_interval` - Optional poll interval override
/// * `timeout` - Optional request timeout override
/// * `output_path` - Download destination for the rendered video
/// * `session_path` - Session file written on completion
/// * `quiet` - Suppress progress output
/// * `verbosity` - 0 renders a progress bar, higher prints state lines
#[allow(clippy::too_many_arguments)]
pub async fn run_process_command(
    mut config: Config,
    video: PathBuf,
    style: StyleArgs,
    poll_interval: Option<Duration>,
    timeout: Option<Duration>,
    output_path: Option<PathBuf>,
    session_path: PathBuf,
    quiet: bool,
    verbosity: u8,
) -> Result<()> {
    if !video.is_file() {
        return Err(SubwireError::Submission {
            message: format!("video file not found: {}", video.display()),
        });
    }

    style.apply(&mut config.style);
    let (interval, request_timeout) = resolve_durations(&config, poll_interval, timeout)?;
    let client = service_client(&config, Some(request_timeout))?;
    let params = config.style.to_params();

    if !quiet {
        eprintln!(
            "Uploading '{}' to {}...",
            video.display(),
            client.base_url()
        );
    }
    let task_id = client
        .submit(&video, &params, style.font_file.as_deref())
        .await?;
    if !quiet {
        eprintln!(
            "Task {task_id} accepted, polling every {}",
            humantime::format_duration(interval)
        );
    }

    let seed = SpeakerPalette::from_entries(config.export.speaker_colors.clone());
    let session = track_to_completion(
        Arc::new(client.clone()),
        &task_id,
        seed,
        interval,
        quiet,
        verbosity,
    )
    .await?;

    finish_job(
        &session,
        &client,
        &session_path,
        output_path.as_deref(),
        quiet,
    )
    .await
}

/// Run the `reprocess` command: re-render the session's video with its
/// edited cues and speaker colors.
#[allow(clippy::too_many_arguments)]
pub async fn run_reprocess_command(
    mut config: Config,
    style: StyleArgs,
    poll_interval: Option<Duration>,
    timeout: Option<Duration>,
    output_path: Option<PathBuf>,
    session_path: PathBuf,
    quiet: bool,
    verbosity: u8,
) -> Result<()> {
    let file = SessionFile::load(&session_path)?;
    let video_path = file
        .video_path
        .clone()
        .ok_or_else(|| SubwireError::Submission {
            message: "session has no processed video; run `subwire process` first".to_string(),
        })?;

    style.apply(&mut config.style);
    let (interval, request_timeout) = resolve_durations(&config, poll_interval, timeout)?;
    let client = service_client(&config, Some(request_timeout))?;
    let params = config.style.to_params();

    let palette = session_palette(&config, &file);
    let color_map = palette.color_map()?;

    if !quiet {
        eprintln!("Re-rendering '{video_path}' with {} cues...", file.cues.len());
    }
    let task_id = client
        .resubmit(
            &video_path,
            &file.cues,
            &color_map,
            &params,
            style.font_file.as_deref(),
        )
        .await?;
    if !quiet {
        eprintln!(
            "Task {task_id} accepted, polling every {}",
            humantime::format_duration(interval)
        );
    }

    let session = track_to_completion(
        Arc::new(client.clone()),
        &task_id,
        palette,
        interval,
        quiet,
        verbosity,
    )
    .await?;

    finish_job(
        &session,
        &client,
        &session_path,
        output_path.as_deref(),
        quiet,
    )
    .await
}

/// Run the `download` command: fetch the session's rendered video.
pub async fn run_download_command(
    config: &Config,
    session_path: &Path,
    output_path: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let file = SessionFile::load(session_path)?;
    let video_path = file
        .video_path
        .as_deref()
        .ok_or_else(|| SubwireError::Download {
            message: "session has no rendered video; run `subwire process` first".to_string(),
        })?;

    let dest = match output_path {
        Some(path) => path,
        None => PathBuf::from(output_basename(video_path)?),
    };

    let client = service_client(config, None)?;
    let written = client.download(video_path, &dest, !quiet).await?;
    println!("Saved {} ({written} bytes)", dest.display());
    Ok(())
}

/// Run the `export` command: serialize the session's cues to a file.
pub fn run_export_command(
    config: &Config,
    session_path: &Path,
    format: ExportFormat,
    output_path: Option<PathBuf>,
    per_speaker_styles: bool,
) -> Result<()> {
    let file = SessionFile::load(session_path)?;
    let store = file.store();
    let styled = per_speaker_styles || config.export.per_speaker_styles;

    let content = match format {
        ExportFormat::Srt => export_srt(store.cues()),
        ExportFormat::Ass if styled => {
            export_ass_with_styles(store.cues(), &session_palette(config, &file))?
        }
        ExportFormat::Ass => export_ass(store.cues()),
    };

    let dest = match output_path {
        Some(path) => path,
        None => export_destination(config, format),
    };
    write_text_file(&dest, &content)?;
    println!("Exported {} cues to {}", store.len(), dest.display());
    Ok(())
}

/// Run a `cues` action against the session file.
///
/// `show` only reads; the editing actions persist the updated store and
/// the re-derived palette back to the session file.
pub fn run_cues_command(config: &Config, session_path: &Path, action: CuesAction) -> Result<()> {
    let mut file = SessionFile::load(session_path)?;
    let mut store = file.store();
    let palette = session_palette(config, &file);

    match action {
        CuesAction::Show => {
            output::render_cues(store.cues(), &palette);
            return Ok(());
        }
        CuesAction::Set {
            index,
            field,
            value,
        } => {
            store.update(index, &field, &value)?;
            println!("Set cue {index} {field} = {value}");
        }
        CuesAction::Remove { index } => {
            store.remove(index)?;
            println!("Removed cue {index}");
        }
        CuesAction::Add => {
            store.append_placeholder();
            println!("Added cue {}", store.len() - 1);
        }
    }

    let palette = SpeakerPalette::derive(store.cues(), &palette);
    file.update_from(&store, &palette);
    file.save(session_path)?;
    Ok(())
}

/// Poll a submitted task until it reaches a terminal state.
///
/// Returns the completed session, or [`SubwireError::JobFailure`] with
/// the service's message when the job fails.
async fn track_to_completion(
    source: Arc<dyn StatusSource>,
    task_id: &str,
    palette: SpeakerPalette,
    interval: Duration,
    quiet: bool,
    verbosity: u8,
) -> Result<TaskSession> {
    let mut tracker = TaskTracker::new(source, interval);
    tracker
        .submit(TaskSession::new(task_id).with_palette(palette))
        .await;

    let state = watch_job(&tracker, quiet, verbosity).await;
    if let TrackerState::Failed { message } = state {
        return Err(SubwireError::JobFailure { message });
    }

    tracker
        .take_session()
        .await
        .ok_or_else(|| SubwireError::Other("tracked job finished without a session".to_string()))
}

/// Follow tracker state until terminal, rendering progress unless quiet.
///
/// Verbosity 0 drives the progress bar; higher levels print one line per
/// observed update instead, so diagnostics interleave cleanly.
async fn watch_job(tracker: &TaskTracker, quiet: bool, verbosity: u8) -> TrackerState {
    if quiet {
        return tracker.wait_terminal().await;
    }

    let mut rx = tracker.subscribe();
    let bar = (verbosity == 0).then(output::job_bar);
    loop {
        let state = rx.borrow_and_update().clone();
        match &bar {
            Some(bar) => output::update_job_bar(bar, &state),
            None => output::render_state_line(&state),
        }
        if state.is_terminal() {
            return state;
        }
        if rx.changed().await.is_err() {
            return tracker.state();
        }
    }
}

/// Persist the completed session and optionally download the render.
async fn finish_job(
    session: &TaskSession,
    client: &ServiceClient,
    session_path: &Path,
    output_path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let file = SessionFile::from_session(session);
    file.save(session_path)?;

    println!(
        "Captioning complete: {} cues from {} speakers",
        file.cues.len(),
        session.palette().len()
    );
    if let Some(video_path) = session.video_path() {
        println!("Rendered video: {video_path}");
    }
    if !quiet {
        eprintln!("Session saved to {}", session_path.display());
    }

    if let Some(dest) = output_path {
        let video_path = session.video_path().ok_or_else(|| SubwireError::Download {
            message: "job completed without a rendered video path".to_string(),
        })?;
        client.download(video_path, dest, !quiet).await?;
        println!("Saved rendered video to {}", dest.display());
    }
    Ok(())
}

/// CLI durations win over the configured ones.
fn resolve_durations(
    config: &Config,
    poll_interval: Option<Duration>,
    timeout: Option<Duration>,
) -> Result<(Duration, Duration)> {
    let interval = match poll_interval {
        Some(value) => value,
        None => config.poll_interval()?,
    };
    let request_timeout = match timeout {
        Some(value) => value,
        None => config.request_timeout()?,
    };
    Ok((interval, request_timeout))
}

/// The palette for a saved session: session colors win over configured
/// ones, remaining speakers take the default cycle.
fn session_palette(config: &Config, file: &SessionFile) -> SpeakerPalette {
    let colors = merge_speaker_colors(&config.export.speaker_colors, &file.speaker_colors);
    SpeakerPalette::derive(&file.cues, &SpeakerPalette::from_entries(colors))
}

/// Session-file colors win over configured ones for the same speaker.
fn merge_speaker_colors(
    configured: &BTreeMap<String, String>,
    saved: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = configured.clone();
    merged.extend(saved.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Default export file: `captions.<ext>` in the configured output
/// directory, or the working directory when none is set.
fn export_destination(config: &Config, format: ExportFormat) -> PathBuf {
    let name = format!("captions.{}", format.extension());
    match &config.export.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn write_text_file(dest: &Path, content: &str) -> Result<()> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, content)?;
    Ok(())
}
