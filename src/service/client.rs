//! HTTP client for the captioning service.
//!
//! Wraps the service's multipart upload, status polling, font listing and
//! result download endpoints. Network and decoding failures are mapped to
//! the error variant of the operation they belong to, so callers can report
//! a submission problem differently from a status-poll problem.

use crate::captions::Caption;
use crate::error::{Result, SubwireError};
use crate::service::protocol::{
    FontEntry, FontsResponse, HostInfo, StatusResponse, SubmitResponse, StyleParams,
};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::multipart::{Form, Part};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Client for one captioning service instance.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
}

impl ServiceClient {
    /// Create a client for the service at `base_url`.
    ///
    /// `request_timeout` bounds the short API calls (status, fonts, host
    /// info) and the connection phase of every request. Uploads and
    /// downloads are not bounded as a whole since their duration depends
    /// on the video size.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(request_timeout)
            .build()
            .map_err(|e| SubwireError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
        })
    }

    /// The service base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Upload a video for captioning and return the task id.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::Submission`] if the file cannot be read, the
    /// service cannot be reached, or the service rejects the job.
    pub async fn submit(
        &self,
        video: &Path,
        style: &StyleParams,
        font_file: Option<&Path>,
    ) -> Result<String> {
        let mut form = Form::new().part("video", read_upload_part(video).await?);
        for (key, value) in style.form_fields() {
            form = form.text(key, value);
        }
        if let Some(font) = font_file {
            form = form.part("font_file", read_upload_part(font).await?);
        }

        self.post_job(&self.endpoint("/process"), form).await
    }

    /// Re-render an already-processed video with edited cues and colors.
    ///
    /// `video_path` is the server-side path returned by the completed job.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::Submission`] if the payload cannot be
    /// encoded, the service cannot be reached, or the service rejects
    /// the job.
    pub async fn resubmit(
        &self,
        video_path: &str,
        cues: &[Caption],
        color_map: &BTreeMap<String, String>,
        style: &StyleParams,
        font_file: Option<&Path>,
    ) -> Result<String> {
        let subtitles = serde_json::to_string(cues).map_err(|e| SubwireError::Submission {
            message: format!("cannot encode subtitles: {e}"),
        })?;
        let colors = serde_json::to_string(color_map).map_err(|e| SubwireError::Submission {
            message: format!("cannot encode color map: {e}"),
        })?;

        let mut form = Form::new()
            .text("video_path", video_path.to_string())
            .text("subtitles", subtitles)
            .text("color_map", colors);
        for (key, value) in style.form_fields() {
            // The render keeps the original resolution, so it is not sent again.
            if key == "resolution" {
                continue;
            }
            form = form.text(key, value);
        }
        if let Some(font) = font_file {
            form = form.part("font_file", read_upload_part(font).await?);
        }

        self.post_job(&self.endpoint("/reprocess"), form).await
    }

    async fn post_job(&self, url: &str, form: Form) -> Result<String> {
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubwireError::Submission {
                message: format!("cannot reach captioning service: {e}"),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| SubwireError::Submission {
            message: format!("cannot read service response: {e}"),
        })?;

        parse_submit_response(status, &text)
    }

    /// Query the state of a task.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::StatusQuery`] if the service cannot be
    /// reached or the payload is not a recognizable status.
    pub async fn status(&self, task_id: &str) -> Result<StatusResponse> {
        let response = self
            .http
            .get(self.endpoint(&format!("/status/{task_id}")))
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| SubwireError::StatusQuery {
                message: format!("cannot reach captioning service: {e}"),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| SubwireError::StatusQuery {
            message: format!("cannot read service response: {e}"),
        })?;

        serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                SubwireError::StatusQuery {
                    message: format!("malformed status payload: {e}"),
                }
            } else {
                SubwireError::StatusQuery {
                    message: format!("service returned status {status}"),
                }
            }
        })
    }

    /// List the fonts installed on the service.
    pub async fn fonts(&self) -> Result<Vec<FontEntry>> {
        let response = self
            .http
            .get(self.endpoint("/api/fonts"))
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| SubwireError::Other(format!("Failed to fetch font list: {e}")))?;

        if !response.status().is_success() {
            return Err(SubwireError::Other(format!(
                "Font list request returned status {}",
                response.status()
            )));
        }

        let parsed: FontsResponse = response
            .json()
            .await
            .map_err(|e| SubwireError::Other(format!("Failed to parse font list: {e}")))?;

        Ok(parsed.fonts)
    }

    /// Fetch the address the service advertises for LAN access.
    pub async fn host(&self) -> Result<HostInfo> {
        let response = self
            .http
            .get(self.endpoint("/api/host"))
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| SubwireError::Other(format!("Failed to fetch host info: {e}")))?;

        if !response.status().is_success() {
            return Err(SubwireError::Other(format!(
                "Host info request returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SubwireError::Other(format!("Failed to parse host info: {e}")))
    }

    /// Download a rendered video to `dest`, returning the byte count.
    ///
    /// `video_path` is the server-side path from a completed job; only its
    /// final segment is sent to the download endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SubwireError::Download`] on any network or file failure.
    pub async fn download(&self, video_path: &str, dest: &Path, progress: bool) -> Result<u64> {
        let filename = output_basename(video_path)?;

        let response = self
            .http
            .get(self.endpoint(&format!("/download/{filename}")))
            .send()
            .await
            .map_err(|e| SubwireError::Download {
                message: format!("cannot reach captioning service: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SubwireError::Download {
                message: format!("service returned status {}", response.status()),
            });
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SubwireError::Download {
                message: format!("cannot create output directory: {e}"),
            })?;
        }

        let total_size = response.content_length().unwrap_or(0);
        let pb = if progress {
            let pb = ProgressBar::new(total_size);
            pb.set_style(
                // SAFETY: hardcoded template string, always valid
                #[allow(clippy::expect_used)]
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("hardcoded progress bar template")
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stream = response.bytes_stream();
        let mut file = fs::File::create(dest).map_err(|e| SubwireError::Download {
            message: format!("cannot create output file: {e}"),
        })?;
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| SubwireError::Download {
                message: format!("cannot read download chunk: {e}"),
            })?;

            file.write_all(&chunk).map_err(|e| SubwireError::Download {
                message: format!("cannot write to output file: {e}"),
            })?;

            written += chunk.len() as u64;
            if let Some(ref pb) = pb {
                pb.inc(chunk.len() as u64);
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("Downloaded");
        }

        Ok(written)
    }
}

/// Read a local file into a multipart part carrying its base name.
async fn read_upload_part(path: &Path) -> Result<Part> {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => {
            return Err(SubwireError::Submission {
                message: format!("path {} has no file name", path.display()),
            });
        }
    };

    let bytes = tokio::fs::read(path).await.map_err(|e| SubwireError::Submission {
        message: format!("cannot read {}: {e}", path.display()),
    })?;

    Part::bytes(bytes)
        .file_name(name)
        .mime_str("application/octet-stream")
        .map_err(|e| SubwireError::Submission {
            message: format!("cannot attach {}: {e}", path.display()),
        })
}

fn parse_submit_response(status: reqwest::StatusCode, text: &str) -> Result<String> {
    let parsed: SubmitResponse = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(e) if status.is_success() => {
            return Err(SubwireError::Submission {
                message: format!("malformed service response: {e}"),
            });
        }
        Err(_) => {
            return Err(SubwireError::Submission {
                message: format!("service returned status {status}"),
            });
        }
    };

    if !parsed.success {
        return Err(SubwireError::Submission {
            message: parsed
                .error
                .unwrap_or_else(|| "service rejected the job".to_string()),
        });
    }

    parsed.task_id.ok_or_else(|| SubwireError::Submission {
        message: "service accepted the job but returned no task id".to_string(),
    })
}

/// The final path segment of a server-side video path.
pub(crate) fn output_basename(video_path: &str) -> Result<&str> {
    match video_path.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(SubwireError::Download {
            message: format!("server path {video_path:?} has no file name"),
        }),
    }
}
