//! Multipart upload to the merge web form.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{error, info};

use super::{MergeRequest, MergeUploader};
use crate::config::model::MergeConfig;
use crate::error::MergeError;

/// Posts subtitle pairs to the merge service.
pub struct HttpMergeUploader {
    /// Form URL.
    endpoint: String,
    /// HTTP client with the request timeout applied.
    client: reqwest::Client,
}

impl HttpMergeUploader {
    /// Creates an uploader from config.
    pub fn new(config: &MergeConfig) -> Result<Self, MergeError> {
        Self::with_timeout(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Creates an uploader for `endpoint` whose requests give up after `timeout`.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, MergeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Builds the form the service expects.
    async fn build_form(request: &MergeRequest) -> Result<Form, MergeError> {
        let style = &request.style;

        let form = Form::new()
            .part("top", file_part(&request.top).await?)
            .part("bot", file_part(&request.bottom).await?)
            .text("send", "yes")
            .text("fontname", style.fontname.clone())
            .text("fontsize", style.fontsize.to_string())
            .text("topColor", style.top_color.clone())
            .text("botColor", style.bot_color.clone());

        Ok(form)
    }
}

/// Reads a subtitle file into a form part named after the file.
async fn file_part(path: &Path) -> Result<Part, MergeError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| MergeError::ReadTrack {
            path: path.to_path_buf(),
            source: e,
        })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "subtitle.srt".to_string());

    Ok(Part::bytes(bytes).file_name(file_name))
}

#[async_trait]
impl MergeUploader for HttpMergeUploader {
    async fn merge(&self, request: &MergeRequest) -> Result<Vec<u8>, MergeError> {
        let form = Self::build_form(request).await?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, endpoint = %self.endpoint, "Merge service rejected request");
            return Err(MergeError::RemoteService {
                status: status.to_string(),
            });
        }

        let body = response.bytes().await?;

        info!(bytes = body.len(), "Merged subtitles received");
        Ok(body.to_vec())
    }
}
