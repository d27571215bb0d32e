//! Remote dual subtitle merge service.

pub mod client;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::model::SubtitleStyle;
use crate::error::MergeError;

pub use client::HttpMergeUploader;

/// Two extracted subtitle files and how to render them.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRequest {
    pub top: PathBuf,
    pub bottom: PathBuf,
    pub style: SubtitleStyle,
}

/// Sends subtitle files to be merged and returns the merged track.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MergeUploader: Send + Sync {
    async fn merge(&self, request: &MergeRequest) -> Result<Vec<u8>, MergeError>;
}
