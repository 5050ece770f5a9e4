//! Shareable link and the third-party QR image that encodes it.
//!
//! Both are display aids. Callers treat download failures as best-effort.

use crate::error::ShareError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Public address of the deployed quiz. Unset until deployment.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default = "default_qr_endpoint")]
    pub qr_endpoint: String,
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,
}

fn default_qr_endpoint() -> String {
    DEFAULT_QR_ENDPOINT.into()
}

fn default_qr_size() -> u32 {
    DEFAULT_QR_SIZE
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            link: None,
            qr_endpoint: default_qr_endpoint(),
            qr_size: default_qr_size(),
        }
    }
}

impl ShareConfig {
    /// QR image address for the configured link, if there is one.
    pub fn qr_url(&self) -> Result<Option<Url>, ShareError> {
        match self.link.as_deref().filter(|link| !link.trim().is_empty()) {
            Some(link) => qr_image_url(&self.qr_endpoint, link, self.qr_size).map(Some),
            None => Ok(None),
        }
    }
}

pub fn qr_image_url(endpoint: &str, link: &str, size: u32) -> Result<Url, ShareError> {
    let size = format!("{size}x{size}");
    let url = Url::parse_with_params(endpoint, [("size", size.as_str()), ("data", link)])?;
    Ok(url)
}

pub fn build_share_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Fetch the QR image and write it to `dest`. Returns the byte count.
pub async fn download_qr(client: &Client, url: &Url, dest: &Path) -> Result<usize, ShareError> {
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ShareError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(dest, &bytes).await?;

    tracing::info!(
        url = %url,
        dest = %dest.display(),
        bytes = bytes.len(),
        "downloaded QR image"
    );
    Ok(bytes.len())
}
