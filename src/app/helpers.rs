//! Async helpers run through `Task::perform`

use std::time::Duration;

use anyhow::{Context, bail};

use crate::utils::detect_image_format;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Download a stage image into memory
pub async fn fetch_image(url: String) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?
        .error_for_status()?;

    let bytes = response.bytes().await?.to_vec();
    match detect_image_format(&bytes) {
        Some(format) => {
            tracing::debug!("Fetched {} ({}, {} bytes)", url, format, bytes.len());
            Ok(bytes)
        }
        None => bail!("{} did not return an image", url),
    }
}
