use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER, USER_AGENT};
use reqwest::StatusCode;

use crate::config::FetcherConfig;
use crate::profile::strip_handle;

// Non-200 answers are data, not errors
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

pub struct ProfileClient {
    client: Client,
    config: FetcherConfig,
}

impl ProfileClient {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        // No client-wide timeout: only the page request gets one.
        let client = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ProfileClient { client, config })
    }

    pub fn profile_page_url(&self, username: &str) -> String {
        format!("{}{}", self.config.profile_base, strip_handle(username))
    }

    pub fn fetch_profile_page(&self, username: &str) -> Result<PageResponse> {
        let url = self.profile_page_url(username);
        debug!("GET {} (timeout {:?})", url, self.config.page_timeout);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .header(REFERER, &self.config.referer)
            .timeout(self.config.page_timeout)
            .send()
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        let body = response.text().context("Failed to get response text")?;
        Ok(PageResponse { url, status, body })
    }

    /// Streams the image into `<username>_pfp.<ext>` inside `dir`; `Ok(None)` on non-200.
    pub fn download_image(
        &self,
        img_url: &str,
        username: &str,
        dir: &Path,
    ) -> Result<Option<PathBuf>> {
        println!("[*] Downloading image...");
        let mut response = self
            .client
            .get(img_url)
            .send()
            .context("Failed to send image request")?;

        if response.status() != StatusCode::OK {
            println!(
                "[!] Failed to download image (status {})",
                response.status().as_u16()
            );
            return Ok(None);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        let path = dir.join(avatar_file_name(username, content_type));

        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create image file: {}", path.display()))?;
        let written = response
            .copy_to(&mut file)
            .with_context(|| format!("Failed to write image file: {}", path.display()))?;
        debug!("wrote {} bytes to {}", written, path.display());

        Ok(Some(path))
    }
}

pub fn image_extension(content_type: &str) -> &'static str {
    if content_type.contains("png") {
        ".png"
    } else {
        ".jpg"
    }
}

pub fn avatar_file_name(username: &str, content_type: &str) -> String {
    format!("{}_pfp{}", username, image_extension(content_type))
}
