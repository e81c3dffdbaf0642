use std::time::Duration;

use crate::profile::PROFILE_BASE_URL;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const DEFAULT_REFERER: &str = "https://www.tiktok.com/";
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_LINKS_FILE: &str = "tiktok_video_links.txt";
pub const DEFAULT_PREVIEW_COUNT: usize = 20;
pub const DEFAULT_YT_DLP: &str = "yt-dlp";

// Only the profile page request uses these; the image download sends none.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub profile_base: String,
    pub user_agent: String,
    pub accept_language: String,
    pub referer: String,
    pub page_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig {
            profile_base: PROFILE_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            page_timeout: Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
        }
    }
}

impl FetcherConfig {
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            self.page_timeout = Duration::from_secs(secs);
        }
        self
    }
}
