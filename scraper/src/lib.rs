pub mod avatar;
pub mod config;
pub mod error;
pub mod http;
pub mod links;
pub mod logging;
pub mod metadata;
pub mod profile;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::avatar::{AvatarLocator, ImageSource, ProfilePage};
pub use crate::config::FetcherConfig;
pub use crate::error::Error;
pub use crate::http::{image_extension, PageResponse, ProfileClient};
pub use crate::links::{fetch_video_links, resolve_video_urls, save_links};
pub use crate::metadata::{MetadataExtractor, ProfileInfo, VideoEntry, YtDlp};
pub use crate::profile::{normalize_profile_url, strip_handle, PROFILE_BASE_URL};
