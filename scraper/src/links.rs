use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use url::Url;

use crate::error::Error;
use crate::metadata::{MetadataExtractor, ProfileInfo, VideoEntry};
use crate::profile::{normalize_profile_url, strip_handle, video_url};

pub fn fetch_video_links<E: MetadataExtractor + ?Sized>(
    extractor: &E,
    profile: &str,
    output: Option<&Path>,
    max_items: Option<usize>,
) -> Result<Vec<String>> {
    let profile_url = normalize_profile_url(profile);
    info!("extracting video list for {}", profile_url);

    let raw = extractor
        .extract(&profile_url)
        .map_err(|e| Error::Extraction(format!("{:#}", e)))?;

    let info = ProfileInfo::from_value(&raw);
    let links = resolve_video_urls(info.as_ref(), max_items);
    info!("resolved {} unique video links", links.len());

    if let Some(path) = output {
        save_links(path, &links)?;
    }

    Ok(links)
}

/// One URL per entry, deduplicated in first-seen order.
pub fn resolve_video_urls(info: Option<&ProfileInfo>, max_items: Option<usize>) -> Vec<String> {
    let info = match info {
        Some(info) => info,
        None => return Vec::new(),
    };

    let entries = match info.entries.as_deref() {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            debug!("no entries in extraction result, treating it as a single video");
            return single_video_url(info).into_iter().collect();
        }
    };

    let limit = max_items.unwrap_or(usize::MAX);
    let mut seen = HashSet::new();
    let mut videos = Vec::new();

    // The limit counts positions in the listing, skipped entries included.
    for entry in entries.iter().take(limit) {
        let entry = match entry {
            Some(entry) => entry,
            None => continue,
        };

        match entry_url(entry, info) {
            Some(url) => {
                if seen.insert(url.clone()) {
                    videos.push(url);
                }
            }
            None => debug!("dropping entry without a usable url: {:?}", entry.id),
        }
    }

    videos
}

fn single_video_url(info: &ProfileInfo) -> Option<String> {
    info.webpage_url
        .clone()
        .or_else(|| info.url.clone())
        .or_else(|| info.id.clone())
}

fn entry_url(entry: &VideoEntry, info: &ProfileInfo) -> Option<String> {
    if let Some(url) = entry
        .webpage_url
        .as_ref()
        .or(entry.original_url.as_ref())
        .or(entry.url.as_ref())
    {
        return Some(url.clone());
    }

    let video_id = entry.id.as_deref()?;
    let username = match info.uploader_name() {
        Some(name) => name.to_string(),
        None => username_from_profile_url(info.webpage_url.as_deref()?)?,
    };
    Some(video_url(&username, video_id))
}

fn username_from_profile_url(profile_url: &str) -> Option<String> {
    let parsed = Url::parse(profile_url).ok()?;
    let segment = parsed.path().trim_matches('/').split('/').next()?;
    let username = strip_handle(segment);
    if username.is_empty() {
        None
    } else {
        Some(username.to_string())
    }
}

pub fn save_links(path: &Path, links: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut contents = String::new();
    for link in links {
        contents.push_str(link);
        contents.push('\n');
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write links file: {}", path.display()))?;
    debug!("wrote {} links to {}", links.len(), path.display());
    Ok(())
}
