pub const PROFILE_BASE_URL: &str = "https://www.tiktok.com/@";

/// Accepts `someuser`, `@someuser` or a full profile URL.
pub fn normalize_profile_url(input: &str) -> String {
    let input = input.trim();
    // Full URLs are not validated
    if input.starts_with("http://") || input.starts_with("https://") {
        return input.to_string();
    }

    let username = input.strip_prefix('@').unwrap_or(input);
    format!("{}{}", PROFILE_BASE_URL, username)
}

pub fn strip_handle(username: &str) -> &str {
    username.trim_start_matches('@')
}

pub fn video_url(username: &str, video_id: &str) -> String {
    format!("{}{}/video/{}", PROFILE_BASE_URL, username, video_id)
}
