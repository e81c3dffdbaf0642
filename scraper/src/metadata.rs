use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::DEFAULT_YT_DLP;
use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub webpage_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub original_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

// Every key of yt-dlp's output may be missing, so every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub webpage_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploader: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uploader_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub entries: Option<Vec<Option<VideoEntry>>>,
}

impl VideoEntry {
    pub fn from_value(value: &Value) -> Option<VideoEntry> {
        if !value.is_object() {
            return None;
        }
        VideoEntry::deserialize(value).ok()
    }
}

impl ProfileInfo {
    pub fn from_value(value: &Value) -> Option<ProfileInfo> {
        if !value.is_object() {
            return None;
        }
        ProfileInfo::deserialize(value).ok()
    }

    pub fn uploader_name(&self) -> Option<&str> {
        self.uploader
            .as_deref()
            .or(self.uploader_id.as_deref())
            .or(self.display_id.as_deref())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Empty strings and zero are as good as missing to the fallback chain
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_entries<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Option<VideoEntry>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(items.iter().map(VideoEntry::from_value).collect()),
        _ => None,
    })
}

// Raw JSON so callers can tell "not an object" apart from an object without entries
pub trait MetadataExtractor {
    fn extract(&self, profile_url: &str) -> Result<Value>;
}

impl<F> MetadataExtractor for F
where
    F: Fn(&str) -> Result<Value>,
{
    fn extract(&self, profile_url: &str) -> Result<Value> {
        self(profile_url)
    }
}

#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
}

impl Default for YtDlp {
    fn default() -> Self {
        YtDlp::new(DEFAULT_YT_DLP)
    }
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        YtDlp {
            program: program.into(),
        }
    }

    fn command(&self, profile_url: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "--flat-playlist",
            "--dump-single-json",
            "--skip-download",
            "--quiet",
            "--no-warnings",
        ]);
        cmd.arg(profile_url);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl MetadataExtractor for YtDlp {
    fn extract(&self, profile_url: &str) -> Result<Value> {
        let program = self.program.display().to_string();
        let mut cmd = self.command(profile_url);
        debug!("running {:?}", cmd);

        let output = cmd.output().map_err(|source| Error::ExtractorUnavailable {
            program: program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(Error::ExtractorFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let value: Value = serde_json::from_slice(&output.stdout).map_err(Error::from)?;
        debug!("{} returned {} bytes of metadata", program, output.stdout.len());
        Ok(value)
    }
}
