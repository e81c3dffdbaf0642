use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Any failure of the metadata extractor, flattened into its message.
    #[error("yt-dlp failed to extract info: {0}")]
    Extraction(String),

    #[error("could not run {program}: is it installed and on PATH?")]
    ExtractorUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    ExtractorFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("extractor returned invalid JSON: {0}")]
    InvalidMetadata(#[from] serde_json::Error),
}
