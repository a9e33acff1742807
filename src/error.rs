use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("No log files to analyze: pass --log-files, --directory, or --archive")]
    NoInput,

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid text: {0}")]
    UnreadableFile(String),

    #[error("Failed to write report: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line does not carry a parseable timestamp: {found:?}")]
    MalformedTimestamp { found: String },

    #[error("Invalid time bound {value:?}: expected \"MMDD HH:MM\"")]
    InvalidTimeBound { value: String },

    #[error("No troubleshooting entry for signature: {0}")]
    UnknownSignature(String),

    #[error("Failed to extract archive: {path}")]
    Archive {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
