use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("fetch failed for {url}: HTTP status {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("dataset format error: {0}")]
    Format(String),

    #[error("computation failed for {criterion}: {reason}")]
    Computation {
        criterion: &'static str,
        reason: String,
    },

    #[error("http client error: {0}")]
    HttpClient(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("metadata parse error: {0}")]
    MetadataParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CensusError>;
