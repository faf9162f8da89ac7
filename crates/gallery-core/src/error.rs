use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("audio graph unavailable: {0}")]
    AudioGraph(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("malformed config: {0}")]
    ConfigJson(#[source] serde_json::Error),
    #[error("malformed item list: {0}")]
    Items(#[source] serde_json::Error),
}
