#[derive(Debug, thiserror::Error)]
pub enum PbtoolError {
    #[error("{0}")]
    Config(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Codec(#[from] robot_pb::Error),
}
