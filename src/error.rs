use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing key `{0}`")]
    MissingKey(String),

    #[error("subplot ({row}, {col}) is outside a {rows}x{cols} grid")]
    SubplotOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("display backend `{0}` is not compiled in")]
    UnsupportedBackend(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
