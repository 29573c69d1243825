use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultFormatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ResultFormatError>;
