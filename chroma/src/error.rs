use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChromaError {
    #[error("Parse error:{0}")]
    Parse(String),

    #[error("Range error:{0}")]
    Range(String),
}

pub type Result<T> = std::result::Result<T, ChromaError>;
