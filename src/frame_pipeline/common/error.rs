use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Buffer too short for frame header: have {have} bytes, need {need}")]
    TruncatedBuffer { have: usize, need: usize },

    #[error("Invalid frame header: {0}")]
    InvalidHeader(String),

    #[error("Frame payload size mismatch: expected {expected} bytes, have {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Empty frame")]
    EmptyFrame,

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("{0} is not implemented")]
    NotImplemented(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
