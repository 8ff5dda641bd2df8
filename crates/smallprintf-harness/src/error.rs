//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("argument {index}: value out of range for {word}")]
    ArgumentRange { index: usize, word: &'static str },
    #[error("invalid argument '{0}', expected u:<n>, d:<n>, s:<text> or s:null")]
    InvalidArgument(String),
    #[error("unknown word width '{0}', expected u8|u16|u32|u64")]
    UnknownWord(String),
}
