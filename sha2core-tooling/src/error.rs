pub use anyhow::Result;

/// Custom error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },
    #[error("malformed check line: {}", _0)]
    MalformedCheckLine(String),
    #[error("invalid digest: {}", _0)]
    InvalidDigest(String),
    #[error("{}", _0)]
    Io(#[from] ::std::io::Error),
}
