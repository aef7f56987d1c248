use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Protocol errors
    #[error("malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("invalid package name: {message}")]
    InvalidPackageName { message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
