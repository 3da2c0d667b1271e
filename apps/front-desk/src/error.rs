//! # Console Error Type
//!
//! Errors that end an operator session. Business failures (occupied room,
//! bad guest input, unknown item) are never here: the session prints them
//! and carries on.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading stdin or writing stdout failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input stream closed (Ctrl-D or end of a piped script).
    #[error("end of input")]
    EndOfInput,
}

pub type SessionResult<T> = Result<T, SessionError>;
