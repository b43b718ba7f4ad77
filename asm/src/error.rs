use std::fmt;

use arch::op::Op;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Per-line errors, collected as diagnostics
    #[error("Unparsable line \"{0}\"")]
    UnparsableLine(String),

    #[error("Unrecognized instruction \"{0}\"")]
    UnrecognizedInstruction(String),

    #[error("Unparsable number \"{0}\"")]
    UnparsableNumber(String),

    #[error("Unexpected parameter \"{0}\" to {1}")]
    UnexpectedParameter(String, Op),

    // Fatal errors, abort the run
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to write output")]
    FileWrite(#[source] std::io::Error),
}

/// A recorded, non-fatal report of one malformed source line.
#[derive(Debug)]
pub struct Diag {
    source: String,
    line: usize,
    error: Error,
}

impl Diag {
    pub fn new(source: &str, line: usize, error: Error) -> Self {
        Self {
            source: source.to_string(),
            line,
            error,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.source, self.line, self.error)
    }
}
