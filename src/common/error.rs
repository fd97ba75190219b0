use std::io;

use thiserror::Error;

/// Errors raised by the harness layer (input parsing, dataset requests).
/// The sorting engines themselves are total and never fail.
#[derive(Debug, Error)]
pub enum SortKitError {
    #[error("invalid number '{input}' on line {line}")]
    InvalidNumber { input: String, line: usize },

    #[error("{value} is out of range (expected {min} to {max})")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("no numbers to sort")]
    EmptyInput,

    #[error("unknown algorithm '{0}' (expected merge, quick, insertion or bubble)")]
    UnknownAlgorithm(String),

    /// IO failure, already rendered without the "(os error N)" suffix.
    /// Holds no source so error chains print the message once.
    #[error("{0}")]
    Io(String),
}

impl From<io::Error> for SortKitError {
    fn from(e: io::Error) -> Self {
        SortKitError::Io(crate::common::io_error_msg(&e))
    }
}

pub type Result<T> = std::result::Result<T, SortKitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_has_clean_message_and_no_source() {
        let err = SortKitError::from(io::Error::from_raw_os_error(libc::ENOENT));
        let msg = err.to_string();
        assert!(msg.contains("No such file"), "got: {}", msg);
        assert!(!msg.contains("os error"), "got: {}", msg);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_in_context_chain_prints_once() {
        let err = anyhow::Error::from(SortKitError::from(io::Error::from_raw_os_error(
            libc::ENOENT,
        )))
        .context("numbers.txt");
        let rendered = format!("{:#}", err);
        assert_eq!(rendered.matches("No such file").count(), 1, "got: {}", rendered);
        assert!(!rendered.contains("os error"), "got: {}", rendered);
        assert!(rendered.starts_with("numbers.txt: "));
    }
}
