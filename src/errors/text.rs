// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by the text tools to their caller.
//!
//! Loading failures and shift validation failures are reported once to the
//! immediate caller and never retried.

use std::num::ParseIntError;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextError {
    /// The text source could not be opened or read.
    #[error("Could not open file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text source was read but is not valid UTF-8.
    #[error("Could not decode file '{}' as UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// A cipher shift that is not an integer.
    #[error("Invalid shift '{raw}': please enter a valid integer")]
    InvalidShift {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

impl TextError {
    /// True for failures to load the text source.
    pub fn is_io(&self) -> bool {
        matches!(self, TextError::Io { .. } | TextError::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shift_message() {
        let source = "abc".parse::<i64>().unwrap_err();
        let error = TextError::InvalidShift {
            raw: "abc".to_string(),
            source,
        };

        assert_eq!(
            error.to_string(),
            "Invalid shift 'abc': please enter a valid integer"
        );
        assert!(!error.is_io());
    }

    #[test]
    fn test_io_message_names_path() {
        let error = TextError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert!(error.to_string().starts_with("Could not open file 'missing.txt'"));
        assert!(error.is_io());
    }
}
