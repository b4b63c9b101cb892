// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Loading text for the tools to work on.
//!
//! The text tools never touch the filesystem themselves; the presentation
//! layer loads the whole source here first and hands the string over.

use std::fs;
use std::path::Path;

use crate::errors::TextError;
use crate::observability::messages::source::{TextLoadFailed, TextLoaded};
use crate::observability::messages::StructuredLog;

/// Read the whole file at `path` as UTF-8 text.
///
/// Missing or unreadable files are reported as [`TextError::Io`], files that
/// are not UTF-8 as [`TextError::Decode`].
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String, TextError> {
    let path = path.as_ref();

    let result = fs::read(path)
        .map_err(|source| TextError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|bytes| {
            String::from_utf8(bytes).map_err(|source| TextError::Decode {
                path: path.to_path_buf(),
                source,
            })
        });

    match &result {
        Ok(text) => TextLoaded {
            path,
            size: text.len(),
        }
        .log(),
        Err(error) => TextLoadFailed { path, error }.log(),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_text_reads_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The cat.\nThe CAT, the cat!\n").unwrap();

        let text = load_text(file.path()).unwrap();

        assert_eq!(text, "The cat.\nThe CAT, the cat!\n");
    }

    #[test]
    fn test_load_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_text(&missing).unwrap_err();

        match err {
            TextError::Io { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_text_rejects_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = load_text(file.path()).unwrap_err();

        assert!(matches!(err, TextError::Decode { .. }));
        assert!(err.is_io());
    }

    #[test]
    fn test_load_text_empty_file() {
        let file = NamedTempFile::new().unwrap();

        assert_eq!(load_text(file.path()).unwrap(), "");
    }
}
