// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for loading text sources.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Text source loaded into memory.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct TextLoaded<'a> {
    pub path: &'a Path,
    pub size: usize,
}

impl Display for TextLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loaded '{}': {} bytes", self.path.display(), self.size)
    }
}

impl StructuredLog for TextLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            size = self.size,
            "{}", self
        );
    }
}

/// Text source could not be loaded.
///
/// # Log Level
/// `warn!` - Reported to the user, not retried
pub struct TextLoadFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for TextLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load '{}': {}", self.path.display(), self.error)
    }
}

impl StructuredLog for TextLoadFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            path = %self.path.display(),
            error = %self.error,
            "{}", self
        );
    }
}
