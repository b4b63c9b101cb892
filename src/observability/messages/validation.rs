// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Events from checking a toolbox config before it is run.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

pub struct ValidationStarted {
    pub processor_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Checking config with {} processors", self.processor_count)
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::debug!(processor_count = self.processor_count, "{}", self);
    }
}

pub struct ValidationCompleted {
    pub processor_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config accepted: {} processors", self.processor_count)
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::info!(processor_count = self.processor_count, "{}", self);
    }
}

/// One entry of the problem list; each is logged before the summary.
pub struct ConfigurationProblem<'a> {
    pub error: &'a ValidationError,
}

impl Display for ConfigurationProblem<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config problem: {}", self.error)
    }
}

impl StructuredLog for ConfigurationProblem<'_> {
    fn log(&self) {
        tracing::warn!(problem = ?self.error, "{}", self);
    }
}

pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config rejected: {} problems", self.error_count)
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }
}
