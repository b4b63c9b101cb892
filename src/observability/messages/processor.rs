// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Events emitted by processors and the factory that builds them.

use crate::observability::messages::StructuredLog;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A processor received a payload. Logged at `debug`.
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
}

impl ProcessorExecutionStarted<'_> {
    /// Span wrapping one `process` call.
    pub fn span(&self) -> Span {
        tracing::debug_span!(
            "process",
            processor_id = self.processor_id,
            input_size = self.input_size,
        )
    }
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processor '{}' started on {} bytes", self.processor_id, self.input_size)
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(processor_id = self.processor_id, input_size = self.input_size, "{}", self);
    }
}

pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' done: {} -> {} bytes in {:?}",
            self.processor_id, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            output_size = self.output_size,
            elapsed_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }
}

/// A processor answered with an error outcome, or none at all.
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn Error,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processor '{}' failed: {}", self.processor_id, self.error)
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(processor_id = self.processor_id, error = %self.error, "{}", self);
    }
}

/// The factory has no implementation under `impl_name`.
pub struct ProcessorInstantiationFailed<'a> {
    pub processor_id: &'a str,
    pub impl_name: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Cannot build processor '{}' from implementation '{}': {}",
            self.processor_id, self.impl_name, self.reason
        )
    }
}

impl StructuredLog for ProcessorInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(processor_id = self.processor_id, impl_name = self.impl_name, "{}", self);
    }
}
