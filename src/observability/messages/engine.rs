// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Toolbox run events.

use crate::observability::messages::StructuredLog;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub struct ExecutionStarted<'a> {
    pub processor_count: usize,
    pub failure_strategy: &'a str,
}

impl Display for ExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running toolbox: {} processors, {}",
            self.processor_count, self.failure_strategy
        )
    }
}

impl StructuredLog for ExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_count = self.processor_count,
            failure_strategy = self.failure_strategy,
            "{}", self
        );
    }
}

/// Logged once per run, failed steps included.
pub struct ExecutionCompleted {
    pub processors_executed: usize,
    pub processors_failed: usize,
    pub duration: Duration,
}

impl Display for ExecutionCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Toolbox finished: {} ran, {} failed, {:?}",
            self.processors_executed, self.processors_failed, self.duration
        )
    }
}

impl StructuredLog for ExecutionCompleted {
    fn log(&self) {
        tracing::info!(
            processors_executed = self.processors_executed,
            processors_failed = self.processors_failed,
            elapsed_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }
}

/// Fail-fast abort.
pub struct ExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn Error,
}

impl Display for ExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Toolbox run stopped at '{}': {}", self.processor_id, self.error)
    }
}

impl StructuredLog for ExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(processor_id = self.processor_id, error = %self.error, "{}", self);
    }
}

pub struct ProcessorSkipped<'a> {
    pub processor_id: &'a str,
    pub failed_dependency: &'a str,
}

impl Display for ProcessorSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping '{}': '{}' produced no output",
            self.processor_id, self.failed_dependency
        )
    }
}

impl StructuredLog for ProcessorSkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_id = self.processor_id,
            failed_dependency = self.failed_dependency,
            "{}", self
        );
    }
}
