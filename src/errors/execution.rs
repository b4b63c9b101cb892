// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use thiserror::Error;

/// How a toolbox run reacts when a processor reports an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Stop at the first failed processor.
    #[default]
    FailFast,
    /// Record the failure, skip processors that depend on it and keep going.
    ContinueOnError,
}

/// Errors that abort a toolbox run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error("Processor '{processor_id}' failed with code {code}: {message}")]
    ProcessorFailed {
        processor_id: String,
        code: i32,
        message: String,
    },

    #[error("Processor '{processor_id}' returned no outcome")]
    MissingOutcome { processor_id: String },

    #[error("Processor '{processor_id}' is not registered")]
    ProcessorNotFound { processor_id: String },

    #[error("Processor '{processor_id}' has no output from dependency '{dependency_id}'")]
    MissingDependencyOutput {
        processor_id: String,
        dependency_id: String,
    },
}
