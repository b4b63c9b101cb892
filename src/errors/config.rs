// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during toolbox configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A processor has a duplicate ID
    DuplicateProcessorId {
        /// The duplicate processor ID
        processor_id: String,
    },
    /// A processor names an implementation that does not exist
    UnknownImplementation {
        processor_id: String,
        /// The implementation name as written in the configuration
        impl_name: String,
    },
    /// A processor entry has no `impl_` field
    MissingImplementation { processor_id: String },
    /// A processor references a dependency that doesn't exist
    UnresolvedDependency {
        /// The processor that has the unresolved dependency
        processor_id: String,
        /// The dependency that couldn't be resolved
        missing_dependency: String,
    },
    /// A processor depends on one declared after it (or on itself)
    ForwardDependency {
        processor_id: String,
        dependency: String,
    },
    /// A processor lists more dependencies than a single input chain allows
    TooManyDependencies {
        processor_id: String,
        count: usize,
    },
    /// The toolbox-wide default shift is not an integer
    InvalidDefaultShift { reason: String },
    /// A processor option holds a value the processor cannot use
    InvalidOption {
        processor_id: String,
        option: String,
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateProcessorId { processor_id } => {
                write!(f, "Duplicate processor ID: '{}'", processor_id)
            }
            ValidationError::UnknownImplementation {
                processor_id,
                impl_name,
            } => {
                write!(
                    f,
                    "Processor '{}' uses unknown implementation '{}'",
                    processor_id, impl_name
                )
            }
            ValidationError::MissingImplementation { processor_id } => {
                write!(f, "Processor '{}' is missing the 'impl_' field", processor_id)
            }
            ValidationError::UnresolvedDependency {
                processor_id,
                missing_dependency,
            } => {
                write!(
                    f,
                    "Processor '{}' depends on '{}' which does not exist",
                    processor_id, missing_dependency
                )
            }
            ValidationError::ForwardDependency {
                processor_id,
                dependency,
            } => {
                write!(
                    f,
                    "Processor '{}' depends on '{}' which is not declared before it",
                    processor_id, dependency
                )
            }
            ValidationError::TooManyDependencies {
                processor_id,
                count,
            } => {
                write!(
                    f,
                    "Processor '{}' lists {} dependencies; at most one is allowed",
                    processor_id, count
                )
            }
            ValidationError::InvalidDefaultShift { reason } => {
                write!(f, "Invalid default_shift: {}", reason)
            }
            ValidationError::InvalidOption {
                processor_id,
                option,
                reason,
            } => {
                write!(
                    f,
                    "Processor '{}' has invalid option '{}': {}",
                    processor_id, option, reason
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur while loading a toolbox configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
