// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor map creation and processor instantiation.

use thiserror::Error;

use crate::errors::TextError;

/// Errors that can occur during processor map creation
#[derive(Error, Debug)]
pub enum ProcessorMapError {
    /// The processor entry names no implementation
    #[error("Processor '{processor_id}' is missing the 'impl_' field")]
    MissingImplementation { processor_id: String },

    /// The implementation name is not one of the local processors
    #[error("Unknown local processor implementation '{impl_name}' for processor '{processor_id}'")]
    UnknownImplementation {
        processor_id: String,
        impl_name: String,
    },

    /// A processor option could not be turned into a valid setting
    #[error("Invalid options for processor '{processor_id}': {source}")]
    InvalidOption {
        processor_id: String,
        #[source]
        source: TextError,
    },
}

impl ProcessorMapError {
    pub fn processor_id(&self) -> &str {
        match self {
            ProcessorMapError::MissingImplementation { processor_id }
            | ProcessorMapError::UnknownImplementation { processor_id, .. }
            | ProcessorMapError::InvalidOption { processor_id, .. } => processor_id,
        }
    }
}
