// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::processors::*;
use crate::config::ProcessorConfig;
use crate::errors::ProcessorMapError;
use crate::observability::messages::{processor::ProcessorInstantiationFailed, StructuredLog};
use crate::text::Shift;
use crate::traits::Processor;

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from configuration
    ///
    /// The `impl_` field in the config determines which processor to create:
    /// - "word_frequency_counter" -> WordFrequencyCounterProcessor
    /// - "palindrome_checker" -> PalindromeCheckerProcessor
    /// - "caesar_encrypt" -> CaesarCipherProcessor (encrypt)
    /// - "caesar_decrypt" -> CaesarCipherProcessor (decrypt)
    ///
    /// Cipher processors use `options.shift` when present, `default_shift` otherwise.
    pub fn create_processor(
        config: &ProcessorConfig,
        default_shift: Shift,
    ) -> Result<Arc<dyn Processor>, ProcessorMapError> {
        let result = Self::build(config, default_shift);

        if let Err(e) = &result {
            ProcessorInstantiationFailed {
                processor_id: &config.id,
                impl_name: config.impl_.as_deref().unwrap_or_default(),
                reason: &e.to_string(),
            }
            .log();
        }

        result
    }

    fn build(config: &ProcessorConfig, default_shift: Shift) -> Result<Arc<dyn Processor>, ProcessorMapError> {
        let impl_name = config
            .impl_
            .as_ref()
            .ok_or_else(|| ProcessorMapError::MissingImplementation {
                processor_id: config.id.clone(),
            })?;

        match impl_name.as_str() {
            // Analysis processors
            "word_frequency_counter" => Ok(Arc::new(WordFrequencyCounterProcessor::new())),
            "palindrome_checker" => Ok(Arc::new(PalindromeCheckerProcessor::new())),

            // Cipher processors
            "caesar_encrypt" => Ok(Arc::new(CaesarCipherProcessor::encrypt(
                Self::shift_for(config, default_shift)?,
            ))),
            "caesar_decrypt" => Ok(Arc::new(CaesarCipherProcessor::decrypt(
                Self::shift_for(config, default_shift)?,
            ))),

            _ => Err(ProcessorMapError::UnknownImplementation {
                processor_id: config.id.clone(),
                impl_name: impl_name.clone(),
            }),
        }
    }

    fn shift_for(config: &ProcessorConfig, default_shift: Shift) -> Result<Shift, ProcessorMapError> {
        match &config.options.shift {
            Some(setting) => setting.resolve().map_err(|source| ProcessorMapError::InvalidOption {
                processor_id: config.id.clone(),
                source,
            }),
            None => Ok(default_shift),
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "word_frequency_counter",
            "palindrome_checker",
            "caesar_encrypt",
            "caesar_decrypt",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(impl_name: &str) -> bool {
        Self::list_available_implementations().contains(&impl_name)
    }
}
