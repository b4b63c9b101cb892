// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalProcessorFactory;
use crate::config::consts::MAX_DEPENDENCIES;
use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    ConfigurationProblem, ValidationCompleted, ValidationFailed, ValidationStarted,
};
use crate::observability::messages::StructuredLog;
use std::collections::{HashMap, HashSet};

/// Validates a toolbox configuration.
///
/// Checks, for every processor:
/// - its ID is unique
/// - `impl_` is present and names a local implementation
/// - a `shift` option, if any, is an integer
/// - it has at most one dependency, and that dependency is declared earlier
///
/// The toolbox-wide `default_shift` must be an integer too.
///
/// Returns every problem found rather than stopping at the first.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    ValidationStarted {
        processor_count: config.processors.len(),
    }
    .log();

    let mut errors = Vec::new();

    if let Err(e) = config.default_shift() {
        errors.push(ValidationError::InvalidDefaultShift {
            reason: e.to_string(),
        });
    }

    // First declaration position of every ID
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (position, processor) in config.processors.iter().enumerate() {
        positions.entry(processor.id.as_str()).or_insert(position);
    }

    let mut seen_ids = HashSet::new();
    for (position, processor) in config.processors.iter().enumerate() {
        if !seen_ids.insert(processor.id.as_str()) {
            errors.push(ValidationError::DuplicateProcessorId {
                processor_id: processor.id.clone(),
            });
        }

        match &processor.impl_ {
            None => errors.push(ValidationError::MissingImplementation {
                processor_id: processor.id.clone(),
            }),
            Some(impl_name) if !LocalProcessorFactory::is_implementation_available(impl_name) => {
                errors.push(ValidationError::UnknownImplementation {
                    processor_id: processor.id.clone(),
                    impl_name: impl_name.clone(),
                })
            }
            Some(_) => {}
        }

        if let Some(Err(e)) = processor.options.shift.as_ref().map(|shift| shift.resolve()) {
            errors.push(ValidationError::InvalidOption {
                processor_id: processor.id.clone(),
                option: "shift".to_string(),
                reason: e.to_string(),
            });
        }

        if processor.depends_on.len() > MAX_DEPENDENCIES {
            errors.push(ValidationError::TooManyDependencies {
                processor_id: processor.id.clone(),
                count: processor.depends_on.len(),
            });
        }

        for dependency in &processor.depends_on {
            match positions.get(dependency.as_str()) {
                None => errors.push(ValidationError::UnresolvedDependency {
                    processor_id: processor.id.clone(),
                    missing_dependency: dependency.clone(),
                }),
                Some(&dependency_position) if dependency_position >= position => {
                    errors.push(ValidationError::ForwardDependency {
                        processor_id: processor.id.clone(),
                        dependency: dependency.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        ValidationCompleted {
            processor_count: config.processors.len(),
        }
        .log();
        Ok(())
    } else {
        for error in &errors {
            ConfigurationProblem { error }.log();
        }
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}
