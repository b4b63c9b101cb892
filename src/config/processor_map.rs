// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalProcessorFactory;
use crate::config::Config;
use crate::errors::{ProcessorMapError, TextError};
use crate::traits::Processor;
use std::collections::HashMap;
use std::sync::Arc;

/// A registry mapping processor IDs to their implementations.
///
/// Each configured tool gets exactly one instance, shared through `Arc` with
/// whatever runs it.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use textkit::backends::local::PalindromeCheckerProcessor;
/// use textkit::config::ProcessorMap;
/// use textkit::traits::Processor;
///
/// let mut processor_map = ProcessorMap::new();
/// let checker: Arc<dyn Processor> = Arc::new(PalindromeCheckerProcessor::new());
/// processor_map.insert("check".to_string(), checker);
///
/// assert!(processor_map.contains_key("check"));
/// assert_eq!(processor_map.get("check").unwrap().name(), "palindrome_checker");
/// ```
#[derive(Clone, Default)]
pub struct ProcessorMap(pub HashMap<String, Arc<dyn Processor>>);

impl ProcessorMap {
    /// Create a new empty processor map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Create a ProcessorMap from configuration, instantiating every processor
    pub fn from_config(cfg: &Config) -> Result<Self, ProcessorMapError> {
        let default_shift = cfg
            .default_shift()
            .map_err(|source: TextError| ProcessorMapError::InvalidOption {
                processor_id: "default_shift".to_string(),
                source,
            })?;

        let mut registry = HashMap::new();
        for p in &cfg.processors {
            let processor = LocalProcessorFactory::create_processor(p, default_shift)?;
            registry.insert(p.id.clone(), processor);
        }

        Ok(Self(registry))
    }

    /// Insert a processor into the map
    pub fn insert(&mut self, id: String, processor: Arc<dyn Processor>) {
        self.0.insert(id, processor);
    }

    /// Get a processor by ID
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Processor>> {
        self.0.get(id)
    }

    /// Check if a processor exists
    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Get all processor IDs
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ProcessorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorMap")
            .field("processor_count", &self.0.len())
            .field("processor_ids", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Processor>>> for ProcessorMap {
    fn from(map: HashMap<String, Arc<dyn Processor>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ConfigFormat};

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            expected: Vec<(&'static str, &'static str)>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty config",
                yaml: "processors: []",
                expected: vec![],
            },
            TestCase {
                name: "one of each tool",
                yaml: r#"
processors:
  - id: words
    impl_: word_frequency_counter
  - id: check
    impl_: palindrome_checker
  - id: secret
    impl_: caesar_encrypt
  - id: plain
    impl_: caesar_decrypt
"#,
                expected: vec![
                    ("words", "word_frequency_counter"),
                    ("check", "palindrome_checker"),
                    ("secret", "caesar_encrypt"),
                    ("plain", "caesar_decrypt"),
                ],
            },
        ];

        for case in test_cases {
            let cfg = parse_config(case.yaml, ConfigFormat::Yaml).unwrap();
            let map = ProcessorMap::from_config(&cfg)
                .unwrap_or_else(|e| panic!("{}: {}", case.name, e));

            assert_eq!(map.len(), case.expected.len(), "Failed test case: {}", case.name);
            for (id, name) in case.expected {
                assert_eq!(map.get(id).unwrap().name(), name, "Failed test case: {}", case.name);
            }
        }
    }

    #[test]
    fn test_from_config_unknown_implementation() {
        let cfg = parse_config(
            "processors:\n  - id: x\n    impl_: reverse_text\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        let err = ProcessorMap::from_config(&cfg).unwrap_err();
        assert!(matches!(err, ProcessorMapError::UnknownImplementation { .. }));
        assert_eq!(err.processor_id(), "x");
    }

    #[test]
    fn test_from_config_invalid_default_shift() {
        let cfg = parse_config("default_shift: three\nprocessors: []", ConfigFormat::Yaml).unwrap();

        let err = ProcessorMap::from_config(&cfg).unwrap_err();
        assert!(matches!(err, ProcessorMapError::InvalidOption { .. }));
    }

    #[test]
    fn test_debug_lists_ids() {
        let cfg = parse_config(
            "processors:\n  - id: check\n    impl_: palindrome_checker\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        let debug = format!("{:?}", ProcessorMap::from_config(&cfg).unwrap());
        assert!(debug.contains("processor_count: 1"));
        assert!(debug.contains("check"));
    }
}
