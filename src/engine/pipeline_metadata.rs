// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use crate::proto::processor_v1::{PipelineMetadata, ProcessorMetadata, ProcessorResponse};

impl PipelineMetadata {
    pub fn new() -> Self {
        Self {
            metadata: HashMap::new(),
        }
    }

    pub fn add_metadata(&mut self, processor_id: &str, key: &str, value: &str) {
        let processor_metadata = self.metadata.entry(processor_id.to_string()).or_insert(ProcessorMetadata {
            metadata: HashMap::new(),
        });
        processor_metadata.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn merge_processor_metadata(&mut self, processor_id: &str, processor_metadata: &ProcessorMetadata) {
        for (key, value) in &processor_metadata.metadata {
            self.add_metadata(processor_id, key, value);
        }
    }

    /// Merge everything a processor reported under the ID it is configured with.
    ///
    /// Processors label their metadata with their implementation name; two
    /// configured instances of one implementation would collide on that, so
    /// the toolbox files it under the configured ID instead.
    pub fn merge_processor_response(&mut self, processor_id: &str, response: &ProcessorResponse) {
        if let Some(response_metadata) = &response.metadata {
            for proc_metadata in response_metadata.metadata.values() {
                self.merge_processor_metadata(processor_id, proc_metadata);
            }
        }
    }

    pub fn get_processor_metadata(&self, processor_id: &str) -> Option<&ProcessorMetadata> {
        self.metadata.get(processor_id)
    }

    pub fn get_metadata_value(&self, processor_id: &str, key: &str) -> Option<&str> {
        self.metadata.get(processor_id)?.metadata.get(key).map(|s| s.as_str())
    }

    pub fn list_processors(&self) -> Vec<&str> {
        self.metadata.keys().map(|s| s.as_str()).collect()
    }
}
