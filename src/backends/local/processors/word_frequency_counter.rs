// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;

use super::{decode_payload, error_response, INTERNAL_FAILURE};
use crate::observability::messages::{processor::*, StructuredLog};
use crate::proto::processor_v1::processor_response::Outcome;
use crate::proto::processor_v1::{PipelineMetadata, ProcessorMetadata, ProcessorRequest, ProcessorResponse};
use crate::text::count_word_frequency;
use crate::traits::{processor::ProcessorIntent, Processor};

/// Metadata key holding the number of tokens counted.
pub const TOTAL_WORDS_KEY: &str = "total_words";
/// Metadata key holding the number of distinct words.
pub const UNIQUE_WORDS_KEY: &str = "unique_words";
/// Metadata key holding the ranked `[{"word","count"}]` JSON listing.
pub const RANKING_KEY: &str = "ranking";

/// Word Frequency Counter processor - counts each word of the payload
pub struct WordFrequencyCounterProcessor;

impl WordFrequencyCounterProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordFrequencyCounterProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for WordFrequencyCounterProcessor {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        let start_msg = ProcessorExecutionStarted {
            processor_id: self.name(),
            input_size: req.payload.len(),
        };
        let span = start_msg.span();
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let input = match decode_payload(self.name(), req.payload) {
            Ok(text) => text,
            Err(response) => return response,
        };

        let counts = count_word_frequency(&input);

        let ranking = match serde_json::to_string(&counts.most_common()) {
            Ok(json) => json,
            Err(e) => {
                ProcessorExecutionFailed {
                    processor_id: self.name(),
                    error: &e,
                }
                .log();
                return error_response(INTERNAL_FAILURE, format!("Failed to serialize result: {}", e));
            }
        };

        // Analyze processors leave the payload alone; findings go in metadata
        let analysis_metadata = HashMap::from([
            (TOTAL_WORDS_KEY.to_string(), counts.total().to_string()),
            (UNIQUE_WORDS_KEY.to_string(), counts.len().to_string()),
            (RANKING_KEY.to_string(), ranking),
        ]);

        let mut pipeline_metadata = PipelineMetadata::new();
        pipeline_metadata.metadata.insert(
            self.name().to_string(),
            ProcessorMetadata {
                metadata: analysis_metadata,
            },
        );

        let output_bytes = input.into_bytes();

        ProcessorExecutionCompleted {
            processor_id: self.name(),
            input_size: start_msg.input_size,
            output_size: output_bytes.len(),
            duration: start_time.elapsed(),
        }
        .log();

        ProcessorResponse {
            outcome: Some(Outcome::NextPayload(output_bytes)),
            metadata: Some(pipeline_metadata),
        }
    }

    fn name(&self) -> &'static str {
        "word_frequency_counter"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Analyze
    }
}
