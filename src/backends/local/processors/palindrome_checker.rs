// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;

use super::decode_payload;
use crate::observability::messages::{processor::*, StructuredLog};
use crate::proto::processor_v1::processor_response::Outcome;
use crate::proto::processor_v1::{PipelineMetadata, ProcessorMetadata, ProcessorRequest, ProcessorResponse};
use crate::text::{is_palindrome, normalize_for_palindrome};
use crate::traits::{processor::ProcessorIntent, Processor};

pub const IS_PALINDROME_KEY: &str = "is_palindrome";
pub const NORMALIZED_LENGTH_KEY: &str = "normalized_length";

/// Palindrome Checker processor - reports whether the payload is a palindrome
pub struct PalindromeCheckerProcessor;

impl PalindromeCheckerProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PalindromeCheckerProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for PalindromeCheckerProcessor {
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

        let verdict = is_palindrome(&input);
        let normalized_length = normalize_for_palindrome(&input).len();

        let mut pipeline_metadata = PipelineMetadata::new();
        pipeline_metadata.metadata.insert(
            self.name().to_string(),
            ProcessorMetadata {
                metadata: HashMap::from([
                    (IS_PALINDROME_KEY.to_string(), verdict.to_string()),
                    (NORMALIZED_LENGTH_KEY.to_string(), normalized_length.to_string()),
                ]),
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
        "palindrome_checker"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Analyze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn check(text: &str) -> HashMap<String, String> {
        let response = PalindromeCheckerProcessor::new()
            .process(ProcessorRequest {
                payload: text.as_bytes().to_vec(),
                ..Default::default()
            })
            .await;

        let mut metadata = response.metadata.expect("Expected metadata");
        metadata
            .metadata
            .remove("palindrome_checker")
            .expect("Expected palindrome_checker metadata")
            .metadata
    }

    #[tokio::test]
    async fn test_reports_verdict() {
        let test_cases = vec![
            ("A man, a plan, a canal: Panama", "true", "21"),
            ("Hello", "false", "5"),
            ("", "true", "0"),
            ("!!!", "true", "0"),
        ];

        for (input, expected_verdict, expected_length) in test_cases {
            let metadata = check(input).await;
            assert_eq!(metadata[IS_PALINDROME_KEY], expected_verdict, "Failed for {:?}", input);
            assert_eq!(metadata[NORMALIZED_LENGTH_KEY], expected_length, "Failed for {:?}", input);
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_bad_input() {
        let response = PalindromeCheckerProcessor::new()
            .process(ProcessorRequest {
                payload: vec![0xc3, 0x28],
                ..Default::default()
            })
            .await;

        assert!(matches!(response.outcome, Some(Outcome::Error(ref detail)) if detail.code == 400));
        assert!(response.metadata.is_none());
    }
}
