// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Instant;

use super::decode_payload;
use crate::observability::messages::{processor::*, StructuredLog};
use crate::proto::processor_v1::processor_response::Outcome;
use crate::proto::processor_v1::{PipelineMetadata, ProcessorMetadata, ProcessorRequest, ProcessorResponse};
use crate::text::{caesar_transform, CipherDirection, Shift};
use crate::traits::{processor::ProcessorIntent, Processor};

pub const SHIFT_KEY: &str = "shift";
pub const DIRECTION_KEY: &str = "direction";

/// Caesar Cipher processor - shifts the letters of the payload
pub struct CaesarCipherProcessor {
    direction: CipherDirection,
    shift: Shift,
}

impl CaesarCipherProcessor {
    pub fn new(direction: CipherDirection, shift: Shift) -> Self {
        Self { direction, shift }
    }

    pub fn encrypt(shift: Shift) -> Self {
        Self::new(CipherDirection::Encrypt, shift)
    }

    pub fn decrypt(shift: Shift) -> Self {
        Self::new(CipherDirection::Decrypt, shift)
    }

    pub fn direction(&self) -> CipherDirection {
        self.direction
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }
}

#[async_trait]
impl Processor for CaesarCipherProcessor {
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

        let output = caesar_transform(&input, self.direction.effective_shift(self.shift));
        let output_bytes = output.into_bytes();

        let mut pipeline_metadata = PipelineMetadata::new();
        pipeline_metadata.metadata.insert(
            self.name().to_string(),
            ProcessorMetadata {
                metadata: HashMap::from([
                    (SHIFT_KEY.to_string(), self.shift.to_string()),
                    (DIRECTION_KEY.to_string(), self.direction.to_string()),
                ]),
            },
        );

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
        match self.direction {
            CipherDirection::Encrypt => "caesar_encrypt",
            CipherDirection::Decrypt => "caesar_decrypt",
        }
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
