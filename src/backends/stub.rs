// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Misbehaving processors for exercising toolbox failure handling.

use async_trait::async_trait;

use crate::proto::processor_v1::processor_response::Outcome;
use crate::proto::processor_v1::{ErrorDetail, ProcessorRequest, ProcessorResponse};
use crate::traits::{Processor, ProcessorIntent};

/// Always answers with an error outcome.
pub struct FailingProcessor {
    pub code: i32,
    pub message: String,
}

impl FailingProcessor {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[async_trait]
impl Processor for FailingProcessor {
    async fn process(&self, _req: ProcessorRequest) -> ProcessorResponse {
        ProcessorResponse {
            outcome: Some(Outcome::Error(ErrorDetail {
                code: self.code,
                message: self.message.clone(),
            })),
            metadata: None,
        }
    }

    fn name(&self) -> &'static str {
        "failing_stub"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}

/// Answers with no outcome at all.
pub struct SilentProcessor;

#[async_trait]
impl Processor for SilentProcessor {
    async fn process(&self, _req: ProcessorRequest) -> ProcessorResponse {
        ProcessorResponse::default()
    }

    fn name(&self) -> &'static str {
        "silent_stub"
    }

    fn declared_intent(&self) -> ProcessorIntent {
        ProcessorIntent::Transform
    }
}
