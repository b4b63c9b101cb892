// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::proto::processor_v1::{ProcessorRequest, ProcessorResponse};

/// What a processor does with the payload it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorIntent {
    /// Produces a new payload (the Caesar cipher).
    Transform,
    /// Leaves the payload alone and reports findings in metadata.
    Analyze,
}

/// A text tool behind a request/response boundary.
///
/// Implementations never fail with `Err`: problems are reported inside the
/// response as `Outcome::Error`.
#[async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, req: ProcessorRequest) -> ProcessorResponse;

    fn name(&self) -> &'static str;

    fn declared_intent(&self) -> ProcessorIntent;
}
