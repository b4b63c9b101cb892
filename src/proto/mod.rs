// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Generated by build.rs from proto/processor.proto
#[path = "processor.v1.rs"]
pub mod processor_v1;

// Re-export the types for easier access
pub use processor_v1::{ProcessorRequest, ProcessorResponse};
