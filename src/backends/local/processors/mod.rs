// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod caesar_cipher;
pub mod palindrome_checker;
pub mod word_frequency_counter;

pub use caesar_cipher::*;
pub use palindrome_checker::*;
pub use word_frequency_counter::*;

use crate::observability::messages::{processor::ProcessorExecutionFailed, StructuredLog};
use crate::proto::processor_v1::processor_response::Outcome;
use crate::proto::processor_v1::{ErrorDetail, ProcessorResponse};

/// Error code for payloads the processor cannot read.
pub const BAD_INPUT: i32 = 400;
/// Error code for failures inside the processor.
pub const INTERNAL_FAILURE: i32 = 500;

/// Decode a request payload as UTF-8, or build the 400 response to send back.
pub(crate) fn decode_payload(processor_id: &str, payload: Vec<u8>) -> Result<String, ProcessorResponse> {
    String::from_utf8(payload).map_err(|e| {
        ProcessorExecutionFailed {
            processor_id,
            error: &e,
        }
        .log();

        error_response(BAD_INPUT, format!("Invalid UTF-8 input: {}", e))
    })
}

pub(crate) fn error_response(code: i32, message: String) -> ProcessorResponse {
    ProcessorResponse {
        outcome: Some(Outcome::Error(ErrorDetail { code, message })),
        metadata: None,
    }
}
