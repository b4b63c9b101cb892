// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Log messages shared by the library.
//!
//! Every event is a small struct: `Display` gives the human-readable line and
//! [`StructuredLog::log`] emits it with its fields at a fixed level.
//!
//! ```rust
//! use textkit::observability::messages::{engine::ExecutionStarted, StructuredLog};
//!
//! ExecutionStarted {
//!     processor_count: 3,
//!     failure_strategy: "FailFast",
//! }
//! .log();
//! ```

pub mod engine;
pub mod processor;
pub mod source;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    fn log(&self);
}
