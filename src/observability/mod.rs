// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout textkit. Message types follow a struct-based pattern with a
//! `Display` implementation for the human readable line and a [`messages::StructuredLog`]
//! implementation that emits the same event with typed `tracing` fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - toolbox run lifecycle events
//! * `messages::processor` - processor execution and instantiation events
//! * `messages::source` - text source loading events
//! * `messages::validation` - configuration validation errors
//!
//! # Usage
//!
//! ```rust
//! use textkit::observability::messages::processor::ProcessorExecutionFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "caesar_encrypt",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the stderr subscriber for the `textkit` binary.
///
/// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=textkit=debug`), defaulting
/// to `warn` so tool output on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
