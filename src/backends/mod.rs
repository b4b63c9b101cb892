// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor backends for textkit.
//!
//! Every text tool is exposed as a [`Processor`](crate::traits::Processor)
//! so a toolbox can hold and run them uniformly.
//!
//! # Local Backend
//! In-process Rust processors wrapping the pure functions in [`crate::text`]:
//! - **Analysis**: word frequency counting, palindrome checking
//! - **Transformation**: Caesar cipher encryption and decryption
//!
//! # Stub Backend (Test-Only)
//! Processors that fail or return nothing, for exercising toolbox failure handling.
//!
//! # Architecture
//!
//! ```text
//! Configuration → LocalProcessorFactory → Processor Instance → Toolbox
//! ```
//!
//! # Example
//! ```rust
//! use textkit::backends::local::LocalProcessorFactory;
//! use textkit::config::{ProcessorConfig, ProcessorOptions};
//! use textkit::text::Shift;
//!
//! let config = ProcessorConfig {
//!     id: "secret".to_string(),
//!     impl_: Some("caesar_encrypt".to_string()),
//!     depends_on: vec![],
//!     options: ProcessorOptions::default(),
//! };
//!
//! let processor = LocalProcessorFactory::create_processor(&config, Shift::new(3))?;
//! assert_eq!(processor.name(), "caesar_encrypt");
//! # Ok::<(), textkit::errors::ProcessorMapError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
