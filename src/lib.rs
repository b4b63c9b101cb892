// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // processor backends
pub mod cli;        // command line presentation
pub mod config;     // config + processor registry
pub mod engine;     // toolbox runner
pub mod errors;     // error handling
pub mod observability;
pub mod proto;      // envelope protobufs live here
pub mod render;     // result formatting
pub mod source;     // text loading
pub mod text;       // the pure text tools
pub mod traits;     // unified abstractions
