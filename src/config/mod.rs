// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod processor_map;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, parse_config, Config, ConfigFormat, ProcessorConfig,
    ProcessorOptions, ShiftSetting,
};
pub use processor_map::ProcessorMap;
pub use validation::validate_config;
