// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod pipeline_metadata;
pub mod toolbox;

pub use toolbox::{StepReport, StepStatus, Toolbox, ToolboxEntry, ToolboxRun};
