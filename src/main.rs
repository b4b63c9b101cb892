// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use clap::Parser;
use std::io;
use std::process::ExitCode;

use textkit::cli::{execute, Cli};
use textkit::observability::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match execute(cli, io::stdin()).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
