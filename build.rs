// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_root = "proto";

    prost_build::Config::new()
        .out_dir("src/proto") // writes src/proto/processor.v1.rs
        .compile_protos(&[format!("{proto_root}/processor.proto")], &[proto_root])?;

    println!("cargo:rerun-if-changed={proto_root}/processor.proto");
    Ok(())
}
