// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command line presentation layer.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

use crate::backends::local::LocalProcessorFactory;
use crate::config::{load_and_validate_config, Config};
use crate::engine::Toolbox;
use crate::proto::processor_v1::ProcessorRequest;
use crate::render;
use crate::source::load_text;
use crate::text::{caesar_transform, count_word_frequency, CipherDirection, Shift};

#[derive(Parser, Debug)]
#[command(name = "textkit", version, about = "Word frequency, palindrome and Caesar cipher tools")]
pub struct Cli {
    #[arg(
        long,
        short,
        global = true,
        help = "Toolbox configuration file (YAML, or TOML by extension)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count how often each word occurs in a file
    WordFreq {
        file: PathBuf,
        #[arg(long, help = "Show only the most common N words")]
        top: Option<usize>,
    },
    /// Check whether text reads the same backwards
    Palindrome {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Encrypt or decrypt text with a Caesar shift
    Caesar {
        #[arg(value_enum)]
        action: CipherAction,
        #[arg(long, allow_hyphen_values = true, help = "Letters to shift by (default from config, else 3)")]
        shift: Option<String>,
        #[arg(allow_hyphen_values = true, help = "Text to transform; read from stdin when omitted")]
        text: Option<String>,
    },
    /// Run every processor of a configured toolbox over one input
    Run {
        input: String,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// List the processor implementations a config may use
    Processors,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CipherAction {
    Encrypt,
    Decrypt,
}

impl From<CipherAction> for CipherDirection {
    fn from(action: CipherAction) -> Self {
        match action {
            CipherAction::Encrypt => CipherDirection::Encrypt,
            CipherAction::Decrypt => CipherDirection::Decrypt,
        }
    }
}

/// Execute `cli` and return what should be printed.
///
/// `stdin` is only read by `caesar` when no text argument is given.
pub async fn execute<R: Read>(cli: Cli, stdin: R) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Some(
            load_and_validate_config(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        ),
        None => None,
    };

    match cli.command {
        Commands::WordFreq { file, top } => {
            let text = load_text(&file)?;
            let counts = count_word_frequency(&text);
            Ok(render::render_word_frequency(&file.display().to_string(), &counts, top))
        }
        Commands::Palindrome { text } => Ok(render::render_palindrome(&text.join(" ")).to_string()),
        Commands::Caesar { action, shift, text } => {
            let direction = CipherDirection::from(action);
            let shift = resolve_shift(shift.as_deref(), config.as_ref())?;
            let text = match text {
                Some(text) => text,
                None => read_stdin(stdin)?,
            };
            let text = text.trim_end_matches(['\r', '\n']);

            if text.is_empty() {
                return Ok(render::empty_cipher_message(direction).to_string());
            }
            Ok(caesar_transform(text, direction.effective_shift(shift)))
        }
        Commands::Run { input, json } => {
            let Some(config) = config else {
                bail!("The run command needs a toolbox configuration; pass --config <FILE>");
            };
            let toolbox = Toolbox::from_config(&config).context("Failed to build toolbox")?;

            let run = toolbox
                .run(ProcessorRequest {
                    payload: input.into_bytes(),
                    ..Default::default()
                })
                .await
                .context("Toolbox run failed")?;

            if json {
                Ok(render::render_toolbox_run_json(&run)?)
            } else {
                Ok(render::render_toolbox_run(&run))
            }
        }
        Commands::Processors => Ok(render::render_processor_list(
            &LocalProcessorFactory::list_available_implementations(),
        )),
    }
}

fn resolve_shift(raw: Option<&str>, config: Option<&Config>) -> Result<Shift> {
    let shift = match (raw, config) {
        (Some(raw), _) => raw.parse::<Shift>()?,
        (None, Some(config)) => config.default_shift()?,
        (None, None) => Config::default().default_shift()?,
    };
    Ok(shift)
}

fn read_stdin<R: Read>(mut stdin: R) -> Result<String> {
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}
