// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Turning tool results into the text a user reads.
//!
//! Nothing here computes anything; every function takes a finished result
//! from [`crate::text`] or a [`ToolboxRun`] and formats it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::engine::{StepStatus, ToolboxRun};
use crate::text::{is_palindrome, CipherDirection, WordCount};

pub const NO_WORDS_MESSAGE: &str = "No words found in file.";
pub const EMPTY_PALINDROME_INPUT: &str = "Please enter some text.";
pub const PALINDROME_VERDICT: &str = "Palindrome ✓";
pub const NOT_PALINDROME_VERDICT: &str = "Not a palindrome ✗";

const WORD_COLUMN_WIDTH: usize = 30;
const RULE_WIDTH: usize = 40;

/// Ranked word table for `source`, most common first.
///
/// `limit` keeps only the first rows. An empty count renders as
/// [`NO_WORDS_MESSAGE`] instead of an empty table.
pub fn render_word_frequency(source: &str, counts: &WordCount, limit: Option<usize>) -> String {
    if counts.is_empty() {
        return NO_WORDS_MESSAGE.to_string();
    }

    let mut lines = vec![
        format!("Word frequency for file: {}", source),
        String::new(),
        format!("{:width$}Count", "Word", width = WORD_COLUMN_WIDTH),
        "-".repeat(RULE_WIDTH),
    ];

    let ranking = counts.most_common();
    let rows = limit.unwrap_or(ranking.len());
    lines.extend(
        ranking
            .iter()
            .take(rows)
            .map(|row| format!("{:width$}{}", row.word, row.count, width = WORD_COLUMN_WIDTH)),
    );

    lines.join("\n")
}

/// Verdict line for `text`, or a prompt when there is nothing to check.
///
/// Blank input is refused before the checker runs; input made only of
/// punctuation still reaches it and counts as a palindrome.
pub fn render_palindrome(text: &str) -> &'static str {
    if text.trim().is_empty() {
        EMPTY_PALINDROME_INPUT
    } else if is_palindrome(text) {
        PALINDROME_VERDICT
    } else {
        NOT_PALINDROME_VERDICT
    }
}

/// Prompt shown when there is no text to run the cipher on.
pub fn empty_cipher_message(direction: CipherDirection) -> &'static str {
    match direction {
        CipherDirection::Encrypt => "Enter text to encrypt.",
        CipherDirection::Decrypt => "Enter text to decrypt.",
    }
}

/// Human readable report of a toolbox run, one block per processor.
pub fn render_toolbox_run(run: &ToolboxRun) -> String {
    let mut lines = Vec::new();

    for (i, step) in run.steps.iter().enumerate() {
        match &step.status {
            StepStatus::Completed { output, .. } => {
                lines.push(format!(
                    "{}. {} -> \"{}\"",
                    i + 1,
                    step.processor_id,
                    String::from_utf8_lossy(output)
                ));
                lines.extend(
                    sorted_metadata(run, &step.processor_id)
                        .into_iter()
                        .map(|(key, value)| format!("   {}: {}", key, value)),
                );
            }
            StepStatus::Failed(e) => {
                lines.push(format!("{}. {} failed: {}", i + 1, step.processor_id, e));
            }
            StepStatus::Skipped { failed_dependency } => {
                lines.push(format!(
                    "{}. {} skipped: dependency '{}' produced no output",
                    i + 1,
                    step.processor_id,
                    failed_dependency
                ));
            }
        }
    }

    if let Some(output) = run.final_transform_output() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("Final output: \"{}\"", String::from_utf8_lossy(output)));
    }

    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_output: Option<String>,
    steps: Vec<StepSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct StepSummary<'a> {
    id: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_dependency: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<&'a str, &'a str>,
}

/// Pretty-printed JSON report of a toolbox run.
pub fn render_toolbox_run_json(run: &ToolboxRun) -> Result<String, serde_json::Error> {
    let steps = run
        .steps
        .iter()
        .map(|step| {
            let mut summary = StepSummary {
                id: &step.processor_id,
                status: "completed",
                output: None,
                error: None,
                failed_dependency: None,
                metadata: BTreeMap::new(),
            };

            match &step.status {
                StepStatus::Completed { output, .. } => {
                    summary.output = Some(String::from_utf8_lossy(output).into_owned());
                    summary.metadata = sorted_metadata(run, &step.processor_id);
                }
                StepStatus::Failed(e) => {
                    summary.status = "failed";
                    summary.error = Some(e.to_string());
                }
                StepStatus::Skipped { failed_dependency } => {
                    summary.status = "skipped";
                    summary.failed_dependency = Some(failed_dependency);
                }
            }

            summary
        })
        .collect();

    let summary = RunSummary {
        success: run.is_success(),
        final_output: run
            .final_transform_output()
            .map(|o| String::from_utf8_lossy(o).into_owned()),
        steps,
    };

    serde_json::to_string_pretty(&summary)
}

/// The processor implementations a config may name, one per line.
pub fn render_processor_list(names: &[&str]) -> String {
    names.join("\n")
}

fn sorted_metadata<'a>(run: &'a ToolboxRun, processor_id: &str) -> BTreeMap<&'a str, &'a str> {
    run.metadata
        .get_processor_metadata(processor_id)
        .map(|m| {
            m.metadata
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepReport;
    use crate::errors::ExecutionError;
    use crate::proto::processor_v1::PipelineMetadata;
    use crate::text::count_word_frequency;
    use crate::traits::ProcessorIntent;

    #[test]
    fn test_word_frequency_table_layout() {
        let counts = count_word_frequency("The cat. The CAT, the cat! A dog.");

        let rendered = render_word_frequency("pets.txt", &counts, None);

        let expected = [
            "Word frequency for file: pets.txt",
            "",
            "Word                          Count",
            "----------------------------------------",
            "the                           3",
            "cat                           3",
            "a                             1",
            "dog                           1",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_word_frequency_limit() {
        let counts = count_word_frequency("b a b c");

        let rendered = render_word_frequency("f", &counts, Some(1));

        assert!(rendered.ends_with("\nb                             2"));
        assert!(!rendered.contains("\na "));
    }

    #[test]
    fn test_long_words_are_not_truncated() {
        let word = "pneumonoultramicroscopicsilicovolcanoconiosis";
        let counts = count_word_frequency(word);

        let rendered = render_word_frequency("f", &counts, None);

        assert!(rendered.ends_with(&format!("{}1", word)));
    }

    #[test]
    fn test_empty_inputs_render_messages() {
        struct TestCase {
            name: &'static str,
            rendered: String,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "no words",
                rendered: render_word_frequency("empty.txt", &count_word_frequency(" \n\t "), None),
                expected: "No words found in file.",
            },
            TestCase {
                name: "punctuation only file",
                rendered: render_word_frequency("p.txt", &count_word_frequency("?!... --"), None),
                expected: "No words found in file.",
            },
            TestCase {
                name: "blank palindrome",
                rendered: render_palindrome("   ").to_string(),
                expected: "Please enter some text.",
            },
            TestCase {
                name: "empty palindrome",
                rendered: render_palindrome("").to_string(),
                expected: "Please enter some text.",
            },
            TestCase {
                name: "empty encrypt",
                rendered: empty_cipher_message(CipherDirection::Encrypt).to_string(),
                expected: "Enter text to encrypt.",
            },
            TestCase {
                name: "empty decrypt",
                rendered: empty_cipher_message(CipherDirection::Decrypt).to_string(),
                expected: "Enter text to decrypt.",
            },
        ];

        for case in test_cases {
            assert_eq!(case.rendered, case.expected, "Failed test case: {}", case.name);
        }
    }

    #[test]
    fn test_palindrome_verdicts() {
        assert_eq!(render_palindrome("A man, a plan, a canal: Panama"), "Palindrome ✓");
        assert_eq!(render_palindrome("Hello"), "Not a palindrome ✗");
        assert_eq!(render_palindrome("?!"), "Palindrome ✓");
    }

    fn sample_run() -> ToolboxRun {
        let mut metadata = PipelineMetadata::new();
        metadata.add_metadata("secret", "shift", "3");
        metadata.add_metadata("secret", "direction", "encrypt");

        ToolboxRun {
            steps: vec![
                StepReport {
                    processor_id: "secret".to_string(),
                    status: StepStatus::Completed {
                        intent: ProcessorIntent::Transform,
                        output: b"Dwwdfn".to_vec(),
                    },
                },
                StepReport {
                    processor_id: "broken".to_string(),
                    status: StepStatus::Failed(ExecutionError::MissingOutcome {
                        processor_id: "broken".to_string(),
                    }),
                },
                StepReport {
                    processor_id: "after".to_string(),
                    status: StepStatus::Skipped {
                        failed_dependency: "broken".to_string(),
                    },
                },
            ],
            metadata,
        }
    }

    #[test]
    fn test_render_toolbox_run() {
        let rendered = render_toolbox_run(&sample_run());

        let expected = [
            "1. secret -> \"Dwwdfn\"",
            "   direction: encrypt",
            "   shift: 3",
            "2. broken failed: Processor 'broken' returned no outcome",
            "3. after skipped: dependency 'broken' produced no output",
            "",
            "Final output: \"Dwwdfn\"",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_toolbox_run_json() {
        let json = render_toolbox_run_json(&sample_run()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["final_output"], "Dwwdfn");
        assert_eq!(value["steps"][0]["status"], "completed");
        assert_eq!(value["steps"][0]["metadata"]["shift"], "3");
        assert_eq!(value["steps"][1]["status"], "failed");
        assert!(value["steps"][1].get("output").is_none());
        assert_eq!(value["steps"][2]["failed_dependency"], "broken");
    }

    #[test]
    fn test_render_empty_run() {
        let run = ToolboxRun {
            steps: vec![],
            metadata: PipelineMetadata::new(),
        };

        assert_eq!(render_toolbox_run(&run), "");
    }
}
