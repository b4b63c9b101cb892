// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::config::{Config, ProcessorMap};
use crate::errors::{ExecutionError, FailureStrategy, ProcessorMapError};
use crate::observability::messages::engine::{
    ExecutionCompleted, ExecutionFailed, ExecutionStarted, ProcessorSkipped,
};
use crate::observability::messages::processor::ProcessorExecutionFailed;
use crate::observability::messages::StructuredLog;
use crate::proto::processor_v1::processor_response::Outcome;
use crate::proto::processor_v1::{PipelineMetadata, ProcessorRequest, ProcessorResponse};
use crate::traits::ProcessorIntent;

/// One configured slot in a toolbox: which processor runs and what it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxEntry {
    pub id: String,
    /// Earlier entry whose output this one receives; `None` reads the toolbox input.
    pub depends_on: Option<String>,
}

impl ToolboxEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            depends_on: None,
        }
    }

    pub fn after(id: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            depends_on: Some(dependency.into()),
        }
    }
}

/// What happened to one processor during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum StepStatus {
    /// The processor produced a payload.
    ///
    /// For Analyze processors `output` is the input they were handed.
    Completed {
        intent: ProcessorIntent,
        output: Vec<u8>,
    },
    /// The processor reported an error (only recorded under `ContinueOnError`).
    Failed(ExecutionError),
    /// The processor never ran because its dependency produced no output.
    Skipped { failed_dependency: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub processor_id: String,
    pub status: StepStatus,
}

/// Outcome of running every processor of a toolbox over one input.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolboxRun {
    /// One report per configured processor, in configuration order.
    pub steps: Vec<StepReport>,
    /// Metadata reported by completed processors, keyed by processor ID.
    pub metadata: PipelineMetadata,
}

impl ToolboxRun {
    pub fn step(&self, processor_id: &str) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.processor_id == processor_id)
    }

    /// Payload a completed processor produced.
    pub fn output(&self, processor_id: &str) -> Option<&[u8]> {
        match &self.step(processor_id)?.status {
            StepStatus::Completed { output, .. } => Some(output.as_slice()),
            _ => None,
        }
    }

    /// Payload of the last processor that transformed its input.
    pub fn final_transform_output(&self) -> Option<&[u8]> {
        self.steps.iter().rev().find_map(|s| match &s.status {
            StepStatus::Completed {
                intent: ProcessorIntent::Transform,
                output,
            } => Some(output.as_slice()),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &ExecutionError)> {
        self.steps.iter().filter_map(|s| match &s.status {
            StepStatus::Failed(e) => Some((s.processor_id.as_str(), e)),
            _ => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.steps
            .iter()
            .all(|s| matches!(s.status, StepStatus::Completed { .. }))
    }
}

/// The composition root for configured text tools.
///
/// Owns exactly one instance of every configured processor and runs them in
/// configuration order over a single input, awaiting each before starting the
/// next. An entry with a dependency receives that dependency's output; every
/// other entry receives the toolbox input.
///
/// # Example
/// ```
/// use textkit::config::{parse_config, ConfigFormat};
/// use textkit::engine::Toolbox;
/// use textkit::proto::processor_v1::ProcessorRequest;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let cfg = parse_config(
///     "processors:\n  - id: secret\n    impl_: caesar_encrypt\n",
///     ConfigFormat::Yaml,
/// ).unwrap();
/// let toolbox = Toolbox::from_config(&cfg).unwrap();
///
/// let run = toolbox
///     .run(ProcessorRequest { payload: b"abc".to_vec(), ..Default::default() })
///     .await
///     .unwrap();
///
/// assert_eq!(run.output("secret"), Some(&b"def"[..]));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Toolbox {
    entries: Vec<ToolboxEntry>,
    processors: ProcessorMap,
    failure_strategy: FailureStrategy,
}

impl Toolbox {
    pub fn new(
        entries: Vec<ToolboxEntry>,
        processors: ProcessorMap,
        failure_strategy: FailureStrategy,
    ) -> Self {
        Self {
            entries,
            processors,
            failure_strategy,
        }
    }

    /// Instantiate every configured processor.
    ///
    /// The config is expected to have passed validation; only the first
    /// `depends_on` entry of a processor is honoured.
    pub fn from_config(cfg: &Config) -> Result<Self, ProcessorMapError> {
        let processors = ProcessorMap::from_config(cfg)?;

        let entries = cfg
            .processors
            .iter()
            .map(|p| ToolboxEntry {
                id: p.id.clone(),
                depends_on: p.depends_on.first().cloned(),
            })
            .collect();

        Ok(Self::new(entries, processors, cfg.failure_strategy))
    }

    pub fn entries(&self) -> &[ToolboxEntry] {
        &self.entries
    }

    pub fn failure_strategy(&self) -> FailureStrategy {
        self.failure_strategy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every processor over `input`.
    ///
    /// Under `FailFast` the first failing processor aborts the run with its
    /// error. Under `ContinueOnError` the failure is recorded, dependents of
    /// the failed processor are skipped and the rest still run.
    pub async fn run(&self, input: ProcessorRequest) -> Result<ToolboxRun, ExecutionError> {
        let start_time = Instant::now();
        let strategy_name = format!("{:?}", self.failure_strategy);
        ExecutionStarted {
            processor_count: self.entries.len(),
            failure_strategy: &strategy_name,
        }
        .log();

        let mut outputs: HashMap<&str, Vec<u8>> = HashMap::new();
        let mut unavailable: HashSet<&str> = HashSet::new();
        let mut steps = Vec::with_capacity(self.entries.len());
        let mut metadata = PipelineMetadata::new();

        for entry in &self.entries {
            let processor_id = entry.id.as_str();
            let processor = self.processors.get(processor_id).ok_or_else(|| {
                ExecutionError::ProcessorNotFound {
                    processor_id: entry.id.clone(),
                }
            })?;

            let payload = match &entry.depends_on {
                None => input.payload.clone(),
                Some(dependency) if unavailable.contains(dependency.as_str()) => {
                    ProcessorSkipped {
                        processor_id,
                        failed_dependency: dependency,
                    }
                    .log();
                    unavailable.insert(processor_id);
                    steps.push(StepReport {
                        processor_id: entry.id.clone(),
                        status: StepStatus::Skipped {
                            failed_dependency: dependency.clone(),
                        },
                    });
                    continue;
                }
                Some(dependency) => outputs
                    .get(dependency.as_str())
                    .cloned()
                    .ok_or_else(|| ExecutionError::MissingDependencyOutput {
                        processor_id: entry.id.clone(),
                        dependency_id: dependency.clone(),
                    })?,
            };

            let request = ProcessorRequest {
                payload: payload.clone(),
                metadata: input.metadata.clone(),
            };
            let response = processor.process(request).await;

            match Self::check_response(processor_id, &response) {
                Ok(next_payload) => {
                    let intent = processor.declared_intent();
                    // Analyze processors hand their input on unchanged
                    let output = match intent {
                        ProcessorIntent::Transform => next_payload.to_vec(),
                        ProcessorIntent::Analyze => payload,
                    };

                    metadata.merge_processor_response(processor_id, &response);
                    outputs.insert(processor_id, output.clone());
                    steps.push(StepReport {
                        processor_id: entry.id.clone(),
                        status: StepStatus::Completed { intent, output },
                    });
                }
                Err(e) => match self.failure_strategy {
                    FailureStrategy::FailFast => {
                        ExecutionFailed {
                            processor_id,
                            error: &e,
                        }
                        .log();
                        return Err(e);
                    }
                    FailureStrategy::ContinueOnError => {
                        ProcessorExecutionFailed {
                            processor_id,
                            error: &e,
                        }
                        .log();
                        unavailable.insert(processor_id);
                        steps.push(StepReport {
                            processor_id: entry.id.clone(),
                            status: StepStatus::Failed(e),
                        });
                    }
                },
            }
        }

        let processors_failed = steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Failed(_)))
            .count();
        let processors_skipped = steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Skipped { .. }))
            .count();

        ExecutionCompleted {
            processors_executed: steps.len() - processors_skipped,
            processors_failed,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(ToolboxRun { steps, metadata })
    }

    fn check_response<'r>(
        processor_id: &str,
        response: &'r ProcessorResponse,
    ) -> Result<&'r [u8], ExecutionError> {
        match &response.outcome {
            Some(Outcome::NextPayload(payload)) => Ok(payload),
            Some(Outcome::Error(detail)) => Err(ExecutionError::ProcessorFailed {
                processor_id: processor_id.to_string(),
                code: detail.code,
                message: detail.message.clone(),
            }),
            None => Err(ExecutionError::MissingOutcome {
                processor_id: processor_id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{CaesarCipherProcessor, PalindromeCheckerProcessor};
    use crate::backends::stub::{FailingProcessor, SilentProcessor};
    use crate::text::Shift;
    use crate::traits::Processor;
    use std::sync::Arc;

    fn request(text: &str) -> ProcessorRequest {
        ProcessorRequest {
            payload: text.as_bytes().to_vec(),
            ..Default::default()
        }
    }

    fn shared<P: Processor + 'static>(processor: P) -> Arc<dyn Processor> {
        Arc::new(processor)
    }

    fn toolbox(
        processors: Vec<(&str, Arc<dyn Processor>)>,
        entries: Vec<ToolboxEntry>,
        failure_strategy: FailureStrategy,
    ) -> Toolbox {
        let mut map = ProcessorMap::new();
        for (id, processor) in processors {
            map.insert(id.to_string(), processor);
        }
        Toolbox::new(entries, map, failure_strategy)
    }

    #[tokio::test]
    async fn test_empty_toolbox() {
        let run = Toolbox::new(vec![], ProcessorMap::new(), FailureStrategy::FailFast)
            .run(request("anything"))
            .await
            .unwrap();

        assert!(run.steps.is_empty());
        assert!(run.is_success());
        assert_eq!(run.final_transform_output(), None);
    }

    #[tokio::test]
    async fn test_chain_feeds_dependency_output() {
        let tb = toolbox(
            vec![
                ("secret", shared(CaesarCipherProcessor::encrypt(Shift::new(3)))),
                ("again", shared(CaesarCipherProcessor::encrypt(Shift::new(3)))),
            ],
            vec![ToolboxEntry::new("secret"), ToolboxEntry::after("again", "secret")],
            FailureStrategy::FailFast,
        );

        let run = tb.run(request("abc")).await.unwrap();

        assert_eq!(run.output("secret"), Some(&b"def"[..]));
        assert_eq!(run.output("again"), Some(&b"ghi"[..]));
        assert_eq!(run.final_transform_output(), Some(&b"ghi"[..]));
    }

    #[tokio::test]
    async fn test_analyze_dependency_passes_input_through() {
        let tb = toolbox(
            vec![
                ("check", shared(PalindromeCheckerProcessor::new())),
                ("secret", shared(CaesarCipherProcessor::encrypt(Shift::new(1)))),
            ],
            vec![ToolboxEntry::new("check"), ToolboxEntry::after("secret", "check")],
            FailureStrategy::FailFast,
        );

        let run = tb.run(request("Abba")).await.unwrap();

        assert_eq!(run.output("check"), Some(&b"Abba"[..]));
        assert_eq!(run.output("secret"), Some(&b"Bccb"[..]));
        assert_eq!(run.metadata.get_metadata_value("check", "is_palindrome"), Some("true"));
        assert_eq!(run.metadata.get_metadata_value("secret", "shift"), Some("1"));
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_first_failure() {
        let tb = toolbox(
            vec![
                ("broken", shared(FailingProcessor::new(400, "bad input"))),
                ("secret", shared(CaesarCipherProcessor::encrypt(Shift::new(3)))),
            ],
            vec![ToolboxEntry::new("broken"), ToolboxEntry::new("secret")],
            FailureStrategy::FailFast,
        );

        let err = tb.run(request("abc")).await.unwrap_err();

        assert_eq!(
            err,
            ExecutionError::ProcessorFailed {
                processor_id: "broken".to_string(),
                code: 400,
                message: "bad input".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_continue_on_error_skips_dependents() {
        let tb = toolbox(
            vec![
                ("broken", shared(FailingProcessor::new(500, "boom"))),
                ("after_broken", shared(CaesarCipherProcessor::encrypt(Shift::new(3)))),
                ("after_skipped", shared(PalindromeCheckerProcessor::new())),
                ("independent", shared(CaesarCipherProcessor::decrypt(Shift::new(3)))),
            ],
            vec![
                ToolboxEntry::new("broken"),
                ToolboxEntry::after("after_broken", "broken"),
                ToolboxEntry::after("after_skipped", "after_broken"),
                ToolboxEntry::new("independent"),
            ],
            FailureStrategy::ContinueOnError,
        );

        let run = tb.run(request("def")).await.unwrap();

        assert!(!run.is_success());
        assert!(matches!(run.step("broken").unwrap().status, StepStatus::Failed(_)));
        assert_eq!(
            run.step("after_broken").unwrap().status,
            StepStatus::Skipped {
                failed_dependency: "broken".to_string()
            }
        );
        assert_eq!(
            run.step("after_skipped").unwrap().status,
            StepStatus::Skipped {
                failed_dependency: "after_broken".to_string()
            }
        );
        assert_eq!(run.output("independent"), Some(&b"abc"[..]));
        assert_eq!(run.failures().count(), 1);
    }

    #[tokio::test]
    async fn test_missing_outcome_is_an_error() {
        let tb = toolbox(
            vec![("silent", shared(SilentProcessor))],
            vec![ToolboxEntry::new("silent")],
            FailureStrategy::FailFast,
        );

        let err = tb.run(request("x")).await.unwrap_err();

        assert_eq!(
            err,
            ExecutionError::MissingOutcome {
                processor_id: "silent".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unregistered_processor() {
        let tb = toolbox(vec![], vec![ToolboxEntry::new("ghost")], FailureStrategy::ContinueOnError);

        let err = tb.run(request("x")).await.unwrap_err();

        assert!(matches!(err, ExecutionError::ProcessorNotFound { .. }));
    }

    #[tokio::test]
    async fn test_dependency_declared_later_has_no_output() {
        let tb = toolbox(
            vec![
                ("first", shared(CaesarCipherProcessor::encrypt(Shift::new(1)))),
                ("second", shared(CaesarCipherProcessor::encrypt(Shift::new(1)))),
            ],
            vec![ToolboxEntry::after("first", "second"), ToolboxEntry::new("second")],
            FailureStrategy::FailFast,
        );

        let err = tb.run(request("x")).await.unwrap_err();

        assert_eq!(
            err,
            ExecutionError::MissingDependencyOutput {
                processor_id: "first".to_string(),
                dependency_id: "second".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_request_metadata_reaches_every_processor() {
        let tb = toolbox(
            vec![("check", shared(PalindromeCheckerProcessor::new()))],
            vec![ToolboxEntry::new("check")],
            FailureStrategy::FailFast,
        );

        let mut req = request("racecar");
        req.metadata.insert("source".to_string(), "cli".to_string());

        let run = tb.run(req).await.unwrap();
        assert!(run.is_success());
    }
}
