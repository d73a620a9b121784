#![allow(clippy::result_large_err)]

//! Per-file pipeline: extract, normalize (assemble + link), validate.

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::AppError;
use crate::core::extractor::Extractor;
use crate::core::identity::{IdSource, RandomIdSource};
use crate::core::normalize::PatternNormalizer;
use crate::core::pattern::Pattern;
use crate::core::raw::RawPattern;
use crate::core::types::{ErrorCategory, PipelineStage};
use crate::core::validation::PatternValidator;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Why a file produced no pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessFailure {
    pub source_file: PathBuf,
    pub stage: PipelineStage,
    pub category: ErrorCategory,
    pub message: String,
}

impl std::fmt::Display for ProcessFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error processing {} during {}: {}: {}",
            self.source_file.display(),
            self.stage,
            self.category,
            self.message
        )
    }
}

/// Result of [`PatternPipeline::process_file`]: a validated pattern or a
/// tagged failure, never a partially built pattern.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum ProcessOutcome {
    Extracted(Pattern),
    Failed(ProcessFailure),
}

impl ProcessOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, ProcessOutcome::Extracted(_))
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            ProcessOutcome::Extracted(pattern) => Some(pattern),
            ProcessOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ProcessFailure> {
        match self {
            ProcessOutcome::Extracted(_) => None,
            ProcessOutcome::Failed(failure) => Some(failure),
        }
    }

    pub fn into_pattern(self) -> Option<Pattern> {
        match self {
            ProcessOutcome::Extracted(pattern) => Some(pattern),
            ProcessOutcome::Failed(_) => None,
        }
    }
}

pub struct PatternPipeline<E: Extractor> {
    extractor: E,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl<E: Extractor> PatternPipeline<E> {
    /// Pipeline with random identities and the system clock.
    pub fn new(extractor: E) -> Self {
        PatternPipeline {
            extractor,
            ids: Box::new(RandomIdSource),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_id_source<I: IdSource + 'static>(mut self, ids: I) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn make_id(&self, prefix: &str) -> String {
        self.ids.make_id(prefix)
    }

    /// Assemble a pattern and run the extractor's linker over it.
    pub fn normalize(&self, raw: &RawPattern, source_file: &Path) -> Result<Pattern, AppError> {
        let normalizer = PatternNormalizer::new(
            self.extractor.framework_name(),
            self.ids.as_ref(),
            self.clock.as_ref(),
        );
        let assembled = normalizer.assemble(raw, source_file)?;
        let before: Vec<String> = assembled
            .identities()
            .into_iter()
            .map(str::to_string)
            .collect();

        let linked = self.extractor.link(assembled);
        if linked.identities() != before {
            return Err(AppError::new(
                ErrorCategory::InternalError,
                format!(
                    "{} linker changed entity identities",
                    self.extractor.framework_name()
                ),
            ));
        }
        Ok(linked)
    }

    pub fn validate(&self, pattern: &Pattern) -> Result<bool, AppError> {
        PatternValidator::validate(pattern)
    }

    /// Run every stage for one file. Failures of any kind, including a
    /// panicking extractor, come back as [`ProcessOutcome::Failed`] and are
    /// logged; nothing propagates to the caller.
    pub fn process_file(&self, path: &Path) -> ProcessOutcome {
        let _span = tracing::info_span!("process_file", file = %path.display()).entered();

        let stage = Cell::new(PipelineStage::Extract);
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(path, &stage)))
            .unwrap_or_else(|payload| {
                Err((
                    stage.get(),
                    AppError::new(
                        ErrorCategory::InternalError,
                        format!("pipeline panicked: {}", panic_message(payload.as_ref())),
                    ),
                ))
            });

        match result {
            Ok(pattern) => {
                tracing::info!(
                    pattern = %pattern.id,
                    agents = pattern.agents.len(),
                    tasks = pattern.tasks.len(),
                    "extracted pattern"
                );
                ProcessOutcome::Extracted(pattern)
            }
            Err((stage, err)) => {
                let failure = ProcessFailure {
                    source_file: path.to_path_buf(),
                    stage,
                    category: err.category,
                    message: err.message.clone(),
                };
                tracing::error!(
                    file = %path.display(),
                    stage = %stage,
                    category = %err.category,
                    code = %err.code,
                    "Error processing {}: {}",
                    path.display(),
                    err.message
                );
                ProcessOutcome::Failed(failure)
            }
        }
    }

    fn run_stages(
        &self,
        path: &Path,
        stage: &Cell<PipelineStage>,
    ) -> Result<Pattern, (PipelineStage, AppError)> {
        stage.set(PipelineStage::Extract);
        let raw = self
            .extractor
            .extract(path)
            .map_err(|err| (PipelineStage::Extract, err))?;

        stage.set(PipelineStage::Normalize);
        let pattern = self
            .normalize(&raw, path)
            .map_err(|err| (PipelineStage::Normalize, err))?;

        stage.set(PipelineStage::Validate);
        self.validate(&pattern)
            .map_err(|err| (PipelineStage::Validate, err))?;
        Ok(pattern)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
