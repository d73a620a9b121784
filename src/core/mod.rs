pub mod clock;
pub mod config;
pub mod error;
pub mod extractor;
pub mod identity;
pub mod linker;
pub mod loader;
pub mod normalize;
pub mod pattern;
pub mod pipeline;
pub mod raw;
pub mod types;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, ConfigLoader};
pub use error::AppError;
pub use extractor::{DocumentExtractor, Extractor};
pub use identity::{IdSource, RandomIdSource, SeededIdSource, SequentialIdSource};
pub use loader::{FileLoader, InputKind, RawInput};
pub use normalize::PatternNormalizer;
pub use pattern::{
    Agent, Pattern, Provenance, Resource, Task, Team, Tool, WorkflowPattern, WorkflowStep,
};
pub use pipeline::{PatternPipeline, ProcessFailure, ProcessOutcome};
pub use raw::{RawPattern, RawRecord, RawShapeError};
pub use types::{ErrorCategory, PipelineStage};
pub use validation::PatternValidator;
