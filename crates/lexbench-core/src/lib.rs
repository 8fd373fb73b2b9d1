pub mod analyzer;
pub mod config;
pub mod lexeme;
pub mod report;
pub mod sampler;
pub mod stats;
pub mod timed;
pub mod visualize;
pub mod workload;

// Test utilities (available in tests and when used as a dependency with the `testing` feature)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use analyzer::{Presence, TimingAnalyzer};
pub use config::{AnalyzerConfig, TimeUnit};
pub use lexeme::{CodeLexer, LexemeCategory, LexemeSource};
pub use report::{PerformanceReport, ReportEntry, SeededContents};
pub use stats::{OperationKind, OperationStats, StructureKind, StructureStats};
pub use visualize::{TextChart, Visualizer};
pub use workload::{OperationSequence, SampledWorkload, Workload, WorkloadStep};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No lexemes available for performance analysis")]
    EmptyLexemePool,

    #[error("Queue is empty, cannot draw a sample size")]
    EmptyQueue,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Visualization error: {0}")]
    Visualization(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
