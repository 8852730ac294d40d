//! Technology detection
//!
//! Two classifiers feed one deduplicated set: extension counting over a bounded
//! sample of the tree, and catalog rules over the full tree plus declared
//! dependencies.

pub mod catalog;
pub mod error;
pub mod extension;
pub mod rate_limit;
pub mod rules;
pub mod sampler;
pub mod service;
pub mod types;

pub use catalog::TECHNOLOGY_RULES;
pub use error::{AnalysisError, ProblemDetails};
pub use extension::{classify_by_extension, extension_of, top_extensions, ExtensionHistogram};
pub use rate_limit::{CooldownLimiter, RateLimitError};
pub use rules::{DependencySignal, TechnologyRegistry, TechnologyRule};
pub use sampler::{sample, sample_with_rng, DEFAULT_SAMPLE_CAP};
pub use service::{DetectionService, ServiceError, TOP_EXTENSION_LIMIT};
pub use types::{AnalyzeRequest, DetectionResult, ExtensionCount, RepositorySummary};
