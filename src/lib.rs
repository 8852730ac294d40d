//! stackprobe - technology stack detection for remote Git repositories
//!
//! Given only a repository URL, stackprobe asks the hosting platform for the
//! repository's file listing and its `package.json` / `requirements.txt`, then
//! classifies what it finds against a catalog of technologies.
//!
//! # Example Usage
//!
//! ```no_run
//! use stackprobe::{DetectionService, ProbeConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DetectionService::new(&ProbeConfig::default())?;
//! let result = service
//!     .analyze("https://gitlab.com/group/subgroup/project", None)
//!     .await?;
//!
//! for tech in &result.tech_stack {
//!     println!("{}", tech);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`platform`]: URL parsing and per-platform API adapters
//! - [`remote`]: HTTP transport and tree/manifest fetching
//! - [`detection`]: sampling, classification and the orchestrating service

pub mod cli;
pub mod config;
pub mod detection;
pub mod platform;
pub mod remote;
pub mod util;

pub use config::{ConfigError, ProbeConfig};
pub use detection::{
    AnalysisError, AnalyzeRequest, DetectionResult, DetectionService, ProblemDetails,
    ServiceError, TechnologyRegistry,
};
pub use platform::{normalize, parse, ParseError, Platform, RepositoryIdentifier};
pub use remote::{HttpTransport, MockTransport, RemoteFetcher, ReqwestTransport};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
