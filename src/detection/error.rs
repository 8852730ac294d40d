//! Failure taxonomy at the analysis boundary and its problem-response form

use crate::platform::{ParseError, Platform};
use crate::remote::FetchError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rate_limit::RateLimitError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidUrl(#[from] ParseError),

    #[error("{message}")]
    AuthRequired {
        platform: Platform,
        status: u16,
        message: String,
    },

    #[error("{message}")]
    NotFound { platform: Platform, message: String },

    #[error("{message}")]
    Upstream { platform: Platform, message: String },

    #[error("Too many analysis requests. Retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FetchError> for AnalysisError {
    fn from(err: FetchError) -> Self {
        let message = err.to_string();
        match err {
            FetchError::AuthRequired {
                platform, status, ..
            } => Self::AuthRequired {
                platform,
                status,
                message,
            },
            FetchError::NotFound { platform, .. } => Self::NotFound { platform, message },
            FetchError::Upstream { platform, .. }
            | FetchError::UnexpectedResponse { platform, .. }
            | FetchError::Transport { platform, .. } => Self::Upstream { platform, message },
        }
    }
}

impl From<RateLimitError> for AnalysisError {
    fn from(err: RateLimitError) -> Self {
        match err {
            RateLimitError::RateLimited { retry_after, .. } => Self::RateLimited { retry_after },
        }
    }
}

impl AnalysisError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "validation-error",
            Self::AuthRequired { .. } => "authentication-required",
            Self::NotFound { .. } => "repository-not-found",
            Self::Upstream { .. } => "upstream-error",
            Self::RateLimited { .. } => "rate-limited",
            Self::Internal(_) => "internal-error",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "Invalid repository URL",
            Self::AuthRequired { .. } => "Authentication required",
            Self::NotFound { .. } => "Repository not found",
            Self::Upstream { .. } => "Platform error",
            Self::RateLimited { .. } => "Too many requests",
            Self::Internal(_) => "Internal error",
        }
    }

    /// HTTP status carried by the problem response. Not-found shares the
    /// generic platform path and surfaces as 500.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidUrl(_) => 400,
            Self::AuthRequired { status, .. } => *status,
            Self::RateLimited { .. } => 429,
            Self::NotFound { .. } | Self::Upstream { .. } | Self::Internal(_) => 500,
        }
    }

    pub fn to_problem(&self) -> ProblemDetails {
        ProblemDetails {
            problem_type: self.error_code().to_string(),
            title: self.title().to_string(),
            status: self.status(),
            detail: self.to_string(),
            instance: format!("urn:uuid:{}", uuid::Uuid::new_v4()),
        }
    }
}

/// Structured failure body: `{type, title, status, detail}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// Per-response identifier for correlating logs
    pub instance: String,
}

impl From<AnalysisError> for ProblemDetails {
    fn from(err: AnalysisError) -> Self {
        err.to_problem()
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.status, self.detail)
    }
}
