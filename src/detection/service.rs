//! Detection service orchestration
//!
//! Parses the URL, fetches the tree and both manifests concurrently, then runs
//! the extension and rule classifiers and assembles the summary.
//!
//! # Example
//!
//! ```no_run
//! use stackprobe::{DetectionService, ProbeConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DetectionService::new(&ProbeConfig::default())?;
//! let result = service.analyze("https://github.com/acme/widgets", None).await?;
//! println!("{:?}", result.tech_stack);
//! # Ok(())
//! # }
//! ```

use super::error::{AnalysisError, ProblemDetails};
use super::extension::{classify_histogram, extension_histogram, top_extensions};
use super::rate_limit::CooldownLimiter;
use super::rules::{DependencySignal, TechnologyRegistry};
use super::sampler::sample_with_rng;
use super::types::{AnalyzeRequest, DetectionResult, ExtensionCount, RepositorySummary};
use crate::config::{ConfigError, ProbeConfig};
use crate::platform::{parse, RepositoryIdentifier};
use crate::remote::{
    HttpTransport, ManifestSignal, RemoteFetcher, ReqwestTransport, TransportError,
};
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Entries reported in `topExtensions`
pub const TOP_EXTENSION_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Transport(#[from] TransportError),
}

struct Gathered {
    id: RepositoryIdentifier,
    paths: Vec<String>,
    manifests: ManifestSignal,
}

pub struct DetectionService {
    fetcher: Arc<RemoteFetcher>,
    registry: Arc<TechnologyRegistry>,
    sample_cap: usize,
    limiter: CooldownLimiter,
}

impl DetectionService {
    /// Builds a service backed by `reqwest` from a validated configuration
    pub fn new(config: &ProbeConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        let transport = ReqwestTransport::with_timeout(config.request_timeout(), &config.user_agent)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Builds a service over any transport; the configuration is used as given
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: &ProbeConfig) -> Self {
        let fetcher = RemoteFetcher::new(transport).with_credentials(config.credentials.clone());
        Self {
            fetcher: Arc::new(fetcher),
            registry: Arc::new(TechnologyRegistry::with_defaults()),
            sample_cap: config.sample_cap,
            limiter: CooldownLimiter::new(config.cooldown()),
        }
    }

    pub fn with_registry(mut self, registry: TechnologyRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_limiter(mut self, limiter: CooldownLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn sample_cap(&self) -> usize {
        self.sample_cap
    }

    pub fn registry(&self) -> &TechnologyRegistry {
        &self.registry
    }

    /// Analyzes one repository. Classification runs on the blocking pool.
    pub async fn analyze(
        &self,
        raw_url: &str,
        token: Option<&str>,
    ) -> Result<DetectionResult, AnalysisError> {
        let start = Instant::now();
        let gathered = self.gather(raw_url, token).await?;

        let registry = Arc::clone(&self.registry);
        let cap = self.sample_cap;
        let result = tokio::task::spawn_blocking(move || {
            summarize(&registry, cap, &gathered, &mut rand::thread_rng())
        })
        .await
        .map_err(|e| AnalysisError::Internal(format!("classification task failed: {}", e)))?;

        info!(
            platform = %result.repository.platform,
            repository = %result.repository.url,
            files = result.repository.file_count,
            detected = result.detected_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Analysis complete"
        );
        Ok(result)
    }

    /// Same pipeline with a caller-supplied random source for sampling
    pub async fn analyze_with_rng<R: Rng + ?Sized + Send>(
        &self,
        raw_url: &str,
        token: Option<&str>,
        rng: &mut R,
    ) -> Result<DetectionResult, AnalysisError> {
        let gathered = self.gather(raw_url, token).await?;
        Ok(summarize(&self.registry, self.sample_cap, &gathered, rng))
    }

    /// Inbound boundary: applies the caller cooldown and converts every
    /// failure into a problem response.
    pub async fn handle(
        &self,
        caller: &str,
        request: AnalyzeRequest,
    ) -> Result<DetectionResult, ProblemDetails> {
        if let Err(e) = self.limiter.check(caller) {
            let err = AnalysisError::from(e);
            warn!(caller, error = %err, "Analysis request rejected");
            return Err(err.to_problem());
        }

        self.analyze(&request.url, request.effective_token())
            .await
            .map_err(|err| {
                warn!(
                    caller,
                    url = %request.url,
                    code = err.error_code(),
                    error = %err,
                    "Analysis failed"
                );
                err.to_problem()
            })
    }

    async fn gather(&self, raw_url: &str, token: Option<&str>) -> Result<Gathered, AnalysisError> {
        let id = parse(raw_url)?;
        let token = token.map(str::trim).filter(|t| !t.is_empty());

        debug!(
            platform = %id.platform,
            repository = %id.full_name(),
            host = %id.host,
            "Analyzing repository"
        );

        let (tree, package_manifest, python_packages) = tokio::join!(
            self.fetcher.fetch_tree(&id, token),
            self.fetcher.fetch_package_manifest(&id, token),
            self.fetcher.fetch_python_requirements(&id, token),
        );

        let tree = tree?;

        Ok(Gathered {
            id,
            paths: tree.paths,
            manifests: ManifestSignal {
                package_manifest,
                python_packages,
            },
        })
    }
}

fn summarize<R: Rng + ?Sized>(
    registry: &TechnologyRegistry,
    sample_cap: usize,
    gathered: &Gathered,
    rng: &mut R,
) -> DetectionResult {
    let paths = &gathered.paths;
    let manifests = &gathered.manifests;

    let sampled = sample_with_rng(paths, sample_cap, rng);
    let histogram = extension_histogram(&sampled);

    let dependencies = DependencySignal::new(
        manifests.package_manifest.as_ref(),
        manifests.python_packages.as_deref().unwrap_or(&[]),
    );

    let mut tech_stack = classify_histogram(&histogram);
    let by_extension = tech_stack.len();
    tech_stack.extend(registry.classify(paths, &dependencies));

    debug!(
        files = paths.len(),
        sampled = sampled.len(),
        by_extension,
        total = tech_stack.len(),
        "Classification finished"
    );

    let mut summary = RepositorySummary::new(&gathered.id, paths.len());
    summary.top_extensions = top_extensions(&histogram, TOP_EXTENSION_LIMIT)
        .into_iter()
        .map(|(ext, count)| ExtensionCount { ext, count })
        .collect();
    summary.has_package_manifest = manifests.package_manifest.is_some();
    summary.has_python_requirements = manifests.python_packages.is_some();

    DetectionResult::new(tech_stack, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockTransport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use std::collections::HashMap;

    const TREE_URL: &str = "https://api.github.com/repos/acme/widgets/git/trees/HEAD?recursive=1";

    fn config() -> ProbeConfig {
        ProbeConfig {
            request_timeout_secs: 5,
            sample_cap: 100,
            cooldown_secs: 0,
            user_agent: "test".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            credentials: HashMap::new(),
        }
    }

    fn blob(path: &str) -> serde_json::Value {
        json!({"path": path, "type": "blob"})
    }

    #[tokio::test]
    async fn test_parse_failure_short_circuits() {
        let transport = Arc::new(MockTransport::new());
        let service = DetectionService::with_transport(transport.clone(), &config());

        let err = service.analyze("not a repo", None).await.unwrap_err();
        assert_eq!(err.status(), 400);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_manifest_absent_still_succeeds() {
        let transport = Arc::new(MockTransport::new());
        transport.add_json(
            TREE_URL,
            &json!({"tree": [blob("main.go"), blob("go.mod")], "truncated": false}),
        );
        let service = DetectionService::with_transport(transport, &config());

        let mut rng = StdRng::seed_from_u64(3);
        let result = service
            .analyze_with_rng("https://github.com/acme/widgets", None, &mut rng)
            .await
            .unwrap();

        assert!(result.contains("go"));
        assert!(!result.repository.has_package_manifest);
        assert!(!result.repository.has_python_requirements);
        assert_eq!(result.repository.file_count, 2);
    }

    #[tokio::test]
    async fn test_handle_applies_cooldown() {
        let transport = Arc::new(MockTransport::new());
        transport.add_json(TREE_URL, &json!({"tree": [], "truncated": false}));

        let mut cfg = config();
        cfg.cooldown_secs = 60;
        let service = DetectionService::with_transport(transport, &cfg);
        let request = AnalyzeRequest::new("https://github.com/acme/widgets");

        assert!(service.handle("user-1", request.clone()).await.is_ok());
        let problem = service.handle("user-1", request.clone()).await.unwrap_err();
        assert_eq!(problem.status, 429);
        assert_eq!(problem.problem_type, "rate-limited");

        assert!(service.handle("user-2", request).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_converts_upstream_failure() {
        let transport = Arc::new(MockTransport::new());
        transport.add_status(TREE_URL, 503);
        let service = DetectionService::with_transport(transport, &config());

        let problem = service
            .handle("user-1", AnalyzeRequest::new("https://github.com/acme/widgets"))
            .await
            .unwrap_err();
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail, "GitHub error: 503");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut cfg = config();
        cfg.sample_cap = 0;
        assert!(matches!(
            DetectionService::new(&cfg),
            Err(ServiceError::Config(_))
        ));
    }
}
