//! Authenticated calls to a platform's tree and raw-file APIs

use super::manifest::{parse_requirements, PackageManifest, PACKAGE_MANIFEST_PATH, PYTHON_REQUIREMENTS_PATH};
use super::transport::{HttpTransport, TransportError};
use crate::platform::{adapter_for, Platform, RepositoryIdentifier, TreeListing};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Repository {repository} not found on {platform}, or it is private. Authentication required for this platform: provide {credential}")]
    NotFound {
        platform: Platform,
        repository: String,
        credential: &'static str,
    },

    #[error("{platform} requires authentication. Provide {credential} (or set {env_var} on the server)")]
    AuthRequired {
        platform: Platform,
        status: u16,
        credential: &'static str,
        env_var: &'static str,
    },

    #[error("{platform} error: {status}")]
    Upstream { platform: Platform, status: u16 },

    #[error("Unexpected response from {platform}: {message}")]
    UnexpectedResponse { platform: Platform, message: String },

    #[error("{platform} request failed: {source}")]
    Transport {
        platform: Platform,
        #[source]
        source: TransportError,
    },
}

/// Manifest signal gathered next to the tree
#[derive(Debug, Clone, Default)]
pub struct ManifestSignal {
    pub package_manifest: Option<PackageManifest>,
    pub python_packages: Option<Vec<String>>,
}

pub struct RemoteFetcher {
    transport: Arc<dyn HttpTransport>,
    credentials: HashMap<Platform, String>,
}

impl RemoteFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            credentials: HashMap::new(),
        }
    }

    /// Server-side credentials used when the caller supplies no token
    pub fn with_credentials(mut self, credentials: HashMap<Platform, String>) -> Self {
        self.credentials = credentials
            .into_iter()
            .filter(|(_, token)| !token.trim().is_empty())
            .collect();
        self
    }

    /// Caller token, then the platform's server credential, then anonymous
    pub fn resolve_token<'a>(&'a self, platform: Platform, token: Option<&'a str>) -> Option<&'a str> {
        token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| self.credentials.get(&platform).map(|t| t.trim()))
    }

    fn headers_for(&self, id: &RepositoryIdentifier, token: Option<&str>) -> Vec<(String, String)> {
        let adapter = adapter_for(id.platform);
        let mut headers = match self.resolve_token(id.platform, token) {
            Some(token) => adapter.auth_headers(token),
            None => Vec::new(),
        };
        if id.platform == Platform::GitHub {
            headers.push((
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ));
        }
        headers
    }

    pub async fn fetch_tree(
        &self,
        id: &RepositoryIdentifier,
        token: Option<&str>,
    ) -> Result<TreeListing, FetchError> {
        let adapter = adapter_for(id.platform);
        let url = adapter.tree_endpoint(id);
        let headers = self.headers_for(id, token);

        debug!(platform = %id.platform, url = %url, authenticated = !headers.is_empty(), "Fetching repository tree");

        let response = self
            .transport
            .get(&url, &headers)
            .await
            .map_err(|source| FetchError::Transport {
                platform: id.platform,
                source,
            })?;

        match response.status {
            404 => {
                return Err(FetchError::NotFound {
                    platform: id.platform,
                    repository: id.full_name(),
                    credential: id.platform.credential_kind(),
                })
            }
            401 | 403 => {
                return Err(FetchError::AuthRequired {
                    platform: id.platform,
                    status: response.status,
                    credential: id.platform.credential_kind(),
                    env_var: id.platform.credential_env_var(),
                })
            }
            _ if !response.is_success() => {
                return Err(FetchError::Upstream {
                    platform: id.platform,
                    status: response.status,
                })
            }
            _ => {}
        }

        // Some platforms answer anonymous API calls with a 200 HTML sign-in page
        if !response.is_json() {
            return Err(FetchError::AuthRequired {
                platform: id.platform,
                status: 401,
                credential: id.platform.credential_kind(),
                env_var: id.platform.credential_env_var(),
            });
        }

        let body: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|e| FetchError::UnexpectedResponse {
                platform: id.platform,
                message: format!("invalid JSON: {}", e),
            })?;

        let listing = adapter
            .decode_tree(&body)
            .ok_or_else(|| FetchError::UnexpectedResponse {
                platform: id.platform,
                message: "tree listing has an unexpected shape".to_string(),
            })?;

        if listing.truncated {
            warn!(
                platform = %id.platform,
                repository = %id.full_name(),
                files = listing.paths.len(),
                "Tree listing was truncated by the platform, analyzing the partial tree"
            );
        }

        Ok(listing)
    }

    /// Fetches one file's text. Every failure is reported as `None`.
    pub async fn fetch_raw_file(
        &self,
        id: &RepositoryIdentifier,
        path: &str,
        token: Option<&str>,
    ) -> Option<String> {
        let url = adapter_for(id.platform).raw_file_endpoint(id, path);
        let headers = self.headers_for(id, token);

        match self.transport.get(&url, &headers).await {
            Ok(response) if response.is_success() => {
                let looks_like_html = response
                    .content_type
                    .as_deref()
                    .map(|ct| ct.contains("text/html"))
                    .unwrap_or(false);
                if looks_like_html {
                    debug!(path, "Raw file answered with HTML, ignoring");
                    None
                } else {
                    Some(response.body)
                }
            }
            Ok(response) => {
                debug!(path, status = response.status, "Raw file not available");
                None
            }
            Err(e) => {
                warn!(path, error = %e, "Raw file fetch failed");
                None
            }
        }
    }

    pub async fn fetch_package_manifest(
        &self,
        id: &RepositoryIdentifier,
        token: Option<&str>,
    ) -> Option<PackageManifest> {
        let content = self.fetch_raw_file(id, PACKAGE_MANIFEST_PATH, token).await?;
        let manifest = PackageManifest::parse(&content);
        if manifest.is_none() {
            warn!(repository = %id.full_name(), "package.json present but not parseable");
        }
        manifest
    }

    pub async fn fetch_python_requirements(
        &self,
        id: &RepositoryIdentifier,
        token: Option<&str>,
    ) -> Option<Vec<String>> {
        let content = self
            .fetch_raw_file(id, PYTHON_REQUIREMENTS_PATH, token)
            .await?;
        Some(parse_requirements(&content))
    }
}
