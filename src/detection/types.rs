use crate::platform::{Platform, RepositoryIdentifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inbound request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The token, or `None` when it is blank after trimming
    pub fn effective_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtensionCount {
    pub ext: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub platform: Platform,
    pub platform_name: String,
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub host: String,
    pub url: String,
    pub file_count: usize,
    pub top_extensions: Vec<ExtensionCount>,
    pub has_package_manifest: bool,
    pub has_python_requirements: bool,
}

impl RepositorySummary {
    pub fn new(id: &RepositoryIdentifier, file_count: usize) -> Self {
        Self {
            platform: id.platform,
            platform_name: id.platform.name().to_string(),
            owner: id.owner.clone(),
            repo: id.repo.clone(),
            project: id.project.clone(),
            host: id.host.clone(),
            url: id.web_url(),
            file_count,
            top_extensions: Vec::new(),
            has_package_manifest: false,
            has_python_requirements: false,
        }
    }
}

/// Outcome of one successful analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub tech_stack: BTreeSet<String>,
    pub repository: RepositorySummary,
    pub detected_count: usize,
}

impl DetectionResult {
    pub fn new(tech_stack: BTreeSet<String>, repository: RepositorySummary) -> Self {
        Self {
            detected_count: tech_stack.len(),
            tech_stack,
            repository,
        }
    }

    pub fn contains(&self, technology: &str) -> bool {
        self.tech_stack.contains(technology)
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} technologies from {} files",
            self.repository.platform_name,
            self.repository.url,
            self.detected_count,
            self.repository.file_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::parse;
    use serde_json::json;

    #[test]
    fn test_blank_token_is_absent() {
        assert_eq!(AnalyzeRequest::new("x").with_token("   ").effective_token(), None);
        assert_eq!(
            AnalyzeRequest::new("x").with_token(" abc ").effective_token(),
            Some("abc")
        );
    }

    #[test]
    fn test_request_deserializes_without_token() {
        let request: AnalyzeRequest =
            serde_json::from_value(json!({"url": "https://github.com/a/b"})).unwrap();
        assert_eq!(request.token, None);
    }

    #[test]
    fn test_result_json_shape() {
        let id = parse("https://github.com/acme/widgets").unwrap();
        let mut summary = RepositorySummary::new(&id, 3);
        summary.top_extensions.push(ExtensionCount {
            ext: "ts".to_string(),
            count: 2,
        });
        let stack: BTreeSet<String> = ["typescript".to_string()].into_iter().collect();
        let value = serde_json::to_value(DetectionResult::new(stack, summary)).unwrap();

        assert_eq!(value["techStack"], json!(["typescript"]));
        assert_eq!(value["detectedCount"], json!(1));
        assert_eq!(value["repository"]["platform"], json!("github"));
        assert_eq!(value["repository"]["platformName"], json!("GitHub"));
        assert_eq!(value["repository"]["fileCount"], json!(3));
        assert_eq!(value["repository"]["topExtensions"][0]["ext"], json!("ts"));
        assert_eq!(value["repository"]["hasPackageManifest"], json!(false));
        assert!(value["repository"].get("project").is_none());
    }
}
