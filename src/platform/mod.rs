//! Hosting platforms and repository identifiers
//!
//! A [`RepositoryIdentifier`] is produced once by [`parse`] and then drives every
//! outbound call through the static adapter selected by its [`Platform`] tag.

pub mod adapter;
pub mod parser;

pub use adapter::{adapter_for, PlatformAdapter, TreeListing};
pub use parser::{normalize, parse, ParseError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported hosting platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    GitHub,
    GitLab,
    Bitbucket,
    Azure,
    Codeberg,
    SourceHut,
    Gitea,
}

impl Platform {
    pub fn all_variants() -> &'static [Platform] {
        &[
            Platform::GitHub,
            Platform::GitLab,
            Platform::Bitbucket,
            Platform::Azure,
            Platform::Codeberg,
            Platform::SourceHut,
            Platform::Gitea,
        ]
    }

    /// Stable machine identifier used in responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::GitHub => "github",
            Platform::GitLab => "gitlab",
            Platform::Bitbucket => "bitbucket",
            Platform::Azure => "azure",
            Platform::Codeberg => "codeberg",
            Platform::SourceHut => "sourcehut",
            Platform::Gitea => "gitea",
        }
    }

    /// Human readable platform name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::GitLab => "GitLab",
            Platform::Bitbucket => "Bitbucket",
            Platform::Azure => "Azure DevOps",
            Platform::Codeberg => "Codeberg",
            Platform::SourceHut => "SourceHut",
            Platform::Gitea => "Gitea/Forgejo",
        }
    }

    /// Server-side environment variable consulted when the caller supplies no token
    pub fn credential_env_var(&self) -> &'static str {
        match self {
            Platform::GitHub => "GITHUB_TOKEN",
            Platform::GitLab => "GITLAB_TOKEN",
            Platform::Bitbucket => "BITBUCKET_TOKEN",
            Platform::Azure => "AZURE_DEVOPS_TOKEN",
            Platform::Codeberg => "CODEBERG_TOKEN",
            Platform::SourceHut => "SOURCEHUT_TOKEN",
            Platform::Gitea => "GITEA_TOKEN",
        }
    }

    /// Kind of credential the platform expects, used in authentication errors
    pub fn credential_kind(&self) -> &'static str {
        match self {
            Platform::GitHub => "a GitHub personal access token",
            Platform::GitLab => "a GitLab personal access token",
            Platform::Bitbucket => "a Bitbucket app password or access token",
            Platform::Azure => "an Azure DevOps personal access token",
            Platform::Codeberg => "a Codeberg access token",
            Platform::SourceHut => "a SourceHut OAuth2 personal access token",
            Platform::Gitea => "a Gitea/Forgejo access token",
        }
    }

    /// Comma separated list of every supported platform name
    pub fn supported_names() -> String {
        Self::all_variants()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Typed identifier of a remote repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryIdentifier {
    pub platform: Platform,
    pub owner: String,
    pub repo: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl RepositoryIdentifier {
    /// Canonical browser URL of the repository
    pub fn web_url(&self) -> String {
        let owner = encode_segments(&self.owner);
        let repo = encode_segments(&self.repo);
        match self.platform {
            Platform::Azure => {
                let project = encode_segments(self.project.as_deref().unwrap_or(&self.repo));
                if self.host.ends_with("visualstudio.com") {
                    format!("https://{}/{}/_git/{}", self.host, project, repo)
                } else {
                    format!("https://{}/{}/{}/_git/{}", self.host, owner, project, repo)
                }
            }
            Platform::SourceHut => format!("https://{}/~{}/{}", self.host, owner, repo),
            _ => format!("https://{}/{}/{}", self.host, owner, repo),
        }
    }

    /// `owner/repo` display form
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Percent-encodes each `/`-separated segment of a decoded name
fn encode_segments(value: &str) -> String {
    value
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_url_reencodes_decoded_names() {
        let id = RepositoryIdentifier {
            platform: Platform::Azure,
            owner: "contoso".to_string(),
            repo: "widgets".to_string(),
            host: "dev.azure.com".to_string(),
            project: Some("My Project".to_string()),
        };
        assert_eq!(
            id.web_url(),
            "https://dev.azure.com/contoso/My%20Project/_git/widgets"
        );

        let nested = RepositoryIdentifier {
            platform: Platform::GitLab,
            owner: "group/sub".to_string(),
            repo: "proj".to_string(),
            host: "gitlab.com".to_string(),
            project: None,
        };
        assert_eq!(nested.web_url(), "https://gitlab.com/group/sub/proj");
    }

    #[test]
    fn test_platform_serialization() {
        assert_eq!(
            serde_json::to_string(&Platform::GitHub).unwrap(),
            "\"github\""
        );
        assert_eq!(
            serde_json::to_string(&Platform::SourceHut).unwrap(),
            "\"sourcehut\""
        );
    }

    #[test]
    fn test_as_str_matches_serde() {
        for platform in Platform::all_variants() {
            let json = serde_json::to_string(platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
        }
    }

    #[test]
    fn test_supported_names_lists_all_platforms() {
        let names = Platform::supported_names();
        assert!(names.contains("GitHub"));
        assert!(names.contains("Azure DevOps"));
        assert!(names.contains("Gitea/Forgejo"));
    }

    #[test]
    fn test_web_url_shapes() {
        let github = RepositoryIdentifier {
            platform: Platform::GitHub,
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            host: "github.com".to_string(),
            project: None,
        };
        assert_eq!(github.web_url(), "https://github.com/acme/widgets");

        let srht = RepositoryIdentifier {
            platform: Platform::SourceHut,
            owner: "sircmpwn".to_string(),
            repo: "scdoc".to_string(),
            host: "git.sr.ht".to_string(),
            project: None,
        };
        assert_eq!(srht.web_url(), "https://git.sr.ht/~sircmpwn/scdoc");

        let azure = RepositoryIdentifier {
            platform: Platform::Azure,
            owner: "contoso".to_string(),
            repo: "api".to_string(),
            host: "dev.azure.com".to_string(),
            project: Some("Platform".to_string()),
        };
        assert_eq!(
            azure.web_url(),
            "https://dev.azure.com/contoso/Platform/_git/api"
        );
    }
}
