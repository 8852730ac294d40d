//! Per-platform strategy table
//!
//! Each hosting platform gets one static [`PlatformAdapter`] that knows how to
//! build its tree and raw-file endpoints, how to shape the auth header, and how
//! to flatten its tree response into a list of file paths.

use super::{Platform, RepositoryIdentifier};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

/// File paths returned by a single tree call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub paths: Vec<String>,
    /// Platform reported that the listing was cut short
    pub truncated: bool,
}

pub trait PlatformAdapter: Send + Sync {
    fn platform(&self) -> Platform;

    fn name(&self) -> &'static str {
        self.platform().name()
    }

    /// Single-call recursive listing endpoint
    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String;

    /// Endpoint returning one file's text at the head revision
    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String;

    fn auth_headers(&self, token: &str) -> Vec<(String, String)> {
        vec![("Authorization".to_string(), format!("Bearer {}", token))]
    }

    /// Flattens the platform's tree JSON into file paths. `None` when the body
    /// does not have the expected shape.
    fn decode_tree(&self, body: &Value) -> Option<TreeListing>;
}

pub struct GitHubAdapter;
pub struct GitLabAdapter;
pub struct BitbucketAdapter;
pub struct AzureAdapter;
pub struct GiteaAdapter {
    platform: Platform,
}
pub struct SourceHutAdapter;

static GITHUB: GitHubAdapter = GitHubAdapter;
static GITLAB: GitLabAdapter = GitLabAdapter;
static BITBUCKET: BitbucketAdapter = BitbucketAdapter;
static AZURE: AzureAdapter = AzureAdapter;
static CODEBERG: GiteaAdapter = GiteaAdapter {
    platform: Platform::Codeberg,
};
static GITEA: GiteaAdapter = GiteaAdapter {
    platform: Platform::Gitea,
};
static SOURCEHUT: SourceHutAdapter = SourceHutAdapter;

/// Looks up the static adapter for a platform
pub fn adapter_for(platform: Platform) -> &'static dyn PlatformAdapter {
    match platform {
        Platform::GitHub => &GITHUB,
        Platform::GitLab => &GITLAB,
        Platform::Bitbucket => &BITBUCKET,
        Platform::Azure => &AZURE,
        Platform::Codeberg => &CODEBERG,
        Platform::Gitea => &GITEA,
        Platform::SourceHut => &SOURCEHUT,
    }
}

/// Percent-encodes one URL path segment; `/` and spaces are escaped too
fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Percent-encodes each segment of a repository path, keeping the separators
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// `owner/repo` with each name encoded once
fn owner_repo_path(id: &RepositoryIdentifier) -> String {
    format!("{}/{}", encode_component(&id.owner), encode_component(&id.repo))
}

/// Collects `path` fields of entries whose `type_field` equals one of `file_types`
fn collect_paths(entries: &[Value], type_field: &str, file_types: &[&str]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| {
            entry
                .get(type_field)
                .and_then(Value::as_str)
                .map(|t| file_types.contains(&t))
                .unwrap_or(true)
        })
        .filter_map(|entry| entry.get("path").and_then(Value::as_str))
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

fn truncated_flag(body: &Value) -> bool {
    body.get("truncated").and_then(Value::as_bool).unwrap_or(false)
}

impl PlatformAdapter for GitHubAdapter {
    fn platform(&self) -> Platform {
        Platform::GitHub
    }

    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String {
        format!(
            "https://api.github.com/repos/{}/git/trees/HEAD?recursive=1",
            owner_repo_path(id)
        )
    }

    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/HEAD/{}",
            owner_repo_path(id),
            encode_path(path)
        )
    }

    fn decode_tree(&self, body: &Value) -> Option<TreeListing> {
        let entries = body.get("tree")?.as_array()?;
        Some(TreeListing {
            paths: collect_paths(entries, "type", &["blob"]),
            truncated: truncated_flag(body),
        })
    }
}

impl GitLabAdapter {
    fn api_base(id: &RepositoryIdentifier) -> String {
        let project_path = format!("{}/{}", id.owner, id.repo);
        format!(
            "https://{}/api/v4/projects/{}",
            id.host,
            encode_component(&project_path)
        )
    }
}

impl PlatformAdapter for GitLabAdapter {
    fn platform(&self) -> Platform {
        Platform::GitLab
    }

    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String {
        format!(
            "{}/repository/tree?recursive=true&per_page=100",
            Self::api_base(id)
        )
    }

    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String {
        format!(
            "{}/repository/files/{}/raw?ref=HEAD",
            Self::api_base(id),
            encode_component(path)
        )
    }

    fn auth_headers(&self, token: &str) -> Vec<(String, String)> {
        vec![("PRIVATE-TOKEN".to_string(), token.to_string())]
    }

    fn decode_tree(&self, body: &Value) -> Option<TreeListing> {
        let entries = body.as_array()?;
        Some(TreeListing {
            paths: collect_paths(entries, "type", &["blob"]),
            // A full page means there may be more
            truncated: entries.len() >= 100,
        })
    }
}

impl PlatformAdapter for BitbucketAdapter {
    fn platform(&self) -> Platform {
        Platform::Bitbucket
    }

    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String {
        format!(
            "https://api.bitbucket.org/2.0/repositories/{}/src/HEAD/?pagelen=100&max_depth=10",
            owner_repo_path(id)
        )
    }

    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String {
        format!(
            "https://api.bitbucket.org/2.0/repositories/{}/src/HEAD/{}",
            owner_repo_path(id),
            encode_path(path)
        )
    }

    fn decode_tree(&self, body: &Value) -> Option<TreeListing> {
        let entries = body.get("values")?.as_array()?;
        Some(TreeListing {
            paths: collect_paths(entries, "type", &["commit_file"]),
            truncated: body.get("next").map(|n| !n.is_null()).unwrap_or(false),
        })
    }
}

impl AzureAdapter {
    fn api_base(id: &RepositoryIdentifier) -> String {
        let project = id.project.as_deref().unwrap_or(&id.repo);
        if id.host.ends_with("visualstudio.com") {
            format!(
                "https://{}/{}/_apis/git/repositories/{}",
                id.host,
                encode_component(project),
                encode_component(&id.repo)
            )
        } else {
            format!(
                "https://dev.azure.com/{}/{}/_apis/git/repositories/{}",
                encode_component(&id.owner),
                encode_component(project),
                encode_component(&id.repo)
            )
        }
    }
}

impl PlatformAdapter for AzureAdapter {
    fn platform(&self) -> Platform {
        Platform::Azure
    }

    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String {
        format!(
            "{}/items?recursionLevel=Full&api-version=7.0",
            Self::api_base(id)
        )
    }

    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String {
        format!(
            "{}/items?path={}&download=true&api-version=7.0",
            Self::api_base(id),
            encode_component(&format!("/{}", path.trim_start_matches('/')))
        )
    }

    fn auth_headers(&self, token: &str) -> Vec<(String, String)> {
        let credentials = STANDARD.encode(format!(":{}", token));
        vec![("Authorization".to_string(), format!("Basic {}", credentials))]
    }

    fn decode_tree(&self, body: &Value) -> Option<TreeListing> {
        let entries = body.get("value")?.as_array()?;
        let paths = entries
            .iter()
            .filter(|entry| !entry.get("isFolder").and_then(Value::as_bool).unwrap_or(false))
            .filter_map(|entry| entry.get("path").and_then(Value::as_str))
            .map(|path| path.trim_start_matches('/'))
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();
        Some(TreeListing {
            paths,
            truncated: false,
        })
    }
}

impl PlatformAdapter for GiteaAdapter {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String {
        format!(
            "https://{}/api/v1/repos/{}/git/trees/HEAD?recursive=true&per_page=10000",
            id.host,
            owner_repo_path(id)
        )
    }

    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String {
        format!(
            "https://{}/api/v1/repos/{}/raw/{}",
            id.host,
            owner_repo_path(id),
            encode_path(path)
        )
    }

    fn decode_tree(&self, body: &Value) -> Option<TreeListing> {
        let entries = body.get("tree")?.as_array()?;
        Some(TreeListing {
            paths: collect_paths(entries, "type", &["blob"]),
            truncated: truncated_flag(body),
        })
    }
}

impl PlatformAdapter for SourceHutAdapter {
    fn platform(&self) -> Platform {
        Platform::SourceHut
    }

    fn tree_endpoint(&self, id: &RepositoryIdentifier) -> String {
        format!(
            "https://{}/api/~{}/repos/{}/tree?recursive=true",
            id.host,
            encode_component(&id.owner),
            encode_component(&id.repo)
        )
    }

    fn raw_file_endpoint(&self, id: &RepositoryIdentifier, path: &str) -> String {
        format!(
            "https://{}/~{}/blob/HEAD/{}",
            id.host,
            owner_repo_path(id),
            encode_path(path)
        )
    }

    fn decode_tree(&self, body: &Value) -> Option<TreeListing> {
        let entries = body
            .get("tree")
            .or_else(|| body.get("entries"))
            .and_then(Value::as_array)
            .or_else(|| body.as_array())?;

        let paths = entries
            .iter()
            .filter(|entry| {
                entry
                    .get("type")
                    .and_then(Value::as_str)
                    .map(|t| t == "blob")
                    .unwrap_or(true)
            })
            .filter_map(|entry| {
                entry
                    .get("path")
                    .or_else(|| entry.get("name"))
                    .and_then(Value::as_str)
            })
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();

        Some(TreeListing {
            paths,
            truncated: body.get("next").map(|n| !n.is_null()).unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(platform: Platform, owner: &str, repo: &str, host: &str) -> RepositoryIdentifier {
        RepositoryIdentifier {
            platform,
            owner: owner.to_string(),
            repo: repo.to_string(),
            host: host.to_string(),
            project: None,
        }
    }

    #[test]
    fn test_registry_returns_matching_adapter() {
        for platform in Platform::all_variants() {
            assert_eq!(adapter_for(*platform).platform(), *platform);
        }
    }

    #[test]
    fn test_github_endpoints() {
        let repo = id(Platform::GitHub, "acme", "widgets", "github.com");
        let adapter = adapter_for(Platform::GitHub);
        assert_eq!(
            adapter.tree_endpoint(&repo),
            "https://api.github.com/repos/acme/widgets/git/trees/HEAD?recursive=1"
        );
        assert_eq!(
            adapter.raw_file_endpoint(&repo, "package.json"),
            "https://raw.githubusercontent.com/acme/widgets/HEAD/package.json"
        );
    }

    #[test]
    fn test_gitlab_encodes_project_path() {
        let repo = id(Platform::GitLab, "group/sub", "proj", "gitlab.example.org");
        let adapter = adapter_for(Platform::GitLab);
        assert_eq!(
            adapter.tree_endpoint(&repo),
            "https://gitlab.example.org/api/v4/projects/group%2Fsub%2Fproj/repository/tree?recursive=true&per_page=100"
        );
        assert!(adapter
            .raw_file_endpoint(&repo, "requirements.txt")
            .ends_with("/repository/files/requirements.txt/raw?ref=HEAD"));
    }

    #[test]
    fn test_auth_header_shapes() {
        let github = adapter_for(Platform::GitHub).auth_headers("t0k");
        assert_eq!(github, vec![("Authorization".to_string(), "Bearer t0k".to_string())]);

        let gitlab = adapter_for(Platform::GitLab).auth_headers("t0k");
        assert_eq!(gitlab, vec![("PRIVATE-TOKEN".to_string(), "t0k".to_string())]);

        let azure = adapter_for(Platform::Azure).auth_headers("pat");
        assert_eq!(
            azure,
            vec![("Authorization".to_string(), format!("Basic {}", STANDARD.encode(":pat")))]
        );

        for platform in [Platform::Bitbucket, Platform::Codeberg, Platform::Gitea, Platform::SourceHut] {
            let headers = adapter_for(platform).auth_headers("x");
            assert_eq!(headers[0].1, "Bearer x");
        }
    }

    #[test]
    fn test_decode_github_tree_keeps_blobs() {
        let body = json!({
            "sha": "abc",
            "tree": [
                {"path": "src", "type": "tree"},
                {"path": "src/main.rs", "type": "blob"},
                {"path": "Cargo.toml", "type": "blob"}
            ],
            "truncated": true
        });
        let listing = adapter_for(Platform::GitHub).decode_tree(&body).unwrap();
        assert_eq!(listing.paths, vec!["src/main.rs", "Cargo.toml"]);
        assert!(listing.truncated);
    }

    #[test]
    fn test_decode_gitlab_bare_array() {
        let body = json!([
            {"path": "app", "type": "tree"},
            {"path": "app/models/user.rb", "type": "blob"}
        ]);
        let listing = adapter_for(Platform::GitLab).decode_tree(&body).unwrap();
        assert_eq!(listing.paths, vec!["app/models/user.rb"]);
        assert!(!listing.truncated);
    }

    #[test]
    fn test_decode_bitbucket_values() {
        let body = json!({
            "values": [
                {"path": "lib", "type": "commit_directory"},
                {"path": "lib/index.js", "type": "commit_file"}
            ]
        });
        let listing = adapter_for(Platform::Bitbucket).decode_tree(&body).unwrap();
        assert_eq!(listing.paths, vec!["lib/index.js"]);
    }

    #[test]
    fn test_decode_azure_strips_leading_slash() {
        let body = json!({
            "count": 3,
            "value": [
                {"path": "/", "isFolder": true},
                {"path": "/src", "isFolder": true},
                {"path": "/src/Program.cs", "gitObjectType": "blob"}
            ]
        });
        let listing = adapter_for(Platform::Azure).decode_tree(&body).unwrap();
        assert_eq!(listing.paths, vec!["src/Program.cs"]);
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let body = json!({"message": "Bad credentials"});
        assert!(adapter_for(Platform::GitHub).decode_tree(&body).is_none());
        assert!(adapter_for(Platform::GitLab).decode_tree(&body).is_none());
    }

    #[test]
    fn test_azure_visualstudio_base() {
        let repo = RepositoryIdentifier {
            platform: Platform::Azure,
            owner: "contoso".to_string(),
            repo: "api".to_string(),
            host: "contoso.visualstudio.com".to_string(),
            project: Some("Platform".to_string()),
        };
        assert_eq!(
            adapter_for(Platform::Azure).tree_endpoint(&repo),
            "https://contoso.visualstudio.com/Platform/_apis/git/repositories/api/items?recursionLevel=Full&api-version=7.0"
        );
    }

    #[test]
    fn test_raw_path_segments_are_encoded() {
        assert_eq!(encode_path("docs/read me.md"), "docs/read%20me.md");
    }

    #[test]
    fn test_gitlab_raw_path_encodes_space_as_percent() {
        let repo = id(Platform::GitLab, "acme", "widgets", "gitlab.com");
        assert_eq!(
            adapter_for(Platform::GitLab).raw_file_endpoint(&repo, "docs/read me.txt"),
            "https://gitlab.com/api/v4/projects/acme%2Fwidgets/repository/files/docs%2Fread%20me.txt/raw?ref=HEAD"
        );
    }

    #[test]
    fn test_azure_project_with_space() {
        let repo = RepositoryIdentifier {
            platform: Platform::Azure,
            owner: "contoso".to_string(),
            repo: "widgets".to_string(),
            host: "dev.azure.com".to_string(),
            project: Some("My Project".to_string()),
        };
        let adapter = adapter_for(Platform::Azure);
        assert_eq!(
            adapter.tree_endpoint(&repo),
            "https://dev.azure.com/contoso/My%20Project/_apis/git/repositories/widgets/items?recursionLevel=Full&api-version=7.0"
        );
        assert_eq!(
            adapter.raw_file_endpoint(&repo, "package.json"),
            "https://dev.azure.com/contoso/My%20Project/_apis/git/repositories/widgets/items?path=%2Fpackage.json&download=true&api-version=7.0"
        );
    }

    #[test]
    fn test_gitea_and_codeberg_endpoints() {
        let codeberg = id(Platform::Codeberg, "acme", "widgets", "codeberg.org");
        let adapter = adapter_for(Platform::Codeberg);
        assert_eq!(
            adapter.tree_endpoint(&codeberg),
            "https://codeberg.org/api/v1/repos/acme/widgets/git/trees/HEAD?recursive=true&per_page=10000"
        );
        assert_eq!(
            adapter.raw_file_endpoint(&codeberg, "package.json"),
            "https://codeberg.org/api/v1/repos/acme/widgets/raw/package.json"
        );

        let gitea = id(Platform::Gitea, "ops", "infra", "gitea.example.org");
        assert_eq!(
            adapter_for(Platform::Gitea).tree_endpoint(&gitea),
            "https://gitea.example.org/api/v1/repos/ops/infra/git/trees/HEAD?recursive=true&per_page=10000"
        );
    }

    #[test]
    fn test_decode_gitea_tree() {
        let body = json!({
            "sha": "abc",
            "tree": [
                {"path": "cmd", "type": "tree"},
                {"path": "cmd/main.go", "type": "blob"},
                {"path": "vendor-link", "type": "commit"}
            ],
            "truncated": true
        });
        for platform in [Platform::Codeberg, Platform::Gitea] {
            let listing = adapter_for(platform).decode_tree(&body).unwrap();
            assert_eq!(listing.paths, vec!["cmd/main.go"]);
            assert!(listing.truncated);
        }
    }

    #[test]
    fn test_sourcehut_endpoints() {
        let repo = id(Platform::SourceHut, "alice", "tools", "git.sr.ht");
        let adapter = adapter_for(Platform::SourceHut);
        assert_eq!(
            adapter.tree_endpoint(&repo),
            "https://git.sr.ht/api/~alice/repos/tools/tree?recursive=true"
        );
        assert_eq!(
            adapter.raw_file_endpoint(&repo, "requirements.txt"),
            "https://git.sr.ht/~alice/tools/blob/HEAD/requirements.txt"
        );
    }

    #[test]
    fn test_decode_sourcehut_shapes() {
        let adapter = adapter_for(Platform::SourceHut);

        let tree = json!({"tree": [
            {"path": "src/lib.rs", "type": "blob"},
            {"path": "src", "type": "tree"}
        ]});
        assert_eq!(adapter.decode_tree(&tree).unwrap().paths, vec!["src/lib.rs"]);

        let entries = json!({
            "entries": [{"name": "Makefile", "type": "blob"}, {"name": "docs", "type": "tree"}],
            "next": "cursor-2"
        });
        let listing = adapter.decode_tree(&entries).unwrap();
        assert_eq!(listing.paths, vec!["Makefile"]);
        assert!(listing.truncated);

        let bare = json!([{"name": "main.c"}, {"path": "include/util.h", "type": "blob"}]);
        let listing = adapter.decode_tree(&bare).unwrap();
        assert_eq!(listing.paths, vec!["main.c", "include/util.h"]);
        assert!(!listing.truncated);

        assert!(adapter.decode_tree(&json!({"error": "nope"})).is_none());
    }

    #[test]
    fn test_decode_bitbucket_next_marks_truncation() {
        let adapter = adapter_for(Platform::Bitbucket);
        let paged = json!({
            "values": [{"path": "a.py", "type": "commit_file"}],
            "next": "https://api.bitbucket.org/2.0/repositories/acme/widgets/src/HEAD/?page=2"
        });
        assert!(adapter.decode_tree(&paged).unwrap().truncated);

        let last = json!({"values": [{"path": "a.py", "type": "commit_file"}], "next": null});
        assert!(!adapter.decode_tree(&last).unwrap().truncated);
    }

    #[test]
    fn test_bitbucket_endpoints() {
        let repo = id(Platform::Bitbucket, "acme", "widgets", "bitbucket.org");
        let adapter = adapter_for(Platform::Bitbucket);
        assert_eq!(
            adapter.tree_endpoint(&repo),
            "https://api.bitbucket.org/2.0/repositories/acme/widgets/src/HEAD/?pagelen=100&max_depth=10"
        );
        assert_eq!(
            adapter.raw_file_endpoint(&repo, "package.json"),
            "https://api.bitbucket.org/2.0/repositories/acme/widgets/src/HEAD/package.json"
        );
    }
}
