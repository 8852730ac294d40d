//! Repository URL normalization and parsing
//!
//! Accepts the shapes users paste into a "link your repository" field: browser
//! URLs (with or without scheme, with web-UI suffixes such as `/tree/main`),
//! clone URLs ending in `.git`, and SSH remotes of the form `git@host:owner/repo`.

use super::{Platform, RepositoryIdentifier};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// Hosts recognized without a scheme
const KNOWN_HOSTS: &[&str] = &[
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "dev.azure.com",
    "codeberg.org",
    "git.sr.ht",
];

/// Protocol typos repaired before matching, checked in order
const SCHEME_REPAIRS: &[(&str, &str)] = &[
    ("https//", "https://"),
    ("http//", "http://"),
    ("https:/", "https://"),
    ("http:/", "http://"),
    ("htps://", "https://"),
    ("htttps://", "https://"),
    ("ttps://", "https://"),
    ("ttp://", "http://"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Repository URL is empty")]
    Empty,

    #[error("Malformed repository URL: {0}")]
    Malformed(String),

    #[error("Unrecognized repository URL: {0}. Supported platforms: {supported}", supported = Platform::supported_names())]
    Unrecognized(String),
}

fn ssh_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:ssh://)?git@([A-Za-z0-9.\-]+)(?::\d+)?[:/](.+)$")
            .expect("ssh remote pattern is valid")
    })
}

/// Repairs scheme typos, adds a missing scheme for recognized hosts and strips
/// trailing `/` and `.git`. Returns `None` for blank input.
pub fn normalize(raw: &str) -> Option<String> {
    let mut url = raw.trim().to_string();
    if url.is_empty() {
        return None;
    }

    let lower = url.to_lowercase();
    if !lower.starts_with("https://") && !lower.starts_with("http://") {
        for (typo, fixed) in SCHEME_REPAIRS {
            if lower.starts_with(typo) {
                url = format!("{}{}", fixed, &url[typo.len()..]);
                break;
            }
        }
    }

    if !url.contains("://") && !url.starts_with("git@") && starts_with_known_host(&url) {
        url = format!("https://{}", url);
    }

    if let Some(idx) = url.find(['?', '#']) {
        url.truncate(idx);
    }

    loop {
        if let Some(stripped) = url.strip_suffix('/') {
            url = stripped.to_string();
        } else if let Some(stripped) = url.strip_suffix(".git") {
            url = stripped.to_string();
        } else {
            break;
        }
    }

    Some(url)
}

fn starts_with_known_host(url: &str) -> bool {
    let host = url
        .split('/')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    KNOWN_HOSTS.contains(&host)
        || host.ends_with(".visualstudio.com")
        || (host.contains('.') && is_heuristic_host(host))
}

fn is_heuristic_host(host: &str) -> bool {
    host.contains("gitlab") || host.contains("gitea") || host.contains("forgejo")
}

/// Parses a raw repository URL into a [`RepositoryIdentifier`]
pub fn parse(raw: &str) -> Result<RepositoryIdentifier, ParseError> {
    let normalized = normalize(raw).ok_or(ParseError::Empty)?;

    let (host, segments) = if let Some(caps) = ssh_pattern().captures(&normalized) {
        let host = caps[1].to_lowercase();
        let segments = decode_segments(caps[2].split('/'), raw)?;
        (host, segments)
    } else {
        let url = Url::parse(&normalized).map_err(|_| ParseError::Malformed(raw.trim().to_string()))?;
        if !matches!(url.scheme(), "http" | "https" | "ssh" | "git") {
            return Err(ParseError::Malformed(raw.trim().to_string()));
        }
        let host = url
            .host_str()
            .ok_or_else(|| ParseError::Malformed(raw.trim().to_string()))?
            .to_lowercase();
        let segments = match url.path_segments() {
            Some(parts) => decode_segments(parts, raw)?,
            None => Vec::new(),
        };
        (host, segments)
    };

    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

    identify(&host, &segments).ok_or_else(|| ParseError::Unrecognized(raw.trim().to_string()))
}

/// Non-empty path segments with percent-escapes resolved, so adapters encode
/// each name exactly once
fn decode_segments<'a>(
    parts: impl Iterator<Item = &'a str>,
    raw: &str,
) -> Result<Vec<String>, ParseError> {
    parts
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map(|decoded| decoded.into_owned())
                .map_err(|_| ParseError::Malformed(raw.trim().to_string()))
        })
        .collect()
}

fn identify(host: &str, segments: &[String]) -> Option<RepositoryIdentifier> {
    match host {
        "github.com" => owner_repo(Platform::GitHub, host, segments),
        "bitbucket.org" => owner_repo(Platform::Bitbucket, host, segments),
        "codeberg.org" => owner_repo(Platform::Codeberg, host, segments),
        "git.sr.ht" => sourcehut(host, segments),
        "dev.azure.com" | "ssh.dev.azure.com" => azure_dev(segments),
        _ if host.ends_with(".visualstudio.com") => azure_visualstudio(host, segments),
        _ if host.contains("gitlab") => gitlab(host, segments),
        _ if host.contains("gitea") || host.contains("forgejo") => {
            owner_repo(Platform::Gitea, host, segments)
        }
        _ => None,
    }
}

fn build(
    platform: Platform,
    host: &str,
    owner: &str,
    repo: &str,
    project: Option<&str>,
) -> Option<RepositoryIdentifier> {
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some(RepositoryIdentifier {
        platform,
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: host.to_string(),
        project: project.map(str::to_string),
    })
}

fn owner_repo(platform: Platform, host: &str, segments: &[String]) -> Option<RepositoryIdentifier> {
    match segments {
        [owner, repo, ..] => build(platform, host, owner, repo, None),
        _ => None,
    }
}

fn gitlab(host: &str, segments: &[String]) -> Option<RepositoryIdentifier> {
    // `/-/` starts the web-UI suffix (`/-/tree/main`, `/-/blob/...`)
    let path: Vec<&str> = segments
        .iter()
        .map(String::as_str)
        .take_while(|s| *s != "-")
        .collect();
    let (repo, namespace) = path.split_last()?;
    if namespace.is_empty() {
        return None;
    }
    build(Platform::GitLab, host, &namespace.join("/"), repo, None)
}

fn sourcehut(host: &str, segments: &[String]) -> Option<RepositoryIdentifier> {
    match segments {
        [owner, repo, ..] => {
            let owner = owner.strip_prefix('~')?;
            build(Platform::SourceHut, host, owner, repo, None)
        }
        _ => None,
    }
}

fn azure_dev(segments: &[String]) -> Option<RepositoryIdentifier> {
    let host = "dev.azure.com";
    let parts: Vec<&str> = segments.iter().map(String::as_str).collect();
    match parts.as_slice() {
        // git@ssh.dev.azure.com:v3/{org}/{project}/{repo}
        ["v3", org, project, repo, ..] => build(Platform::Azure, host, org, repo, Some(project)),
        [org, project, "_git", repo, ..] => build(Platform::Azure, host, org, repo, Some(project)),
        [org, "_git", repo, ..] => build(Platform::Azure, host, org, repo, Some(repo)),
        _ => None,
    }
}

fn azure_visualstudio(host: &str, segments: &[String]) -> Option<RepositoryIdentifier> {
    let org = host.strip_suffix(".visualstudio.com")?;
    let parts: Vec<&str> = segments
        .iter()
        .map(String::as_str)
        .skip_while(|s| s.eq_ignore_ascii_case("DefaultCollection"))
        .collect();
    match parts.as_slice() {
        [project, "_git", repo, ..] => build(Platform::Azure, host, org, repo, Some(project)),
        ["_git", repo, ..] => build(Platform::Azure, host, org, repo, Some(repo)),
        _ => None,
    }
}
