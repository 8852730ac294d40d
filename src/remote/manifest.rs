//! Dependency manifests fetched alongside the tree
//!
//! Only the repository root is consulted: an npm `package.json` and a Python
//! `requirements.txt`. Both are optional signal and parse leniently.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

pub const PACKAGE_MANIFEST_PATH: &str = "package.json";
pub const PYTHON_REQUIREMENTS_PATH: &str = "requirements.txt";

/// The parts of an npm-style manifest that carry technology signal
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    pub fn parse(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }

    /// Runtime and development dependency names, as declared
    pub fn dependency_names(&self) -> BTreeSet<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .cloned()
            .collect()
    }
}

/// Extracts lower-cased package names from a requirements list
pub fn parse_requirements(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in content.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() || line.starts_with('-') {
            continue;
        }

        let name = line
            .split(|c: char| matches!(c, '=' | '<' | '>' | '~' | '!' | ';' | '[' | '@') || c.is_whitespace())
            .next()
            .unwrap_or_default()
            .trim();

        if !name.is_empty() && !name.contains("://") {
            names.push(name.to_lowercase());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_strip_version_specifiers() {
        let names = parse_requirements("flask==2.0.1\npytest>=7.0");
        assert_eq!(names, vec!["flask", "pytest"]);
    }

    #[test]
    fn test_requirements_skip_comments_and_options() {
        let content = "# web\nDjango<5 ; python_version > '3.8'\n-r base.txt\n\nrequests[socks]~=2.31\nnumpy  # math\n";
        let names = parse_requirements(content);
        assert_eq!(names, vec!["django", "requests", "numpy"]);
    }

    #[test]
    fn test_manifest_collects_runtime_and_dev() {
        let manifest = PackageManifest::parse(
            r#"{"name":"web","dependencies":{"react":"^18.0.0"},"devDependencies":{"typescript":"^5.0.0","@types/react":"^18"}}"#,
        )
        .unwrap();
        let names = manifest.dependency_names();
        assert!(names.contains("react"));
        assert!(names.contains("typescript"));
        assert!(names.contains("@types/react"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_manifest_without_dependencies() {
        let manifest = PackageManifest::parse(r#"{"name":"empty"}"#).unwrap();
        assert!(manifest.dependency_names().is_empty());
    }

    #[test]
    fn test_invalid_manifest_is_none() {
        assert!(PackageManifest::parse("<html>sign in</html>").is_none());
        assert!(PackageManifest::parse("[1,2]").is_none());
    }
}
