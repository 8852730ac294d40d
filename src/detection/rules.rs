//! Manifest and file-pattern classification
//!
//! Every [`TechnologyRule`] is evaluated independently against the full tree
//! and the declared dependencies; any single matching condition is enough.

use super::catalog::TECHNOLOGY_RULES;
use crate::remote::PackageManifest;
use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Catalog entry pairing a technology identifier with detection conditions
#[derive(Debug, Clone, Copy)]
pub struct TechnologyRule {
    pub id: &'static str,
    /// Exact file name or path suffix, `dir/` prefix, or glob with `*`
    pub file_patterns: &'static [&'static str],
    /// npm or Python package names; a trailing `*` matches by prefix
    pub package_names: &'static [&'static str],
    /// Suffixes such as `.vue`, checked against the unsampled tree
    pub extensions: &'static [&'static str],
}

impl TechnologyRule {
    pub const EMPTY: TechnologyRule = TechnologyRule {
        id: "",
        file_patterns: &[],
        package_names: &[],
        extensions: &[],
    };
}

#[derive(Debug)]
enum FilePattern {
    /// `name` or `dir/name`, matched against the whole path or a path suffix
    Exact(String),
    /// `dir/`, matched as a leading or nested directory
    Directory(String),
    Glob(Pattern),
    /// `*.xcodeproj/`, matched against each parent directory name
    DirectoryGlob(Pattern),
}

impl FilePattern {
    fn compile(raw: &str) -> Option<Self> {
        if let Some(dir) = raw.strip_suffix('/').filter(|d| d.contains('*')) {
            Pattern::new(dir).ok().map(FilePattern::DirectoryGlob)
        } else if raw.contains('*') {
            Pattern::new(raw).ok().map(FilePattern::Glob)
        } else if raw.ends_with('/') {
            Some(FilePattern::Directory(raw.to_string()))
        } else {
            Some(FilePattern::Exact(raw.to_string()))
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            FilePattern::Exact(name) => {
                path == name
                    || (path.len() > name.len()
                        && path.ends_with(name.as_str())
                        && path.as_bytes()[path.len() - name.len() - 1] == b'/')
            }
            FilePattern::Directory(dir) => {
                path.starts_with(dir.as_str()) || path.contains(&format!("/{}", dir))
            }
            FilePattern::Glob(pattern) => {
                let options = MatchOptions {
                    case_sensitive: true,
                    require_literal_separator: false,
                    require_literal_leading_dot: false,
                };
                let name = path.rsplit('/').next().unwrap_or(path);
                pattern.matches_with(path, options) || pattern.matches_with(name, options)
            }
            FilePattern::DirectoryGlob(pattern) => {
                let mut segments = path.split('/').collect::<Vec<_>>();
                segments.pop();
                segments.iter().any(|segment| pattern.matches(segment))
            }
        }
    }
}

#[derive(Debug)]
struct CompiledRule {
    id: &'static str,
    file_patterns: Vec<FilePattern>,
    package_names: &'static [&'static str],
    extensions: &'static [&'static str],
}

/// Declared dependencies of the analyzed repository
#[derive(Debug, Clone, Default)]
pub struct DependencySignal {
    /// npm names, case-sensitive
    pub npm: BTreeSet<String>,
    /// Python names, already lower-cased
    pub python: BTreeSet<String>,
}

impl DependencySignal {
    pub fn new(manifest: Option<&PackageManifest>, python_packages: &[String]) -> Self {
        Self {
            npm: manifest.map(|m| m.dependency_names()).unwrap_or_default(),
            python: python_packages.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    fn matches(&self, pattern: &str) -> bool {
        let lowered = pattern.to_lowercase();
        match pattern.strip_suffix('*') {
            Some(prefix) => {
                let lowered_prefix = prefix.to_lowercase();
                self.npm.iter().any(|n| n.starts_with(prefix))
                    || self.python.iter().any(|p| p.starts_with(&lowered_prefix))
            }
            None => self.npm.contains(pattern) || self.python.contains(&lowered),
        }
    }
}

/// Compiled technology catalog
pub struct TechnologyRegistry {
    rules: Vec<CompiledRule>,
}

impl TechnologyRegistry {
    pub fn new(rules: &[TechnologyRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledRule {
                id: rule.id,
                file_patterns: rule
                    .file_patterns
                    .iter()
                    .filter_map(|raw| {
                        let compiled = FilePattern::compile(raw);
                        if compiled.is_none() {
                            warn!(rule = rule.id, pattern = raw, "Skipping invalid file pattern");
                        }
                        compiled
                    })
                    .collect(),
                package_names: rule.package_names,
                extensions: rule.extensions,
            })
            .collect();

        Self { rules }
    }

    pub fn with_defaults() -> Self {
        Self::new(TECHNOLOGY_RULES)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.iter().any(|r| r.id == id)
    }

    /// Identifiers of every rule whose file patterns, package names or
    /// extensions match. `paths` must be the full, unsampled tree.
    pub fn classify(&self, paths: &[String], dependencies: &DependencySignal) -> BTreeSet<String> {
        let lowered: Vec<String> = paths.iter().map(|p| p.to_lowercase()).collect();
        let mut detected = BTreeSet::new();

        for rule in &self.rules {
            if detected.contains(rule.id) {
                continue;
            }

            let by_package = rule.package_names.iter().any(|p| dependencies.matches(p));
            let by_file = !by_package
                && rule
                    .file_patterns
                    .iter()
                    .any(|pattern| paths.iter().any(|path| pattern.matches(path)));
            let by_extension = !by_package
                && !by_file
                && rule
                    .extensions
                    .iter()
                    .any(|ext| lowered.iter().any(|path| path.ends_with(ext)));

            if by_package || by_file || by_extension {
                debug!(
                    technology = rule.id,
                    by_package, by_file, by_extension, "Rule matched"
                );
                detected.insert(rule.id.to_string());
            }
        }

        detected
    }
}

impl Default for TechnologyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
