//! Bounded, representative sampling of large file trees
//!
//! Extension counting only needs a few hundred paths to be representative, so
//! trees above the cap are reduced to a random subset that favours conventional
//! source directories.

use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SAMPLE_CAP: usize = 100;

/// Directory names whose contents are never source of the repository itself
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    "bower_components",
    "jspm_packages",
    "dist",
    "build",
    "out",
    "target",
    ".git",
    ".svn",
    ".hg",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".venv",
    "venv",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".turbo",
    ".parcel-cache",
    ".cache",
    ".gradle",
    "coverage",
    ".nyc_output",
];

/// Path segments that mark likely application source
pub const SOURCE_DIRS: &[&str] = &[
    "src",
    "lib",
    "app",
    "pages",
    "components",
    "api",
    "services",
    "utils",
    "hooks",
    "models",
    "controllers",
];

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// True when the file name has an extension. Dotfiles such as `.gitignore`
/// count as extensionless.
pub fn has_extension(path: &str) -> bool {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) => idx > 0 && idx + 1 < name.len(),
        None => false,
    }
}

pub fn is_excluded(path: &str) -> bool {
    let mut segments = path.split('/').collect::<Vec<_>>();
    segments.pop();
    segments.iter().any(|segment| EXCLUDED_DIRS.contains(segment))
}

pub fn is_likely_source(path: &str) -> bool {
    let mut segments = path.split('/').collect::<Vec<_>>();
    segments.pop();
    segments.iter().any(|segment| SOURCE_DIRS.contains(segment))
}

/// Paths that survive the exclusion filter, in input order
pub fn filter_paths(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .filter(|p| !is_excluded(p) && has_extension(p))
        .cloned()
        .collect()
}

/// Samples with the thread-local RNG
pub fn sample(paths: &[String], cap: usize) -> Vec<String> {
    sample_with_rng(paths, cap, &mut rand::thread_rng())
}

/// Filters, then reduces to at most `cap` paths using `rng` for member selection
pub fn sample_with_rng<R: Rng + ?Sized>(paths: &[String], cap: usize, rng: &mut R) -> Vec<String> {
    let filtered = filter_paths(paths);
    if filtered.len() <= cap {
        return filtered;
    }

    let (mut source, mut other): (Vec<String>, Vec<String>) =
        filtered.into_iter().partition(|p| is_likely_source(p));

    if source.len() >= cap {
        source.shuffle(rng);
        source.truncate(cap);
        return source;
    }

    let needed = cap - source.len();
    other.shuffle(rng);
    other.truncate(needed);
    source.extend(other);
    source
}
