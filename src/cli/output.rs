//! Output formatting for detection results, problems and platform listings

use anyhow::{Context, Result};
use serde::Serialize;

use crate::detection::{DetectionResult, ProblemDetails};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

/// One row of `stackprobe platforms`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub credential_env_var: &'static str,
    pub credential_configured: bool,
}

impl PlatformInfo {
    pub fn new(platform: Platform, credential_configured: bool) -> Self {
        Self {
            id: platform.as_str(),
            name: platform.name(),
            credential_env_var: platform.credential_env_var(),
            credential_configured,
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, result: &DetectionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(result)
                .context("Failed to serialize detection result to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(result).context("Failed to serialize detection result to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(result)),
        }
    }

    pub fn format_problem(&self, problem: &ProblemDetails) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(problem).context("Failed to serialize problem to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(problem).context("Failed to serialize problem to YAML")
            }
            OutputFormat::Human => Ok(format!(
                "\u{2717} {} ({})\n{}\n",
                problem.title, problem.status, problem.detail
            )),
        }
    }

    pub fn format_platforms(&self, platforms: &[PlatformInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(platforms)
                .context("Failed to serialize platforms to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(platforms).context("Failed to serialize platforms to YAML")
            }
            OutputFormat::Human => {
                let mut output = String::from("Supported platforms:\n");
                for info in platforms {
                    let state = if info.credential_configured {
                        "configured"
                    } else {
                        "not set"
                    };
                    output.push_str(&format!(
                        "  {:<10} {:<14} {} ({})\n",
                        info.id, info.name, info.credential_env_var, state
                    ));
                }
                Ok(output)
            }
        }
    }

    fn format_human(&self, result: &DetectionResult) -> String {
        let repo = &result.repository;
        let mut output = String::new();

        output.push_str("\u{2713} Technology Stack\n");
        output.push_str(&"\u{2501}".repeat(42));
        output.push_str("\n\n");

        output.push_str(&format!("Repository:  {}\n", repo.url));
        output.push_str(&format!("Platform:    {}\n", repo.platform_name));
        output.push_str(&format!("Files:       {}\n", repo.file_count));
        output.push_str(&format!(
            "Manifests:   package.json {}, requirements.txt {}\n\n",
            if repo.has_package_manifest { "yes" } else { "no" },
            if repo.has_python_requirements { "yes" } else { "no" }
        ));

        output.push_str(&format!("Detected ({}):\n", result.detected_count));
        if result.tech_stack.is_empty() {
            output.push_str("  (none)\n");
        }
        for tech in &result.tech_stack {
            output.push_str(&format!("  - {}\n", tech));
        }

        if !repo.top_extensions.is_empty() {
            output.push_str("\nTop extensions:\n");
            for (i, entry) in repo.top_extensions.iter().enumerate() {
                let connector = if i + 1 == repo.top_extensions.len() {
                    "\u{2514}"
                } else {
                    "\u{251C}"
                };
                output.push_str(&format!(
                    "{}\u{2500} .{:<12} {}\n",
                    connector, entry.ext, entry.count
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{AnalysisError, ExtensionCount, RepositorySummary};
    use crate::platform::parse;
    use std::collections::BTreeSet;

    fn sample_result() -> DetectionResult {
        let id = parse("https://github.com/acme/widgets").unwrap();
        let mut summary = RepositorySummary::new(&id, 12);
        summary.has_package_manifest = true;
        summary.top_extensions = vec![
            ExtensionCount {
                ext: "ts".to_string(),
                count: 8,
            },
            ExtensionCount {
                ext: "json".to_string(),
                count: 2,
            },
        ];
        let stack: BTreeSet<String> = ["react", "typescript"].iter().map(|s| s.to_string()).collect();
        DetectionResult::new(stack, summary)
    }

    #[test]
    fn test_json_output() {
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&sample_result())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["detectedCount"], 2);
        assert_eq!(value["repository"]["url"], "https://github.com/acme/widgets");
    }

    #[test]
    fn test_yaml_output() {
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&sample_result())
            .unwrap();
        assert!(output.contains("techStack:"));
        assert!(output.contains("- typescript"));
    }

    #[test]
    fn test_human_output() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&sample_result())
            .unwrap();
        assert!(output.contains("Platform:    GitHub"));
        assert!(output.contains("  - react"));
        assert!(output.contains(".ts"));
        assert!(output.contains("package.json yes, requirements.txt no"));
    }

    #[test]
    fn test_problem_output() {
        let problem = AnalysisError::Internal("boom".to_string()).to_problem();
        let json = OutputFormatter::new(OutputFormat::Json)
            .format_problem(&problem)
            .unwrap();
        assert!(json.contains("\"type\": \"internal-error\""));

        let human = OutputFormatter::new(OutputFormat::Human)
            .format_problem(&problem)
            .unwrap();
        assert!(human.contains("Internal error (500)"));
    }

    #[test]
    fn test_platform_listing() {
        let platforms: Vec<PlatformInfo> = Platform::all_variants()
            .iter()
            .map(|p| PlatformInfo::new(*p, *p == Platform::GitLab))
            .collect();
        let human = OutputFormatter::new(OutputFormat::Human)
            .format_platforms(&platforms)
            .unwrap();
        assert!(human.contains("GITLAB_TOKEN (configured)"));
        assert!(human.contains("SOURCEHUT_TOKEN (not set)"));
    }
}
