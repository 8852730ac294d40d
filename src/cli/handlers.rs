//! Subcommand handlers; each returns the process exit code

use super::commands::{DetectArgs, PlatformsArgs};
use super::output::{OutputFormat, OutputFormatter, PlatformInfo};
use crate::config::ProbeConfig;
use crate::detection::DetectionService;
use crate::platform::Platform;
use tracing::{debug, error};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Loads configuration and applies `detect` flag overrides
pub fn detect_config(args: &DetectArgs) -> ProbeConfig {
    let mut config = ProbeConfig::default();
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if let Some(cap) = args.sample_cap {
        config.sample_cap = cap;
    }
    config
}

pub async fn handle_detect(args: &DetectArgs, quiet: bool) -> i32 {
    let config = detect_config(args);
    debug!(?config, "Loaded configuration");

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));

    let service = match DetectionService::new(&config) {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "Failed to initialize detection service");
            eprintln!("Error: {}", e);
            return EXIT_FAILURE;
        }
    };

    let outcome = service
        .analyze(&args.url, args.token.as_deref())
        .await
        .map_err(|e| e.to_problem());

    let (rendered, code) = match &outcome {
        Ok(result) => (formatter.format(result), EXIT_SUCCESS),
        Err(problem) => (formatter.format_problem(problem), EXIT_FAILURE),
    };

    match rendered {
        Ok(text) if code == EXIT_SUCCESS => {
            if !quiet {
                println!("{}", text.trim_end());
            }
            code
        }
        Ok(text) => {
            // Problems are printed even in quiet mode
            println!("{}", text.trim_end());
            code
        }
        Err(e) => {
            error!(error = %e, "Failed to format output");
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

pub fn handle_platforms(args: &PlatformsArgs) -> i32 {
    let config = ProbeConfig::default();
    let platforms: Vec<PlatformInfo> = Platform::all_variants()
        .iter()
        .map(|p| PlatformInfo::new(*p, config.credential(*p).is_some()))
        .collect();

    match OutputFormatter::new(OutputFormat::from(args.format)).format_platforms(&platforms) {
        Ok(text) => {
            println!("{}", text.trim_end());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}
