use stackprobe::cli::commands::{CliArgs, Commands};
use stackprobe::cli::handlers::{handle_detect, handle_platforms};
use stackprobe::util::logging::{self, LoggingConfig};
use stackprobe::VERSION;

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("stackprobe v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, args.quiet).await,
        Commands::Platforms(platform_args) => handle_platforms(platform_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let env_config = logging::config_from_env();

    let level = if let Some(level_str) = &args.log_level {
        logging::parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        env_config.level
    };

    logging::init_logging(LoggingConfig {
        level,
        ..env_config
    });
}
