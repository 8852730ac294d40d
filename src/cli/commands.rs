use clap::{Parser, Subcommand, ValueEnum};

/// Technology stack detection for remote Git repositories
#[derive(Parser, Debug)]
#[command(
    name = "stackprobe",
    about = "Detect the technology stack of a remote Git repository from its URL",
    version,
    author,
    long_about = "stackprobe lists a repository's files through its hosting platform's API, \
                  reads package.json and requirements.txt when present, and classifies the \
                  result against a catalog of technologies. GitHub, GitLab, Bitbucket, \
                  Azure DevOps, Codeberg, SourceHut and Gitea/Forgejo are supported."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the technology stack of a repository",
        long_about = "Fetches the repository tree and manifests, then prints the detected \
                      technologies.\n\n\
                      Examples:\n  \
                      stackprobe detect https://github.com/tokio-rs/axum\n  \
                      stackprobe detect gitlab.com/group/subgroup/project --format json\n  \
                      stackprobe detect git@github.com:acme/private.git --token $TOKEN"
    )]
    Detect(DetectArgs),

    #[command(about = "List supported platforms and their credential variables")]
    Platforms(PlatformsArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(value_name = "URL", help = "Repository URL (web, SSH or scheme-less)")]
    pub url: String,

    #[arg(
        short = 't',
        long,
        value_name = "TOKEN",
        help = "Access token for the repository's platform (overrides server credentials)"
    )]
    pub token: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "SECONDS", help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "N", help = "Maximum number of paths sampled for extension counting")]
    pub sample_cap: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlatformsArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
