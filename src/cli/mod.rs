use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use orgdefaults::OrganizationDefaults;

mod check;
mod merge;
mod pom;

/// Environment variable overriding the log filter (e.g. `orgdefaults=debug`).
const LOG_ENV: &str = "ORGDEFAULTS_LOG";

#[derive(Parser)]
#[command(
    name = "orgdefaults",
    version,
    about = "Organization POM defaults merger and release metadata checker"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON array of diagnostic objects
    Json,
}

/// Output format for the merged record.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum RecordFormat {
    /// YAML document (default)
    #[default]
    Yaml,
    /// JSON object
    Json,
}

/// Whether signatures are mandatory for the release.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum SigningMode {
    /// Every artifact must carry an armored signature
    Required,
    /// Signature checks are skipped (default)
    #[default]
    Optional,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge defaults files (first is the base, later files override) and print the result
    Merge {
        /// Defaults files: organization first, then project, then module
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = RecordFormat::Yaml)]
        format: RecordFormat,
    },
    /// Merge defaults files and check the result against publishing requirements
    #[command(alias = "validate")]
    Check {
        /// Defaults files: organization first, then project, then module
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Artifact staged for publishing (repeatable)
        #[arg(long = "artifact")]
        artifacts: Vec<PathBuf>,
        /// Candidate path of the generated POM (repeatable; defaults to build/publications/*/pom-default.xml)
        #[arg(long = "descriptor")]
        descriptors: Vec<PathBuf>,
        /// Project directory used to locate the default descriptor candidates
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
        /// Signing policy
        #[arg(long, value_enum, default_value_t = SigningMode::Optional)]
        signing: SigningMode,
        /// No signing configuration is available
        #[arg(long)]
        no_signing_config: bool,
        /// No publishing target is configured (skips signature checks)
        #[arg(long)]
        no_publishing: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Merge defaults files and render the POM descriptor
    Pom {
        /// Defaults files: organization first, then project, then module
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Write output to file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Install the stderr log subscriber.
///
/// `ORGDEFAULTS_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Merge { files, format }) => merge::run(&files, format),
        Some(Commands::Check {
            files,
            artifacts,
            descriptors,
            project_dir,
            signing,
            no_signing_config,
            no_publishing,
            format,
        }) => check::run(check::CheckArgs {
            files,
            artifacts,
            descriptors,
            project_dir,
            signing,
            no_signing_config,
            no_publishing,
            format,
        }),
        Some(Commands::Pom { files, output }) => pom::run(&files, output.as_deref()),
        None => {
            eprintln!("Usage: orgdefaults <command> [args]");
            eprintln!("Run `orgdefaults --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "orgdefaults: organization POM defaults tool\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}

/// Load and fold-merge `files`, exiting with a message on failure.
fn load_merged(files: &[PathBuf]) -> OrganizationDefaults {
    let chain = match orgdefaults::load_chain(files) {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    orgdefaults::merge_chain(&chain).unwrap_or_default()
}

/// Write `content` to `output`, or stdout when `None`.
fn emit(content: &str, output: Option<&Path>) {
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, content) {
                eprintln!("error: cannot write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => print!("{content}"),
    }
}
