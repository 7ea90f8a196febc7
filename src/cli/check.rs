use std::path::PathBuf;

use orgdefaults::{default_descriptor_candidates, Artifact, ArtifactSet, Diagnostic, SigningSetup};

pub(crate) struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub artifacts: Vec<PathBuf>,
    pub descriptors: Vec<PathBuf>,
    pub project_dir: PathBuf,
    pub signing: super::SigningMode,
    pub no_signing_config: bool,
    pub no_publishing: bool,
    pub format: super::Format,
}

pub(crate) fn run(args: CheckArgs) {
    let merged = super::load_merged(&args.files);

    let descriptor_candidates = if args.descriptors.is_empty() {
        default_descriptor_candidates(&args.project_dir)
    } else {
        args.descriptors
    };
    let artifacts = ArtifactSet {
        artifacts: args.artifacts.into_iter().map(Artifact::new).collect(),
        descriptor_candidates,
    };
    let signing = SigningSetup {
        publishing_configured: !args.no_publishing,
        signing_configured: !args.no_signing_config,
        signing_required: args.signing == super::SigningMode::Required,
    };

    let diags = orgdefaults::validate(&merged, &artifacts, signing);
    let has_errors = orgdefaults::has_errors(&diags);

    match args.format {
        super::Format::Text => print_text(&diags, has_errors),
        super::Format::Json => match serde_json::to_string_pretty(&diags) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
    }

    if has_errors {
        std::process::exit(1);
    }
}

fn print_text(diags: &[Diagnostic], has_errors: bool) {
    for d in diags.iter().filter(|d| !d.is_error()) {
        eprintln!("{d}");
    }
    if has_errors {
        eprintln!("Validation failed:");
        for d in diags.iter().filter(|d| d.is_error()) {
            eprintln!("  {d}");
        }
    } else {
        eprintln!("ok");
    }
}
