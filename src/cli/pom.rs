use std::path::{Path, PathBuf};

pub(crate) fn run(files: &[PathBuf], output: Option<&Path>) {
    let merged = super::load_merged(files);
    super::emit(&orgdefaults::to_pom_xml(&merged), output);
    if let Some(path) = output {
        eprintln!("Wrote {}", path.display());
    }
}
