use std::path::PathBuf;

pub(crate) fn run(files: &[PathBuf], format: super::RecordFormat) {
    let merged = super::load_merged(files);

    let rendered = match format {
        super::RecordFormat::Yaml => serde_yaml_ng::to_string(&merged).map_err(|e| e.to_string()),
        super::RecordFormat::Json => serde_json::to_string_pretty(&merged)
            .map(|s| s + "\n")
            .map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(s) => super::emit(&s, None),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
