use thiserror::Error;

/// Errors that can occur while loading, merging, or checking defaults.
#[derive(Error, Debug)]
pub enum OrgDefaultsError {
    /// A defaults file could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Release metadata validation found problems.
    #[error("validation failed:\n{}", errors.join("\n"))]
    Validation { errors: Vec<String> },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, OrgDefaultsError>`.
pub type Result<T> = std::result::Result<T, OrgDefaultsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_message() {
        let err = OrgDefaultsError::Validation {
            errors: vec![
                "Invalid name: Project name is required.".to_string(),
                "Invalid url: Project URL is required.".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "validation failed:\nInvalid name: Project name is required.\nInvalid url: Project URL is required."
        );
    }

    #[test]
    fn parse_error_display() {
        let err = OrgDefaultsError::Parse {
            message: "line 3: expected key=value".to_string(),
        };
        assert_eq!(err.to_string(), "parse error: line 3: expected key=value");
    }
}
