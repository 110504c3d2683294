use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema generation failed: {0}")]
    SchemaGeneration(String),

    #[error("Script file not found: {path}")]
    ScriptNotFound { path: PathBuf },

    #[error("Invalid output directory: {path}")]
    InvalidOutputDirectory { path: PathBuf },

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn script_not_found(path: PathBuf) -> Self {
        CliError::ScriptNotFound { path }
    }

    pub fn invalid_directory(path: PathBuf) -> Self {
        CliError::InvalidOutputDirectory { path }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
