use crate::infrastructure::{CliError, Result};
use challenges_core::{Challenge, ChallengeCommand};
use schemars::schema_for;
use std::path::{Path, PathBuf};

/// A schema written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaFile {
    pub name: &'static str,
    pub path: PathBuf,
}

fn schemas() -> Vec<(&'static str, schemars::schema::RootSchema)> {
    vec![
        ("challenge", schema_for!(Challenge)),
        ("challenge_command", schema_for!(ChallengeCommand)),
    ]
}

/// Write `<name>.schema.json` files into `out`, creating it if needed
pub fn write_schemas(out: &Path) -> Result<Vec<SchemaFile>> {
    if out.exists() && !out.is_dir() {
        return Err(CliError::invalid_directory(out.to_path_buf()));
    }
    std::fs::create_dir_all(out)?;

    let mut written = Vec::new();
    for (name, schema) in schemas() {
        let json = serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::SchemaGeneration(format!("{}: {}", name, e)))?;

        let path = out.join(format!("{}.schema.json", name));
        std::fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "Wrote schema");

        written.push(SchemaFile { name, path });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_schemas() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("schemas");

        let written = write_schemas(&out).unwrap();

        assert_eq!(written.len(), 2);
        for file in &written {
            let json = std::fs::read_to_string(&file.path).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(value.get("$schema").is_some());
        }
    }

    #[test]
    fn test_output_path_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        assert!(matches!(
            write_schemas(&file),
            Err(CliError::InvalidOutputDirectory { .. })
        ));
    }
}
