use crate::chain::ChainConfig;
use crate::gyms::RawGymRecord;
use crate::{ImporterError, Result};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the chain's gym file is expected inside `data_dir`.
pub fn resolve_input_path(data_dir: &Path, chain: &ChainConfig) -> PathBuf {
    data_dir.join(chain.input_file)
}

/// Reads the gym file at `path`.
///
/// The document must be a non-empty JSON array. Individual elements are not
/// checked here; that happens per record during generation.
pub fn load_gym_records(path: &Path) -> Result<Vec<RawGymRecord>> {
    debug!("Reading gym data from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ImporterError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ImporterError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let values: Vec<Value> = serde_json::from_str(&content)?;
    if values.is_empty() {
        return Err(ImporterError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    info!("Loaded {} gym record(s) from {}", values.len(), path.display());

    Ok(values.into_iter().map(RawGymRecord::from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_input(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("anytime.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_input_path() {
        let path = resolve_input_path(Path::new("data/gyms"), &ChainConfig::ANYTIME_FITNESS);
        assert_eq!(path, PathBuf::from("data/gyms/anytime.json"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_gym_records(&dir.path().join("anytime.json")).unwrap_err();

        assert!(matches!(err, ImporterError::InputNotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_gym_records(dir.path()).unwrap_err();
        assert!(matches!(err, ImporterError::Io { .. }), "unexpected: {err:?}");
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anytime.json");
        fs::write(&path, [b'[', 0xff, 0xfe, b']']).unwrap();

        let err = load_gym_records(&path).unwrap_err();
        assert!(matches!(err, ImporterError::Io { .. }), "unexpected: {err:?}");
    }

    #[test]
    fn test_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, "[]");

        let err = load_gym_records(&path).unwrap_err();
        assert!(matches!(err, ImporterError::EmptyInput { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, r#"[{"name": "A""#);

        let err = load_gym_records(&path).unwrap_err();
        assert!(matches!(err, ImporterError::Parse(_)));
    }

    #[test]
    fn test_top_level_must_be_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, r#"{"name": "A"}"#);

        let err = load_gym_records(&path).unwrap_err();
        assert!(matches!(err, ImporterError::Parse(_)));
    }

    #[test]
    fn test_loads_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(
            &dir,
            r#"[
                {"name": "First", "address": "a", "url": "u", "latitude": 1, "longitude": 2},
                "garbage",
                {"name": "Third"}
            ]"#,
        );

        let records = load_gym_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].display_name(), "First");
        assert_eq!(records[1].display_name(), "unknown name");
        assert_eq!(records[2].display_name(), "Third");
    }
}
