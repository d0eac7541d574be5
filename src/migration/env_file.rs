use std::collections::HashMap;
use std::path::Path;

use crate::error::AppError;

/// `KEY=VALUE` settings read from a local env file.
///
/// The file is parsed without touching the process environment. A file
/// opened with [`EnvFile::load`] lets variables already set in the process
/// environment win; one built with [`EnvFile::parse`] sees only its own text.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    vars: HashMap<String, String>,
    process_env: bool,
}

impl EnvFile {
    /// Read the env file at `path`. A missing file yields an empty set so the
    /// process environment alone can drive the tool.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match dotenvy::from_path_iter(path) {
            Ok(iter) => Ok(Self {
                process_env: true,
                ..Self::collect(iter)?
            }),
            Err(e) if e.not_found() => {
                tracing::warn!("Env file '{}' not found, using process environment only", path.display());
                Ok(Self {
                    process_env: true,
                    ..Self::default()
                })
            }
            Err(e) => Err(AppError::Config(format!(
                "Failed to read env file '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, AppError> {
        Self::collect(dotenvy::from_read_iter(contents.as_bytes()))
    }

    fn collect<R: std::io::Read>(iter: dotenvy::Iter<R>) -> Result<Self, AppError> {
        let vars = iter
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(|e| AppError::Config(format!("Invalid env file: {}", e)))?;
        Ok(Self {
            vars,
            process_env: false,
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.process_env
            .then(|| std::env::var(key).ok())
            .flatten()
            .or_else(|| self.vars.get(key).cloned())
            .filter(|v| !v.is_empty())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn require(&self, key: &str) -> Result<String, AppError> {
        self.get(key)
            .ok_or_else(|| AppError::Config(format!("{} is not set", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value_lines() {
        let env = EnvFile::parse(
            "# database\nFOLIO_TEST_URI=mongodb://db:27017\nFOLIO_TEST_DB=\"blog\"\n\nFOLIO_TEST_EMPTY=\n",
        )
        .unwrap();

        assert_eq!(env.get("FOLIO_TEST_URI").as_deref(), Some("mongodb://db:27017"));
        assert_eq!(env.get("FOLIO_TEST_DB").as_deref(), Some("blog"));
        assert_eq!(env.get("FOLIO_TEST_EMPTY"), None);
    }

    #[test]
    fn test_get_or_and_require() {
        let env = EnvFile::parse("FOLIO_TEST_PRESENT=yes\n").unwrap();
        assert_eq!(env.get_or("FOLIO_TEST_ABSENT_1", "fallback"), "fallback");
        assert_eq!(env.require("FOLIO_TEST_PRESENT").unwrap(), "yes");

        match env.require("FOLIO_TEST_ABSENT_2") {
            Err(AppError::Config(msg)) => assert!(msg.contains("FOLIO_TEST_ABSENT_2")),
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_parsed_file_ignores_process_env() {
        std::env::set_var("FOLIO_TEST_SHADOWED", "from-process");
        let parsed = EnvFile::parse("FOLIO_TEST_SHADOWED=from-file\n").unwrap();
        std::env::remove_var("FOLIO_TEST_SHADOWED");

        assert_eq!(parsed.get("FOLIO_TEST_SHADOWED").as_deref(), Some("from-file"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let env = EnvFile::load(Path::new("/definitely/not/here/.env")).unwrap();
        assert_eq!(env.get("FOLIO_TEST_ANYTHING"), None);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "FOLIO_TEST_FROM_DISK=42\n").unwrap();

        let env = EnvFile::load(&path).unwrap();
        assert_eq!(env.get("FOLIO_TEST_FROM_DISK").as_deref(), Some("42"));
    }
}
