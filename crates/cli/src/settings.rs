//! Layered configuration: built-in defaults < config file < LINELESS_* env vars

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use lineless_core::domain::EngineConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_PREFIX: &str = "LINELESS";
const CONFIG_FILE_NAME: &str = "lineless.toml";

/// `<platform config dir>/lineless/lineless.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lineless").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load the engine configuration
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    let mut builder = Config::builder();

    match path {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            if let Some(default_path) = default_config_path() {
                builder = builder.add_source(File::from(default_path.as_path()).required(false));
            }
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("departments"),
    );

    let config: EngineConfig = builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    config.validate().context("Invalid configuration")?;

    debug!(
        prefix = %config.token_prefix,
        departments = config.departments.len(),
        baseline = ?config.progress_baseline,
        "Configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineless_core::domain::ProgressBaseline;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("lineless-")
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_toml() {
        let file = toml_file(
            r#"
token_prefix = "B"
serving_start = 10
last_issued_seed = 12
departments = ["Dental", "Eye"]
progress_baseline = "at_issuance"
"#,
        );

        let config = load(Some(file.path())).unwrap();

        assert_eq!(config.token_prefix, "B");
        assert_eq!(config.serving_start, 10);
        assert_eq!(config.last_issued_seed, 12);
        assert_eq!(config.departments, vec!["Dental", "Eye"]);
        assert_eq!(config.progress_baseline, ProgressBaseline::AtIssuance);
        assert_eq!(config.average_service_minutes, 3);
    }

    #[test]
    fn test_moved_serving_start_moves_fixed_baseline() {
        let file = toml_file(
            r#"
serving_start = 10
last_issued_seed = 12
"#,
        );

        let config = load(Some(file.path())).unwrap();

        assert_eq!(config.fixed_baseline, None);
        assert_eq!(config.baseline_serving(), 10);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = toml_file(
            r#"
serving_start = 50
last_issued_seed = 40
"#,
        );

        assert!(load(Some(file.path())).is_err());
    }
}
