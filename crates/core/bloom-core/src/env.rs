use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Environment variable to override the default Bloom data directory.
const ENV_DATA_DIR: &str = "BLOOM_HOME";

/// Returns the base directory for Bloom data (config, logs).
///
/// Checks for `BLOOM_HOME` first. If not set, falls back to `~/.bloom`
/// (or equivalent on Windows).
pub fn get_base_dir() -> AppResult<PathBuf> {
    base_dir_from(std::env::var(ENV_DATA_DIR).ok().as_deref())
}

fn base_dir_from(env_value: Option<&str>) -> AppResult<PathBuf> {
    if let Some(env_path) = env_value {
        let path = PathBuf::from(env_path);
        if !path.is_absolute() {
            return Err(AppError::Config(format!(
                "Environment variable {} must be an absolute path, got: {:?}",
                ENV_DATA_DIR, path
            )));
        }
        return Ok(path);
    }

    match dirs::home_dir() {
        Some(home) => Ok(home.join(".bloom")),
        None => Err(AppError::Config(
            "Cannot determine home directory. Please set BLOOM_HOME environment variable."
                .to_string(),
        )),
    }
}

/// Returns the directory the TUI writes its log files to.
pub fn get_log_dir() -> AppResult<PathBuf> {
    Ok(get_base_dir()?.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_override_is_honored() {
        let test_path = if cfg!(windows) {
            r"C:\temp\bloom_test"
        } else {
            "/tmp/bloom_test"
        };
        let result = base_dir_from(Some(test_path));
        assert!(result.is_ok(), "base_dir_from failed: {:?}", result);
        assert_eq!(result.unwrap(), PathBuf::from(test_path));
    }

    #[test]
    fn relative_override_is_rejected() {
        assert!(base_dir_from(Some("relative/path")).is_err());
    }
}
