//! Keyring configuration
//!
//! Resolves where the secret file lives. Lookup order:
//!
//! 1. `AVATAR_SECRET_FILE`: path of the secret file itself
//! 2. `AVATAR_HOME`: directory holding a file named `secret`
//! 3. `<platform data dir>/avatar/secret`
//!
//! A `.env` file in the working directory is honoured. Relative paths are
//! resolved against the current directory so the result is always absolute.

use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

use crate::shared::constants::{APP_DIR_NAME, ENV_AVATAR_HOME, ENV_SECRET_FILE, SECRET_FILE_NAME};
use crate::shared::error::{Result, SecretError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretConfig {
    secret_file: PathBuf,
}

impl SecretConfig {
    /// Use an explicit secret file location
    pub fn new(secret_file: impl Into<PathBuf>) -> Result<Self> {
        let cwd = env::current_dir()
            .map_err(|e| SecretError::config(format!("Cannot determine current directory: {}", e)))?;
        Ok(Self {
            secret_file: absolutize(secret_file.into(), &cwd),
        })
    }

    /// Resolve the secret file location from the environment (and `.env`)
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        let cwd = env::current_dir()
            .map_err(|e| SecretError::config(format!("Cannot determine current directory: {}", e)))?;
        let secret_file = resolve_secret_file(
            non_empty_var(ENV_SECRET_FILE),
            non_empty_var(ENV_AVATAR_HOME),
            dirs::data_dir(),
            &cwd,
        )?;
        log::debug!("Secret file resolved to {}", secret_file.display());
        Ok(Self { secret_file })
    }

    /// Absolute path of the secret file
    pub fn secret_file(&self) -> &Path {
        &self.secret_file
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn resolve_secret_file(
    secret_file: Option<String>,
    avatar_home: Option<String>,
    data_dir: Option<PathBuf>,
    cwd: &Path,
) -> Result<PathBuf> {
    let path = if let Some(file) = secret_file {
        PathBuf::from(file)
    } else if let Some(home) = avatar_home {
        PathBuf::from(home).join(SECRET_FILE_NAME)
    } else {
        data_dir
            .map(|dir| dir.join(APP_DIR_NAME).join(SECRET_FILE_NAME))
            .ok_or_else(|| {
                SecretError::config(format!(
                    "No data directory on this platform; set {} or {}",
                    ENV_SECRET_FILE, ENV_AVATAR_HOME
                ))
            })?
    };
    Ok(absolutize(path, cwd))
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
