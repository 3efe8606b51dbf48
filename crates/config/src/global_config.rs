use std::path::{Path, PathBuf};

use color_eyre::{eyre::OptionExt, Result};
use serde::{Deserialize, Serialize};

use crate::{util::non_blank, BASE_URL_ENV, DEFAULT_BASE_URL, TOKEN_ENV};

const FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

/// FS Methods
impl Config {
    pub fn path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "usuarios")
            .ok_or_eyre("unable to resolve the configuration directory")?;

        Ok(dirs.config_dir().join(FILE_NAME))
    }

    pub fn is_first_run() -> Result<bool> {
        Ok(!Self::path()?.exists())
    }

    /// Read from file-system, falling back to defaults when there is no file yet
    pub async fn read() -> Result<Self> {
        Self::read_from(&Self::path()?).await
    }

    pub async fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Write to file-system
    pub fn write(&self) -> Result<()> {
        self.write_to(&Self::path()?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;

        tracing::debug!(path = %path.display(), "config written");

        Ok(())
    }
}

/// Env Methods
impl Config {
    /// `USUARIOS_API_BASE_URL` wins over the file.
    pub fn base_url(&self) -> String {
        non_blank(std::env::var(BASE_URL_ENV).ok()).unwrap_or_else(|| self.base_url.clone())
    }

    /// `USUARIOS_ACCESS_TOKEN` wins over the file; blank values count as absent.
    pub fn token(&self) -> Option<String> {
        non_blank(std::env::var(TOKEN_ENV).ok()).or_else(|| non_blank(self.token.clone()))
    }
}
