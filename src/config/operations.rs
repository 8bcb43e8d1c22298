//! Config loading, validation, and resolution.

use super::model::{ConfigSource, FeedConfig, Workspace};
use crate::error::{Result, SyncError, io_err};
use std::path::Path;

/// Environment variable carrying the JSON configuration in CI.
pub const CONFIG_ENV_VAR: &str = "GOODREADS_CONFIG";

impl FeedConfig {
    /// Parse and validate a JSON configuration blob.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(SyncError::Config("configuration JSON is empty".to_string()));
        }

        let config: FeedConfig = serde_json::from_str(json)
            .map_err(|e| SyncError::Config(format!("invalid configuration JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file.
    ///
    /// Unknown fields in the JSON are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config.json file
    ///
    /// # Returns
    ///
    /// * `Ok(FeedConfig)` - Successfully loaded and validated config
    /// * `Err(SyncError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `read_url` must be a non-empty `http://` or `https://` URL
    /// - `want_url` must be a non-empty `http://` or `https://` URL
    pub fn validate(&self) -> Result<()> {
        for (field, url) in [("read_url", &self.read_url), ("want_url", &self.want_url)] {
            let url = url.trim();
            if url.is_empty() {
                return Err(SyncError::Config(format!("{} must not be empty", field)));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SyncError::Config(format!(
                    "{} must be an http(s) URL (found '{}')",
                    field, url
                )));
            }
        }
        Ok(())
    }
}

/// Resolve the feed configuration.
///
/// An inline value that is present but unusable is an error; it never falls
/// through to the file.
///
/// # Arguments
///
/// * `flag` - Value of `--config-json`, if given
/// * `env` - Value of `GOODREADS_CONFIG`, if set
/// * `file` - Config file tried when neither inline value is present
///
/// # Returns
///
/// * `Ok((FeedConfig, ConfigSource))` - The config and where it came from
/// * `Err(SyncError::Config)` - No source found, or the chosen one is invalid
pub fn resolve_feeds(
    flag: Option<&str>,
    env: Option<&str>,
    file: &Path,
) -> Result<(FeedConfig, ConfigSource)> {
    if let Some(json) = flag {
        return Ok((FeedConfig::from_json(json)?, ConfigSource::Flag));
    }

    if let Some(json) = env {
        return Ok((FeedConfig::from_json(json)?, ConfigSource::Env));
    }

    if file.is_file() {
        let config = FeedConfig::load(file)?;
        return Ok((config, ConfigSource::File(file.to_path_buf())));
    }

    Err(SyncError::Config(format!(
        "no configuration found: pass --config-json, set {}, or create '{}'",
        CONFIG_ENV_VAR,
        file.display()
    )))
}

impl Workspace {
    /// Check the mounted directories before any write.
    ///
    /// The list and book directories must already exist; the data directory
    /// is created on demand.
    pub fn prepare(&self) -> Result<()> {
        for dir in [&self.listas_dir, &self.books_dir] {
            let meta = std::fs::metadata(dir).map_err(|e| io_err(dir, e))?;
            if !meta.is_dir() {
                return Err(io_err(
                    dir,
                    std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
                ));
            }
        }

        std::fs::create_dir_all(&self.data_dir).map_err(|e| io_err(&self.data_dir, e))?;
        Ok(())
    }
}
