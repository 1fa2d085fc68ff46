use std::io;
use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/frameless/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("frameless"))
}

/// Returns the config file path: `~/.config/frameless/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Why the config file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not determine config path")]
    NoPath,
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Tries to load and parse `config.toml`.
///
/// After parsing, values are clamped via [`Config::validate`].
pub fn try_load() -> Result<Config, LoadError> {
    let path = config_path().ok_or(LoadError::NoPath)?;
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;
    parse(&content).map_err(|source| LoadError::Parse { path, source })
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; other errors are reported
/// on stderr.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(LoadError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Config::default()
        }
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

pub(super) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}
