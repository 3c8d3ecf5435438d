//! User configuration for markdown-rawguard, stored as TOML at
//! `~/.config/markdown-rawguard/config.toml`.

use anyhow::Context;
use glob::Pattern;
use markdown_rawguard_engine::TemplateSyntax;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_DIR: &str = "~/.config/markdown-rawguard";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Settings for one site. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions picked up when scanning a directory.
    pub extensions: Vec<String>,
    /// Glob patterns, relative to the scanned directory, of files to skip.
    pub exclude: Vec<String>,
    /// Where processed files are written when no output flag is given.
    /// `~` and `$VARS` are expanded on read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub template: TemplateSyntax,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: ["md", "markdown"].map(String::from).to_vec(),
            exclude: Vec::new(),
            output_dir: None,
            template: TemplateSyntax::default(),
        }
    }
}

impl Config {
    /// `~/.config/markdown-rawguard/config.toml` with the home directory
    /// filled in.
    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(DEFAULT_DIR).as_ref()).join(FILE_NAME)
    }

    /// Reads the config at `path`. A missing file is not an error.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    /// Reads the config from [`Config::default_path`].
    pub fn read_default() -> Result<Option<Self>, ConfigError> {
        Self::read(&Self::default_path())
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(text)?;
        config.output_dir = config.output_dir.map(expand);
        Ok(config)
    }

    /// Writes the config as TOML, creating parent directories.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create {}", dir.display()))?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("Cannot write {}", path.display()))
    }

    /// Compiles the `exclude` globs.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}

/// Expands `~` and environment variables, leaving the path as written if a
/// variable is undefined.
fn expand(path: PathBuf) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path,
    }
}
