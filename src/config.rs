//! Configuration file support.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [naming]
//! namespace = "App"
//!
//! [naming.aliases]
//! Carbon = "Carbon\\CarbonImmutable"
//!
//! [scan]
//! extensions = ["php", "phpt"]
//! hidden = false
//! ```
//!
//! The file is looked up, in order, at an explicit path, at
//! [`PROJECT_CONFIG_FILE`] in the working directory, and at
//! `<user config dir>/phpdoc-typemask/config.toml`.  A missing file is not
//! an error; defaults apply.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::names::NamingContext;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "phpdoc-typemask.toml";

const APP_DIR: &str = "phpdoc-typemask";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub naming: NamingConfig,
    pub scan: ScanConfig,
}

/// Default namespace and imports for annotations resolved from the command
/// line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub namespace: Option<String>,
    /// Alias → fully-qualified target.
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions (without the dot) treated as PHP.
    pub extensions: Vec<String>,
    /// Whether to descend into hidden files and directories.
    pub hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["php".to_string()],
            hidden: false,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.  `path` is only used in errors.
    pub fn from_toml(text: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load the configuration that applies to a run.
    ///
    /// An explicit path must exist.  The implicit locations are optional.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let project = working_dir.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            tracing::debug!(path = %project.display(), "using project config");
            return Self::from_file(&project);
        }

        if let Some(user) = user_config_path()
            && user.is_file()
        {
            tracing::debug!(path = %user.display(), "using user config");
            return Self::from_file(&user);
        }

        Ok(Config::default())
    }

    /// The naming context described by the `[naming]` table.
    pub fn naming_context(&self) -> NamingContext {
        let mut naming = NamingContext::with_namespace(self.naming.namespace.as_deref());
        for (alias, target) in &self.naming.aliases {
            naming.add_alias(alias, target);
        }
        naming
    }

    /// Whether `path` has one of the configured PHP extensions.
    pub fn is_php_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.scan
                    .extensions
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(ext))
            })
    }
}

/// `<user config dir>/phpdoc-typemask/config.toml`, when a home directory
/// can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join(APP_DIR).join("config.toml"))
}
