//! Layered configuration for the `precis` command.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults,
//! 2. `config.toml` in the platform configuration directory (if present),
//! 3. an explicitly given file (`.toml`, `.yaml`/`.yml` or `.json`),
//! 4. `PRECIS_*` environment variables (`PRECIS_LENGTH=40`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use precis_truncate::{DEFAULT_LENGTH, Truncator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

pub const ENV_PREFIX: &str = "PRECIS_";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visible-character budget of a snippet.
    pub length: usize,
    /// Marker appended where content was cut.
    pub ellipsis: String,
    /// Upper bound on input bytes handed to the parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_limit: Option<usize>,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            ellipsis: Truncator::default().ellipsis().to_string(),
            input_limit: None,
        }
    }
}
impl Config {
    /// Loads the configuration from every source, with `explicit` layered on
    /// top of the user's configuration file.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::extract(Self::figment(default_path().as_deref(), explicit)?)
    }

    /// Builds the full provider stack without reading anything yet.
    pub fn figment(user: Option<&Path>, explicit: Option<&Path>) -> Result<Figment> {
        Ok(Self::files(user, explicit)?.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Defaults plus file sources, leaving out the environment.
    pub fn files(user: Option<&Path>, explicit: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(user) = user {
            tracing::trace!(path = %user.display(), "layering user configuration");
            figment = figment.merge(Toml::file(user));
        }
        if let Some(explicit) = explicit {
            if !explicit.is_file() {
                exn::bail!(ErrorKind::NotFound(explicit.to_path_buf()));
            }
            figment = match explicit.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
                Some("toml") => figment.merge(Toml::file_exact(explicit)),
                Some("yaml" | "yml") => figment.merge(Yaml::file_exact(explicit)),
                Some("json") => figment.merge(Json::file_exact(explicit)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(explicit.to_path_buf())),
            };
        }
        Ok(figment)
    }

    pub fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().or_raise(|| ErrorKind::Load)?;
        tracing::debug!(length = config.length, input_limit = ?config.input_limit, "configuration loaded");
        Ok(config)
    }

    /// Builds the [`Truncator`] described by this configuration.
    pub fn truncator(&self) -> Result<Truncator> {
        Ok(Truncator::default()
            .with_ellipsis(self.ellipsis.clone())
            .or_raise(|| ErrorKind::Invalid("ellipsis"))?
            .with_input_limit(self.input_limit))
    }
}

/// Location of the user's configuration file, if the platform has one.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "precis").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
