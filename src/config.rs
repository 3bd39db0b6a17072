//! Configuration for edge table field synthesis.
//!
//! Settings live under the `[edge_table]` section of `config/config.toml`
//! and can be overridden with `EDGETABLE__EDGE_TABLE__*` environment variables.
//!
//! ```toml
//! [edge_table]
//! enabled = true
//! default_behavior = "connection"
//! list_suffix = "List"
//! ```

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const CONFIG_FILE: &str = "config/config.toml";
const ENV_PREFIX: &str = "EDGETABLE";
const SECTION: &str = "edge_table";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeTableConfig {
    /// Turn the hook off entirely
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Least specific behavior source, prepended to every relationship's behaviors
    ///
    /// Empty by default, so a relationship with no declarations gets no edge
    /// table fields. Set it to `"connection"` to expose the connection field
    /// wherever nothing says otherwise. A `"connection -list"` default is not
    /// applied implicitly: it would make a lone `"list"` declaration enable
    /// both fields.
    #[serde(default)]
    pub default_behavior: String,
    /// Appended to the connection field name to name the list field
    ///
    /// Must not be blank, or the list field would take the connection field's name.
    #[serde(default = "default_list_suffix")]
    pub list_suffix: String,
}

fn default_enabled() -> bool {
    true
}

fn default_list_suffix() -> String {
    "List".to_string()
}

impl Default for EdgeTableConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            default_behavior: String::new(),
            list_suffix: default_list_suffix(),
        }
    }
}

impl EdgeTableConfig {
    /// Load from `config/config.toml` (optional), then environment variables
    ///
    /// A missing `[edge_table]` section yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(env_source());

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if Path::new(CONFIG_FILE).exists() {
                    log::warn!("failed to load {}, falling back to env: {}", CONFIG_FILE, err);
                }
                Config::builder().add_source(env_source()).build().map_err(|env_err| {
                    ConfigError::Message(format!(
                        "Failed to load configuration from file and env: {}, then env-only error: {}",
                        err, env_err
                    ))
                })?
            }
        };

        Self::from_settings(&settings)
    }

    /// Load from a single TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| ConfigError::Message(format!("non UTF-8 config path: {}", path.display())))?;
        let settings = Config::builder()
            .add_source(File::new(path_str, FileFormat::Toml))
            .build()?;
        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        match settings.get::<EdgeTableConfig>(SECTION) {
            Ok(cfg) => cfg.validate(),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Edge table configuration could not be loaded: {}",
                e
            ))),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.list_suffix.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "Edge table configuration is invalid: {}.list_suffix must not be blank",
                SECTION
            )));
        }
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}
