use crate::error::{Context, format_context};
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings file stem looked up when no explicit path is given.
pub const DEFAULT_SETTINGS: &str = "loader";

/// Prefix for environment overrides (`DFH__DATABASE__ITEMS` maps to `database.items`).
pub const ENV_PREFIX: &str = "DFH";

/// Custom error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Context },
}

pub trait ConfigErrorExt<T> {
    /// Attaches context to the error, if any.
    ///
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// Layered settings loader: base file, then environment overrides.
///
/// An explicit path must exist. Without one, the [`DEFAULT_SETTINGS`] file is optional
/// and missing keys fall back to the target type's `#[serde(default)]`.
#[derive(Debug, Default)]
#[must_use = "loaders do nothing unless you call .load()"]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit (required) settings file.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment with a fixed variable map.
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
    /// malformed, or the merged values do not match `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let required = self.path.is_some();
        let effective_path = self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));

        let builder = Config::builder()
            .add_source(File::from(effective_path.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .convert_case(config::Case::Snake)
                    .source(self.env),
            );

        info!("Loading settings from {}", effective_path.display());

        let config = builder
            .build()
            .context("Failed to build settings")?
            .try_deserialize::<T>()
            .context("Failed to deserialize settings")?;

        Ok(config)
    }
}

/// Loads settings from a file (default `loader`) overlaid with `DFH__*` environment variables.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified settings file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use dfh_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    match path {
        Some(path) => ConfigLoader::new().path(path).load(),
        None => ConfigLoader::new().load(),
    }
}
