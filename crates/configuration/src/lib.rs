use std::path::Path;

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, Display, Logging};
pub use telemetry::init_tracing;

/// Looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Prefix of environment overrides, e.g. `ABACUS__DISPLAY__HISTORY_LIMIT=50`.
pub const ENV_PREFIX: &str = "ABACUS";

/// Loads the application configuration.
///
/// Sources, later ones winning: built-in defaults, the TOML file (`path`, or an
/// optional `config.toml` in the working directory), then `ABACUS__*` environment
/// variables. The merged result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
