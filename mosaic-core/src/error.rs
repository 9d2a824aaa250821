use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::Config`].
///
/// Subdivision and animation themselves never fail; configuration is the
/// only fallible input to the core.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A length, speed or weight is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// A length or speed that must be strictly positive is not.
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("fragment range is empty: min_fragments = {min}, max_fragments = {max}")]
    FragmentRange { min: usize, max: usize },
}
