use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning constants for subdivision and animation.
///
/// Every field has a default (see [`Config::default`]), and YAML files only
/// need to mention the fields they override.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coarse-phase fragments only split while their longest edge exceeds this.
    pub min_side_length: f32,
    /// Number of breadth-first refine passes.
    pub max_depth: u32,
    /// Inclusive range for the random coarse-phase fragment target.
    pub min_fragments: usize,
    pub max_fragments: usize,

    /// Expand/return: per-frame speed of the expanding motion.
    pub animation_speed: f32,
    /// Expand/return: per-frame step length while returning to rest.
    pub return_speed: f32,
    /// Expand/return: number of expanding frames per cycle.
    pub animation_duration: u32,

    /// Force field: displacement amplitude.
    pub max_distance: f32,
    /// Force field: time accumulator increment per frame.
    pub time_step: f32,
    /// Force field: centroids closer than this repel each other.
    pub neighbor_threshold: f32,
    pub weight_main: f32,
    pub weight_neighbor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_side_length: 50.0,
            max_depth: 5,
            min_fragments: 2,
            max_fragments: 25,
            animation_speed: 1.0,
            return_speed: 0.02,
            animation_duration: 5,
            max_distance: 50.0,
            time_step: 0.02,
            neighbor_threshold: 10.0,
            weight_main: 1.0,
            weight_neighbor: 0.5,
        }
    }
}

impl Config {
    /// Parses a YAML document and validates the result.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and validates a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_yaml_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that lengths and speeds are usable.
    ///
    /// The weights may be zero or negative, and `neighbor_threshold` may be
    /// zero to switch the neighbor term off. `min_side_length` must be
    /// strictly positive: at zero every coarse pass splits every fragment and
    /// the fragment count grows geometrically with the target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("min_side_length", self.min_side_length),
            ("animation_speed", self.animation_speed),
            ("return_speed", self.return_speed),
            ("max_distance", self.max_distance),
            ("time_step", self.time_step),
            ("neighbor_threshold", self.neighbor_threshold),
            ("weight_main", self.weight_main),
            ("weight_neighbor", self.weight_neighbor),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("min_side_length", self.min_side_length),
            ("animation_speed", self.animation_speed),
            ("return_speed", self.return_speed),
            ("time_step", self.time_step),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("max_distance", self.max_distance),
            ("neighbor_threshold", self.neighbor_threshold),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.min_fragments < 1 || self.min_fragments > self.max_fragments {
            return Err(ConfigError::FragmentRange {
                min: self.min_fragments,
                max: self.max_fragments,
            });
        }

        Ok(())
    }
}
