//! Core 2-D polygon mosaic library: recursive subdivision of a convex seed
//! polygon and per-fragment vertex animation.
//!
//! Main components:
//! - [`geometry`] — centroid, edge length, interpolation and seed shapes.
//! - [`splitter`] — bisection of one polygon along a line through its centroid.
//! - [`subdivision`] — coarse and refine phases that fragment a seed polygon.
//! - [`animation`] — expand/return and force-field vertex animation.
//! - [`mosaic`] — fragments, colors and animation state bundled for a host.
//! - [`render`] — the drawing seam and fragment colors.
//! - [`config`] — tuning constants, loadable from YAML.
//! - [`error`] — configuration errors.
//! - [`types`] — shared type aliases.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mosaic;
pub mod render;
pub mod splitter;
pub mod subdivision;
pub mod types;

pub use animation::{AnimationMode, AnimationState, MovingFragment, Phase, advance, init_animation};
pub use config::Config;
pub use error::ConfigError;
pub use mosaic::Mosaic;
pub use render::{FragmentColor, RenderSink};
pub use subdivision::subdivide;
pub use types::Polygon;
