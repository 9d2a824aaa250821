//! Per-fragment vertex animation.
//!
//! Two strategies share the same fragment representation:
//!
//! - [`AnimationMode::ExpandReturn`] — a two-state cycle. While
//!   [`Phase::Expanding`], every vertex drifts by its fragment's velocity for
//!   [`Config::animation_duration`] frames; while [`Phase::Returning`], every
//!   vertex walks back to its rest position at [`Config::return_speed`] per
//!   frame and snaps onto it when within one step.
//! - [`AnimationMode::ForceField`] — a continuous oscillation. Each vertex
//!   sits at `rest + velocity * m * max_distance`, with
//!   `m = 0.5 - 0.5 * cos(time)` driven by a time accumulator, so every
//!   vertex sits on rest at `time = 0`.
//!
//! Velocities are fixed once by [`init_animation`]; [`advance`] is called
//! once per display tick.

use crate::{config::Config, geometry::centroid, types::Polygon};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Which displacement strategy drives the fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationMode {
    #[default]
    ExpandReturn,
    ForceField,
}

/// Phase of the expand/return cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Expanding,
    Returning,
}

/// Mode-specific animation state, advanced once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    ExpandReturn {
        phase: Phase,
        /// Frames spent in the current expanding phase.
        frame: u32,
    },
    ForceField {
        time: f32,
    },
}

impl AnimationState {
    /// Initial state for `mode`: expanding at frame 0, or time 0.
    pub fn new(mode: AnimationMode) -> Self {
        match mode {
            AnimationMode::ExpandReturn => Self::ExpandReturn {
                phase: Phase::Expanding,
                frame: 0,
            },
            AnimationMode::ForceField => Self::ForceField { time: 0.0 },
        }
    }

    /// The mode this state belongs to.
    pub fn mode(&self) -> AnimationMode {
        match self {
            Self::ExpandReturn { .. } => AnimationMode::ExpandReturn,
            Self::ForceField { .. } => AnimationMode::ForceField,
        }
    }
}

/// A fragment that moves around its rest shape.
///
/// `current` and `rest` always have the same length and are index-aligned:
/// `current()[i]` is the animated position of `rest()[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingFragment {
    current: Polygon,
    rest: Polygon,
    pub velocity: Vec2,
}

impl MovingFragment {
    /// Creates a fragment at rest on `polygon`.
    pub fn new(polygon: Polygon, velocity: Vec2) -> Self {
        Self {
            current: polygon.clone(),
            rest: polygon,
            velocity,
        }
    }

    /// Animated vertex positions, index-aligned with [`Self::rest`].
    pub fn current(&self) -> &[Vec2] {
        &self.current
    }

    /// The fragment's shape as produced by subdivision.
    pub fn rest(&self) -> &[Vec2] {
        &self.rest
    }

    /// Returns `true` if every vertex sits exactly on its rest position.
    pub fn is_at_rest(&self) -> bool {
        self.current == self.rest
    }

    /// Moves every vertex back onto its rest position.
    pub fn snap_to_rest(&mut self) {
        self.current.copy_from_slice(&self.rest);
    }
}

/// Derives per-fragment velocities and wraps each fragment at rest.
///
/// - `ExpandReturn`: a random direction in `[0, 2π)` scaled by
///   [`Config::animation_speed`].
/// - `ForceField`: see [`force_field_velocities`]; `rng` is not consumed.
///
/// ### Parameters
/// - `seed` - The polygon the fragments were cut from; its centroid is the
///   origin of the force field's main pull.
/// - `fragments` - Fragments produced by [`crate::subdivision::subdivide`].
/// - `mode` - Animation strategy.
/// - `cfg` - Speeds and force-field weights.
/// - `rng` - Random source for expand/return directions.
pub fn init_animation(
    seed: &[Vec2],
    fragments: Vec<Polygon>,
    mode: AnimationMode,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Vec<MovingFragment> {
    let velocities: Vec<Vec2> = match mode {
        AnimationMode::ExpandReturn => fragments
            .iter()
            .map(|_| Vec2::from_angle(rng.random::<f32>() * TAU) * cfg.animation_speed)
            .collect(),
        AnimationMode::ForceField => {
            let centroids: Vec<Vec2> = fragments.iter().map(|p| centroid(p)).collect();
            force_field_velocities(centroid(seed), &centroids, cfg)
        }
    };

    fragments
        .into_iter()
        .zip(velocities)
        .map(|(poly, velocity)| MovingFragment::new(poly, velocity))
        .collect()
}

/// Computes force-field velocities from fragment centroids.
///
/// For fragment `i` with centroid `c_i`:
///
/// - main pull: the unit vector from `origin` to `c_i` (zero if they coincide);
/// - neighbor push: the sum over every other centroid `c_j` with
///   `0 < |c_i - c_j| < neighbor_threshold` of `(c_i - c_j) / |c_i - c_j|²`,
///   i.e. a unit vector away from `c_j` weighted by inverse distance.
///
/// The result is `weight_main * main + weight_neighbor * neighbor`.
pub fn force_field_velocities(origin: Vec2, centroids: &[Vec2], cfg: &Config) -> Vec<Vec2> {
    centroids
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let main = (c - origin).normalize_or_zero();

            let mut neighbor = Vec2::ZERO;
            for (j, &other) in centroids.iter().enumerate() {
                if i == j {
                    continue;
                }
                let away = c - other;
                let d2 = away.length_squared();
                if d2 > 0.0 && d2 < cfg.neighbor_threshold * cfg.neighbor_threshold {
                    neighbor += away / d2;
                }
            }

            main * cfg.weight_main + neighbor * cfg.weight_neighbor
        })
        .collect()
}

/// Displacement magnitude of the force field at `time`, in `[0, 1]`.
///
/// Zero at `time = 0` and at every multiple of `2π`, one at odd multiples
/// of `π`.
#[inline]
pub fn displacement_magnitude(time: f32) -> f32 {
    0.5 - 0.5 * time.cos()
}

/// Offset from rest of a force-field vertex with `velocity` at `time`.
#[inline]
pub fn force_field_offset(velocity: Vec2, time: f32, cfg: &Config) -> Vec2 {
    velocity * (displacement_magnitude(time) * cfg.max_distance)
}

/// Advances all fragments by one frame and updates `state`.
pub fn advance(fragments: &mut [MovingFragment], state: &mut AnimationState, cfg: &Config) {
    match state {
        AnimationState::ExpandReturn { phase, frame } => match *phase {
            Phase::Expanding => {
                expand_step(fragments);
                *frame += 1;
                if *frame >= cfg.animation_duration {
                    log::trace!("expanded for {frame} frames, returning");
                    *phase = Phase::Returning;
                }
            }
            Phase::Returning => {
                if return_step(fragments, cfg.return_speed) {
                    log::trace!("all fragments at rest, expanding");
                    *frame = 0;
                    *phase = Phase::Expanding;
                }
            }
        },
        AnimationState::ForceField { time } => {
            *time += cfg.time_step;
            force_field_step(fragments, *time, cfg);
        }
    }
}

fn expand_step(fragments: &mut [MovingFragment]) {
    for f in fragments {
        let v = f.velocity;
        for p in &mut f.current {
            *p += v;
        }
    }
}

/// Moves every vertex toward rest by at most `speed`.
///
/// ### Returns
/// `true` once every vertex of every fragment sits exactly on rest.
fn return_step(fragments: &mut [MovingFragment], speed: f32) -> bool {
    let mut all_returned = true;

    for f in fragments {
        for (p, &target) in f.current.iter_mut().zip(&f.rest) {
            let delta = target - *p;
            let dist = delta.length();
            if dist > speed {
                *p += delta / dist * speed;
                all_returned = false;
            } else {
                *p = target;
            }
        }
    }

    all_returned
}

fn force_field_step(fragments: &mut [MovingFragment], time: f32, cfg: &Config) {
    for f in fragments {
        let offset = force_field_offset(f.velocity, time, cfg);
        for (p, &r) in f.current.iter_mut().zip(&f.rest) {
            *p = r + offset;
        }
    }
}
