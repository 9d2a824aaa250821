//! Two-phase subdivision of a seed polygon into fragments.
//!
//! The pipeline is:
//! 1. [`first_split`] — a coarse phase that runs a random number of passes,
//!    bisecting only fragments whose longest edge is still above
//!    [`Config::min_side_length`].
//! 2. [`refine`] — up to [`Config::max_depth`] breadth-first passes that
//!    bisect every fragment regardless of size.
//!
//! [`subdivide`] chains both. A fragment whose bisection is rejected is
//! carried over unchanged; slivers that never split act as a floor and stop
//! the mosaic from fragmenting forever.

use crate::{config::Config, geometry::longest_edge_length, splitter, types::Polygon};
use glam::Vec2;
use rand::Rng;

/// Runs one breadth-first pass over `fragments`.
///
/// Every fragment accepted by `eligible` is bisected; on success it is
/// replaced by its two halves, otherwise (and when not eligible) it is kept.
///
/// ### Returns
/// The new fragment list and the number of successful splits.
fn split_pass(
    fragments: Vec<Polygon>,
    rng: &mut impl Rng,
    eligible: impl Fn(&Polygon) -> bool,
) -> (Vec<Polygon>, usize) {
    let mut out = Vec::with_capacity(fragments.len() * 2);
    let mut splits = 0;

    for poly in fragments {
        if poly.len() >= 3
            && eligible(&poly)
            && let Some((a, b)) = splitter::split(&poly, rng)
        {
            out.push(a);
            out.push(b);
            splits += 1;
            continue;
        }
        out.push(poly);
    }

    (out, splits)
}

/// Coarse phase: splits `seed` into roughly a random number of fragments.
///
/// A target `n` is drawn uniformly from
/// `cfg.min_fragments..=cfg.max_fragments`, and `n - 1` passes are run.
/// In each pass, every fragment with at least three vertices and a longest
/// edge above `cfg.min_side_length` is bisected.
///
/// Repeated rejections may leave fewer fragments than the target; that is a
/// valid outcome and no retry is attempted. An inverted range is treated as
/// `min_fragments..=min_fragments`.
///
/// ### Parameters
/// - `seed` - Convex polygon to fragment.
/// - `cfg` - Supplies the fragment range and the minimum side length.
/// - `rng` - Random source for the target and every cutting angle.
pub fn first_split(seed: &[Vec2], cfg: &Config, rng: &mut impl Rng) -> Vec<Polygon> {
    let max = cfg.max_fragments.max(cfg.min_fragments);
    let target = rng.random_range(cfg.min_fragments..=max);
    let mut fragments = vec![seed.to_vec()];

    for pass in 0..target.saturating_sub(1) {
        let (next, splits) = split_pass(fragments, rng, |poly| {
            longest_edge_length(poly) > cfg.min_side_length
        });
        fragments = next;
        log::trace!("coarse pass {pass}: {splits} splits, {} fragments", fragments.len());
    }

    log::debug!(
        "coarse phase: target {target}, produced {} fragments",
        fragments.len()
    );
    fragments
}

/// Refine phase: bisects every fragment once per pass, breadth-first,
/// starting at `depth` and stopping when `depth` reaches `cfg.max_depth`.
///
/// `depth` counts whole passes over the fragment set, not the nesting of
/// any single fragment.
pub fn refine(
    mut fragments: Vec<Polygon>,
    mut depth: u32,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Vec<Polygon> {
    while depth < cfg.max_depth {
        let (next, splits) = split_pass(fragments, rng, |_| true);
        fragments = next;
        depth += 1;
        log::trace!("refine depth {depth}: {splits} splits, {} fragments", fragments.len());
    }

    log::debug!("refine phase: {} fragments", fragments.len());
    fragments
}

/// Fragments `seed` with [`first_split`] followed by [`refine`] from depth 0.
pub fn subdivide(seed: &[Vec2], cfg: &Config, rng: &mut impl Rng) -> Vec<Polygon> {
    let coarse = first_split(seed, cfg, rng);
    refine(coarse, 0, cfg, rng)
}
