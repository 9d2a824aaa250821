//! A fragmented, animated polygon: the handle a host ticks and draws.

use crate::{
    animation::{self, AnimationMode, AnimationState, MovingFragment},
    config::Config,
    render::{FragmentColor, RenderSink},
    subdivision,
    types::Polygon,
};
use glam::Vec2;
use rand::Rng;

/// Owns the fragments of one seed polygon together with their colors and
/// the animation state.
///
/// The fragment set is fixed at creation; only vertex positions change.
/// `fragments[i]` is drawn with `colors[i]`.
#[derive(Debug, Clone)]
pub struct Mosaic {
    seed: Polygon,
    fragments: Vec<MovingFragment>,
    colors: Vec<FragmentColor>,
    state: AnimationState,
}

impl Mosaic {
    /// Subdivides `seed`, derives velocities for `mode` and picks a random
    /// color per fragment.
    pub fn generate(seed: Polygon, mode: AnimationMode, cfg: &Config, rng: &mut impl Rng) -> Self {
        let fragments = subdivision::subdivide(&seed, cfg, rng);
        let mosaic = Self::from_fragments(seed, fragments, mode, cfg, rng);
        log::info!(
            "generated mosaic: {} fragments, mode {:?}",
            mosaic.len(),
            mode
        );
        mosaic
    }

    /// Builds a mosaic from an existing fragment list, skipping subdivision.
    pub fn from_fragments(
        seed: Polygon,
        fragments: Vec<Polygon>,
        mode: AnimationMode,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Self {
        let colors = fragments.iter().map(|_| FragmentColor::random(rng)).collect();
        let fragments = animation::init_animation(&seed, fragments, mode, cfg, rng);

        Self {
            seed,
            fragments,
            colors,
            state: AnimationState::new(mode),
        }
    }

    /// Switches to another animation mode.
    ///
    /// Every fragment snaps back to rest, velocities are derived afresh for
    /// `mode`, and the animation state restarts. Fragment shapes and colors
    /// are kept.
    pub fn set_mode(&mut self, mode: AnimationMode, cfg: &Config, rng: &mut impl Rng) {
        let rest: Vec<Polygon> = self.fragments.iter().map(|f| f.rest().to_vec()).collect();
        self.fragments = animation::init_animation(&self.seed, rest, mode, cfg, rng);
        self.state = AnimationState::new(mode);
    }

    /// Puts every fragment back at rest and restarts the current mode.
    pub fn restart(&mut self) {
        for f in &mut self.fragments {
            f.snap_to_rest();
        }
        self.state = AnimationState::new(self.mode());
    }

    /// Advances the animation by one frame.
    pub fn advance(&mut self, cfg: &Config) {
        animation::advance(&mut self.fragments, &mut self.state, cfg);
    }

    /// Hands every drawable fragment to `sink`, in fragment order.
    pub fn render(&self, sink: &mut impl RenderSink) {
        for (f, &color) in self.fragments.iter().zip(&self.colors) {
            if f.current().len() >= 3 {
                sink.draw_polygon(f.current(), color);
            }
        }
    }

    /// The polygon the fragments were cut from.
    pub fn seed(&self) -> &[Vec2] {
        &self.seed
    }

    /// Fragments in drawing order.
    pub fn fragments(&self) -> &[MovingFragment] {
        &self.fragments
    }

    /// One color per fragment, index-aligned with [`Self::fragments`].
    pub fn colors(&self) -> &[FragmentColor] {
        &self.colors
    }

    /// Current animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// The active animation mode.
    pub fn mode(&self) -> AnimationMode {
        self.state.mode()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{animation::Phase, geometry::square};
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Default)]
    struct RecordingSink {
        drawn: Vec<(Polygon, FragmentColor)>,
    }

    impl RenderSink for RecordingSink {
        fn draw_polygon(&mut self, polygon: &[Vec2], color: FragmentColor) {
            self.drawn.push((polygon.to_vec(), color));
        }
    }

    fn small_cfg() -> Config {
        Config {
            max_depth: 2,
            max_fragments: 4,
            ..Config::default()
        }
    }

    #[test]
    fn generate_produces_one_color_per_fragment() {
        let mut rng = StdRng::seed_from_u64(12);
        let mosaic = Mosaic::generate(
            square(Vec2::ZERO, 500.0),
            AnimationMode::ExpandReturn,
            &small_cfg(),
            &mut rng,
        );

        assert!(!mosaic.is_empty());
        assert_eq!(mosaic.colors().len(), mosaic.len());
        assert!(mosaic.fragments().iter().all(MovingFragment::is_at_rest));
        assert_eq!(mosaic.mode(), AnimationMode::ExpandReturn);
    }

    #[test]
    fn render_skips_degenerate_fragments() {
        let mut rng = StdRng::seed_from_u64(1);
        let fragments = vec![
            square(Vec2::ZERO, 10.0),
            vec![Vec2::ZERO, Vec2::ONE],
            square(Vec2::new(10.0, 0.0), 10.0),
        ];
        let mosaic = Mosaic::from_fragments(
            square(Vec2::ZERO, 20.0),
            fragments,
            AnimationMode::ExpandReturn,
            &Config::default(),
            &mut rng,
        );

        let mut sink = RecordingSink::default();
        mosaic.render(&mut sink);

        assert_eq!(sink.drawn.len(), 2);
        assert_eq!(sink.drawn[0].1, mosaic.colors()[0]);
        assert_eq!(sink.drawn[1].1, mosaic.colors()[2]);
        assert_eq!(sink.drawn[1].0, square(Vec2::new(10.0, 0.0), 10.0));
    }

    #[test]
    fn advance_moves_fragments_and_restart_resets() {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = small_cfg();
        let mut mosaic = Mosaic::generate(
            square(Vec2::ZERO, 500.0),
            AnimationMode::ExpandReturn,
            &cfg,
            &mut rng,
        );

        mosaic.advance(&cfg);
        assert!(mosaic.fragments().iter().all(|f| !f.is_at_rest()));

        mosaic.restart();
        assert!(mosaic.fragments().iter().all(MovingFragment::is_at_rest));
        assert_eq!(
            *mosaic.state(),
            AnimationState::ExpandReturn {
                phase: Phase::Expanding,
                frame: 0
            }
        );
    }

    #[test]
    fn set_mode_keeps_shapes_and_colors() {
        let mut rng = StdRng::seed_from_u64(8);
        let cfg = small_cfg();
        let mut mosaic = Mosaic::generate(
            square(Vec2::ZERO, 500.0),
            AnimationMode::ExpandReturn,
            &cfg,
            &mut rng,
        );
        for _ in 0..3 {
            mosaic.advance(&cfg);
        }

        let rest_before: Vec<Polygon> =
            mosaic.fragments().iter().map(|f| f.rest().to_vec()).collect();
        let colors_before = mosaic.colors().to_vec();

        mosaic.set_mode(AnimationMode::ForceField, &cfg, &mut rng);

        assert_eq!(mosaic.mode(), AnimationMode::ForceField);
        assert_eq!(*mosaic.state(), AnimationState::ForceField { time: 0.0 });
        assert_eq!(mosaic.colors(), colors_before.as_slice());
        for (f, rest) in mosaic.fragments().iter().zip(&rest_before) {
            assert_eq!(f.rest(), rest.as_slice());
            assert!(f.is_at_rest());
        }
    }
}
