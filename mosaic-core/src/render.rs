use glam::Vec2;
use rand::Rng;

/// Fill color of one fragment, in HSL.
///
/// `hue` is in degrees `[0, 360)`; `saturation` and `lightness` are in
/// `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl FragmentColor {
    /// ### Parameters
    /// - `hue` - Degrees; wrapped into `[0, 360)` on conversion.
    /// - `saturation`, `lightness` - Clamped to `[0, 1]` on conversion.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// A random hue at 70% saturation and 70% lightness (soft pastels).
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.random::<f32>() * 360.0, 0.7, 0.7)
    }

    /// Converts to 8-bit sRGB channels.
    pub fn to_rgb(&self) -> [u8; 3] {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let l = self.lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let to_u8 = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_u8(r), to_u8(g), to_u8(b)]
    }
}

/// A drawing surface that accepts filled polygons.
///
/// Implementations decide how to stroke and fill; the core only guarantees
/// that every polygon handed over has at least three vertices.
pub trait RenderSink {
    fn draw_polygon(&mut self, polygon: &[Vec2], color: FragmentColor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn primary_hues() {
        assert_eq!(FragmentColor::new(0.0, 1.0, 0.5).to_rgb(), [255, 0, 0]);
        assert_eq!(FragmentColor::new(120.0, 1.0, 0.5).to_rgb(), [0, 255, 0]);
        assert_eq!(FragmentColor::new(240.0, 1.0, 0.5).to_rgb(), [0, 0, 255]);
        assert_eq!(FragmentColor::new(360.0, 1.0, 0.5).to_rgb(), [255, 0, 0]);
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(FragmentColor::new(200.0, 0.0, 0.6).to_rgb(), [153, 153, 153]);
        assert_eq!(FragmentColor::new(10.0, 0.5, 0.0).to_rgb(), [0, 0, 0]);
        assert_eq!(FragmentColor::new(10.0, 0.5, 1.0).to_rgb(), [255, 255, 255]);
    }

    #[test]
    fn pastel_red() {
        assert_eq!(FragmentColor::new(0.0, 0.7, 0.7).to_rgb(), [232, 125, 125]);
    }

    #[test]
    fn random_colors_are_pastel() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let c = FragmentColor::random(&mut rng);
            assert!((0.0..360.0).contains(&c.hue));
            assert_eq!(c.saturation, 0.7);
            assert_eq!(c.lightness, 0.7);
        }
    }
}
