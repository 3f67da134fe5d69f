//! RGBA8 colors shared by the simulation and the renderer boundary

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::random_range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const RED: Color = Color::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `factor` (clamped to [0, 1])
    pub fn fade(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * factor) as u8,
            ..self
        }
    }

    /// Same color with an absolute alpha in [0, 255]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    /// Random saturated color, bright enough to read on a black background
    pub fn random_bright<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hue = random_range(rng, 0.0, 360.0);
        Self::from_hsv(hue, 0.7, 1.0)
    }

    /// HSV to RGB; hue in degrees, saturation and value in [0, 1]
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = value * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = value - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
