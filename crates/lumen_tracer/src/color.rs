//! RGB color with an explicit "nothing was hit" state.

use lumen_math::{Interval, Vec3};
use std::ops::{Add, Mul};

/// An RGB color with channels in [0, 1].
///
/// A color is either *defined* (some surface contributed to it, even if the
/// result is black) or *undefined* (no surface was hit, the pixel keeps its
/// background). `Color::default()` is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    rgb: Vec3,
    defined: bool,
}

impl Color {
    /// The "no surface hit" sentinel.
    pub const UNDEFINED: Color = Color {
        rgb: Vec3::ZERO,
        defined: false,
    };

    /// A surface was hit but contributes no light.
    pub const BLACK: Color = Color {
        rgb: Vec3::ZERO,
        defined: true,
    };

    /// Create a defined color, clamping each channel to [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::from_vec3(Vec3::new(r, g, b))
    }

    /// Create a defined color from a vector of channels, clamping to [0, 1].
    pub fn from_vec3(rgb: Vec3) -> Self {
        let unit = Interval::UNIT;
        Self {
            rgb: Vec3::new(unit.clamp(rgb.x), unit.clamp(rgb.y), unit.clamp(rgb.z)),
            defined: true,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.defined
    }

    pub fn red(&self) -> f32 {
        self.rgb.x
    }

    pub fn green(&self) -> f32 {
        self.rgb.y
    }

    pub fn blue(&self) -> f32 {
        self.rgb.z
    }

    /// Channels as a vector, for arithmetic with geometry terms.
    pub fn to_vec3(&self) -> Vec3 {
        self.rgb
    }

    /// Convert to bytes in blue, green, red order.
    ///
    /// Each channel is scaled by 255 and truncated; no gamma or tone mapping.
    pub fn to_bgr(&self) -> [u8; 3] {
        [
            channel_to_byte(self.rgb.z),
            channel_to_byte(self.rgb.y),
            channel_to_byte(self.rgb.x),
        ]
    }
}

#[inline]
fn channel_to_byte(channel: f32) -> u8 {
    (channel * 255.0) as u8
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::from_vec3(self.rgb + rhs.rgb)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, scale: f32) -> Color {
        Color::from_vec3(self.rgb * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undefined() {
        let color = Color::default();
        assert!(!color.is_defined());
        assert_eq!(color, Color::UNDEFINED);
    }

    #[test]
    fn test_black_is_defined() {
        assert!(Color::BLACK.is_defined());
        assert_eq!(Color::BLACK.to_bgr(), [0, 0, 0]);
        assert_ne!(Color::BLACK, Color::UNDEFINED);
    }

    #[test]
    fn test_new_clamps_channels() {
        let color = Color::new(1.5, -0.25, 0.5);
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 0.0);
        assert_eq!(color.blue(), 0.5);
    }

    #[test]
    fn test_add_clamps_and_defines() {
        let sum = Color::UNDEFINED + Color::new(0.75, 0.5, 0.0) + Color::new(0.5, 0.25, 0.0);
        assert!(sum.is_defined());
        assert_eq!(sum.red(), 1.0);
        assert_eq!(sum.green(), 0.75);
        assert_eq!(sum.blue(), 0.0);
    }

    #[test]
    fn test_scale() {
        let scaled = Color::new(1.0, 0.5, 0.25) * 0.5;
        assert_eq!(scaled.to_vec3(), Vec3::new(0.5, 0.25, 0.125));
    }

    #[test]
    fn test_to_bgr_order_and_truncation() {
        let color = Color::new(1.0, 0.5, 0.0);
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!(color.to_bgr(), [0, 127, 255]);
    }
}
