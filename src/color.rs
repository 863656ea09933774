// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// RGB display color attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Self = Self(255, 0, 0);
    /// Orange color.
    pub const ORANGE: Self = Self(255, 165, 0);
    /// Green color.
    pub const GREEN: Self = Self(0, 255, 0);
    /// White color.
    pub const WHITE: Self = Self(255, 255, 255);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Channels in BGR order, as OpenCV-style renderers expect.
    #[must_use]
    pub const fn bgr(self) -> [u8; 3] {
        [self.2, self.1, self.0]
    }

    /// Hex string such as `#ffa500`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgr_order() {
        assert_eq!(Color::ORANGE.bgr(), [0, 165, 255]);
        assert_eq!(Color::RED.bgr(), [0, 0, 255]);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::ORANGE.hex(), "#ffa500");
        assert_eq!(Color::new(4, 42, 255).hex(), "#042aff");
    }
}
