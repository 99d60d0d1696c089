use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color used for overlay tinting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl OverlayColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const RED: Self = Self::rgba(255, 0, 0, 255);
    pub const YELLOW: Self = Self::rgba(255, 255, 0, 255);
    pub const GREEN: Self = Self::rgba(0, 255, 0, 255);

    /// Default tint for master overlays: white at half opacity.
    pub const HALF_WHITE: Self = Self::rgba(255, 255, 255, 128);

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_rgba_array(color: [u8; 4]) -> Self {
        Self::rgba(color[0], color[1], color[2], color[3])
    }
}

impl Default for OverlayColor {
    fn default() -> Self {
        Self::HALF_WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::OverlayColor;

    #[test]
    fn rgba_array_round_trip_preserves_channels() {
        let color = OverlayColor::rgba(12, 34, 56, 78);
        assert_eq!(OverlayColor::from_rgba_array(color.to_rgba_array()), color);
    }

    #[test]
    fn default_tint_is_half_opacity_white() {
        assert_eq!(OverlayColor::default(), OverlayColor::rgba(255, 255, 255, 128));
    }
}
