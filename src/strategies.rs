use crate::color::OverlayColor;
use crate::overlay::{FilmOverlay, SettingsControl, ThumbnailId};
use crate::primitives::DrawPrimitive;

pub const SAFE_FRAME_PERCENT_MIN: f32 = 1.0;
pub const SAFE_FRAME_PERCENT_MAX: f32 = 99.0;

/// Fraction of the shorter viewport dimension covered by the crosshair arms.
const CROSSHAIR_SIZE_FACTOR: f32 = 0.1;
/// Inner gap of each crosshair arm, as a fraction of the arm length.
const CROSSHAIR_GAP_FACTOR: f32 = 0.25;

fn degenerate(viewport: (f32, f32)) -> bool {
    viewport.0 <= 0.0 || viewport.1 <= 0.0
}

/// Menu placeholder that paints nothing. Selecting it clears the master
/// overlay selection.
pub struct DisabledOverlay {
    tint: OverlayColor,
}

impl DisabledOverlay {
    pub fn new() -> Self {
        Self {
            tint: OverlayColor::default(),
        }
    }
}

impl Default for DisabledOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmOverlay for DisabledOverlay {
    fn display_name(&self) -> String {
        "Disabled".to_string()
    }

    fn thumbnail(&self) -> Option<ThumbnailId> {
        Some(ThumbnailId::new("FilmOverlay.Disabled"))
    }

    fn paint(&self, _viewport: (f32, f32)) -> Vec<DrawPrimitive> {
        Vec::new()
    }

    fn tint(&self) -> OverlayColor {
        self.tint
    }

    fn set_tint(&mut self, tint: OverlayColor) {
        self.tint = tint;
    }
}

/// Rule-of-thirds style grid dividing the viewport into `divs_h` columns
/// and `divs_v` rows.
pub struct GridOverlay {
    divs_h: u32,
    divs_v: u32,
    thumbnail: ThumbnailId,
    tint: OverlayColor,
}

impl GridOverlay {
    /// Division counts below 1 are clamped so painting never divides by zero.
    pub fn new(divs_h: u32, divs_v: u32) -> Self {
        let divs_h = divs_h.max(1);
        let divs_v = divs_v.max(1);
        Self {
            divs_h,
            divs_v,
            thumbnail: ThumbnailId::new(format!("FilmOverlay.{divs_h}x{divs_v}Grid")),
            tint: OverlayColor::default(),
        }
    }
}

impl FilmOverlay for GridOverlay {
    fn display_name(&self) -> String {
        format!("Grid ({}x{})", self.divs_h, self.divs_v)
    }

    fn thumbnail(&self) -> Option<ThumbnailId> {
        Some(self.thumbnail.clone())
    }

    fn paint(&self, viewport: (f32, f32)) -> Vec<DrawPrimitive> {
        if degenerate(viewport) {
            return Vec::new();
        }
        let (width, height) = viewport;
        let mut primitives = Vec::with_capacity((self.divs_h + self.divs_v - 2) as usize);

        for offset in 1..self.divs_h {
            let x = width * offset as f32 / self.divs_h as f32;
            primitives.push(DrawPrimitive::segment((x, 0.0), (x, height), self.tint));
        }
        for offset in 1..self.divs_v {
            let y = height * offset as f32 / self.divs_v as f32;
            primitives.push(DrawPrimitive::segment((0.0, y), (width, y), self.tint));
        }
        primitives
    }

    fn tint(&self) -> OverlayColor {
        self.tint
    }

    fn set_tint(&mut self, tint: OverlayColor) {
        self.tint = tint;
    }
}

/// Four short segments around the viewport center, leaving the exact
/// midpoint clear.
pub struct CrosshairOverlay {
    tint: OverlayColor,
}

impl CrosshairOverlay {
    pub fn new() -> Self {
        Self {
            tint: OverlayColor::default(),
        }
    }
}

impl Default for CrosshairOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmOverlay for CrosshairOverlay {
    fn display_name(&self) -> String {
        "Crosshair".to_string()
    }

    fn thumbnail(&self) -> Option<ThumbnailId> {
        Some(ThumbnailId::new("FilmOverlay.Crosshair"))
    }

    fn paint(&self, viewport: (f32, f32)) -> Vec<DrawPrimitive> {
        if degenerate(viewport) {
            return Vec::new();
        }
        let (width, height) = viewport;
        let (cx, cy) = (width / 2.0, height / 2.0);
        let size = width.min(height) * CROSSHAIR_SIZE_FACTOR;
        let gap = size * CROSSHAIR_GAP_FACTOR;

        vec![
            DrawPrimitive::segment((cx, cy - size), (cx, cy - gap), self.tint),
            DrawPrimitive::segment((cx, cy + size), (cx, cy + gap), self.tint),
            DrawPrimitive::segment((cx - size, cy), (cx - gap, cy), self.tint),
            DrawPrimitive::segment((cx + size, cy), (cx + gap, cy), self.tint),
        ]
    }

    fn tint(&self) -> OverlayColor {
        self.tint
    }

    fn set_tint(&mut self, tint: OverlayColor) {
        self.tint = tint;
    }
}

/// Classic rabatment construction: the two verticals that fold each short
/// edge of a landscape frame onto the long edge. Meaningless for portrait
/// viewports, so those paint nothing.
pub struct RabatmentOverlay {
    tint: OverlayColor,
}

impl RabatmentOverlay {
    pub fn new() -> Self {
        Self {
            tint: OverlayColor::default(),
        }
    }
}

impl Default for RabatmentOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmOverlay for RabatmentOverlay {
    fn display_name(&self) -> String {
        "Rabatment".to_string()
    }

    fn thumbnail(&self) -> Option<ThumbnailId> {
        Some(ThumbnailId::new("FilmOverlay.Rabatment"))
    }

    fn paint(&self, viewport: (f32, f32)) -> Vec<DrawPrimitive> {
        if degenerate(viewport) {
            return Vec::new();
        }
        let (width, height) = viewport;
        if width < height {
            return Vec::new();
        }

        vec![
            DrawPrimitive::segment((height, 0.0), (height, height), self.tint),
            DrawPrimitive::segment((width - height, 0.0), (width - height, height), self.tint),
        ]
    }

    fn tint(&self) -> OverlayColor {
        self.tint
    }

    fn set_tint(&mut self, tint: OverlayColor) {
        self.tint = tint;
    }
}

/// Centered rectangle outline covering `size_percent` of each viewport
/// dimension, used for action/title safe areas.
pub struct SafeFrameOverlay {
    label: String,
    size_percent: f32,
    tint: OverlayColor,
    enabled: bool,
}

impl SafeFrameOverlay {
    pub fn new(label: impl Into<String>, size_percent: f32, tint: OverlayColor) -> Self {
        Self {
            label: label.into(),
            size_percent,
            tint,
            enabled: false,
        }
    }

    pub fn size_percent(&self) -> f32 {
        self.size_percent
    }
}

impl FilmOverlay for SafeFrameOverlay {
    fn display_name(&self) -> String {
        self.label.clone()
    }

    fn paint(&self, viewport: (f32, f32)) -> Vec<DrawPrimitive> {
        if degenerate(viewport) {
            return Vec::new();
        }
        let (width, height) = viewport;
        let inset = (100.0 - self.size_percent) * 0.5 / 100.0;
        let top_left = (width * inset, height * inset);
        let bottom_right = (width - top_left.0, height - top_left.1);

        // The final point overshoots the first corner by a pixel so the
        // stroke closes cleanly.
        vec![DrawPrimitive::polyline(
            vec![
                top_left,
                (bottom_right.0, top_left.1),
                bottom_right,
                (top_left.0, bottom_right.1),
                (top_left.0 - 1.0, top_left.1 - 1.0),
            ],
            self.tint,
        )]
    }

    fn tint(&self) -> OverlayColor {
        self.tint
    }

    fn set_tint(&mut self, tint: OverlayColor) {
        self.tint = tint;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn settings_control(&mut self) -> Option<SettingsControl<'_>> {
        Some(SettingsControl::SizePercent(&mut self.size_percent))
    }
}
