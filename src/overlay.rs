use crate::color::OverlayColor;
use crate::primitives::DrawPrimitive;

/// Identifier of a thumbnail image, resolved by the host through a
/// [`ThumbnailResolver`]. The built-in overlays use `FilmOverlay.*` names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThumbnailId(pub String);

impl ThumbnailId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Thumbnail shown when no master overlay is selected.
pub const DEFAULT_THUMBNAIL: &str = "FilmOverlay.DefaultThumbnail";

/// Resolves thumbnail identifiers to host textures. Injected into the menu
/// rendering so overlays never reach into a global style table.
pub trait ThumbnailResolver {
    fn resolve(&self, thumbnail: &ThumbnailId) -> Option<eframe::egui::load::SizedTexture>;
}

/// A resolver with no images; the menu falls back to text labels.
pub struct NoThumbnails;

impl ThumbnailResolver for NoThumbnails {
    fn resolve(&self, _thumbnail: &ThumbnailId) -> Option<eframe::egui::load::SizedTexture> {
        None
    }
}

/// An editable setting an overlay exposes to the options menu. Range
/// enforcement happens at the editing widget, not inside the overlay.
pub enum SettingsControl<'a> {
    /// Screen-coverage percentage of a safe frame, edited in [1, 99].
    SizePercent(&'a mut f32),
}

/// One selectable or toggleable viewport overlay.
///
/// `paint` is a pure function of the overlay's own state and the viewport
/// size; compositing order and layering are the caller's concern.
pub trait FilmOverlay {
    fn display_name(&self) -> String;

    fn thumbnail(&self) -> Option<ThumbnailId> {
        None
    }

    /// Emit draw primitives for a viewport of the given pixel size.
    /// A degenerate viewport (zero width or height) must yield nothing.
    fn paint(&self, viewport: (f32, f32)) -> Vec<DrawPrimitive>;

    fn tint(&self) -> OverlayColor;

    fn set_tint(&mut self, tint: OverlayColor);

    /// Whether the overlay is active in the toggleable set. Master-set
    /// overlays are driven by selection instead and keep the default.
    fn is_enabled(&self) -> bool {
        false
    }

    fn set_enabled(&mut self, _enabled: bool) {}

    fn settings_control(&mut self) -> Option<SettingsControl<'_>> {
        None
    }
}
