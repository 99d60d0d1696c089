use crate::color::OverlayColor;
use crate::overlay::{FilmOverlay, ThumbnailId, DEFAULT_THUMBNAIL};
use crate::registry::OverlaySet;
use crate::strategies::{
    CrosshairOverlay, DisabledOverlay, GridOverlay, RabatmentOverlay, SafeFrameOverlay,
};
use tracing::debug;

/// Master-menu entry that stands for "no overlay". Selecting it clears the
/// current selection instead of activating anything.
pub const MASTER_DISABLED_KEY: &str = "None";

/// Owns the overlay registries, the master selection and the master tint,
/// and answers the queries the menu and the paint pass ask each frame.
///
/// The master set is mutually exclusive (at most one selected); the
/// toggleable set is independent and any subset may be enabled at once.
pub struct FilmOverlayOptions {
    master_overlays: OverlaySet,
    toggleable_overlays: OverlaySet,
    current_master: Option<String>,
    master_tint: OverlayColor,
}

impl FilmOverlayOptions {
    /// Builds the fixed set of built-in overlays. Registration order is
    /// menu order and paint order.
    pub fn new() -> Self {
        let mut master_overlays = OverlaySet::new();
        master_overlays.insert(MASTER_DISABLED_KEY, Box::new(DisabledOverlay::new()));
        master_overlays.insert("3x3Grid", Box::new(GridOverlay::new(3, 3)));
        master_overlays.insert("2x2Grid", Box::new(GridOverlay::new(2, 2)));
        master_overlays.insert("Crosshair", Box::new(CrosshairOverlay::new()));
        master_overlays.insert("Rabatment", Box::new(RabatmentOverlay::new()));

        let mut toggleable_overlays = OverlaySet::new();
        toggleable_overlays.insert(
            "ActionSafeFrame",
            Box::new(SafeFrameOverlay::new("Action Safe", 95.0, OverlayColor::RED)),
        );
        toggleable_overlays.insert(
            "TitleSafeFrame",
            Box::new(SafeFrameOverlay::new("Title Safe", 90.0, OverlayColor::YELLOW)),
        );
        toggleable_overlays.insert(
            "CustomSafeFrame",
            Box::new(SafeFrameOverlay::new("Custom Safe", 85.0, OverlayColor::GREEN)),
        );

        Self {
            master_overlays,
            toggleable_overlays,
            current_master: None,
            master_tint: OverlayColor::HALF_WHITE,
        }
    }

    /// Selects a master overlay and immediately applies the master tint to
    /// it. Unknown keys are ignored; the disabled key clears the selection.
    pub fn select_master(&mut self, key: &str) {
        if key == MASTER_DISABLED_KEY {
            self.current_master = None;
            debug!("cleared master overlay selection");
            return;
        }
        if !self.master_overlays.contains_key(key) {
            debug!(key, "ignoring selection of unknown master overlay");
            return;
        }
        self.current_master = Some(key.to_string());
        let tint = self.master_tint;
        if let Some(overlay) = self.master_overlays.get_mut(key) {
            overlay.set_tint(tint);
        }
        debug!(key, "selected master overlay");
    }

    pub fn current_master_key(&self) -> Option<&str> {
        self.current_master.as_deref()
    }

    pub fn master_overlay(&self) -> Option<&dyn FilmOverlay> {
        self.current_master
            .as_deref()
            .and_then(|key| self.master_overlays.get(key))
    }

    /// Enables or disables a toggleable overlay. Unknown keys are ignored.
    pub fn toggle(&mut self, key: &str, enabled: bool) {
        match self.toggleable_overlays.get_mut(key) {
            Some(overlay) => {
                overlay.set_enabled(enabled);
                debug!(key, enabled, "toggled overlay");
            }
            None => debug!(key, "ignoring toggle of unknown overlay"),
        }
    }

    pub fn master_tint(&self) -> OverlayColor {
        self.master_tint
    }

    /// Stores the master tint and re-applies it to the current selection so
    /// an already selected overlay picks up the new color immediately.
    /// Toggleable overlays keep their own tints.
    pub fn set_master_tint(&mut self, tint: OverlayColor) {
        self.master_tint = tint;
        if let Some(key) = self.current_master.clone() {
            if let Some(overlay) = self.master_overlays.get_mut(&key) {
                overlay.set_tint(tint);
            }
        }
    }

    /// The overlays to paint this frame: the master selection (if any)
    /// first, then every enabled toggleable overlay in registration order.
    /// This is also the z order.
    pub fn active_overlays(&self) -> Vec<&dyn FilmOverlay> {
        let mut overlays = Vec::new();
        if let Some(overlay) = self.master_overlay() {
            overlays.push(overlay);
        }
        overlays.extend(
            self.toggleable_overlays
                .iter()
                .filter(|(_, overlay)| overlay.is_enabled())
                .map(|(_, overlay)| overlay),
        );
        overlays
    }

    /// Thumbnail for the menu button: the selection's, or the placeholder
    /// when nothing is selected.
    pub fn current_thumbnail(&self) -> ThumbnailId {
        self.master_overlay()
            .and_then(|overlay| overlay.thumbnail())
            .unwrap_or_else(|| ThumbnailId::new(DEFAULT_THUMBNAIL))
    }

    pub fn master_entries(&self) -> impl Iterator<Item = (&str, &dyn FilmOverlay)> {
        self.master_overlays.iter()
    }

    pub fn master_overlay_count(&self) -> usize {
        self.master_overlays.len()
    }

    pub fn toggleable_entries(&self) -> impl Iterator<Item = (&str, &dyn FilmOverlay)> {
        self.toggleable_overlays.iter()
    }

    pub fn toggleable_entries_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut Box<dyn FilmOverlay>)> {
        self.toggleable_overlays.iter_mut()
    }

    pub fn master_overlay_by_key(&self, key: &str) -> Option<&dyn FilmOverlay> {
        self.master_overlays.get(key)
    }
}

impl Default for FilmOverlayOptions {
    fn default() -> Self {
        Self::new()
    }
}
