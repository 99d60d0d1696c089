use crate::overlay::FilmOverlay;
use crate::primitives::PaintElement;

/// Flat, ordered output of one compositing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositedFrame {
    pub elements: Vec<PaintElement>,
    /// First layer not used by this pass; hand it to whatever paints next.
    pub next_layer: u32,
}

/// Paints each overlay in order, assigning every overlay its own layer
/// starting at `base_layer`. The layer advances per overlay, not per
/// primitive, and also past overlays that emitted nothing, so sibling
/// widgets keep stable layer numbering regardless of overlay state.
pub fn composite_overlays(
    overlays: &[&dyn FilmOverlay],
    viewport: (f32, f32),
    base_layer: u32,
) -> CompositedFrame {
    let mut elements = Vec::new();
    let mut layer = base_layer;

    for overlay in overlays {
        elements.extend(
            overlay
                .paint(viewport)
                .into_iter()
                .map(|primitive| PaintElement { layer, primitive }),
        );
        layer += 1;
    }

    CompositedFrame {
        elements,
        next_layer: layer,
    }
}

#[cfg(test)]
mod tests {
    use super::composite_overlays;
    use crate::color::OverlayColor;
    use crate::overlay::FilmOverlay;
    use crate::strategies::{CrosshairOverlay, DisabledOverlay, GridOverlay, SafeFrameOverlay};

    #[test]
    fn layers_increase_per_overlay_from_the_base() {
        let grid = GridOverlay::new(3, 3);
        let crosshair = CrosshairOverlay::new();
        let overlays: Vec<&dyn FilmOverlay> = vec![&grid, &crosshair];

        let frame = composite_overlays(&overlays, (300.0, 300.0), 7);

        assert_eq!(frame.next_layer, 9);
        let layers: Vec<u32> = frame.elements.iter().map(|element| element.layer).collect();
        assert_eq!(layers, vec![7, 7, 7, 7, 8, 8, 8, 8]);
    }

    #[test]
    fn silent_overlays_still_consume_a_layer() {
        let disabled = DisabledOverlay::new();
        let frame_overlay = SafeFrameOverlay::new("Safe", 90.0, OverlayColor::RED);
        let overlays: Vec<&dyn FilmOverlay> = vec![&disabled, &frame_overlay];

        let frame = composite_overlays(&overlays, (200.0, 100.0), 0);

        assert_eq!(frame.next_layer, 2);
        assert_eq!(frame.elements.len(), 1);
        assert_eq!(frame.elements[0].layer, 1);
    }

    #[test]
    fn empty_input_produces_an_empty_frame() {
        let frame = composite_overlays(&[], (1920.0, 1080.0), 3);
        assert!(frame.elements.is_empty());
        assert_eq!(frame.next_layer, 3);
    }
}
