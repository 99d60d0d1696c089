use crate::color::OverlayColor;
use crate::compositor::{composite_overlays, CompositedFrame};
use crate::options::FilmOverlayOptions;
use crate::primitives::DrawPrimitive;
use eframe::egui;

const OVERLAY_STROKE_WIDTH: f32 = 1.0;

fn to_color32(color: OverlayColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_pos2(rect: egui::Rect, point: (f32, f32)) -> egui::Pos2 {
    egui::pos2(rect.min.x + point.0, rect.min.y + point.1)
}

/// Draws a composited frame into `rect`. Elements arrive already sorted by
/// layer, so painting in sequence preserves the z order.
pub fn paint_composited(painter: &egui::Painter, rect: egui::Rect, frame: &CompositedFrame) {
    for element in &frame.elements {
        match &element.primitive {
            DrawPrimitive::Segment { start, end, color } => {
                painter.line_segment(
                    [to_pos2(rect, *start), to_pos2(rect, *end)],
                    egui::Stroke::new(OVERLAY_STROKE_WIDTH, to_color32(*color)),
                );
            }
            DrawPrimitive::Polyline { points, color } => {
                painter.add(egui::Shape::line(
                    points.iter().map(|point| to_pos2(rect, *point)).collect(),
                    egui::Stroke::new(OVERLAY_STROKE_WIDTH, to_color32(*color)),
                ));
            }
        }
    }
}

/// Composites the currently active overlays for `rect` and paints them.
/// Returns the first unused layer so callers can stack further drawing.
pub fn paint_active_overlays(
    painter: &egui::Painter,
    rect: egui::Rect,
    options: &FilmOverlayOptions,
) -> u32 {
    let overlays = options.active_overlays();
    let frame = composite_overlays(&overlays, (rect.width(), rect.height()), 0);
    paint_composited(painter, rect, &frame);
    frame.next_layer
}

#[cfg(test)]
mod tests {
    use super::{to_color32, to_pos2};
    use crate::color::OverlayColor;
    use eframe::egui;

    #[test]
    fn colors_map_to_unmultiplied_rgba() {
        assert_eq!(
            to_color32(OverlayColor::rgba(255, 255, 255, 128)),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 128)
        );
    }

    #[test]
    fn points_are_offset_by_the_viewport_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 100.0));
        assert_eq!(to_pos2(rect, (5.0, 7.0)), egui::pos2(15.0, 27.0));
    }
}
