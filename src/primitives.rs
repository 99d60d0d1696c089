use crate::color::OverlayColor;

/// A single drawing instruction emitted by an overlay. Positions are in
/// pixels relative to the top-left corner of the viewport being painted.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Segment {
        start: (f32, f32),
        end: (f32, f32),
        color: OverlayColor,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        color: OverlayColor,
    },
}

impl DrawPrimitive {
    pub fn segment(start: (f32, f32), end: (f32, f32), color: OverlayColor) -> Self {
        Self::Segment { start, end, color }
    }

    pub fn polyline(points: Vec<(f32, f32)>, color: OverlayColor) -> Self {
        Self::Polyline { points, color }
    }

    pub fn points(&self) -> Vec<(f32, f32)> {
        match self {
            Self::Segment { start, end, .. } => vec![*start, *end],
            Self::Polyline { points, .. } => points.clone(),
        }
    }

    pub fn color(&self) -> OverlayColor {
        match self {
            Self::Segment { color, .. } | Self::Polyline { color, .. } => *color,
        }
    }
}

/// A primitive tagged with the z layer the compositor assigned to it.
/// Higher layers paint above lower ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintElement {
    pub layer: u32,
    pub primitive: DrawPrimitive,
}
