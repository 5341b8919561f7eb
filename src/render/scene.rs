//! Resolved drawing primitives for one icon size.
//!
//! A [`Scene`] holds shapes whose coordinates are already in pixels. Bounds are
//! inclusive pixel bounds carried as [`RectPx`], and each shape's fill replaces
//! the pixels it covers rather than blending with them.

use crate::design::Fill;
use crate::icon::RectPx;

/// A single drawing primitive in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle with circular corners. A radius of 0 draws square corners.
    RoundedRect { rect: RectPx, radius: u32, fill: Fill },

    /// Ellipse inscribed in `bounds`.
    Ellipse { bounds: RectPx, fill: Fill },

    /// Straight segment between two pixel coordinates (both ends inclusive).
    Line {
        from: (u32, u32),
        to: (u32, u32),
        width: u32,
        fill: Fill,
    },
}

/// Pixels covered by an axis-aligned line.
///
/// The band is exactly `width` pixels thick and starts `width / 2` before the
/// nominal row or column. Diagonal segments have no band and return `None`.
pub fn line_band(from: (u32, u32), to: (u32, u32), width: u32) -> Option<RectPx> {
    let width = width.max(1);
    if from.1 == to.1 {
        let (x0, x1) = (from.0.min(to.0), from.0.max(to.0));
        Some(RectPx::new(x0, from.1.saturating_sub(width / 2), x1 - x0 + 1, width))
    } else if from.0 == to.0 {
        let (y0, y1) = (from.1.min(to.1), from.1.max(to.1));
        Some(RectPx::new(from.0.saturating_sub(width / 2), y0, width, y1 - y0 + 1))
    } else {
        None
    }
}

// ============================================================================
// Scene
// ============================================================================

/// An ordered list of shapes on a square canvas; later shapes paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: u32,
    shapes: Vec<Shape>,
}

impl Scene {
    /// Creates an empty (fully transparent) scene.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn rounded_rect(&mut self, rect: RectPx, radius: u32, fill: Fill) -> &mut Self {
        self.push(Shape::RoundedRect { rect, radius, fill })
    }

    pub fn ellipse(&mut self, bounds: RectPx, fill: Fill) -> &mut Self {
        self.push(Shape::Ellipse { bounds, fill })
    }

    pub fn line(&mut self, from: (u32, u32), to: (u32, u32), width: u32, fill: Fill) -> &mut Self {
        self.push(Shape::Line {
            from,
            to,
            width,
            fill,
        })
    }
}
