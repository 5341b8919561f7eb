//! The fixed icon design, expressed in a 512 x 512 reference space.
//!
//! Every length and offset here is a base-512 value. Nothing in this module is
//! a pixel coordinate: renderers convert through [`Scale::px`], which keeps the
//! drawing proportional at any requested size.

use palette::Srgb;

/// Edge length of the reference design, in pixels.
pub const BASE_SIZE: u32 = 512;

// ============================================================================
// Scale
// ============================================================================

/// Ratio between a requested edge length and [`BASE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f64);

impl Scale {
    /// Creates the scale factor for an icon of `size` pixels.
    pub fn for_size(size: u32) -> Self {
        Self(size as f64 / BASE_SIZE as f64)
    }

    /// Returns the raw factor (`size / 512`).
    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Converts a base-512 length to pixels, truncating toward zero.
    pub fn px(&self, base: u32) -> u32 {
        (base as f64 * self.0) as u32
    }

    /// Converts a base-512 point to pixels.
    pub fn point(&self, (x, y): (u32, u32)) -> (u32, u32) {
        (self.px(x), self.px(y))
    }

    /// Converts a stroke width, never going below one pixel.
    pub fn stroke(&self, base: u32) -> u32 {
        self.px(base).max(1)
    }
}

// ============================================================================
// Fills and descriptors
// ============================================================================

/// A solid color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub color: Srgb<u8>,
    pub alpha: u8,
}

impl Fill {
    pub const fn opaque(color: Srgb<u8>) -> Self {
        Self { color, alpha: 255 }
    }

    /// White at the given alpha; all the decorations use it.
    pub const fn white(alpha: u8) -> Self {
        Self {
            color: Srgb::new(255, 255, 255),
            alpha,
        }
    }

    /// Alpha as a 0.0-1.0 opacity.
    pub fn opacity(&self) -> f32 {
        self.alpha as f32 / 255.0
    }

    /// Returns the color as a `#rrggbb` string.
    pub fn hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.color.red, self.color.green, self.color.blue
        )
    }
}

/// One of the four colored chat panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    /// Human-readable label, used in log output.
    pub name: &'static str,
    /// Top-left corner in base-512 units.
    pub origin: (u32, u32),
    pub color: Srgb<u8>,
}

/// A straight connector segment between two panels, in base-512 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorSpec {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

// ============================================================================
// Design table
// ============================================================================

pub const BACKGROUND: Fill = Fill::opaque(Srgb::new(106, 90, 205));
pub const BACKGROUND_RADIUS: u32 = 100;

/// Inset of the background rectangle from the canvas edge.
///
/// The shipped icon is full-bleed. An inset of 20 was computed alongside the
/// corner radius in earlier revisions but never applied, so it stays at 0 to
/// keep the published artwork unchanged.
pub const BACKGROUND_INSET: u32 = 0;

/// Panels in top-left, top-right, bottom-left, bottom-right order.
pub const PANELS: [PanelSpec; 4] = [
    PanelSpec {
        name: "top-left",
        origin: (60, 60),
        color: Srgb::new(16, 163, 127),
    },
    PanelSpec {
        name: "top-right",
        origin: (272, 60),
        color: Srgb::new(66, 133, 244),
    },
    PanelSpec {
        name: "bottom-left",
        origin: (60, 272),
        color: Srgb::new(217, 119, 6),
    },
    PanelSpec {
        name: "bottom-right",
        origin: (272, 272),
        color: Srgb::new(29, 161, 242),
    },
];

pub const PANEL_SIZE: u32 = 180;
pub const PANEL_RADIUS: u32 = 20;

pub const AVATAR_OFFSET_Y: u32 = 60;
pub const AVATAR_RADIUS: u32 = 25;
pub const AVATAR_FILL: Fill = Fill::white(230);

/// Horizontal offset of both text bars from the panel's left edge.
pub const BAR_OFFSET_X: u32 = 40;
pub const BAR_OFFSET_Y: u32 = 100;
pub const BAR_HEIGHT: u32 = 12;
pub const BAR_RADIUS: u32 = 6;
pub const BAR_WIDTH: u32 = 100;
pub const BAR_FILL: Fill = Fill::white(150);
/// Gap from the first bar's top to the second bar's top.
pub const SECOND_BAR_SPACING: u32 = 25;
pub const SECOND_BAR_WIDTH: u32 = 70;
pub const SECOND_BAR_FILL: Fill = Fill::white(100);

pub const CONNECTOR_WIDTH: u32 = 4;
pub const CONNECTOR_FILL: Fill = Fill::white(128);

/// Two horizontal then two vertical connectors bridging the panel gaps.
pub const CONNECTORS: [ConnectorSpec; 4] = [
    ConnectorSpec {
        from: (240, 150),
        to: (272, 150),
    },
    ConnectorSpec {
        from: (240, 362),
        to: (272, 362),
    },
    ConnectorSpec {
        from: (150, 240),
        to: (150, 272),
    },
    ConnectorSpec {
        from: (362, 240),
        to: (362, 272),
    },
];
