//! Icon rendering.
//!
//! [`IconRenderer`] turns the base-512 design table into a [`Scene`] for the
//! requested size and rasterizes it. Every coordinate goes through
//! [`Scale::px`], so sub-pixel precision is dropped the same way at every size.
//!
//! Each shape overwrites the pixels it covers. The white decorations are
//! therefore see-through in the output: an avatar pixel is `[255, 255, 255, 230]`
//! whatever panel it sits on.
//!
//! # Example
//!
//! ```
//! use parallelchat_icons::IconRenderer;
//!
//! let canvas = IconRenderer::new().render(64).unwrap();
//! assert_eq!(canvas.dimensions(), (64, 64));
//! ```

pub mod raster;
pub mod scene;

pub use scene::{Scene, Shape};

use image::RgbaImage;
use tracing::debug;

use crate::design::{self, PanelSpec, Scale};
use crate::error::IconError;
use crate::icon::{IconImage, IconSet, RectPx};

/// Draws the icon at arbitrary sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRenderer;

impl IconRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Lays out the icon for a `size x size` canvas.
    pub fn scene(&self, size: u32) -> Result<Scene, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }

        let s = Scale::for_size(size);
        let mut scene = Scene::new(size);

        let inset = s.px(design::BACKGROUND_INSET);
        let far = (size - 1).saturating_sub(inset);
        scene.rounded_rect(
            RectPx::from_inclusive(inset, inset, far, far),
            s.px(design::BACKGROUND_RADIUS),
            design::BACKGROUND,
        );

        for panel in &design::PANELS {
            draw_panel(&mut scene, s, panel);
        }

        let width = s.stroke(design::CONNECTOR_WIDTH);
        for connector in &design::CONNECTORS {
            scene.line(
                s.point(connector.from),
                s.point(connector.to),
                width,
                design::CONNECTOR_FILL,
            );
        }

        Ok(scene)
    }

    /// Renders the icon to a `size x size` RGBA canvas.
    pub fn render(&self, size: u32) -> Result<RgbaImage, IconError> {
        let scene = self.scene(size)?;
        debug!(size, shapes = scene.shapes().len(), "rendering icon");
        raster::rasterize(&scene)
    }

    /// Renders one frame for an icon container.
    pub fn render_icon(&self, size: u32) -> Result<IconImage, IconError> {
        self.render(size).map(IconImage::new)
    }

    /// Renders a frame per size into an [`IconSet`].
    pub fn render_set(&self, sizes: &[u32]) -> Result<IconSet, IconError> {
        let mut set = IconSet::new();
        for &size in sizes {
            set.add_image(self.render_icon(size)?);
        }
        Ok(set)
    }
}

/// Panel square, avatar, then the two text bars.
fn draw_panel(scene: &mut Scene, s: Scale, panel: &PanelSpec) {
    let (x, y) = s.point(panel.origin);
    let side = s.px(design::PANEL_SIZE);

    scene.rounded_rect(
        RectPx::from_inclusive(x, y, x + side, y + side),
        s.px(design::PANEL_RADIUS),
        design::Fill::opaque(panel.color),
    );

    let r = s.px(design::AVATAR_RADIUS);
    let cx = x + side / 2;
    let cy = y + s.px(design::AVATAR_OFFSET_Y);
    scene.ellipse(
        RectPx::from_inclusive(cx.saturating_sub(r), cy.saturating_sub(r), cx + r, cy + r),
        design::AVATAR_FILL,
    );

    let bar_x = x + s.px(design::BAR_OFFSET_X);
    let bar_h = s.px(design::BAR_HEIGHT);
    let bar_r = s.px(design::BAR_RADIUS);

    let bar_y = y + s.px(design::BAR_OFFSET_Y);
    scene.rounded_rect(
        RectPx::from_inclusive(bar_x, bar_y, bar_x + s.px(design::BAR_WIDTH), bar_y + bar_h),
        bar_r,
        design::BAR_FILL,
    );

    let bar_y = bar_y + s.px(design::SECOND_BAR_SPACING);
    scene.rounded_rect(
        RectPx::from_inclusive(
            bar_x,
            bar_y,
            bar_x + s.px(design::SECOND_BAR_WIDTH),
            bar_y + bar_h,
        ),
        bar_r,
        design::SECOND_BAR_FILL,
    );
}

/// Renders the icon at `size` with the default renderer.
pub fn render(size: u32) -> Result<RgbaImage, IconError> {
    IconRenderer::new().render(size)
}
