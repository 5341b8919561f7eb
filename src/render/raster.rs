//! Scene rasterization with tiny_skia.
//!
//! Shapes are filled without anti-aliasing and with [`BlendMode::Source`]: a
//! covered pixel takes the fill's RGBA as-is, so a translucent decoration
//! leaves a translucent pixel instead of blending into what lies beneath.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{
    BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use super::scene::{Scene, Shape, line_band};
use crate::design::Fill;
use crate::error::IconError;
use crate::icon::RectPx;

/// Cubic Bézier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Draws `scene` onto a transparent canvas of `scene.size()` pixels.
pub fn rasterize(scene: &Scene) -> Result<RgbaImage, IconError> {
    let size = scene.size();
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize(size))?;

    for shape in scene.shapes() {
        draw_shape(&mut pixmap, shape)?;
    }

    Ok(pixmap_to_rgba_image(&pixmap))
}

fn draw_shape(pixmap: &mut Pixmap, shape: &Shape) -> Result<(), IconError> {
    match shape {
        Shape::RoundedRect { rect, radius, fill } => {
            let path = rounded_rect_path(to_rect(rect)?, *radius as f32)
                .ok_or(IconError::Degenerate("rounded rectangle"))?;
            pixmap.fill_path(&path, &paint(fill), FillRule::Winding, Transform::identity(), None);
        }
        Shape::Ellipse { bounds, fill } => {
            let path =
                PathBuilder::from_oval(to_rect(bounds)?).ok_or(IconError::Degenerate("ellipse"))?;
            pixmap.fill_path(&path, &paint(fill), FillRule::Winding, Transform::identity(), None);
        }
        Shape::Line {
            from,
            to,
            width,
            fill,
        } => match line_band(*from, *to, *width) {
            Some(band) => {
                pixmap.fill_rect(to_rect(&band)?, &paint(fill), Transform::identity(), None);
            }
            None => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.0 as f32 + 0.5, from.1 as f32 + 0.5);
                pb.line_to(to.0 as f32 + 0.5, to.1 as f32 + 0.5);
                let path = pb.finish().ok_or(IconError::Degenerate("line"))?;
                let stroke = Stroke {
                    width: *width as f32,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &paint(fill), &stroke, Transform::identity(), None);
            }
        },
    }
    Ok(())
}

fn paint(fill: &Fill) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(fill.color.red, fill.color.green, fill.color.blue, fill.alpha);
    paint.anti_alias = false;
    paint.blend_mode = BlendMode::Source;
    paint
}

/// Pixel rectangle to float edges; `[x, right)` covers exactly `width` pixel centers.
fn to_rect(rect: &RectPx) -> Result<Rect, IconError> {
    Rect::from_ltrb(
        rect.x as f32,
        rect.y as f32,
        rect.right() as f32,
        rect.bottom() as f32,
    )
    .ok_or(IconError::Degenerate("rectangle"))
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * (1.0 - KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - k, t, rt, t + k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - k, rt - k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + k, b, l, b - k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + k, l + k, t, l + r, t);
    pb.close();
    pb.finish()
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // tiny_skia stores premultiplied alpha, PNG and ICO want straight alpha
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    const RED: Fill = Fill::opaque(Srgb::new(255, 0, 0));

    #[test]
    fn rect_fills_exact_pixels() {
        let mut scene = Scene::new(10);
        scene.rounded_rect(RectPx::from_inclusive(2, 2, 5, 5), 0, RED);
        let img = rasterize(&scene).unwrap();

        assert_eq!(img.dimensions(), (10, 10));
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 6).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 2).0, [0, 0, 0, 0]);
    }

    #[test]
    fn translucent_fill_replaces_instead_of_blending() {
        let mut scene = Scene::new(8);
        scene
            .rounded_rect(RectPx::from_inclusive(0, 0, 7, 7), 0, RED)
            .rounded_rect(RectPx::from_inclusive(2, 2, 5, 5), 0, Fill::white(100))
            .line((0, 7), (7, 7), 1, Fill::white(128));
        let img = rasterize(&scene).unwrap();

        assert_eq!(img.get_pixel(3, 3).0, [255, 255, 255, 100]);
        assert_eq!(img.get_pixel(4, 7).0, [255, 255, 255, 128]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 3).0, [255, 0, 0, 255]);
    }

    #[test]
    fn rounded_corners_stay_transparent() {
        let mut scene = Scene::new(32);
        scene.rounded_rect(RectPx::from_inclusive(0, 0, 31, 31), 8, RED);
        let img = rasterize(&scene).unwrap();

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(31, 31)[3], 0);
        assert_eq!(img.get_pixel(16, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(16, 16).0, [255, 0, 0, 255]);
    }

    #[test]
    fn ellipse_covers_center_not_corners() {
        let mut scene = Scene::new(11);
        scene.ellipse(RectPx::from_inclusive(0, 0, 10, 10), Fill::white(230));
        let img = rasterize(&scene).unwrap();

        assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 230]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 0]);
    }

    #[test]
    fn zero_size_scene_is_rejected() {
        assert!(matches!(
            rasterize(&Scene::new(0)),
            Err(IconError::InvalidSize(0))
        ));
    }
}
