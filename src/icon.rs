//! Icon types: pixel rectangles, rendered frames and multi-resolution sets.

use image::RgbaImage;

/// A rectangle defined in pixel coordinates.
///
/// `width` and `height` count covered pixels, so a rectangle spanning the
/// inclusive bounds `[x0, x1]` has `width == x1 - x0 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle covering the inclusive pixel bounds `[x0, x1] x [y0, y1]`.
    pub fn from_inclusive(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0) + 1,
            height: y1.saturating_sub(y0) + 1,
        }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// A single rendered frame of the icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Edge length in pixels. Frames are always square.
    pub fn size(&self) -> u32 {
        self.data.width()
    }
}

/// The same icon at several resolutions, kept smallest-first.
///
/// The first frame is the container's primary image; ICO readers that only
/// look at one entry will pick it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Adds a frame, keeping the set ordered. A frame with a size already
    /// present replaces the existing one.
    pub fn add_image(&mut self, image: IconImage) {
        match self
            .images
            .binary_search_by_key(&image.size(), IconImage::size)
        {
            Ok(i) => self.images[i] = image,
            Err(i) => self.images.insert(i, image),
        }
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the frame edge lengths in container order.
    pub fn sizes(&self) -> Vec<u32> {
        self.images.iter().map(IconImage::size).collect()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
