//! Byte encoders for the exported assets.

use std::io::Cursor;

use ico::{IconDir, IconDirEntry, ResourceType};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::IconError;
use crate::icon::IconSet;

/// Encodes a canvas as an 8-bit RGBA PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| IconError::Encode {
            format: "PNG",
            source,
        })?;
    Ok(buf)
}

/// Encodes every frame of `set` into one ICO container, in set order.
///
/// Frames keep their native sizes; the first (smallest) frame becomes the
/// directory's first entry.
pub fn encode_ico(set: &IconSet) -> Result<Vec<u8>, IconError> {
    let mut dir = IconDir::new(ResourceType::Icon);

    for frame in set {
        let image = ico::IconImage::from_rgba_data(
            frame.data.width(),
            frame.data.height(),
            frame.data.as_raw().clone(),
        );
        dir.add_entry(IconDirEntry::encode(&image).map_err(IconError::Ico)?);
    }

    let mut cursor = Cursor::new(Vec::new());
    dir.write(&mut cursor).map_err(IconError::Ico)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconImage;
    use image::Rgba;

    #[test]
    fn png_round_trips_alpha() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 2, Rgba([255, 255, 255, 128]));

        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn png_encoding_is_stable() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([106, 90, 205, 255]));
        assert_eq!(encode_png(&img).unwrap(), encode_png(&img).unwrap());
    }

    #[test]
    fn ico_keeps_frame_order() {
        let mut set = IconSet::new();
        for n in [32, 16, 256] {
            set.add_image(IconImage::new(RgbaImage::from_pixel(n, n, Rgba([1, 2, 3, 255]))));
        }

        let bytes = encode_ico(&set).unwrap();
        let dir = IconDir::read(Cursor::new(bytes)).unwrap();
        let sizes: Vec<(u32, u32)> = dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (256, 256)]);

        let first = dir.entries()[0].decode().unwrap();
        assert_eq!(first.width(), 16);
        assert_eq!(&first.rgba_data()[..4], &[1, 2, 3, 255]);
    }
}
