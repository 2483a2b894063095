use crate::error::{BoxError, FaviconError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Sizes packed into favicon.ico.
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Png,
    /// Multi-size ICO with one entry per [`ICO_SIZES`] size.
    Ico,
}

pub fn decode(bytes: &[u8], source_name: &'static str) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(FaviconError::EmptySource { source_name });
    }
    image::load_from_memory(bytes).map_err(|source| FaviconError::Decode {
        source_name,
        source,
    })
}

/// Resamples to exactly `size`x`size`. Non-square sources are squashed,
/// not cropped.
pub fn resize(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, FilterType::Lanczos3)
}

/// Encodes `img` as given for PNG. ICO output always carries one entry
/// per [`ICO_SIZES`] size, resampled from `img`.
pub fn encode(img: &DynamicImage, encoding: Encoding) -> std::result::Result<Vec<u8>, BoxError> {
    match encoding {
        Encoding::Png => encode_png(img),
        Encoding::Ico => encode_ico(img),
    }
}

fn encode_png(img: &DynamicImage) -> std::result::Result<Vec<u8>, BoxError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

fn encode_ico(img: &DynamicImage) -> std::result::Result<Vec<u8>, BoxError> {
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for &size in &ICO_SIZES {
        let resized = resize(img, size).into_rgba8();
        let icon_image = ico::IconImage::from_rgba_data(size, size, resized.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image)?);
    }

    let mut buf = Vec::new();
    icon_dir.write(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_png;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn png_is_exact_square_size() {
        let img = decode(&sample_png(64, 64), "favicon").unwrap();
        let bytes = encode(&resize(&img, 16), Encoding::Png).unwrap();
        let out = image::load_from_memory(&bytes).unwrap();
        assert_eq!(out.dimensions(), (16, 16));
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn non_square_source_is_squashed() {
        let img = decode(&sample_png(200, 50), "favicon").unwrap();
        let bytes = encode(&resize(&img, 48), Encoding::Png).unwrap();
        let out = image::load_from_memory(&bytes).unwrap();
        assert_eq!(out.dimensions(), (48, 48));
    }

    #[test]
    fn resize_leaves_source_untouched() {
        let img = decode(&sample_png(64, 32), "favicon").unwrap();
        let _ = resize(&img, 16);
        assert_eq!(img.dimensions(), (64, 32));
    }

    #[test]
    fn ico_contains_every_size() {
        let img = decode(&sample_png(64, 64), "favicon").unwrap();
        let bytes = encode(&img, Encoding::Ico).unwrap();
        let dir = ico::IconDir::read(Cursor::new(&bytes)).unwrap();
        let sizes: Vec<u32> = dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, ICO_SIZES.to_vec());
    }

    #[test]
    fn bmp_source_renders_as_png() {
        let source = RgbaImage::from_fn(40, 40, |x, y| Rgba([x as u8 * 6, y as u8 * 6, 90, 255]));
        let mut bmp = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut bmp), ImageFormat::Bmp)
            .unwrap();

        let img = decode(&bmp, "favicon").unwrap();
        let bytes = encode(&resize(&img, 16), Encoding::Png).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        assert_eq!(image::load_from_memory(&bytes).unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn jpeg_source_renders_as_png() {
        let source = RgbImage::from_fn(64, 48, |x, _| Rgb([x as u8 * 4, 120, 200]));
        let mut jpeg = Vec::new();
        source
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();

        let img = decode(&jpeg, "favicon").unwrap();
        let bytes = encode(&resize(&img, 16), Encoding::Png).unwrap();
        assert_eq!(image::load_from_memory(&bytes).unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn empty_bytes_fail_as_decode() {
        let err = decode(&[], "favicon").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn garbage_bytes_fail_as_decode() {
        let err = decode(b"definitely not a png", "favicon").unwrap_err();
        assert!(matches!(err, FaviconError::Decode { source_name: "favicon", .. }));
    }
}
