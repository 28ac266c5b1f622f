use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use icns::{IconFamily, IconType, PixelFormat};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use log::{debug, info};

use crate::error::{IconError, Result};

/// Scale `img` to `size`×`size`; the native size is passed through untouched.
pub fn resample(img: &RgbaImage, size: u32) -> Cow<'_, RgbaImage> {
    if img.width() == size && img.height() == size {
        Cow::Borrowed(img)
    } else {
        Cow::Owned(imageops::resize(img, size, size, FilterType::Lanczos3))
    }
}

pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut out = create(path)?;
    PngEncoder::new(&mut out)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .map_err(|source| IconError::Encode { format: "png", source })?;
    finish(out, path)?;
    info!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Multi-resolution Windows icon, one PNG-compressed frame per size.
pub fn write_ico(img: &RgbaImage, sizes: &[u32], path: &Path) -> Result<()> {
    let frames = sizes
        .iter()
        .map(|&size| {
            let frame = resample(img, size);
            debug!("ico frame {size}x{size}");
            IcoFrame::as_png(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
                .map_err(|source| IconError::Encode { format: "ico", source })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = create(path)?;
    IcoEncoder::new(&mut out)
        .encode_images(&frames)
        .map_err(|source| IconError::Encode { format: "ico", source })?;
    finish(out, path)?;
    info!("wrote {} (sizes {sizes:?})", path.display());
    Ok(())
}

/// Apple icon family, one RGBA element per size.
pub fn write_icns(img: &RgbaImage, sizes: &[u32], path: &Path) -> Result<()> {
    let mut family = IconFamily::new();
    for &size in sizes {
        let icon_type = icns_type(size).ok_or_else(|| IconError::Icns {
            size,
            source: io::Error::new(io::ErrorKind::InvalidInput, "no icns element for this size"),
        })?;
        debug!("icns element {size}x{size}");
        let frame = resample(img, size).into_owned();
        icns::Image::from_data(PixelFormat::RGBA, size, size, frame.into_raw())
            .and_then(|element| family.add_icon_with_type(&element, icon_type))
            .map_err(|source| IconError::Icns { size, source })?;
    }

    let mut out = create(path)?;
    family
        .write(&mut out)
        .map_err(|source| IconError::io(path, source))?;
    finish(out, path)?;
    info!("wrote {} (sizes {sizes:?})", path.display());
    Ok(())
}

/// PNG-payload element type holding a `size`×`size` image.
fn icns_type(size: u32) -> Option<IconType> {
    let icon_type = match size {
        16 => IconType::RGBA32_16x16,
        32 => IconType::RGBA32_32x32,
        64 => IconType::RGBA32_64x64,
        128 => IconType::RGBA32_128x128,
        256 => IconType::RGBA32_256x256,
        512 => IconType::RGBA32_512x512,
        1024 => IconType::RGBA32_512x512_2x,
        _ => return None,
    };
    Some(icon_type)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| IconError::io(path, e))
}

fn finish(mut out: BufWriter<File>, path: &Path) -> Result<()> {
    out.flush().map_err(|e| IconError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn native_size_is_borrowed() {
        let img = checker(32);
        assert!(matches!(resample(&img, 32), Cow::Borrowed(_)));
        let small = resample(&img, 16);
        assert_eq!(small.dimensions(), (16, 16));
    }

    #[test]
    fn every_icns_size_has_a_distinct_element() {
        let types: Vec<_> = crate::config::ICNS_SIZES
            .iter()
            .map(|&s| icns_type(s).unwrap())
            .collect();
        for (ty, &size) in types.iter().zip(crate::config::ICNS_SIZES.iter()) {
            assert_eq!(ty.pixel_width(), size);
        }
        assert!(icns_type(24).is_none());
    }

    #[test]
    fn unsupported_icns_size_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_icns(&checker(64), &[48], &dir.path().join("x.icns")).unwrap_err();
        assert!(matches!(err, IconError::Icns { size: 48, .. }));
    }

    #[test]
    fn png_decodes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        let img = checker(24);
        write_png(&img, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("x.png");
        let err = write_png(&checker(8), &path).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }
}
