use std::path::Path;

use image::{DynamicImage, GrayImage, ImageReader, ImageResult, Luma};

/// Decode `path` and convert it to 8-bit grayscale.
///
/// The format is sniffed from the file contents, falling back to the extension,
/// so a PNG saved as `.jpg` or without an extension still loads.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> ImageResult<GrayImage> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(to_gray_bt601(&decoded))
}

/// Grayscale conversion with Rec.601 weights (0.299, 0.587, 0.114).
///
/// `DynamicImage::to_luma8` uses Rec.709 weights; colour pixels close to the
/// threshold would binarize differently than in datasets built with 601 gray.
/// Alpha is dropped, gray sources pass through unchanged.
pub fn to_gray_bt601(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => {
            image.to_luma8()
        }
        _ => {
            let rgb = image.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([bt601(r, g, b)])
            })
        }
    }
}

// 14-bit fixed point, rounded
fn bt601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + 8192) >> 14) as u8
}
