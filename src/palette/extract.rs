//! Dominant-color extraction from decoded pixel data.
//!
//! The sampler walks the flat RGBA buffer at a fixed stride, drops dead
//! pixels (transparent, near-white, near-black), quantizes what survives
//! into coarse buckets, and keeps the most frequent buckets. Cheap and
//! deterministic; not a perceptual clustering.

use image::RgbaImage;
use std::collections::HashMap;
use std::path::Path;

use super::color::Color;
use super::Palette;

/// Sample every Nth pixel of the buffer.
const SAMPLE_STRIDE: usize = 10;

/// Pixels with alpha below this are ignored.
const ALPHA_CUTOFF: u8 = 125;

/// All channels above this -> near-white background pixel, ignored.
const WHITE_CUTOFF: u8 = 240;

/// All channels below this -> near-black background pixel, ignored.
const BLACK_CUTOFF: u8 = 15;

/// Channels are rounded to the nearest multiple of this before tallying.
const BUCKET_SIZE: u32 = 30;

/// How many buckets each image contributes.
const TOP_COLORS: usize = 5;

/// Extract up to [`TOP_COLORS`] representative colors from one image,
/// most frequent first. Ties keep first-seen order. An image with no
/// surviving pixels contributes an empty list.
pub fn extract_colors(image: &RgbaImage) -> Vec<Color> {
    let mut tally: Vec<(Color, usize)> = Vec::new();
    let mut seen: HashMap<Color, usize> = HashMap::new();

    for px in image.as_raw().chunks_exact(4).step_by(SAMPLE_STRIDE) {
        let (r, g, b, a) = (px[0], px[1], px[2], px[3]);

        if a < ALPHA_CUTOFF {
            continue;
        }
        if r > WHITE_CUTOFF && g > WHITE_CUTOFF && b > WHITE_CUTOFF {
            continue;
        }
        if r < BLACK_CUTOFF && g < BLACK_CUTOFF && b < BLACK_CUTOFF {
            continue;
        }

        let bucket = Color::new(quantize(r), quantize(g), quantize(b));
        match seen.get(&bucket) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                seen.insert(bucket, tally.len());
                tally.push((bucket, 1));
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.into_iter().take(TOP_COLORS).map(|(c, _)| c).collect()
}

/// Round a channel to the nearest multiple of [`BUCKET_SIZE`], half up,
/// clamped to the channel range.
fn quantize(channel: u8) -> u8 {
    let bucket = ((u32::from(channel) + BUCKET_SIZE / 2) / BUCKET_SIZE) * BUCKET_SIZE;
    bucket.min(255) as u8
}

/// Build the session palette from a list of image paths.
///
/// Images are processed in order; each contributes its extracted colors,
/// the combined list is deduplicated preserving first occurrence, and an
/// empty result substitutes the fallback palette. A single image failing
/// to decode is logged and skipped - never fatal.
pub fn build_palette<P: AsRef<Path>>(images: &[P]) -> Palette {
    let mut colors = Vec::new();

    for path in images {
        let path = path.as_ref();
        match image::open(path) {
            Ok(img) => {
                let extracted = extract_colors(&img.to_rgba8());
                tracing::debug!(
                    path = %path.display(),
                    colors = extracted.len(),
                    "extracted colors from image"
                );
                colors.extend(extracted);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not extract colors from image"
                );
            }
        }
    }

    Palette::from_colors(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Solid-color image large enough that the stride samples it.
    fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(px))
    }

    #[test]
    fn test_quantize_rounds_half_up() {
        assert_eq!(quantize(0), 0);
        assert_eq!(quantize(14), 0);
        assert_eq!(quantize(15), 30);
        assert_eq!(quantize(44), 30);
        assert_eq!(quantize(45), 60);
        assert_eq!(quantize(100), 90);
        assert_eq!(quantize(150), 150);
        assert_eq!(quantize(200), 210);
    }

    #[test]
    fn test_quantize_clamps_at_channel_max() {
        // 241+ would round to 270; the bucket stays a representable color.
        assert_eq!(quantize(241), 255);
        assert_eq!(quantize(255), 255);
    }

    #[test]
    fn test_solid_image_yields_its_bucket() {
        let img = solid(20, 20, [100, 150, 200, 255]);
        let colors = extract_colors(&img);
        assert_eq!(colors, vec![Color::new(90, 150, 210)]);
    }

    #[test]
    fn test_transparent_image_contributes_nothing() {
        let img = solid(20, 20, [100, 150, 200, 0]);
        assert!(extract_colors(&img).is_empty());
    }

    #[test]
    fn test_near_white_and_near_black_are_dropped() {
        let white = solid(20, 20, [250, 245, 241, 255]);
        assert!(extract_colors(&white).is_empty());

        let black = solid(20, 20, [5, 0, 14, 255]);
        assert!(extract_colors(&black).is_empty());

        // One dark channel is enough to keep the pixel.
        let dark_red = solid(20, 20, [200, 5, 5, 255]);
        assert_eq!(extract_colors(&dark_red), vec![Color::new(210, 0, 0)]);
    }

    #[test]
    fn test_most_frequent_bucket_first() {
        // Three quarters blue-ish, one quarter orange-ish.
        let mut img = solid(40, 40, [50, 80, 200, 255]);
        for y in 0..10 {
            for x in 0..40 {
                img.put_pixel(x, y, Rgba([230, 120, 40, 255]));
            }
        }

        let colors = extract_colors(&img);
        assert_eq!(colors[0], Color::new(60, 90, 210));
        assert!(colors.contains(&Color::new(240, 120, 30)));
    }

    #[test]
    fn test_at_most_five_colors_per_image() {
        // Horizontal bands of eight distinct buckets.
        let mut img = RgbaImage::new(80, 80);
        for (y, x) in (0..80).flat_map(|y| (0..80).map(move |x| (y, x))) {
            let band = (y / 10) as u8;
            img.put_pixel(x, y, Rgba([30 + band * 25, 100, 100, 255]));
        }

        let colors = extract_colors(&img);
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_build_palette_skips_undecodable_images() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not-an-image.png");
        std::fs::write(&bogus, b"definitely not a png").unwrap();

        let good = dir.path().join("solid.png");
        solid(20, 20, [100, 150, 200, 255]).save(&good).unwrap();

        let palette = build_palette(&[bogus, good]);
        assert!(!palette.is_fallback());
        assert_eq!(palette.colors(), &[Color::new(90, 150, 210)]);
    }

    #[test]
    fn test_build_palette_falls_back_when_all_images_fail() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        let garbage = dir.path().join("garbage.png");
        std::fs::write(&garbage, b"garbage").unwrap();

        let palette = build_palette(&[missing, garbage]);
        assert!(palette.is_fallback());
        let hex: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
        assert_eq!(
            hex,
            vec!["#ff7b72", "#d2a8ff", "#79c0ff", "#ffa657", "#2dba4e", "#6e5494"]
        );
    }

    #[test]
    fn test_build_palette_deduplicates_across_images() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        // Same dominant bucket in both images.
        solid(20, 20, [100, 150, 200, 255]).save(&a).unwrap();
        solid(20, 20, [95, 155, 205, 255]).save(&b).unwrap();

        let palette = build_palette(&[a, b]);
        assert_eq!(palette.colors(), &[Color::new(90, 150, 210)]);
    }
}
