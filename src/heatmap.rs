//! PAE matrix to heatmap image.
//!
//! Each cell of the predicted-aligned-error matrix maps independently to an
//! RGB color through a fixed two-segment piecewise-linear ramp in the
//! AlphaFold DB style: dark green (confident, 0 Å) through white at 15 Å,
//! then a slight red tint up to 30 Å and beyond. The transform is pure and
//! per-cell, so identical inputs always yield bit-identical images.

use std::path::Path;

use image::{imageops, Rgb, RgbImage};

use crate::error::ViewerError;

/// Error value at which the ramp reaches white.
pub const MIDPOINT: f64 = 15.0;
/// Error value at which the ramp saturates.
pub const MAX_ERROR: f64 = 30.0;

/// Ramp endpoint at zero error (dark green).
const LOW_COLOR: [f64; 3] = [0.0, 77.0, 64.0];
/// Ramp midpoint color (white).
const MID_COLOR: [f64; 3] = [255.0, 255.0, 255.0];
/// Drop applied to the green and blue channels at full saturation; red
/// stays at 255, giving the high-error half its slight red tint.
const TINT_DROP: f64 = 50.0;

/// Map one PAE value to its RGB color.
///
/// Below [`MIDPOINT`] the color blends linearly from dark green to white;
/// at and above it the red channel holds at 255 while green and blue drop
/// by up to [`TINT_DROP`], clamped at [`MAX_ERROR`]. Out-of-range inputs
/// are not rejected: channels saturate through the same formulas.
#[must_use]
pub fn cell_color(value: f64) -> [u8; 3] {
    if value < MIDPOINT {
        let t = value / MIDPOINT;
        [
            channel(LOW_COLOR[0] + t * (MID_COLOR[0] - LOW_COLOR[0])),
            channel(LOW_COLOR[1] + t * (MID_COLOR[1] - LOW_COLOR[1])),
            channel(LOW_COLOR[2] + t * (MID_COLOR[2] - LOW_COLOR[2])),
        ]
    } else {
        let t = ((value - MIDPOINT) / (MAX_ERROR - MIDPOINT)).min(1.0);
        let gb = channel(255.0 - TINT_DROP * t);
        [255, gb, gb]
    }
}

/// Saturating f64 → u8 channel conversion, rounding to nearest. Matches
/// what a browser canvas does when assigning into clamped pixel data.
fn channel(v: f64) -> u8 {
    v.round() as u8
}

/// Render a square PAE matrix into an RGB image of the same dimensions,
/// one pixel per cell (row `i` → pixel row `y = i`).
///
/// Returns `None` for an empty matrix: that is the "no data" case, not an
/// error. Rows are expected to be square (ingestion drops ragged
/// matrices); any short row is padded with saturated-error pixels.
#[must_use]
pub fn render(pae: &[Vec<f64>]) -> Option<RgbImage> {
    let size = pae.len();
    if size == 0 {
        return None;
    }
    let image = RgbImage::from_fn(size as u32, size as u32, |x, y| {
        let value = pae[y as usize]
            .get(x as usize)
            .copied()
            .unwrap_or(MAX_ERROR);
        Rgb(cell_color(value))
    });
    Some(image)
}

/// Horizontal color-scale strip for the heatmap legend, running from zero
/// error on the left to [`MAX_ERROR`] on the right.
#[must_use]
pub fn color_scale(width: u32, height: u32) -> RgbImage {
    let width = width.max(1);
    let span = f64::from(width.saturating_sub(1)).max(1.0);
    RgbImage::from_fn(width, height.max(1), |x, _| {
        Rgb(cell_color(MAX_ERROR * f64::from(x) / span))
    })
}

/// Render the matrix and write it as a PNG, upscaled by `scale` with
/// nearest-neighbor sampling so cells stay as crisp blocks.
///
/// Returns `Ok(false)` without writing anything when the matrix is empty.
pub fn save_png(
    pae: &[Vec<f64>],
    path: &Path,
    scale: u32,
) -> Result<bool, ViewerError> {
    let Some(image) = render(pae) else {
        return Ok(false);
    };
    let scale = scale.max(1);
    let scaled = if scale == 1 {
        image
    } else {
        imageops::resize(
            &image,
            image.width() * scale,
            image.height() * scale,
            imageops::FilterType::Nearest,
        )
    };
    scaled.save(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_colors_are_exact() {
        assert_eq!(cell_color(0.0), [0, 77, 64]);
        assert_eq!(cell_color(30.0), [255, 205, 205]);
    }

    #[test]
    fn ramp_is_continuous_at_the_midpoint() {
        // Both branches must meet at white.
        assert_eq!(cell_color(15.0), [255, 255, 255]);
        assert_eq!(cell_color(15.0 - 1e-9), [255, 255, 255]);
        assert_eq!(cell_color(15.0 + 1e-9), [255, 255, 255]);
    }

    #[test]
    fn out_of_range_values_saturate() {
        assert_eq!(cell_color(45.0), [255, 205, 205]);
        assert_eq!(cell_color(1000.0), [255, 205, 205]);
        // Negative errors extrapolate below the ramp and clamp at zero.
        let [r, _, _] = cell_color(-15.0);
        assert_eq!(r, 0);
    }

    #[test]
    fn image_dimensions_match_the_matrix() {
        let pae = vec![vec![0.0; 3]; 3];
        let image = render(&pae).unwrap();
        assert_eq!((image.width(), image.height()), (3, 3));
    }

    #[test]
    fn empty_matrix_yields_no_image() {
        assert!(render(&[]).is_none());
    }

    #[test]
    fn cells_are_independent() {
        let mut a = vec![
            vec![0.0, 10.0, 20.0],
            vec![5.0, 0.0, 25.0],
            vec![20.0, 25.0, 0.0],
        ];
        let before = render(&a).unwrap();
        // Permute unrelated cells; the probed pixel must not move.
        a[0][2] = 29.0;
        a[2][0] = 1.0;
        let after = render(&a).unwrap();
        assert_eq!(before.get_pixel(1, 0), after.get_pixel(1, 0));
        assert_eq!(before.get_pixel(2, 1), after.get_pixel(2, 1));
    }

    #[test]
    fn row_maps_to_pixel_row() {
        let pae = vec![vec![0.0, 30.0], vec![30.0, 0.0]];
        let image = render(&pae).unwrap();
        // (x, y) = (1, 0) is row 0, column 1.
        assert_eq!(image.get_pixel(1, 0).0, [255, 205, 205]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 77, 64]);
    }

    #[test]
    fn color_scale_runs_green_to_tint() {
        let strip = color_scale(64, 4);
        assert_eq!(strip.get_pixel(0, 0).0, [0, 77, 64]);
        assert_eq!(strip.get_pixel(63, 0).0, [255, 205, 205]);
    }

    #[test]
    fn save_png_writes_scaled_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pae.png");
        let pae = vec![vec![0.0, 10.0], vec![10.0, 0.0]];
        assert!(save_png(&pae, &path, 4).unwrap());
        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!((written.width(), written.height()), (8, 8));

        let empty = dir.path().join("empty.png");
        assert!(!save_png(&[], &empty, 4).unwrap());
        assert!(!empty.exists());
    }
}
