//! Destructive pixel filters for bitmap objects.
//!
//! Filters read a bitmap's straight-alpha RGBA buffer, transform color
//! channels in place on a private copy, and hand back a new `Bitmap`. Alpha is
//! never modified. Operating on the decoded buffer directly means there is no
//! paint / read-back / re-encode round trip and nothing completes out of order.

mod effect;
mod tonal;

pub use effect::{apply_effect_in_place, Effect};
pub use tonal::{apply_tonal_in_place, contrast_factor, Tonal};

use bytemuck::{Pod, Zeroable};

use crate::error::EditResult;
use crate::scene::Bitmap;

/// One RGBA8 pixel as laid out in the raw buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Pod, Zeroable)]
pub(crate) struct Px {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Views a tightly packed RGBA8 buffer as pixels.
///
/// # Panics
/// Panics if `raw.len()` is not a multiple of 4.
#[inline]
pub(crate) fn pixels_mut(raw: &mut [u8]) -> &mut [Px] {
    bytemuck::cast_slice_mut(raw)
}

/// Stores a computed channel value the way a clamped 8-bit buffer does:
/// clamp to `[0, 255]`, then round half to even. NaN stores as 0.
#[inline]
pub(crate) fn store_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Brightness/contrast applied to a copy of `bitmap`.
pub fn apply_tonal(bitmap: &Bitmap, tonal: Tonal) -> EditResult<Bitmap> {
    let mut image = bitmap.image().clone();
    apply_tonal_in_place(&mut image, tonal);
    Bitmap::new(image)
}

/// Fixed effect applied to a copy of `bitmap`.
pub fn apply_effect(bitmap: &Bitmap, effect: Effect) -> EditResult<Bitmap> {
    let mut image = bitmap.image().clone();
    apply_effect_in_place(&mut image, effect);
    Bitmap::new(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn filters_do_not_touch_the_source_bitmap() {
        let src = Bitmap::new(RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]))).unwrap();
        let out = apply_effect(&src, Effect::Invert).unwrap();
        assert_eq!(src.image().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(out.image().get_pixel(0, 0), &Rgba([245, 235, 225, 255]));
        assert!(!out.shares_pixels_with(&src));
    }

    #[test]
    fn channel_store_clamps_then_rounds_half_even() {
        assert_eq!(store_channel(-3.2), 0);
        assert_eq!(store_channel(301.0), 255);
        assert_eq!(store_channel(125.5), 126);
        assert_eq!(store_channel(126.5), 126);
        assert_eq!(store_channel(41.75), 42);
        assert_eq!(store_channel(f64::NAN), 0);
    }

    #[test]
    fn pixel_view_matches_channel_order() {
        let mut raw = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let px = pixels_mut(&mut raw);
        assert_eq!(px.len(), 2);
        assert_eq!(px[1], Px { r: 5, g: 6, b: 7, a: 8 });
    }
}
