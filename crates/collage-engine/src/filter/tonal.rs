use image::RgbaImage;

use super::{pixels_mut, store_channel};

/// Brightness and contrast, each in `[-100, 100]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Tonal {
    pub brightness: i32,
    pub contrast: i32,
}

impl Tonal {
    /// Out-of-range values are clamped into `[-100, 100]`.
    pub fn new(brightness: i32, contrast: i32) -> Self {
        Self { brightness: brightness.clamp(-100, 100), contrast: contrast.clamp(-100, 100) }
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self.brightness == 0 && self.contrast == 0
    }
}

/// `259 (c + 255) / (255 (259 - c))`; exactly 1 at `c = 0`.
#[inline]
pub fn contrast_factor(contrast: i32) -> f64 {
    let c = f64::from(contrast);
    (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
}

/// Brightness bias first, then contrast scaled about 128.
///
/// Both steps are stored as 8-bit channels: the biased value is clamped and
/// rounded before the contrast step sees it.
pub fn apply_tonal_in_place(image: &mut RgbaImage, tonal: Tonal) {
    let tonal = Tonal::new(tonal.brightness, tonal.contrast);
    let bias = f64::from(tonal.brightness) / 100.0 * 255.0;
    let factor = contrast_factor(tonal.contrast);

    let adjust = |channel: u8| -> u8 {
        let biased = store_channel(f64::from(channel) + bias);
        store_channel(factor * (f64::from(biased) - 128.0) + 128.0)
    };

    for px in pixels_mut(image) {
        px.r = adjust(px.r);
        px.g = adjust(px.g);
        px.b = adjust(px.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample() -> RgbaImage {
        RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, (255 - x * 3) as u8])
        })
    }

    #[test]
    fn zero_adjustment_is_identity() {
        assert_eq!(contrast_factor(0), 1.0);
        let mut img = sample();
        apply_tonal_in_place(&mut img, Tonal::new(0, 0));
        assert_eq!(img, sample());
    }

    #[test]
    fn brightness_shifts_and_clamps() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([100, 250, 0, 77]));
        apply_tonal_in_place(&mut img, Tonal::new(20, 0)); // +51
        assert_eq!(img.get_pixel(0, 0), &Rgba([151, 255, 51, 77]));
    }

    #[test]
    fn contrast_pivots_on_128() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([128, 100, 200, 255]));
        apply_tonal_in_place(&mut img, Tonal::new(0, 50));
        let f = contrast_factor(50);
        let px = img.get_pixel(0, 0);
        assert_eq!(px[0], 128);
        assert_eq!(px[1], store_channel(f * (100.0 - 128.0) + 128.0));
        assert_eq!(px[2], store_channel(f * (200.0 - 128.0) + 128.0));
    }

    #[test]
    fn brightness_applies_before_contrast() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([100, 100, 100, 255]));
        apply_tonal_in_place(&mut img, Tonal::new(10, 40));
        let f = contrast_factor(40);
        // 100 + 25.5 is stored as 126 before the contrast step.
        let expected = store_channel(f * (126.0 - 128.0) + 128.0);
        assert_eq!(img.get_pixel(0, 0)[0], expected);
    }

    #[test]
    fn saturated_bias_is_stored_before_contrast() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([250, 10, 128, 255]));
        apply_tonal_in_place(&mut img, Tonal::new(100, -50));
        assert_eq!(img.get_pixel(0, 0), &Rgba([214, 214, 214, 255]));

        let mut img = RgbaImage::from_pixel(1, 1, Rgba([10, 10, 10, 200]));
        apply_tonal_in_place(&mut img, Tonal::new(-100, -50));
        assert_eq!(img.get_pixel(0, 0), &Rgba([42, 42, 42, 200]));
    }

    #[test]
    fn half_way_bias_rounds_to_even() {
        // +25.5: 100 -> 125.5 -> 126, 101 -> 126.5 -> 126.
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([100, 101, 0, 255]));
        apply_tonal_in_place(&mut img, Tonal::new(10, 0));
        assert_eq!(img.get_pixel(0, 0), &Rgba([126, 126, 26, 255]));
    }

    #[test]
    fn inputs_clamp_to_range() {
        assert_eq!(Tonal::new(500, -300), Tonal { brightness: 100, contrast: -100 });
    }
}
