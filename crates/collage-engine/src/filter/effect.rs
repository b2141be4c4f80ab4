use core::fmt;
use core::str::FromStr;

use image::RgbaImage;

use super::{pixels_mut, store_channel};

/// Non-parametric pixel effect.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Effect {
    /// Rec. 601 luma into all three channels.
    Grayscale,
    /// `255 - c` per color channel.
    Invert,
    /// Classic sepia matrix, clamped at 255 only.
    Sepia,
}

impl Effect {
    pub fn name(self) -> &'static str {
        match self {
            Effect::Grayscale => "grayscale",
            Effect::Invert => "invert",
            Effect::Sepia => "sepia",
        }
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "greyscale" => Ok(Effect::Grayscale),
            "invert" => Ok(Effect::Invert),
            "sepia" => Ok(Effect::Sepia),
            other => Err(format!("unknown effect `{other}`")),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn apply_effect_in_place(image: &mut RgbaImage, effect: Effect) {
    let pixels = pixels_mut(image);
    match effect {
        Effect::Grayscale => {
            for px in pixels {
                let (r, g, b) = (f64::from(px.r), f64::from(px.g), f64::from(px.b));
                let gray = store_channel(0.299 * r + 0.587 * g + 0.114 * b);
                px.r = gray;
                px.g = gray;
                px.b = gray;
            }
        }
        Effect::Invert => {
            for px in pixels {
                px.r = 255 - px.r;
                px.g = 255 - px.g;
                px.b = 255 - px.b;
            }
        }
        Effect::Sepia => {
            for px in pixels {
                let (r, g, b) = (f64::from(px.r), f64::from(px.g), f64::from(px.b));
                px.r = store_channel((0.393 * r + 0.769 * g + 0.189 * b).min(255.0));
                px.g = store_channel((0.349 * r + 0.686 * g + 0.168 * b).min(255.0));
                px.b = store_channel((0.272 * r + 0.534 * g + 0.131 * b).min(255.0));
            }
        }
    }
}
