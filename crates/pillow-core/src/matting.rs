//! Threshold-based background stripping.
//!
//! Each pixel is classified on its own, with no neighbourhood or edge
//! analysis. Near-white and translucent pixels become opaque white, pixels
//! that are already (almost) fully transparent become fully transparent, and
//! everything else passes through untouched.

use crate::constants::{TRANSLUCENT_ALPHA_MAX, TRANSPARENT_ALPHA_MAX, WHITE_CHANNEL_MIN};
use image::{Rgba, RgbaImage};

const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MattingThresholds {
    pub transparent_alpha_max: u8,
    pub translucent_alpha_max: u8,
    pub white_channel_min: u8,
}

impl Default for MattingThresholds {
    fn default() -> Self {
        Self {
            transparent_alpha_max: TRANSPARENT_ALPHA_MAX,
            translucent_alpha_max: TRANSLUCENT_ALPHA_MAX,
            white_channel_min: WHITE_CHANNEL_MIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelClass {
    Transparent,
    Background,
    Subject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatteStats {
    pub transparent: usize,
    pub background: usize,
    pub subject: usize,
}

impl MatteStats {
    pub fn total(&self) -> usize {
        self.transparent + self.background + self.subject
    }

    fn record(&mut self, class: PixelClass) {
        match class {
            PixelClass::Transparent => self.transparent += 1,
            PixelClass::Background => self.background += 1,
            PixelClass::Subject => self.subject += 1,
        }
    }
}

#[inline]
pub fn classify(px: [u8; 4], t: &MattingThresholds) -> PixelClass {
    let [r, g, b, a] = px;
    if a < t.transparent_alpha_max {
        return PixelClass::Transparent;
    }
    let near_white = r > t.white_channel_min && g > t.white_channel_min && b > t.white_channel_min;
    if near_white || a < t.translucent_alpha_max {
        PixelClass::Background
    } else {
        PixelClass::Subject
    }
}

/// Map one pixel. Transparent pixels keep their colour channels.
#[inline]
pub fn matte_pixel(px: Rgba<u8>, t: &MattingThresholds) -> (Rgba<u8>, PixelClass) {
    let class = classify(px.0, t);
    let out = match class {
        PixelClass::Transparent => Rgba([px[0], px[1], px[2], 0]),
        PixelClass::Background => OPAQUE_WHITE,
        PixelClass::Subject => px,
    };
    (out, class)
}

pub fn matte_in_place(img: &mut RgbaImage, t: &MattingThresholds) -> MatteStats {
    let mut stats = MatteStats::default();
    for px in img.pixels_mut() {
        let (out, class) = matte_pixel(*px, t);
        *px = out;
        stats.record(class);
    }
    log::debug!(
        "[matte] {}x{} transparent={} background={} subject={}",
        img.width(),
        img.height(),
        stats.transparent,
        stats.background,
        stats.subject
    );
    stats
}

pub fn matte(img: &RgbaImage, t: &MattingThresholds) -> RgbaImage {
    let mut out = img.clone();
    matte_in_place(&mut out, t);
    out
}

/// Same map over a packed RGBA buffer (e.g. canvas `ImageData`).
/// A trailing partial pixel is left as is.
pub fn matte_rgba_bytes(data: &mut [u8], t: &MattingThresholds) -> MatteStats {
    let mut stats = MatteStats::default();
    for chunk in data.chunks_exact_mut(4) {
        let px = Rgba([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let (out, class) = matte_pixel(px, t);
        chunk.copy_from_slice(&out.0);
        stats.record(class);
    }
    stats
}
