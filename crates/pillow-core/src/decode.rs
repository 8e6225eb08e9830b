use crate::constants::{MAX_UPLOAD_HEIGHT, MAX_UPLOAD_WIDTH};
use crate::error::PreviewError;
use image::{ImageFormat, ImageReader, Limits, RgbaImage};
use std::io::Cursor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeLimits {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_width: MAX_UPLOAD_WIDTH,
            max_height: MAX_UPLOAD_HEIGHT,
        }
    }
}

impl DecodeLimits {
    fn to_image_limits(self) -> Limits {
        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_width);
        limits.max_image_height = Some(self.max_height);
        limits
    }
}

fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, PreviewError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PreviewError::Decode(e.to_string()))
}

/// Decode an uploaded file into RGBA8, sniffing the format from its bytes.
pub fn decode_upload(bytes: &[u8], limits: DecodeLimits) -> Result<RgbaImage, PreviewError> {
    if bytes.is_empty() {
        return Err(PreviewError::EmptyUpload);
    }
    let (width, height) = reader(bytes)?
        .into_dimensions()
        .map_err(|e| PreviewError::Decode(e.to_string()))?;
    if width == 0 || height == 0 {
        return Err(PreviewError::Dimensions);
    }
    if width > limits.max_width || height > limits.max_height {
        return Err(PreviewError::TooLarge {
            width,
            height,
            max_width: limits.max_width,
            max_height: limits.max_height,
        });
    }
    let mut r = reader(bytes)?;
    r.limits(limits.to_image_limits());
    let img = r.decode().map_err(|e| PreviewError::Decode(e.to_string()))?;
    Ok(img.to_rgba8())
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, PreviewError> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| PreviewError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}
