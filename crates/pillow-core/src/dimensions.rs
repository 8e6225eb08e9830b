use crate::constants::DIMENSION_DECIMALS;
use crate::error::PreviewError;
use std::fmt;

/// Printed size of the pillow. The longer image side takes the nominal size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrintDimensions {
    pub width_inches: f64,
    pub height_inches: f64,
}

/// Rounds the exact stored value half-up at two decimals. `v * scale` alone
/// can land on a false tie (11.324999.. scales to exactly 1132.5); the fused
/// residual tells which side of the tie the true product lies on.
fn round_to_display(v: f64) -> f64 {
    let scale = 10f64.powi(DIMENSION_DECIMALS);
    let scaled = v * scale;
    let residual = v.mul_add(scale, -scaled);
    let units = if scaled - scaled.floor() == 0.5 && residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round()
    };
    units / scale
}

impl PrintDimensions {
    pub fn from_pixels(width: u32, height: u32, nominal_inches: f64) -> Result<Self, PreviewError> {
        if width == 0 || height == 0 {
            return Err(PreviewError::Dimensions);
        }
        let aspect = width as f64 / height as f64;
        let (w, h) = if aspect > 1.0 {
            (nominal_inches, nominal_inches / aspect)
        } else {
            (nominal_inches * aspect, nominal_inches)
        };
        Ok(Self {
            width_inches: round_to_display(w),
            height_inches: round_to_display(h),
        })
    }

    pub fn width_label(&self) -> String {
        format!("{:.2}\"", self.width_inches)
    }

    pub fn height_label(&self) -> String {
        format!("{:.2}\"", self.height_inches)
    }
}

impl fmt::Display for PrintDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width_label(), self.height_label())
    }
}
