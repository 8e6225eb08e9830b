use glam::Vec2;

/// Two-axis rotation of the preview, in degrees.
///
/// `pitch` tilts around the horizontal axis (CSS `rotateX`), `yaw` spins
/// around the vertical axis (CSS `rotateY`). Neither is wrapped: a jump by a
/// full turn would play backwards through the stage transition. The `f64`
/// accumulators keep half-degree steps exact for years of spinning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
}

impl Orientation {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    /// Screen-space drag delta: vertical motion tilts, horizontal motion spins.
    #[inline]
    pub fn apply_drag(&mut self, delta: Vec2, degrees_per_px: f32) {
        self.pitch += f64::from(delta.y * degrees_per_px);
        self.yaw += f64::from(delta.x * degrees_per_px);
    }

    #[inline]
    pub fn advance_yaw(&mut self, degrees: f32) {
        self.yaw += f64::from(degrees);
    }

    pub fn css_transform(&self, perspective_px: f32) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            perspective_px, self.pitch, self.yaw
        )
    }
}
