use crate::constants::*;
use smallvec::SmallVec;

/// One copy of the filtered image in the fake-depth stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthLayer {
    pub depth_px: f32,
    pub brightness: f32,
    pub blur_px: f32,
    pub scale: f32,
    pub opacity: f32,
}

pub type LayerStack = SmallVec<[DepthLayer; DEPTH_LAYER_COUNT + 1]>;

impl DepthLayer {
    pub fn front() -> Self {
        Self {
            depth_px: FRONT_DEPTH_PX,
            brightness: FRONT_BRIGHTNESS,
            blur_px: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    /// Rear copy `index` (0 = just behind the front). All falloffs are linear.
    pub fn behind(index: usize) -> Self {
        let i = index as f32;
        Self {
            depth_px: LAYER_DEPTH_START_PX - LAYER_DEPTH_STEP_PX * i,
            brightness: 1.0 - LAYER_BRIGHTNESS_STEP * i,
            blur_px: LAYER_BLUR_STEP_PX * i,
            scale: 1.0 - LAYER_SCALE_STEP * i,
            opacity: (LAYER_OPACITY_START - LAYER_OPACITY_STEP * i).max(0.0),
        }
    }

    pub fn css_filter(&self) -> String {
        if self.blur_px > 0.0 {
            format!("brightness({}) blur({}px)", self.brightness, self.blur_px)
        } else {
            format!("brightness({})", self.brightness)
        }
    }

    pub fn css_transform(&self) -> String {
        if self.scale == 1.0 {
            format!("translateZ({}px)", self.depth_px)
        } else {
            format!("translateZ({}px) scale({})", self.depth_px, self.scale)
        }
    }
}

/// Front layer first, then `DEPTH_LAYER_COUNT` progressively dimmer copies.
pub fn depth_stack() -> LayerStack {
    let mut stack = LayerStack::new();
    stack.push(DepthLayer::front());
    stack.extend((0..DEPTH_LAYER_COUNT).map(DepthLayer::behind));
    stack
}
