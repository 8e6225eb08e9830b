//! Rotation state machine for the inflated preview.
//!
//! ```text
//!            asset_ready              pointer_down
//!   Idle ─────────────────▶ AutoRotating ─────────────▶ UserDragging ◀─┐
//!    ▲                           ▲                        │   │ move   │
//!    │ asset_cleared             │ reset                  │   └────────┘
//!    └──────── (any) ◀───────────┴──── Manual ◀───────────┘ pointer_up
//! ```
//!
//! Only `AutoRotating` advances on `tick`. Every operation reports the
//! transition it made so the caller can start or cancel its frame clock.

use crate::constants::{AUTO_ROTATE_DEGREES_PER_FRAME, DRAG_DEGREES_PER_PIXEL, PERSPECTIVE_PX};
use crate::orientation::Orientation;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewParams {
    pub drag_degrees_per_px: f32,
    pub auto_degrees_per_frame: f32,
    pub perspective_px: f32,
}

impl Default for PreviewParams {
    fn default() -> Self {
        Self {
            drag_degrees_per_px: DRAG_DEGREES_PER_PIXEL,
            auto_degrees_per_frame: AUTO_ROTATE_DEGREES_PER_FRAME,
            perspective_px: PERSPECTIVE_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewMode {
    /// No filtered image yet; only the upload prompt is shown.
    #[default]
    Idle,
    AutoRotating,
    UserDragging,
    /// Rendered but still, after a drag ended. Stays here until reset.
    Manual,
}

impl PreviewMode {
    #[inline]
    pub fn has_asset(self) -> bool {
        self != PreviewMode::Idle
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockCommand {
    Start,
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: PreviewMode,
    pub to: PreviewMode,
}

impl Transition {
    #[inline]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// What the auto-rotate clock must do after this transition, if anything.
    pub fn clock(&self) -> Option<ClockCommand> {
        let was = self.from == PreviewMode::AutoRotating;
        let is = self.to == PreviewMode::AutoRotating;
        match (was, is) {
            (false, true) => Some(ClockCommand::Start),
            (true, false) => Some(ClockCommand::Stop),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub dragging: bool,
    pub anchor: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct RotationPreview {
    pub params: PreviewParams,
    orientation: Orientation,
    mode: PreviewMode,
    interaction: InteractionState,
}

impl RotationPreview {
    pub fn new(params: PreviewParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[inline]
    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[inline]
    pub fn is_auto_rotating(&self) -> bool {
        self.mode == PreviewMode::AutoRotating
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.mode == PreviewMode::UserDragging
    }

    pub fn css_transform(&self) -> String {
        self.orientation.css_transform(self.params.perspective_px)
    }

    fn go(&mut self, to: PreviewMode) -> Transition {
        let t = Transition {
            from: self.mode,
            to,
        };
        if t.changed() {
            log::debug!("[preview] {:?} -> {:?}", t.from, t.to);
        }
        self.mode = to;
        t
    }

    /// A transition that leaves the mode where it is.
    pub fn unchanged(&self) -> Transition {
        Transition {
            from: self.mode,
            to: self.mode,
        }
    }

    /// A filtered image became available: start spinning.
    pub fn asset_ready(&mut self) -> Transition {
        self.interaction = InteractionState::default();
        self.go(PreviewMode::AutoRotating)
    }

    pub fn asset_cleared(&mut self) -> Transition {
        self.interaction = InteractionState::default();
        self.go(PreviewMode::Idle)
    }

    pub fn pointer_down(&mut self, pos: Vec2) -> Transition {
        if !self.mode.has_asset() {
            return self.unchanged();
        }
        self.interaction = InteractionState {
            dragging: true,
            anchor: pos,
        };
        self.go(PreviewMode::UserDragging)
    }

    /// Relative drag: the anchor follows the pointer after every move.
    pub fn pointer_move(&mut self, pos: Vec2) -> Transition {
        if self.mode != PreviewMode::UserDragging {
            return self.unchanged();
        }
        let delta = pos - self.interaction.anchor;
        self.orientation
            .apply_drag(delta, self.params.drag_degrees_per_px);
        self.interaction.anchor = pos;
        self.unchanged()
    }

    pub fn pointer_up(&mut self) -> Transition {
        if self.mode != PreviewMode::UserDragging {
            return self.unchanged();
        }
        self.interaction = InteractionState::default();
        self.go(PreviewMode::Manual)
    }

    /// Zero the orientation and resume auto-rotation (if there is anything to show).
    pub fn reset(&mut self) -> Transition {
        self.orientation = Orientation::ZERO;
        self.interaction = InteractionState::default();
        if self.mode.has_asset() {
            self.go(PreviewMode::AutoRotating)
        } else {
            self.unchanged()
        }
    }

    /// One display refresh. Returns whether the orientation advanced.
    pub fn tick(&mut self) -> bool {
        if self.mode != PreviewMode::AutoRotating {
            return false;
        }
        self.orientation
            .advance_yaw(self.params.auto_degrees_per_frame);
        true
    }
}
