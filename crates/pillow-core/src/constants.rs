// Shared tuning constants for the matting filter and the rotation preview.

// Matting thresholds (8-bit channel values)
pub const TRANSPARENT_ALPHA_MAX: u8 = 10; // alpha below this is forced fully transparent
pub const TRANSLUCENT_ALPHA_MAX: u8 = 128; // alpha below this is treated as background
pub const WHITE_CHANNEL_MIN: u8 = 240; // r, g and b all above this is treated as background

// Decode guard
pub const MAX_UPLOAD_WIDTH: u32 = 8192;
pub const MAX_UPLOAD_HEIGHT: u32 = 8192;

// Sizing
pub const FALLBACK_NOMINAL_INCHES: f64 = 22.0; // used when a tier label is unknown
pub const DIMENSION_DECIMALS: i32 = 2;

// Interaction
pub const DRAG_DEGREES_PER_PIXEL: f32 = 0.5; // a full-width drag is roughly a half turn
pub const AUTO_ROTATE_DEGREES_PER_FRAME: f32 = 0.5; // yaw advance per display refresh

// Projection
pub const PERSPECTIVE_PX: f32 = 1200.0;

// Depth stack
pub const DEPTH_LAYER_COUNT: usize = 10;
pub const FRONT_DEPTH_PX: f32 = 60.0;
pub const FRONT_BRIGHTNESS: f32 = 1.05;
pub const LAYER_DEPTH_START_PX: f32 = 50.0;
pub const LAYER_DEPTH_STEP_PX: f32 = 10.0;
pub const LAYER_BRIGHTNESS_STEP: f32 = 0.03;
pub const LAYER_BLUR_STEP_PX: f32 = 0.3;
pub const LAYER_SCALE_STEP: f32 = 0.005;
pub const LAYER_OPACITY_START: f32 = 0.85;
pub const LAYER_OPACITY_STEP: f32 = 0.05;

// Image bounds inside the preview stage
pub const PREVIEW_MAX_WIDTH_PX: u32 = 350;
pub const PREVIEW_MAX_HEIGHT_PX: u32 = 450;
