// DOM hooks and presentation strings used by the web frontend.
// Kept free of crate imports so host-side tests can include it directly.

// Element ids
pub const PREVIEW_SURFACE_ID: &str = "preview-surface"; // pointer-down target
pub const PREVIEW_AREA_ID: &str = "preview-area";
pub const PREVIEW_STAGE_ID: &str = "preview-stage"; // carries the rotation transform
pub const UPLOAD_PROMPT_ID: &str = "upload-prompt";
pub const PREVIEW_CONTROLS_ID: &str = "preview-controls";
pub const RESET_BUTTON_ID: &str = "reset-rotation";
pub const RESET_LABEL_ID: &str = "reset-label";
pub const DIMENSION_WIDTH_ID: &str = "dimension-width";
pub const DIMENSION_HEIGHT_ID: &str = "dimension-height";
pub const DIMENSION_READOUT_ID: &str = "dimension-readout";
pub const DIMENSION_TEXT_ID: &str = "dimension-text";
pub const DRAG_HINT_ID: &str = "drag-hint";
pub const SIZE_TIERS_ID: &str = "size-tiers";
pub const SUBMIT_BUTTON_ID: &str = "submit-photo";
pub const UPLOAD_ERROR_ID: &str = "upload-error";
pub const PROCESSING_ID: &str = "processing";

// Selectors and classes
pub const UPLOAD_INPUT_SELECTOR: &str = "input.upload-input";
pub const HIDDEN_CLASS: &str = "hidden";
pub const TIER_BUTTON_CLASS: &str = "tier-button";
pub const SELECTED_CLASS: &str = "selected";
pub const TIER_LABEL_ATTR: &str = "data-tier";

// Copy
pub const RESET_LABEL_AUTO: &str = "Auto Rotating";
pub const RESET_LABEL_MANUAL: &str = "Reset & Auto";
pub const DRAG_HINT_TEXT: &str = "Drag to manually rotate or let it auto-rotate";
pub const RETRY_PROMPT: &str = "We couldn't read that image. Please choose another JPG, PNG or GIF.";

// Stage styling
pub const STAGE_TRANSITION_IDLE: &str = "transform 0.1s linear";
pub const STAGE_TRANSITION_DRAGGING: &str = "none";
pub const PNG_MIME: &str = "image/png";
