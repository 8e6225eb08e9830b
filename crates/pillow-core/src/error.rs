/// Failures surfaced by the upload/filter pipeline.
///
/// Everything here is local to the filter step: the session turns any of
/// these into a `Failed` status and drops back to the upload prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("no image data in upload")]
    EmptyUpload,
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("image is {width}x{height}, larger than the {max_width}x{max_height} limit")]
    TooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
    #[error("invalid image dimensions")]
    Dimensions,
    #[error("image encode failed: {0}")]
    Encode(String),
}
