//! The designer session: one owner for upload, filter output, size selection
//! and preview orientation.
//!
//! Filtering is requested, run elsewhere (it is pure), and handed back with
//! the generation it was issued under. Only the most recently issued
//! generation may land; anything older is dropped as stale.

use crate::catalog::{nominal_inches_for, tier_by_label, SizeTier, DEFAULT_TIER_LABEL};
use crate::decode::{decode_upload, encode_png, DecodeLimits};
use crate::dimensions::PrintDimensions;
use crate::error::PreviewError;
use crate::matting::{matte_in_place, MatteStats, MattingThresholds};
use crate::preview::{PreviewParams, RotationPreview, Transition};
use glam::Vec2;
use image::RgbaImage;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[inline]
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The file as the shopper picked it. Replaced wholesale, never edited.
#[derive(Clone, Debug)]
pub struct UploadedAsset {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl UploadedAsset {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FilteredAsset {
    pub image: RgbaImage,
    pub stats: MatteStats,
    pub generation: Generation,
}

impl FilteredAsset {
    pub fn to_png(&self) -> Result<Vec<u8>, PreviewError> {
        encode_png(&self.image)
    }
}

/// Everything needed to run the filter once, detached from the session.
#[derive(Clone, Debug)]
pub struct FilterRequest {
    pub generation: Generation,
    pub bytes: Arc<[u8]>,
    pub nominal_inches: f64,
    pub thresholds: MattingThresholds,
    pub limits: DecodeLimits,
}

#[derive(Clone, Debug)]
pub struct FilterOutput {
    pub image: RgbaImage,
    pub stats: MatteStats,
    pub dimensions: PrintDimensions,
}

impl FilterRequest {
    /// Decode, strip the background, and size the print.
    pub fn run(&self) -> Result<FilterOutput, PreviewError> {
        let mut image = decode_upload(&self.bytes, self.limits)?;
        let stats = matte_in_place(&mut image, &self.thresholds);
        let dimensions =
            PrintDimensions::from_pixels(image.width(), image.height(), self.nominal_inches)?;
        Ok(FilterOutput {
            image,
            stats,
            dimensions,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionStatus {
    #[default]
    Empty,
    Processing {
        generation: Generation,
    },
    Ready,
    Failed {
        error: PreviewError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied(Transition),
    Failed(Transition),
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    NothingToSubmit,
    /// No backend exists; the order is only logged.
    Placeholder {
        tier_label: String,
        dimensions: PrintDimensions,
    },
}

pub struct DesignSession {
    pub thresholds: MattingThresholds,
    pub limits: DecodeLimits,
    upload: Option<UploadedAsset>,
    filtered: Option<FilteredAsset>,
    selected_label: String,
    dimensions: Option<PrintDimensions>,
    preview: RotationPreview,
    status: SessionStatus,
    generation: Generation,
    latest_pick: Generation,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(
            MattingThresholds::default(),
            DecodeLimits::default(),
            PreviewParams::default(),
        )
    }
}

impl DesignSession {
    pub fn new(
        thresholds: MattingThresholds,
        limits: DecodeLimits,
        preview_params: PreviewParams,
    ) -> Self {
        Self {
            thresholds,
            limits,
            upload: None,
            filtered: None,
            selected_label: DEFAULT_TIER_LABEL.to_string(),
            dimensions: None,
            preview: RotationPreview::new(preview_params),
            status: SessionStatus::Empty,
            generation: Generation::default(),
            latest_pick: Generation::default(),
        }
    }

    pub fn upload(&self) -> Option<&UploadedAsset> {
        self.upload.as_ref()
    }

    pub fn filtered(&self) -> Option<&FilteredAsset> {
        self.filtered.as_ref()
    }

    pub fn dimensions(&self) -> Option<PrintDimensions> {
        self.dimensions
    }

    pub fn preview(&self) -> &RotationPreview {
        &self.preview
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn selected_label(&self) -> &str {
        &self.selected_label
    }

    pub fn tier(&self) -> Option<&'static SizeTier> {
        tier_by_label(&self.selected_label)
    }

    fn issue_request(&mut self) -> Option<FilterRequest> {
        let bytes = self.upload.as_ref()?.bytes.clone();
        self.generation = self.generation.next();
        self.status = SessionStatus::Processing {
            generation: self.generation,
        };
        Some(FilterRequest {
            generation: self.generation,
            bytes,
            nominal_inches: nominal_inches_for(&self.selected_label),
            thresholds: self.thresholds,
            limits: self.limits,
        })
    }

    /// Token for a file the user has just picked, taken before its bytes are
    /// read. Reads finish in any order; only the newest pick may land.
    pub fn begin_pick(&mut self) -> Generation {
        self.latest_pick = self.latest_pick.next();
        self.latest_pick
    }

    pub fn is_latest_pick(&self, pick: Generation) -> bool {
        pick == self.latest_pick
    }

    /// Capture a new upload. `None` (empty file selection) is ignored, and so
    /// is an asset whose pick was superseded while its bytes were being read.
    ///
    /// The previous filtered image no longer matches the upload, so it is
    /// dropped and the preview goes back to idle until the new run lands.
    pub fn begin_upload(
        &mut self,
        pick: Generation,
        asset: Option<UploadedAsset>,
    ) -> Option<(FilterRequest, Transition)> {
        let asset = asset?;
        if !self.is_latest_pick(pick) {
            log::debug!(
                "[upload] dropping {} from pick {} (latest {})",
                asset.name,
                pick,
                self.latest_pick
            );
            return None;
        }
        log::info!(
            "[upload] {} ({}, {} bytes)",
            asset.name,
            asset.mime,
            asset.bytes.len()
        );
        self.upload = Some(asset);
        self.filtered = None;
        self.dimensions = None;
        let transition = self.preview.asset_cleared();
        let request = self.issue_request()?;
        Some((request, transition))
    }

    /// Switch size tier. With an upload present the filter is re-run under a
    /// fresh generation; the pixels come out the same, the dimensions do not.
    pub fn select_tier(&mut self, label: &str) -> Option<FilterRequest> {
        if self.selected_label == label {
            return None;
        }
        if tier_by_label(label).is_none() {
            log::warn!("[size] unknown tier {:?}, sizing falls back to default inches", label);
        }
        self.selected_label = label.to_string();
        self.issue_request()
    }

    /// Land a finished filter run. Results from superseded generations are dropped.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<FilterOutput, PreviewError>,
    ) -> Completion {
        if generation != self.generation || self.upload.is_none() {
            log::debug!(
                "[filter] dropping stale result {} (current {})",
                generation,
                self.generation
            );
            return Completion::Stale;
        }
        match result {
            Ok(out) => {
                self.filtered = Some(FilteredAsset {
                    image: out.image,
                    stats: out.stats,
                    generation,
                });
                self.dimensions = Some(out.dimensions);
                self.status = SessionStatus::Ready;
                let transition = if self.preview.mode().has_asset() {
                    self.preview.unchanged()
                } else {
                    self.preview.asset_ready()
                };
                Completion::Applied(transition)
            }
            Err(error) => {
                log::warn!("[filter] {} failed: {}", generation, error);
                self.upload = None;
                self.filtered = None;
                self.dimensions = None;
                self.status = SessionStatus::Failed { error };
                Completion::Failed(self.preview.asset_cleared())
            }
        }
    }

    /// Drop everything, e.g. when the page goes away. In-flight runs become stale.
    pub fn clear(&mut self) -> Transition {
        self.upload = None;
        self.filtered = None;
        self.dimensions = None;
        self.status = SessionStatus::Empty;
        self.generation = self.generation.next();
        self.latest_pick = self.latest_pick.next();
        self.preview.asset_cleared()
    }

    pub fn pointer_down(&mut self, pos: Vec2) -> Transition {
        self.preview.pointer_down(pos)
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Transition {
        self.preview.pointer_move(pos)
    }

    pub fn pointer_up(&mut self) -> Transition {
        self.preview.pointer_up()
    }

    pub fn reset_rotation(&mut self) -> Transition {
        self.preview.reset()
    }

    pub fn tick(&mut self) -> bool {
        self.preview.tick()
    }

    pub fn submit(&self) -> SubmitOutcome {
        match (&self.filtered, self.dimensions) {
            (Some(_), Some(dimensions)) => {
                log::info!(
                    "[submit] {} pillow at {} (no checkout backend)",
                    self.selected_label,
                    dimensions
                );
                SubmitOutcome::Placeholder {
                    tier_label: self.selected_label.clone(),
                    dimensions,
                }
            }
            _ => {
                log::info!("[submit] nothing to submit yet");
                SubmitOutcome::NothingToSubmit
            }
        }
    }
}
