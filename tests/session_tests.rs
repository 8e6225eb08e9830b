// Host-side tests for the designer session: upload, re-sizing, generations.

use glam::Vec2;
use image::{Rgba, RgbaImage};
use pillow_core::*;

const RED: Rgba<u8> = Rgba([200, 30, 40, 255]);

/// White backdrop with a red block and one see-through corner.
fn photo(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([250, 250, 250, 255]));
    for y in height / 4..height * 3 / 4 {
        for x in width / 4..width * 3 / 4 {
            img.put_pixel(x, y, RED);
        }
    }
    img.put_pixel(0, 0, Rgba([90, 90, 90, 3]));
    img
}

fn upload(width: u32, height: u32) -> UploadedAsset {
    let png = encode_png(&photo(width, height)).unwrap();
    UploadedAsset::new("photo.png", "image/png", png)
}

/// Pick a file and deliver its bytes right away.
fn pick_upload(
    session: &mut DesignSession,
    asset: Option<UploadedAsset>,
) -> Option<(FilterRequest, Transition)> {
    let pick = session.begin_pick();
    session.begin_upload(pick, asset)
}

fn run_and_complete(session: &mut DesignSession, request: &FilterRequest) -> Completion {
    let result = request.run();
    session.complete(request.generation, result)
}

#[test]
fn empty_selection_is_ignored() {
    let mut s = DesignSession::default();
    assert!(s.begin_upload(Generation::default(), None).is_none());
    assert_eq!(s.generation(), Generation::default());
    assert_eq!(*s.status(), SessionStatus::Empty);
}

#[test]
fn upload_filters_and_starts_spinning() {
    let mut s = DesignSession::default();
    let (request, t) = pick_upload(&mut s, Some(upload(80, 40))).unwrap();
    assert_eq!(t.to, PreviewMode::Idle);
    assert_eq!(
        *s.status(),
        SessionStatus::Processing {
            generation: request.generation
        }
    );
    assert!(s.filtered().is_none());

    let completion = run_and_complete(&mut s, &request);
    let Completion::Applied(t) = completion else {
        panic!("expected applied, got {:?}", completion);
    };
    assert_eq!(t.clock(), Some(ClockCommand::Start));
    assert_eq!(*s.status(), SessionStatus::Ready);
    assert!(s.preview().is_auto_rotating());

    let filtered = s.filtered().unwrap();
    assert_eq!(filtered.image.dimensions(), (80, 40));
    assert_eq!(filtered.image.get_pixel(0, 0).0, [90, 90, 90, 0]);
    assert_eq!(filtered.image.get_pixel(1, 1).0, [255, 255, 255, 255]);
    assert_eq!(*filtered.image.get_pixel(40, 20), RED);
    assert_eq!(filtered.stats.transparent, 1);

    let dims = s.dimensions().unwrap();
    assert_eq!((dims.width_inches, dims.height_inches), (22.0, 11.0));
}

#[test]
fn changing_tier_only_changes_dimensions() {
    let mut s = DesignSession::default();
    let (request, _) = pick_upload(&mut s, Some(upload(40, 80))).unwrap();
    run_and_complete(&mut s, &request);
    let before = s.filtered().unwrap().image.clone();

    let request = s.select_tier("$60").expect("re-run with an upload present");
    assert_eq!(request.nominal_inches, 18.0);
    let completion = run_and_complete(&mut s, &request);
    assert!(matches!(completion, Completion::Applied(t) if !t.changed()));

    assert_eq!(s.filtered().unwrap().image, before);
    let dims = s.dimensions().unwrap();
    assert_eq!((dims.width_inches, dims.height_inches), (9.0, 18.0));
    assert_eq!(s.tier().map(|t| t.label), Some("$60"));
}

#[test]
fn tier_change_keeps_manual_orientation() {
    let mut s = DesignSession::default();
    let (request, _) = pick_upload(&mut s, Some(upload(20, 20))).unwrap();
    run_and_complete(&mut s, &request);
    s.pointer_down(Vec2::new(0.0, 0.0));
    s.pointer_move(Vec2::new(10.0, 10.0));
    s.pointer_up();
    let o = s.preview().orientation();

    let request = s.select_tier("$90").unwrap();
    run_and_complete(&mut s, &request);
    assert_eq!(s.preview().mode(), PreviewMode::Manual);
    assert_eq!(s.preview().orientation(), o);
}

#[test]
fn reselecting_same_tier_is_a_no_op() {
    let mut s = DesignSession::default();
    let (request, _) = pick_upload(&mut s, Some(upload(20, 20))).unwrap();
    run_and_complete(&mut s, &request);
    let generation = s.generation();
    assert!(s.select_tier(DEFAULT_TIER_LABEL).is_none());
    assert_eq!(s.generation(), generation);
}

#[test]
fn tier_change_without_upload_only_records_selection() {
    let mut s = DesignSession::default();
    assert!(s.select_tier("$90").is_none());
    assert_eq!(s.selected_label(), "$90");
    let (request, _) = pick_upload(&mut s, Some(upload(10, 10))).unwrap();
    assert_eq!(request.nominal_inches, 26.0);
}

#[test]
fn last_request_wins() {
    let mut s = DesignSession::default();
    let (first, _) = pick_upload(&mut s, Some(upload(80, 40))).unwrap();
    let second = s.select_tier("$90").unwrap();
    assert!(second.generation > first.generation);

    assert_eq!(run_and_complete(&mut s, &first), Completion::Stale);
    assert!(s.filtered().is_none());
    assert!(matches!(
        run_and_complete(&mut s, &second),
        Completion::Applied(_)
    ));
    assert_eq!(s.dimensions().unwrap().width_inches, 26.0);

    // a late result from the older run cannot overwrite the newer one
    assert_eq!(run_and_complete(&mut s, &first), Completion::Stale);
    assert_eq!(s.dimensions().unwrap().width_inches, 26.0);
    assert_eq!(s.filtered().unwrap().generation, second.generation);
}

#[test]
fn new_upload_supersedes_pending_one() {
    let mut s = DesignSession::default();
    let (old, _) = pick_upload(&mut s, Some(upload(80, 40))).unwrap();
    let (new, _) = pick_upload(&mut s, Some(upload(40, 80))).unwrap();
    assert_eq!(run_and_complete(&mut s, &old), Completion::Stale);
    run_and_complete(&mut s, &new);
    assert_eq!(s.filtered().unwrap().image.dimensions(), (40, 80));
}

#[test]
fn decode_failure_reverts_to_idle() {
    let mut s = DesignSession::default();
    let (good, _) = pick_upload(&mut s, Some(upload(20, 20))).unwrap();
    run_and_complete(&mut s, &good);

    let garbage = UploadedAsset::new("notes.txt", "text/plain", b"definitely not an image".to_vec());
    let (request, t) = pick_upload(&mut s, Some(garbage)).unwrap();
    assert_eq!(t.clock(), Some(ClockCommand::Stop));

    let completion = run_and_complete(&mut s, &request);
    assert!(matches!(completion, Completion::Failed(_)));
    assert!(matches!(
        s.status(),
        SessionStatus::Failed {
            error: PreviewError::Decode(_)
        }
    ));
    assert!(s.upload().is_none());
    assert!(s.filtered().is_none());
    assert!(s.dimensions().is_none());
    assert_eq!(s.preview().mode(), PreviewMode::Idle);

    // and a retry works
    let (retry, _) = pick_upload(&mut s, Some(upload(20, 20))).unwrap();
    assert!(matches!(
        run_and_complete(&mut s, &retry),
        Completion::Applied(_)
    ));
}

#[test]
fn empty_upload_is_reported() {
    let mut s = DesignSession::default();
    let empty = UploadedAsset::new("empty.png", "image/png", Vec::new());
    let (request, _) = pick_upload(&mut s, Some(empty)).unwrap();
    assert_eq!(request.run().unwrap_err(), PreviewError::EmptyUpload);
}

#[test]
fn oversized_upload_is_rejected() {
    let png = encode_png(&photo(32, 8)).unwrap();
    let err = decode_upload(
        &png,
        DecodeLimits {
            max_width: 16,
            max_height: 16,
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        PreviewError::TooLarge {
            width: 32,
            height: 8,
            max_width: 16,
            max_height: 16
        }
    );
    assert!(decode_upload(&png, DecodeLimits::default()).is_ok());
}

#[test]
fn clear_discards_in_flight_work() {
    let mut s = DesignSession::default();
    let (request, _) = pick_upload(&mut s, Some(upload(20, 20))).unwrap();
    s.clear();
    assert_eq!(run_and_complete(&mut s, &request), Completion::Stale);
    assert_eq!(*s.status(), SessionStatus::Empty);
    assert_eq!(s.preview().mode(), PreviewMode::Idle);
}

#[test]
fn reset_from_any_state_resumes_auto() {
    let mut s = DesignSession::default();
    let (request, _) = pick_upload(&mut s, Some(upload(20, 20))).unwrap();
    run_and_complete(&mut s, &request);
    for _ in 0..5 {
        s.tick();
    }
    s.pointer_down(Vec2::new(5.0, 5.0));
    s.pointer_move(Vec2::new(25.0, 45.0));
    s.pointer_up();
    assert!(!s.tick());

    s.reset_rotation();
    assert_eq!(s.preview().orientation(), Orientation::ZERO);
    assert!(s.preview().is_auto_rotating());
    assert!(s.tick());
}

#[test]
fn submit_is_a_placeholder() {
    let mut s = DesignSession::default();
    assert_eq!(s.submit(), SubmitOutcome::NothingToSubmit);
    let (request, _) = pick_upload(&mut s, Some(upload(80, 40))).unwrap();
    run_and_complete(&mut s, &request);
    assert_eq!(
        s.submit(),
        SubmitOutcome::Placeholder {
            tier_label: "$70".to_string(),
            dimensions: PrintDimensions {
                width_inches: 22.0,
                height_inches: 11.0
            }
        }
    );
}

#[test]
fn filtered_asset_encodes_back_to_png() {
    let mut s = DesignSession::default();
    let (request, _) = pick_upload(&mut s, Some(upload(16, 16))).unwrap();
    run_and_complete(&mut s, &request);
    let png = s.filtered().unwrap().to_png().unwrap();
    let decoded = decode_upload(&png, DecodeLimits::default()).unwrap();
    assert_eq!(&decoded, &s.filtered().unwrap().image);
}

#[test]
fn slow_read_of_an_earlier_pick_is_dropped() {
    let mut s = DesignSession::default();
    let slow = s.begin_pick();
    let fast = s.begin_pick();

    let (request, _) = s.begin_upload(fast, Some(upload(40, 80))).unwrap();
    assert!(s.begin_upload(slow, Some(upload(80, 40))).is_none());
    assert_eq!(s.generation(), request.generation);

    assert!(matches!(
        run_and_complete(&mut s, &request),
        Completion::Applied(_)
    ));
    let d = s.dimensions().unwrap();
    assert!(d.height_inches > d.width_inches, "{}", d);
}

#[test]
fn clear_drops_reads_still_in_flight() {
    let mut s = DesignSession::default();
    let pick = s.begin_pick();
    s.clear();
    assert!(!s.is_latest_pick(pick));
    assert!(s.begin_upload(pick, Some(upload(20, 20))).is_none());
    assert!(s.upload().is_none());
}
