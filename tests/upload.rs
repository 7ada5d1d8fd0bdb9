use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::{engine::general_purpose, Engine as _};
use eframe::egui;
use tshirt_designer::error::UploadRejection;
use tshirt_designer::upload::{
    encode_data_uri, mime_for_extension, texture_pixels, validate, FileCandidate, UploadSlot,
    MAX_TEXTURE_SIDE, MAX_UPLOAD_BYTES,
};
use tshirt_designer::worker_message::{LoadedImage, WorkerMessage};

/// 2x2 の PNG を書き出してパスを返す
fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
    img.save(&path).expect("failed to write png fixture");
    path
}

/// 読み込み中の処理がすべて終わるまで待つ
fn wait_until_idle(slot: &mut UploadSlot) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while slot.is_loading() && Instant::now() < deadline {
        slot.wait(Duration::from_millis(100));
    }
    assert!(!slot.is_loading(), "upload did not finish in time");
}

fn bytes_candidate(name: &str, mime: &str, len: usize) -> FileCandidate {
    FileCandidate::from_bytes(name, mime, Arc::from(vec![0u8; len]))
}

#[test]
fn extension_mapping_covers_allow_list() {
    assert_eq!(mime_for_extension("a.jpg"), Some("image/jpeg"));
    assert_eq!(mime_for_extension("a.JPEG"), Some("image/jpeg"));
    assert_eq!(mime_for_extension("a.png"), Some("image/png"));
    assert_eq!(mime_for_extension("a.webp"), Some("image/webp"));
    assert_eq!(mime_for_extension("a.gif"), None);
    assert_eq!(mime_for_extension("noext"), None);
}

#[test]
fn valid_png_becomes_data_uri_of_its_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "logo.png");
    let bytes = fs::read(&path).unwrap();

    let mut slot = UploadSlot::new();
    let candidate = FileCandidate::from_path(&path).unwrap();
    let generation = slot.offer(vec![candidate]).unwrap();
    assert!(slot.is_loading());
    // 読み込み完了までは画像は無いまま
    assert!(!slot.has_image());

    wait_until_idle(&mut slot);

    let image = slot.image().expect("image should be stored");
    assert_eq!(image.generation, generation);
    assert_eq!(image.file_name, "logo.png");
    assert_eq!(image.pixel_size, Some([2, 2]));

    let uri = slot.data_uri().unwrap();
    let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
    assert_eq!(general_purpose::STANDARD.decode(payload).unwrap(), bytes);

    let (pixel_generation, pixels) = slot.take_fresh_pixels().unwrap();
    assert_eq!(pixel_generation, generation);
    assert_eq!(pixels.size, [2, 2]);
    assert!(slot.take_fresh_pixels().is_none());
}

#[test]
fn disallowed_mime_type_is_rejected() {
    let mut slot = UploadSlot::new();
    let err = slot
        .offer(vec![bytes_candidate("anim.gif", "image/gif", 10)])
        .unwrap_err();
    assert!(matches!(err, UploadRejection::UnsupportedType { .. }));
    assert!(!slot.has_image());
    assert!(!slot.is_loading());
    assert_eq!(slot.last_rejection(), Some(&err));

    // 拡張子が許可されていても、申告された MIME タイプが許可外なら拒否
    assert!(validate(vec![bytes_candidate("a.png", "image/gif", 10)]).is_err());
    // 拡張子が許可外なら MIME タイプが正しくても拒否
    assert!(validate(vec![bytes_candidate("a.bmp", "image/png", 10)]).is_err());
    // 拡張子が無くても MIME タイプが許可されていれば受け付ける
    assert_eq!(
        validate(vec![bytes_candidate("clipboard", "image/webp", 10)])
            .unwrap()
            .1,
        "image/webp"
    );
}

#[test]
fn size_limit_is_inclusive_at_five_megabytes() {
    let exact = bytes_candidate("a.png", "", MAX_UPLOAD_BYTES as usize);
    assert!(validate(vec![exact]).is_ok());

    let over = bytes_candidate("a.png", "", MAX_UPLOAD_BYTES as usize + 1);
    assert!(matches!(
        validate(vec![over]),
        Err(UploadRejection::TooLarge { .. })
    ));
}

#[test]
fn oversized_file_on_disk_leaves_preview_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_png(dir.path(), "good.png");
    let big = dir.path().join("big.png");
    fs::File::create(&big)
        .unwrap()
        .set_len(MAX_UPLOAD_BYTES + 1)
        .unwrap();

    let mut slot = UploadSlot::new();
    slot.offer(vec![FileCandidate::from_path(&good).unwrap()])
        .unwrap();
    wait_until_idle(&mut slot);
    let before = slot.image().cloned();

    let err = slot
        .offer(vec![FileCandidate::from_path(&big).unwrap()])
        .unwrap_err();
    assert!(matches!(err, UploadRejection::TooLarge { .. }));
    assert_eq!(slot.image().cloned(), before);
}

#[test]
fn two_files_at_once_are_rejected() {
    let mut slot = UploadSlot::new();
    let err = slot
        .offer(vec![
            bytes_candidate("a.png", "image/png", 10),
            bytes_candidate("b.png", "image/png", 10),
        ])
        .unwrap_err();
    assert_eq!(err, UploadRejection::TooManyFiles { count: 2 });
    assert!(!slot.has_image());
    assert_eq!(slot.generation(), 0);
}

/// 検証は通るがデコードできない画像も data URI としては保存される。
#[test]
fn undecodable_image_is_still_stored() {
    let mut slot = UploadSlot::new();
    let bytes: Arc<[u8]> = Arc::from(b"definitely not a png".to_vec());
    slot.offer(vec![FileCandidate::from_bytes("fake.png", "", bytes.clone())])
        .unwrap();
    wait_until_idle(&mut slot);

    let image = slot.image().unwrap();
    assert_eq!(image.pixel_size, None);
    assert_eq!(image.aspect_ratio(), 1.0);
    assert_eq!(image.data_uri, encode_data_uri("image/png", &bytes));
    assert!(slot.take_fresh_pixels().is_none());
}

/// 続けて 2 つ読み込んだ場合、完了順に関係なく新しい方が残る。
#[test]
fn newer_upload_wins_over_stale_completion() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_png(dir.path(), "first.png");
    let second = write_png(dir.path(), "second.png");

    let mut slot = UploadSlot::new();
    slot.offer(vec![FileCandidate::from_path(&first).unwrap()])
        .unwrap();
    let latest = slot
        .offer(vec![FileCandidate::from_path(&second).unwrap()])
        .unwrap();
    wait_until_idle(&mut slot);

    let image = slot.image().unwrap();
    assert_eq!(image.generation, latest);
    assert_eq!(image.file_name, "second.png");
}

#[test]
fn stale_message_is_discarded() {
    let mut slot = UploadSlot::new();
    slot.offer(vec![FileCandidate::from_bytes(
        "x.png",
        "",
        Arc::from(vec![1u8, 2, 3]),
    )])
    .unwrap();
    wait_until_idle(&mut slot);
    let current = slot.image().cloned();

    let stale = WorkerMessage::ImageLoaded {
        generation: 0,
        image: LoadedImage {
            file_name: "old.png".to_string(),
            mime: "image/png",
            data_uri: encode_data_uri("image/png", &[9, 9]),
            pixel_size: None,
            pixels: None,
        },
    };
    assert!(!slot.apply(stale));
    assert_eq!(slot.image().cloned(), current);
}

/// 小さなファイルでも一辺が極端に長い画像は、GPU に渡す前に縮小される。
#[test]
fn very_wide_image_is_downscaled_for_display() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banner.png");
    image::RgbaImage::from_pixel(20_000, 4, image::Rgba([0, 128, 255, 255]))
        .save(&path)
        .unwrap();
    assert!(fs::metadata(&path).unwrap().len() <= MAX_UPLOAD_BYTES);

    let mut slot = UploadSlot::new();
    let generation = slot
        .offer(vec![FileCandidate::from_path(&path).unwrap()])
        .unwrap();
    wait_until_idle(&mut slot);

    let image = slot.image().unwrap();
    assert_eq!(image.pixel_size, Some([20_000, 4]));
    assert!((image.aspect_ratio() - 4.0 / 20_000.0).abs() < 1e-7);

    let (pixel_generation, pixels) = slot.take_fresh_pixels().unwrap();
    assert_eq!(pixel_generation, generation);
    let side = MAX_TEXTURE_SIDE as usize;
    assert!(pixels.size[0] <= side && pixels.size[1] <= side);
    assert_eq!(pixels.size[0], side);
    assert!(pixels.size[1] >= 1);
}

#[test]
fn small_image_keeps_its_resolution() {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(300, 200));
    assert_eq!(texture_pixels(&img).size, [300, 200]);

    let tall = image::DynamicImage::ImageRgba8(image::RgbaImage::new(10, 5_000));
    let pixels = texture_pixels(&tall);
    assert_eq!(pixels.size[1], MAX_TEXTURE_SIDE as usize);
    assert!(pixels.size[0] <= 10);
}

/// チャネル経由で遅れて届いた古い完了通知は、`poll` でも捨てられる。
#[test]
fn out_of_order_completion_through_channel_is_ignored() {
    let mut slot = UploadSlot::new();
    let first = slot.offer(vec![bytes_candidate("first.png", "", 8)]).unwrap();
    wait_until_idle(&mut slot);
    let latest = slot.offer(vec![bytes_candidate("second.png", "", 8)]).unwrap();
    wait_until_idle(&mut slot);
    assert!(latest > first);

    let sender = slot.sender();
    sender
        .send(WorkerMessage::ImageLoaded {
            generation: first,
            image: LoadedImage {
                file_name: "first.png".to_string(),
                mime: "image/png",
                data_uri: encode_data_uri("image/png", &[0; 8]),
                pixel_size: None,
                pixels: None,
            },
        })
        .unwrap();
    sender
        .send(WorkerMessage::ImageFailed {
            generation: first,
            rejection: UploadRejection::NoFile,
        })
        .unwrap();

    assert!(!slot.poll());
    let image = slot.image().unwrap();
    assert_eq!(image.generation, latest);
    assert_eq!(image.file_name, "second.png");
    assert_eq!(slot.last_rejection(), None);
}

#[test]
fn dropped_path_is_uploaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "dropped.png");

    let mut state = tshirt_designer::app::CustomizerState::new(Default::default());
    let dropped = egui::DroppedFile {
        path: Some(path),
        ..Default::default()
    };
    state.handle_dropped_files(vec![dropped]).unwrap();
    wait_until_idle(&mut state.upload);
    assert!(state.upload.data_uri().unwrap().starts_with("data:image/png;base64,"));
    assert!(state.image_size_slider_visible());
}

#[test]
fn dropping_two_files_changes_nothing() {
    let mut state = tshirt_designer::app::CustomizerState::new(Default::default());
    let files = vec![
        egui::DroppedFile {
            name: "a.png".to_string(),
            bytes: Some(Arc::from(vec![0u8; 4])),
            ..Default::default()
        },
        egui::DroppedFile {
            name: "b.png".to_string(),
            bytes: Some(Arc::from(vec![0u8; 4])),
            ..Default::default()
        },
    ];
    let err = state.handle_dropped_files(files).unwrap_err();
    assert_eq!(err, UploadRejection::TooManyFiles { count: 2 });
    assert!(!state.upload.has_image());
    assert!(!state.upload.is_loading());
    assert!(state.placeholder_visible());
}
