//! 画像アップロード（ドラッグ＆ドロップ / ファイル選択）。
//!
//! - 受け付けるのは jpeg / png / webp の 1 ファイルのみ、5MB まで。
//! - 検証に通ったファイルはバックグラウンドスレッドで読み込み、base64 の data URI に変換する。
//! - スロットは 1 つだけ。新しい読み込みを始めると世代番号が進み、古い読み込みの結果は捨てられる。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use eframe::egui::{self, ColorImage};
use image::DynamicImage;

use crate::error::UploadRejection;
use crate::sizing::{image_width_percent, SizePercent};
use crate::worker_message::{LoadedImage, WorkerMessage};

/// 5 MiB。ちょうど 5 MiB は受け付ける。
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];
/// テクスチャ一辺の上限（px）。これより大きい画像は GPU に渡す前に縮小する。
pub const MAX_TEXTURE_SIDE: u32 = 2048;

/// ファイルの中身の取得元
#[derive(Debug, Clone)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// アップロード候補のファイル（まだ読み込んでいない）
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    /// 申告された MIME タイプ。ネイティブのドロップでは空のことが多い。
    pub mime: String,
    pub size: u64,
    pub source: FileSource,
}

impl FileCandidate {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, UploadRejection> {
        let path = path.into();
        let name = file_name_of(&path);
        let meta = fs::metadata(&path).map_err(|e| UploadRejection::Unreadable {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            mime: String::new(),
            size: meta.len(),
            source: FileSource::Path(path),
        })
    }

    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size: bytes.len() as u64,
            source: FileSource::Bytes(bytes),
        }
    }

    /// egui のドロップイベントから候補を作る。web ではバイト列、ネイティブではパスが入っている。
    pub fn from_dropped(file: egui::DroppedFile) -> Result<Self, UploadRejection> {
        if let Some(bytes) = file.bytes {
            let name = if file.name.is_empty() {
                file.path.as_deref().map(file_name_of).unwrap_or_default()
            } else {
                file.name
            };
            return Ok(Self::from_bytes(name, file.mime, bytes));
        }
        match file.path {
            Some(path) => {
                let mut candidate = Self::from_path(path)?;
                candidate.mime = file.mime;
                Ok(candidate)
            }
            None => Err(UploadRejection::Unreadable {
                name: file.name,
                reason: "dropped file has neither a path nor contents".to_string(),
            }),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// 拡張子から MIME タイプを求める（許可リストにある拡張子のみ）
pub fn mime_for_extension(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpeg" | "jpg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// 種類の検査。data URI に使う MIME タイプを返す。
///
/// - 拡張子がある場合は許可リストに含まれていなければならない。
/// - MIME タイプが申告されていればそれも許可リストに含まれていなければならない。
/// - 申告が無ければ拡張子から決める。
fn accepted_mime(candidate: &FileCandidate) -> Result<&'static str, UploadRejection> {
    let unsupported = || UploadRejection::UnsupportedType {
        name: candidate.name.clone(),
        mime: candidate.mime.clone(),
    };

    let has_extension = Path::new(&candidate.name).extension().is_some();
    let from_extension = mime_for_extension(&candidate.name);
    if has_extension && from_extension.is_none() {
        return Err(unsupported());
    }

    let declared = candidate.mime.trim().to_ascii_lowercase();
    if declared.is_empty() {
        return from_extension.ok_or_else(unsupported);
    }
    ACCEPTED_MIME_TYPES
        .iter()
        .copied()
        .find(|m| *m == declared)
        .ok_or_else(unsupported)
}

/// 候補一覧を検証し、受け付ける 1 ファイルとその MIME タイプを返す。
///
/// 2 つ以上渡された場合はすべて拒否する。
pub fn validate(
    mut candidates: Vec<FileCandidate>,
) -> Result<(FileCandidate, &'static str), UploadRejection> {
    if candidates.len() > 1 {
        return Err(UploadRejection::TooManyFiles {
            count: candidates.len(),
        });
    }
    let candidate = candidates.pop().ok_or(UploadRejection::NoFile)?;
    let mime = accepted_mime(&candidate)?;
    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge {
            name: candidate.name,
            size: candidate.size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok((candidate, mime))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

/// テクスチャ用のピクセルに変換する。一辺が `MAX_TEXTURE_SIDE` を超える場合は縦横比を保って縮小する。
pub fn texture_pixels(img: &DynamicImage) -> ColorImage {
    let rgba = if img.width() > MAX_TEXTURE_SIDE || img.height() > MAX_TEXTURE_SIDE {
        img.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE).to_rgba8()
    } else {
        img.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// 表示用に画像をデコードする。元画像のサイズと、縮小済みのピクセルを返す。
/// 失敗しても致命的ではないので `None` を返す。
fn decode_pixels(name: &str, bytes: &[u8]) -> Option<([usize; 2], ColorImage)> {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let original = [img.width() as usize, img.height() as usize];
            Some((original, texture_pixels(&img)))
        }
        Err(e) => {
            log::warn!("{name} was accepted but could not be decoded for display: {e}");
            None
        }
    }
}

/// 候補ファイルを同期的に読み込み、data URI とピクセルを作る。
pub fn read_candidate(
    candidate: FileCandidate,
    mime: &'static str,
) -> Result<LoadedImage, UploadRejection> {
    let bytes: Arc<[u8]> = match candidate.source {
        FileSource::Bytes(bytes) => bytes,
        FileSource::Path(ref path) => fs::read(path)
            .map_err(|e| UploadRejection::Unreadable {
                name: candidate.name.clone(),
                reason: e.to_string(),
            })?
            .into(),
    };

    // 検証後にファイルが差し替えられた場合
    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge {
            name: candidate.name,
            size: bytes.len() as u64,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let decoded = decode_pixels(&candidate.name, &bytes);
    Ok(LoadedImage {
        data_uri: encode_data_uri(mime, &bytes),
        pixel_size: decoded.as_ref().map(|(size, _)| *size),
        pixels: decoded.map(|(_, pixels)| pixels),
        file_name: candidate.name,
        mime,
    })
}

/// 現在表示している画像
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime: &'static str,
    pub data_uri: String,
    pub generation: u64,
    /// デコード済みなら元画像のピクセルサイズ [幅, 高さ]（テクスチャ縮小前）
    pub pixel_size: Option<[usize; 2]>,
}

impl UploadedImage {
    /// 高さ / 幅。デコードできていなければ 1.0 として扱う。
    pub fn aspect_ratio(&self) -> f32 {
        match self.pixel_size {
            Some([w, h]) if w > 0 => h as f32 / w as f32,
            _ => 1.0,
        }
    }
}

/// 単一スロットの画像アップローダ
pub struct UploadSlot {
    generation: u64,
    pending: Option<u64>,
    image: Option<UploadedImage>,
    /// UI がテクスチャを作るまで保持しておくピクセル
    fresh_pixels: Option<(u64, ColorImage)>,
    last_rejection: Option<UploadRejection>,
    pub size: SizePercent,
    sender: mpsc::Sender<WorkerMessage>,
    receiver: mpsc::Receiver<WorkerMessage>,
}

impl Default for UploadSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSlot {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            generation: 0,
            pending: None,
            image: None,
            fresh_pixels: None,
            last_rejection: None,
            size: SizePercent::default(),
            sender,
            receiver,
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn data_uri(&self) -> Option<&str> {
        self.image.as_ref().map(|img| img.data_uri.as_str())
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_rejection(&self) -> Option<&UploadRejection> {
        self.last_rejection.as_ref()
    }

    /// 画像の表示幅（プレビュー幅に対する %）
    pub fn width_percent(&self) -> f32 {
        image_width_percent(self.size)
    }

    /// 候補を検証し、受け付けたらバックグラウンドで読み込みを始める。
    ///
    /// 拒否した場合は表示中の画像も読み込み中の処理も変更しない。
    pub fn offer(&mut self, candidates: Vec<FileCandidate>) -> Result<u64, UploadRejection> {
        let (candidate, mime) = validate(candidates).map_err(|r| self.record_rejection(r))?;

        self.generation += 1;
        let generation = self.generation;
        self.pending = Some(generation);
        self.last_rejection = None;
        log::info!(
            "Reading {} ({} bytes, {mime}) as upload #{generation}",
            candidate.name,
            candidate.size
        );

        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let message = match read_candidate(candidate, mime) {
                Ok(image) => WorkerMessage::ImageLoaded { generation, image },
                Err(rejection) => WorkerMessage::ImageFailed {
                    generation,
                    rejection,
                },
            };
            // スロットが破棄済みなら結果は不要
            let _ = sender.send(message);
        });

        Ok(generation)
    }

    /// 拒否を記録する。表示中の画像と読み込み中の処理には触れない。
    pub fn record_rejection(&mut self, rejection: UploadRejection) -> UploadRejection {
        log::warn!("Upload rejected: {rejection}");
        self.last_rejection = Some(rejection.clone());
        rejection
    }

    /// 届いているメッセージをすべて処理する。状態が変わったら true。
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.receiver.try_recv() {
            changed |= self.apply(message);
        }
        changed
    }

    /// メッセージを 1 件だけ待って処理する。タイムアウトした場合や古い結果だった場合は false。
    pub fn wait(&mut self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(message) => self.apply(message),
            Err(_) => false,
        }
    }

    /// 読み込み結果を反映する。最新の世代以外は捨てる。
    pub fn apply(&mut self, message: WorkerMessage) -> bool {
        let generation = message.generation();
        if generation != self.generation {
            log::debug!(
                "Discarding stale upload #{generation} (current #{})",
                self.generation
            );
            return false;
        }
        self.pending = None;

        match message {
            WorkerMessage::ImageLoaded { image, .. } => {
                log::info!(
                    "Upload #{generation} ready: {} ({} chars of data URI)",
                    image.file_name,
                    image.data_uri.len()
                );
                let pixel_size = image.pixel_size;
                self.fresh_pixels = image.pixels.map(|p| (generation, p));
                self.image = Some(UploadedImage {
                    file_name: image.file_name,
                    mime: image.mime,
                    data_uri: image.data_uri,
                    generation,
                    pixel_size,
                });
                true
            }
            WorkerMessage::ImageFailed { rejection, .. } => {
                log::warn!("Upload #{generation} failed: {rejection}");
                self.last_rejection = Some(rejection);
                false
            }
        }
    }

    /// 新しく読み込んだ画像のピクセルを取り出す（テクスチャ作成用、1 回だけ）
    pub fn take_fresh_pixels(&mut self) -> Option<(u64, ColorImage)> {
        self.fresh_pixels.take()
    }

    /// 送信用チャネル。スロット外の読み込み元も、結果をこのチャネルへ流し込めば `poll` で反映される。
    pub fn sender(&self) -> mpsc::Sender<WorkerMessage> {
        self.sender.clone()
    }
}
