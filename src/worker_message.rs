//! 読み込みスレッドから UI へ送られるメッセージ型。
//!
//! - 画像ファイルの読み込みは UI スレッドの外で行い、完了したらこのメッセージで結果を返す。
//! - どのメッセージも `generation` を持ち、UI 側は最新の読み込み以外の結果を捨てる。

use eframe::egui::ColorImage;

use crate::error::UploadRejection;

/// 読み込みが完了した画像
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file_name: String,
    pub mime: &'static str,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
    /// 元画像のサイズ [幅, 高さ]。デコードできない画像なら `None`。
    pub pixel_size: Option<[usize; 2]>,
    /// 表示用にデコードしたピクセル（`MAX_TEXTURE_SIDE` 以内に縮小済み）。
    pub pixels: Option<ColorImage>,
}

/// 読み込みスレッドから UI へ送られるメッセージ。
///
/// - `ImageLoaded` : 読み込みとエンコードが完了した。状態を 1 回の遷移で差し替える。
/// - `ImageFailed` : 検証は通ったが読み込みに失敗した（ファイル消失など）。状態は変えない。
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    ImageLoaded { generation: u64, image: LoadedImage },
    ImageFailed {
        generation: u64,
        rejection: UploadRejection,
    },
}

impl WorkerMessage {
    pub fn generation(&self) -> u64 {
        match self {
            WorkerMessage::ImageLoaded { generation, .. } => *generation,
            WorkerMessage::ImageFailed { generation, .. } => *generation,
        }
    }
}
