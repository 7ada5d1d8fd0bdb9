//! アプリケーション状態をまとめたモジュール。
//!
//! - `CustomizerState`: egui に依存しない状態コンテナ。すべての変更はここの setter を通る。
//!   フォントサイズや画像幅などの派生値は保持せず、毎フレーム状態から計算し直す。
//! - `DesignerApp`: `CustomizerState` に、描画用のテクスチャキャッシュを加えたもの。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{self, Key, Modifiers, TextureHandle};

use crate::app_style::apply_theme;
use crate::config::Config;
use crate::design::Design;
use crate::drag::DragHandle;
use crate::error::{DesignerResult, TextTooLong, UploadRejection};
use crate::measurements::{Build, Height, Measurements, Weight};
use crate::shirt::ShirtColor;
use crate::sizing::SizePercent;
use crate::submission::{submit_design, LogSink, SubmissionReceipt, SubmissionSink};
use crate::text_overlay::{TextColor, TextOverlay};
use crate::theme::{ShortcutSubscription, Theme, ThemeRegistry};
use crate::upload::{FileCandidate, UploadSlot};

/// プレビュー領域に何も無いときの案内文
pub const PLACEHOLDER_PROMPT: &str = "Add an image or text to see your design";

pub struct CustomizerState {
    pub config: Config,
    pub themes: ThemeRegistry,
    shortcut: ShortcutSubscription,
    pub measurements: Measurements,
    pub upload: UploadSlot,
    pub text: TextOverlay,
    pub shirt_color: ShirtColor,
    pub image_drag: DragHandle,
    pub text_drag: DragHandle,
    /// ファイルがウィンドウ上にホバーされている（ドロップゾーンを強調表示する）
    pub files_hovered: bool,
    /// 送信完了の確認ダイアログを表示中か
    pub show_submitted: bool,
    pub last_receipt: Option<SubmissionReceipt>,
    /// 送信失敗などを 1 行で表示する
    pub status: Option<String>,
    sink: Box<dyn SubmissionSink>,
}

impl CustomizerState {
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: Config, sink: Box<dyn SubmissionSink>) -> Self {
        let themes = ThemeRegistry::new(config.initial_theme);
        Self {
            config,
            themes,
            shortcut: ShortcutSubscription::attach(),
            measurements: Measurements::default(),
            upload: UploadSlot::new(),
            text: TextOverlay::default(),
            shirt_color: ShirtColor::default(),
            image_drag: DragHandle::default(),
            text_drag: DragHandle::default(),
            files_hovered: false,
            show_submitted: false,
            last_receipt: None,
            status: None,
            sink,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.themes.active()
    }

    // ===== キーボード =====

    /// キー押下を処理する。テーマが切り替わったら true。
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        self.shortcut.handle_key(&mut self.themes, key, modifiers)
    }

    pub fn shortcut_attached(&self) -> bool {
        self.shortcut.is_attached()
    }

    pub fn detach_shortcuts(&mut self) {
        self.shortcut.detach();
    }

    // ===== 体型 =====

    pub fn set_height(&mut self, height: Height) {
        self.measurements.height = height;
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.measurements.weight = weight;
    }

    pub fn set_build(&mut self, build: Build) {
        self.measurements.build = build;
    }

    // ===== 画像 =====

    /// ウィンドウにドロップされたファイルを処理する
    pub fn handle_dropped_files(
        &mut self,
        files: Vec<egui::DroppedFile>,
    ) -> Result<u64, UploadRejection> {
        let count = files.len();
        if count > 1 {
            return Err(self
                .upload
                .record_rejection(UploadRejection::TooManyFiles { count }));
        }
        let candidates = files
            .into_iter()
            .map(FileCandidate::from_dropped)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|r| self.upload.record_rejection(r))?;
        self.upload.offer(candidates)
    }

    /// ファイル選択ダイアログで選ばれたパスを処理する
    pub fn upload_path(&mut self, path: impl Into<PathBuf>) -> Result<u64, UploadRejection> {
        let candidate =
            FileCandidate::from_path(path).map_err(|r| self.upload.record_rejection(r))?;
        self.upload.offer(vec![candidate])
    }

    pub fn set_image_size(&mut self, size: u8) {
        self.upload.size = SizePercent::new(size);
    }

    pub fn image_size_slider_visible(&self) -> bool {
        self.upload.has_image()
    }

    // ===== テキスト =====

    pub fn set_text(&mut self, input: &str) -> Result<(), TextTooLong> {
        self.text.set_text(input)
    }

    pub fn set_text_size(&mut self, size: u8) {
        self.text.size = SizePercent::new(size);
    }

    pub fn set_text_color(&mut self, color: TextColor) {
        self.text.color = color;
    }

    pub fn set_text_background(&mut self, enabled: bool) {
        self.text.background = enabled;
    }

    /// テキストオーバーレイとサイズスライダーの表示可否
    pub fn text_overlay_visible(&self) -> bool {
        self.text.has_text()
    }

    // ===== シャツ =====

    pub fn select_shirt_color(&mut self, color: ShirtColor) {
        self.shirt_color = color;
    }

    pub fn shirt_asset_path(&self) -> PathBuf {
        self.shirt_color.asset_path(Path::new(&self.config.asset_dir))
    }

    pub fn swatch_active(&self, color: ShirtColor) -> bool {
        self.shirt_color == color
    }

    pub fn placeholder_visible(&self) -> bool {
        !self.upload.has_image() && !self.text.has_text()
    }

    // ===== 送信 =====

    /// 現在の状態からデザインを組み立てる
    pub fn design(&self) -> Design {
        Design {
            measurements: self.measurements,
            image_data_uri: self.upload.data_uri().map(str::to_string),
            text: self
                .text
                .has_text()
                .then(|| self.text.text().to_string()),
            text_size_percent: self.text.size,
            image_size_percent: self.upload.size,
            text_color: self.text.color,
            text_background_enabled: self.text.background,
            shirt_color: self.shirt_color,
            text_position: self.text_drag.position(),
            image_position: self.image_drag.position(),
        }
    }

    /// デザインを送信先に渡す。成功したら確認ダイアログを表示状態にする。
    pub fn submit(&mut self) -> DesignerResult<()> {
        let design = self.design();
        match submit_design(self.sink.as_mut(), design) {
            Ok(receipt) => {
                self.last_receipt = Some(receipt);
                self.show_submitted = true;
                self.status = None;
                Ok(())
            }
            Err(e) => {
                log::error!("Submission failed: {e}");
                self.status = Some(format!("Submission failed: {e}"));
                Err(e)
            }
        }
    }

    pub fn acknowledge_submission(&mut self) {
        self.show_submitted = false;
    }
}

/// egui アプリ本体。状態と、描画に使うテクスチャを持つ。
pub struct DesignerApp {
    pub state: CustomizerState,
    /// 色ごとのシャツ画像。読み込みに失敗した色は `None` を入れて再試行しない。
    pub shirt_textures: HashMap<ShirtColor, Option<TextureHandle>>,
    /// アップロード画像のテクスチャ（世代番号つき）
    pub upload_texture: Option<(u64, TextureHandle)>,
    /// 直近に適用したテーマのインデックス
    pub applied_theme: Option<usize>,
}

impl DesignerApp {
    pub fn with_config(ctx: &egui::Context, config: Config) -> Self {
        let state = CustomizerState::new(config);
        apply_theme(ctx, state.theme());
        Self {
            applied_theme: Some(state.themes.index()),
            state,
            shirt_textures: HashMap::new(),
            upload_texture: None,
        }
    }
}
