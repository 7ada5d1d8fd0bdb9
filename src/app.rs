//! GUI アプリケーション本体（`eframe::App` の実装）。
//!
//! 1 フレームの処理順:
//! 1. 読み込みスレッドからのメッセージを反映する
//! 2. キーボード（Alt+Q）とファイルのホバー／ドロップを処理する
//! 3. テーマが変わっていればスタイルを適用し直す
//! 4. パネルを描画する

use eframe::{egui, App};

pub use crate::app_state::{CustomizerState, DesignerApp, PLACEHOLDER_PROMPT};
use crate::app_style::apply_theme;
use crate::shirt::ShirtColor;
use crate::upload::texture_pixels;

impl DesignerApp {
    /// 選択中の色のシャツ画像。初回に読み込み、失敗した色は以後 `None` のまま。
    pub fn shirt_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        let color = self.state.shirt_color;
        let path = self.state.shirt_asset_path();
        self.shirt_textures
            .entry(color)
            .or_insert_with(|| load_shirt_texture(ctx, color, &path))
            .clone()
    }

    /// 指定世代のアップロード画像のテクスチャ（デコードできなかった画像なら `None`）
    pub fn upload_texture_for(&self, generation: u64) -> Option<egui::TextureHandle> {
        match &self.upload_texture {
            Some((g, texture)) if *g == generation => Some(texture.clone()),
            _ => None,
        }
    }

    fn sync_upload(&mut self, ctx: &egui::Context) {
        if self.state.upload.poll() {
            ctx.request_repaint();
        }
        if let Some((generation, pixels)) = self.state.upload.take_fresh_pixels() {
            let texture = ctx.load_texture(
                format!("upload-{generation}"),
                pixels,
                egui::TextureOptions::LINEAR,
            );
            self.upload_texture = Some((generation, texture));
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (keys, hovered, dropped) = ctx.input(|i| {
            let keys: Vec<(egui::Key, egui::Modifiers)> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect();
            (keys, !i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone())
        });

        for (key, modifiers) in keys {
            self.state.handle_key(key, modifiers);
        }

        self.state.files_hovered = hovered;
        if !dropped.is_empty() {
            // 拒否された場合は状態が変わらないだけ（ログとヒントは state 側で残る）
            let _ = self.state.handle_dropped_files(dropped);
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let index = self.state.themes.index();
        if self.applied_theme != Some(index) {
            apply_theme(ctx, self.state.theme());
            self.applied_theme = Some(index);
        }
    }
}

fn load_shirt_texture(
    ctx: &egui::Context,
    color: ShirtColor,
    path: &std::path::Path,
) -> Option<egui::TextureHandle> {
    match image::open(path) {
        Ok(img) => Some(ctx.load_texture(
            color.asset_file_name(),
            texture_pixels(&img),
            egui::TextureOptions::LINEAR,
        )),
        Err(e) => {
            log::warn!("Shirt asset {} could not be loaded: {e}", path.display());
            None
        }
    }
}

impl App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_upload(ctx);
        self.handle_input(ctx);
        self.sync_theme(ctx);

        crate::ui_panels::render_header(self, ctx);
        crate::ui_panels::render_main_panel(self, ctx);
        crate::ui_panels::render_submitted_window(self, ctx);

        // 読み込み中はメッセージを拾うために再描画を続ける
        if self.state.upload.is_loading() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.detach_shortcuts();
    }
}
