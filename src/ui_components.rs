//! 再利用可能な UI コンポーネント／ヘルパー関数。
//!
//! - カードフレームや見出し、サイズスライダーなど、コントロール側とプレビュー側の
//!   両方で使う部品をまとめています。

use eframe::egui;

use crate::theme::Theme;
use crate::ui_theme::{colors, font_sizes, layout};

/// 縦中央揃えのテキスト入力欄を作成
pub fn styled_text_edit(text: &mut String) -> egui::TextEdit<'_> {
    egui::TextEdit::singleline(text)
        .font(egui::TextStyle::Body)
        .margin(egui::Margin::symmetric(8.0, 6.0))
}

/// セクション見出しラベルを作成
pub fn section_title(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(font_sizes::SECTION).strong()
}

/// フィールドラベルを作成
pub fn field_label(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(font_sizes::LABEL).strong()
}

/// 補助テキスト（灰色の小さい文字）
pub fn muted_text(text: impl Into<String>, size: f32) -> egui::RichText {
    egui::RichText::new(text.into())
        .size(size)
        .color(colors::TEXT_MUTED)
}

/// テーマの panel / shadow を使ったカードフレームを作成
pub fn card_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.panel)
        .stroke(egui::Stroke::new(1.0, theme.panel_border))
        .rounding(egui::Rounding::same(layout::CARD_ROUNDING))
        .inner_margin(egui::Margin::same(layout::CARD_PADDING))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 1.0),
            blur: theme.shadow.blur,
            spread: 0.0,
            color: theme.shadow.color,
        })
}

/// 「ラベル ... 50%」の見出し行と、0〜100 のスライダーを描画する。値が変わったら true。
pub fn render_size_slider(ui: &mut egui::Ui, label: &str, value: &mut u8) -> bool {
    ui.horizontal(|ui| {
        ui.label(field_label(&format!("- {label} +")));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{value}%")).size(font_sizes::LABEL));
        });
    });

    let before = *value;
    ui.add_sized(
        [ui.available_width(), 18.0],
        egui::Slider::new(value, 0..=100)
            .show_value(false)
            .clamping(egui::SliderClamping::Always),
    );
    *value != before
}

/// 十字の移動アイコン（ホバー時にオーバーレイ上へ表示する）
pub fn draw_move_badge(painter: &egui::Painter, center: egui::Pos2, radius: f32) {
    painter.circle_filled(center, radius, colors::MOVE_BADGE);
    let arm = radius * 0.6;
    let stroke = egui::Stroke::new(1.2, egui::Color32::WHITE);
    painter.line_segment(
        [center - egui::vec2(arm, 0.0), center + egui::vec2(arm, 0.0)],
        stroke,
    );
    painter.line_segment(
        [center - egui::vec2(0.0, arm), center + egui::vec2(0.0, arm)],
        stroke,
    );
}
