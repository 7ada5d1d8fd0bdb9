//! egui スタイル設定まわりをまとめたモジュール。
//!
//! 起動時と、Alt+Q でテーマが切り替わったときに `apply_theme` が呼ばれ、
//! アプリ全体の見た目をアクティブなテーマに合わせる。

use eframe::egui;

use crate::theme::Theme;
use crate::ui_theme::{font_sizes, layout};

/// テーマの色をグローバルな egui スタイルに反映する。
pub fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();

    style.visuals = if theme.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(16.0);
    style.spacing.slider_width = 220.0;

    style.visuals.override_text_color = Some(theme.text);
    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.panel;
    style.visuals.extreme_bg_color = theme.background;
    style.visuals.faint_bg_color = theme.panel;
    style.visuals.window_stroke = egui::Stroke::new(1.0, theme.panel_border);
    style.visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 2.0),
        blur: theme.shadow.blur,
        spread: 0.0,
        color: theme.shadow.color,
    };

    let rounding = egui::Rounding::same(layout::INPUT_ROUNDING);
    style.visuals.window_rounding = egui::Rounding::same(layout::CARD_ROUNDING);
    style.visuals.widgets.noninteractive.rounding = rounding;
    style.visuals.widgets.inactive.rounding = rounding;
    style.visuals.widgets.hovered.rounding = rounding;
    style.visuals.widgets.active.rounding = rounding;

    // 入力欄の枠線はテーマの input 色
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.input_border);
    style.visuals.widgets.inactive.weak_bg_fill = theme.background;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.accent);
    style.visuals.widgets.active.bg_fill = theme.accent;
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, theme.accent);

    style.visuals.selection.bg_fill = theme.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, theme.accent);

    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(font_sizes::TITLE));
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(font_sizes::BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Small, egui::FontId::proportional(font_sizes::LABEL));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(font_sizes::BODY));

    ctx.set_style(style);
}
