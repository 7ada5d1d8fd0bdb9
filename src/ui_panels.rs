//! メイン画面のパネル描画ロジック。
//!
//! - ヘッダー、左右 2 カラムのメインパネル、送信完了ダイアログをここで組み立てる。
//! - 状態はすべて `DesignerApp` に持たせ、ここでは描画と入力の受け渡しだけを行う。

use eframe::egui;

use crate::app_state::DesignerApp;
use crate::submission::SUBMITTED_MESSAGE;
use crate::ui_panel_controls::render_controls;
use crate::ui_panel_preview::render_preview_card;
use crate::ui_theme::{font_sizes, layout};

/// タイトルバー（アクセント色の帯）を描画
pub fn render_header(app: &DesignerApp, ctx: &egui::Context) {
    let theme = app.state.theme();
    egui::TopBottomPanel::top("header")
        .show_separator_line(false)
        .frame(
            egui::Frame::none()
                .fill(theme.background)
                .inner_margin(egui::Margin {
                    left: layout::PANEL_MARGIN,
                    right: layout::PANEL_MARGIN,
                    top: layout::PANEL_MARGIN,
                    bottom: 4.0,
                }),
        )
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.accent)
                .rounding(egui::Rounding::same(layout::CARD_ROUNDING))
                .inner_margin(egui::Margin::symmetric(12.0, 10.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Premium T-Shirt Designer")
                                .size(font_sizes::TITLE)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                    });
                });
        });
}

/// メインパネル（左: プレビュー / 右: コントロール）
pub fn render_main_panel(app: &mut DesignerApp, ctx: &egui::Context) {
    let theme = app.state.theme();
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(theme.background)
                .inner_margin(egui::Margin::same(layout::PANEL_MARGIN)),
        )
        .show(ctx, |ui| {
            ui.columns(2, |columns| {
                render_preview_card(app, &mut columns[0]);
                render_controls(app, &mut columns[1]);
            });
        });
}

/// 送信完了の確認ダイアログ。OK を押すまで他の操作を受け付けない。
pub fn render_submitted_window(app: &mut DesignerApp, ctx: &egui::Context) {
    if !app.state.show_submitted {
        return;
    }

    // 背面の操作を塞ぐための半透明レイヤー
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("submitted_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click_and_drag());
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(90));
        });

    let theme = app.state.theme();
    egui::Window::new("Submitted")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(SUBMITTED_MESSAGE).size(font_sizes::SECTION));
                if let Some(receipt) = &app.state.last_receipt {
                    ui.label(
                        egui::RichText::new(format!("Submitted at {}", receipt.submitted_at))
                            .size(font_sizes::LABEL),
                    );
                }
                ui.add_space(10.0);
                let ok = ui.add(
                    egui::Button::new(egui::RichText::new("OK").color(egui::Color32::WHITE))
                        .fill(theme.button)
                        .min_size(egui::vec2(80.0, 28.0)),
                );
                if ok.clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    app.state.acknowledge_submission();
                }
            });
        });
}
