//! Design Preview カード（シャツ本体・画像／テキストのオーバーレイ・色スウォッチ）。

use eframe::egui;

use crate::app_state::{DesignerApp, PLACEHOLDER_PROMPT};
use crate::drag::{DragHandle, ShirtBounds};
use crate::shirt::ShirtColor;
use crate::text_overlay::TEXT_BACKGROUND;
use crate::ui_components::{card_frame, draw_move_badge, muted_text, section_title};
use crate::ui_theme::{colors, font_sizes, layout};

/// プレビューカードを描画
pub fn render_preview_card(app: &mut DesignerApp, ui: &mut egui::Ui) {
    let theme = app.state.theme();
    card_frame(theme).show(ui, |ui| {
        ui.set_min_height(ui.available_height() - layout::CARD_PADDING * 2.0);

        ui.horizontal(|ui| {
            ui.label(section_title("Design Preview"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // right_to_left なので逆順に並べる
                for color in ShirtColor::ALL.iter().rev() {
                    render_swatch(app, ui, *color);
                }
            });
        });

        ui.add_space(6.0);

        let footer = if app.state.placeholder_visible() { 28.0 } else { 0.0 };
        let size = egui::vec2(
            ui.available_width(),
            (ui.available_height() - footer).max(320.0),
        );
        let (area, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        render_preview_area(app, ui, area);

        if app.state.upload.is_loading() {
            ui.add_space(4.0);
            ui.label(muted_text("Loading image...", font_sizes::LABEL));
        }

        if app.state.placeholder_visible() {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(PLACEHOLDER_PROMPT)
                        .size(font_sizes::LABEL)
                        .color(colors::TEXT_PLACEHOLDER),
                );
            });
        }
    });
}

/// シャツ色のスウォッチ（選択中はリング付き）
fn render_swatch(app: &mut DesignerApp, ui: &mut egui::Ui, color: ShirtColor) {
    let diameter = layout::SWATCH_RADIUS * 2.0 + 4.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::click());
    let painter = ui.painter();
    let center = rect.center();

    painter.circle_filled(center, layout::SWATCH_RADIUS, color.swatch());
    painter.circle_stroke(
        center,
        layout::SWATCH_RADIUS,
        egui::Stroke::new(0.5, colors::DROP_BORDER),
    );
    if app.state.swatch_active(color) {
        painter.circle_stroke(
            center,
            layout::SWATCH_RADIUS + 2.0,
            egui::Stroke::new(1.0, colors::SWATCH_RING),
        );
    }

    let response = response.on_hover_text(format!("{} t-shirt", color.name()));
    if response.clicked() {
        app.state.select_shirt_color(color);
    }
}

/// シャツ画像をプレビュー領域に object-contain で収めた矩形
fn fit_shirt_rect(area: egui::Rect, texture_size: egui::Vec2) -> Option<egui::Rect> {
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 {
        return None;
    }
    let scale = (area.height() / texture_size.y).min(area.width() / texture_size.x);
    Some(egui::Rect::from_center_size(area.center(), texture_size * scale))
}

/// シャツ画像と 2 つのオーバーレイを描画し、ドラッグ操作を処理する
fn render_preview_area(app: &mut DesignerApp, ui: &mut egui::Ui, area: egui::Rect) {
    let ctx = ui.ctx().clone();
    let painter = ui.painter_at(area);
    painter.rect_filled(area, 12.0, colors::PREVIEW_BG);

    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

    // シャツ本体。アセットが無ければ何も描かず、境界も測れない。
    let shirt_rect = app.shirt_texture(&ctx).and_then(|texture| {
        let rect = fit_shirt_rect(area, texture.size_vec2())?;
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
        Some(rect)
    });
    let bounds = shirt_rect.and_then(|rect| ShirtBounds::from_size(rect.size()));

    // 画像オーバーレイ
    if let Some(image) = app.state.upload.image().cloned() {
        let width = area.width() * app.state.upload.width_percent() / 100.0;
        let size = egui::vec2(width, width * image.aspect_ratio());
        let center = area.center() + app.state.image_drag.position().to_vec2();
        let rect = egui::Rect::from_center_size(center, size);

        match app.upload_texture_for(image.generation) {
            Some(texture) => {
                painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
            }
            None => {
                painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, colors::TEXT_MUTED));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &image.file_name,
                    egui::FontId::proportional(font_sizes::NOTE),
                    colors::TEXT_MUTED,
                );
            }
        }

        let response = ui.interact(rect, ui.id().with("image_overlay"), egui::Sense::drag());
        if response.hovered() || response.dragged() {
            ctx.set_cursor_icon(egui::CursorIcon::Move);
            draw_move_badge(&painter, rect.center(), 8.0);
        }
        drive_drag(&response, &mut app.state.image_drag, bounds, "image");
    }

    // テキストオーバーレイ
    if app.state.text_overlay_visible() {
        let overlay = &app.state.text;
        let galley = painter.layout_no_wrap(
            overlay.text().to_string(),
            egui::FontId::proportional(overlay.font_size()),
            overlay.color.color32(),
        );
        let padding = egui::vec2(8.0, 2.0);
        let bold = egui::vec2(layout::BOLD_OFFSET, 0.0);
        let center = area.center() + app.state.text_drag.position().to_vec2();
        let rect = egui::Rect::from_center_size(center, galley.size() + bold + padding * 2.0);

        if overlay.background {
            painter.rect_filled(rect, 4.0, TEXT_BACKGROUND);
        }
        // 既定フォントに太字が無いので、少しずらして重ね描きする
        let color = overlay.color.color32();
        painter.galley(rect.min + padding, galley.clone(), color);
        painter.galley(rect.min + padding + bold, galley, color);

        let response = ui.interact(rect, ui.id().with("text_overlay"), egui::Sense::drag());
        if response.hovered() || response.dragged() {
            ctx.set_cursor_icon(egui::CursorIcon::Move);
            draw_move_badge(&painter, rect.right_top(), 6.0);
        }
        drive_drag(&response, &mut app.state.text_drag, bounds, "text");
    }
}

/// egui のドラッグ応答をジェスチャー状態機械へ流し込む
fn drive_drag(
    response: &egui::Response,
    handle: &mut DragHandle,
    bounds: Option<ShirtBounds>,
    label: &str,
) {
    if response.drag_started() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let press_origin = response
                .ctx
                .input(|i| i.pointer.press_origin())
                .unwrap_or(pointer);
            log::debug!("{label} overlay drag started at {press_origin:?}");
            handle.start(press_origin, pointer, bounds);
        }
    } else if response.dragged() {
        if let Some(pointer) = response.interact_pointer_pos() {
            handle.update(pointer);
        }
    }
    if response.drag_stopped() {
        handle.end();
        log::debug!("{label} overlay moved to {:?}", handle.position());
    }
}
