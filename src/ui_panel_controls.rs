//! カスタマイズ用コントロール（体型・画像・テキスト・送信ボタン）。

use eframe::egui;
use rfd::FileDialog;

use crate::app_state::DesignerApp;
use crate::measurements::{display_label, Build, Height, Weight};
use crate::text_overlay::{TextColor, MAX_TEXT_CHARS};
use crate::theme::Theme;
use crate::ui_components::{
    card_frame, field_label, muted_text, render_size_slider, section_title, styled_text_edit,
};
use crate::ui_theme::{colors, font_sizes, layout};
use crate::upload::ACCEPTED_EXTENSIONS;

/// 右カラム全体を描画
pub fn render_controls(app: &mut DesignerApp, ui: &mut egui::Ui) {
    let theme = app.state.theme();

    egui::ScrollArea::vertical()
        .id_salt("controls_scroll")
        .show(ui, |ui| {
            render_measurements_card(app, ui, theme);
            ui.add_space(layout::CARD_GAP);
            render_upload_card(app, ui, theme);
            ui.add_space(layout::CARD_GAP);
            render_text_card(app, ui, theme);
            ui.add_space(layout::CARD_GAP);
            render_submit_button(app, ui, theme);

            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(muted_text(
                    format!("Press Alt+Q to switch themes • Current: {}", theme.name),
                    font_sizes::NOTE,
                ));
                if let Some(status) = &app.state.status {
                    ui.label(
                        egui::RichText::new(status)
                            .size(font_sizes::LABEL)
                            .color(theme.accent),
                    );
                }
            });
        });
}

/// 列挙された選択肢だけを出すコンボボックス。選び直されたら新しい値を返す。
fn render_choice<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    current: T,
    options: &[T],
    value_of: fn(T) -> &'static str,
) -> Option<T> {
    let mut selected = current;
    ui.vertical(|ui| {
        ui.label(field_label(&display_label(label)));
        egui::ComboBox::new(id, "")
            .width(ui.available_width() - 8.0)
            .selected_text(display_label(value_of(current)))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(&mut selected, *option, display_label(value_of(*option)));
                }
            });
    });
    (selected != current).then_some(selected)
}

/// Body Measurements カード
fn render_measurements_card(app: &mut DesignerApp, ui: &mut egui::Ui, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(section_title("Body Measurements"));
        ui.add_space(8.0);

        let m = app.state.measurements;
        ui.columns(3, |columns| {
            if let Some(v) = render_choice(
                &mut columns[0],
                "height",
                "height",
                m.height,
                &Height::ALL,
                Height::value,
            ) {
                app.state.set_height(v);
            }
            if let Some(v) = render_choice(
                &mut columns[1],
                "weight",
                "weight",
                m.weight,
                &Weight::ALL,
                Weight::value,
            ) {
                app.state.set_weight(v);
            }
            if let Some(v) = render_choice(
                &mut columns[2],
                "build",
                "build",
                m.build,
                &Build::ALL,
                Build::value,
            ) {
                app.state.set_build(v);
            }
        });
    });
}

/// Custom Image カード（ドロップゾーン + サイズスライダー）
fn render_upload_card(app: &mut DesignerApp, ui: &mut egui::Ui, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(section_title("Custom Image"));
        ui.add_space(8.0);

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), layout::DROP_ZONE_HEIGHT),
            egui::Sense::click(),
        );
        let border = if app.state.files_hovered {
            colors::DROP_ACTIVE
        } else if response.hovered() {
            colors::TEXT_PLACEHOLDER
        } else {
            colors::DROP_BORDER
        };
        let painter = ui.painter_at(rect);
        if app.state.files_hovered {
            painter.rect_filled(rect, layout::CARD_ROUNDING, colors::DROP_ACTIVE.linear_multiply(0.08));
        }
        painter.rect_stroke(rect.shrink(1.0), layout::CARD_ROUNDING, egui::Stroke::new(2.0, border));

        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(layout::CARD_PADDING))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        match app.state.upload.image().map(|img| img.generation) {
            Some(generation) => {
                if let Some(texture) = app.upload_texture_for(generation) {
                    content.add(
                        egui::Image::new(&texture).fit_to_exact_size(egui::vec2(
                            layout::THUMBNAIL_SIZE,
                            layout::THUMBNAIL_SIZE,
                        )),
                    );
                }
                content.label(egui::RichText::new("Click or drag to replace").size(font_sizes::LABEL));
                content.label(muted_text("PNG, JPG, WEBP (max 5MB)", font_sizes::NOTE));
            }
            None => {
                content.add_space(8.0);
                content.label(muted_text("Drag & drop your image here", font_sizes::BODY));
                content.label(muted_text("or click to browse files", font_sizes::LABEL));
                content.label(muted_text(
                    "Recommended: 1000×1000px transparent PNG",
                    font_sizes::NOTE,
                ));
            }
        }

        if response.clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("Images", &ACCEPTED_EXTENSIONS)
                .pick_file()
            {
                let _ = app.state.upload_path(path);
            }
        }

        if let Some(rejection) = app.state.upload.last_rejection() {
            ui.add_space(4.0);
            ui.label(muted_text(rejection.to_string(), font_sizes::NOTE));
        }

        if app.state.image_size_slider_visible() {
            ui.add_space(12.0);
            let mut size = app.state.upload.size.get();
            if render_size_slider(ui, "Image Size", &mut size) {
                app.state.set_image_size(size);
            }
        }
    });
}

/// Custom Text カード
fn render_text_card(app: &mut DesignerApp, ui: &mut egui::Ui, theme: &Theme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(section_title("Custom Text"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(muted_text(
                    format!("{}/{MAX_TEXT_CHARS} characters", app.state.text.char_count()),
                    font_sizes::LABEL,
                ));
            });
        });
        ui.add_space(8.0);

        // 入力は一旦作業用バッファで受け、setter に通してから状態へ反映する
        let mut buffer = app.state.text.text().to_string();
        let response = ui.add_sized(
            [ui.available_width(), layout::INPUT_HEIGHT],
            styled_text_edit(&mut buffer)
                .char_limit(MAX_TEXT_CHARS)
                .hint_text(format!("Enter text (max {MAX_TEXT_CHARS} characters)")),
        );
        if response.changed() {
            if let Err(e) = app.state.set_text(&buffer) {
                log::debug!("Text input refused: {e}");
            }
        }

        if app.state.text_overlay_visible() {
            ui.add_space(10.0);
            let mut size = app.state.text.size.get();
            if render_size_slider(ui, "Text Size", &mut size) {
                app.state.set_text_size(size);
            }
        }

        ui.add_space(10.0);
        ui.columns(2, |columns| {
            columns[0].label(field_label("Text Color"));
            let current = app.state.text.color;
            let mut selected = current;
            egui::ComboBox::new("text_color", "")
                .selected_text(current.label())
                .show_ui(&mut columns[0], |ui| {
                    for color in TextColor::ALL {
                        ui.selectable_value(&mut selected, color, color.label());
                    }
                });
            if selected != current {
                app.state.set_text_color(selected);
            }

            columns[1].label(field_label("Text Background"));
            let mut background = app.state.text.background;
            if columns[1].checkbox(&mut background, "Add background").changed() {
                app.state.set_text_background(background);
            }
        });
    });
}

/// 送信ボタン
fn render_submit_button(app: &mut DesignerApp, ui: &mut egui::Ui, theme: &Theme) {
    let label = format!("Create Custom T-Shirt - {}", app.state.config.price_label);
    let id = ui.id().with("submit_hover");
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let fill = if hovered { theme.button_hover } else { theme.button };

    let response = ui.add_sized(
        [ui.available_width(), layout::BUTTON_HEIGHT],
        egui::Button::new(
            egui::RichText::new(label)
                .size(font_sizes::BODY)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(fill),
    );
    ui.ctx().data_mut(|d| d.insert_temp(id, response.hovered()));

    if response.clicked() {
        // 失敗時は state 側でログとステータス行に残る
        let _ = app.state.submit();
    }
}
