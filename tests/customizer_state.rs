use std::sync::{Arc, Mutex};

use eframe::egui::{Key, Modifiers};
use tshirt_designer::app::{CustomizerState, PLACEHOLDER_PROMPT};
use tshirt_designer::config::Config;
use tshirt_designer::design::Design;
use tshirt_designer::drag::Position;
use tshirt_designer::error::DesignerResult;
use tshirt_designer::measurements::{display_label, Build, Height, Measurements, Weight};
use tshirt_designer::shirt::ShirtColor;
use tshirt_designer::sizing::SizePercent;
use tshirt_designer::submission::SubmissionSink;
use tshirt_designer::text_overlay::TextColor;

/// 受け取ったデザインを記録するだけの送信先
#[derive(Clone, Default)]
struct RecordingSink {
    designs: Arc<Mutex<Vec<Design>>>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, design: &Design) -> DesignerResult<()> {
        self.designs.lock().unwrap().push(design.clone());
        Ok(())
    }
}

struct FailingSink;

impl SubmissionSink for FailingSink {
    fn submit(&mut self, _design: &Design) -> DesignerResult<()> {
        Err("order service unavailable".into())
    }
}

#[test]
fn default_state_shows_only_the_placeholder() {
    let state = CustomizerState::new(Config::default());
    assert!(state.placeholder_visible());
    assert!(!state.text_overlay_visible());
    assert!(!state.image_size_slider_visible());
    assert_eq!(PLACEHOLDER_PROMPT, "Add an image or text to see your design");

    assert_eq!(state.measurements, Measurements::default());
    assert_eq!(state.measurements.height, Height::Cm180);
    assert_eq!(state.measurements.weight, Weight::Kg80);
    assert_eq!(state.measurements.build, Build::Athletic);
    assert_eq!(state.shirt_color, ShirtColor::Black);
    assert_eq!(state.text.color, TextColor::White);
    assert_eq!(state.theme().name, "Minimal");
    assert!(state.shortcut_attached());
}

#[test]
fn selecting_red_switches_asset_and_swatch() {
    let mut state = CustomizerState::new(Config::default());
    state.select_shirt_color(ShirtColor::Red);

    assert!(state.shirt_asset_path().ends_with("tshirt-red.png"));
    assert!(state.shirt_asset_path().starts_with("assets"));
    for color in ShirtColor::ALL {
        assert_eq!(state.swatch_active(color), color == ShirtColor::Red);
    }
}

#[test]
fn typing_hello_shows_text_overlay() {
    let mut state = CustomizerState::new(Config::default());
    state.set_text("HELLO").unwrap();

    assert!(state.text_overlay_visible());
    assert!(!state.placeholder_visible());
    assert_eq!(state.text.text(), "HELLO");
    assert!((state.text.font_size() - 23.0).abs() < 1e-4);

    state.set_text_size(0);
    assert!((state.text.font_size() - 14.0).abs() < 1e-4);
}

#[test]
fn over_length_text_leaves_state_unchanged() {
    let mut state = CustomizerState::new(Config::default());
    state.set_text("0123456789ABCDE").unwrap();
    assert!(state.set_text("0123456789ABCDEF").is_err());
    assert_eq!(state.text.text(), "0123456789ABCDE");
}

#[test]
fn alt_q_cycles_theme_through_state() {
    let mut state = CustomizerState::new(Config::default());
    let alt = Modifiers {
        alt: true,
        ..Default::default()
    };

    assert!(!state.handle_key(Key::Q, Modifiers::NONE));
    assert!(state.handle_key(Key::Q, alt));
    assert_eq!(state.theme().name, "Dark");
    assert!(state.handle_key(Key::Q, alt));
    assert!(state.handle_key(Key::Q, alt));
    assert_eq!(state.theme().name, "Minimal");

    state.detach_shortcuts();
    assert!(!state.handle_key(Key::Q, alt));
}

#[test]
fn config_initial_theme_is_used() {
    let config = Config {
        initial_theme: 2,
        ..Config::default()
    };
    let state = CustomizerState::new(config);
    assert_eq!(state.theme().name, "Vintage");
}

#[test]
fn submitting_measurements_only_yields_empty_optionals() {
    let sink = RecordingSink::default();
    let mut state = CustomizerState::with_sink(Config::default(), Box::new(sink.clone()));
    state.set_height(Height::Cm170);
    state.set_weight(Weight::Kg70);
    state.set_build(Build::Lean);

    state.submit().unwrap();
    assert!(state.show_submitted);

    let designs = sink.designs.lock().unwrap();
    assert_eq!(designs.len(), 1);
    let design = &designs[0];
    assert_eq!(
        design.measurements,
        Measurements {
            height: Height::Cm170,
            weight: Weight::Kg70,
            build: Build::Lean,
        }
    );
    assert_eq!(design.image_data_uri, None);
    assert_eq!(design.text, None);
    assert_eq!(design.text_size_percent, SizePercent::default());
    assert_eq!(design.image_size_percent, SizePercent::default());
    assert_eq!(design.text_color, TextColor::White);
    assert!(!design.text_background_enabled);
    assert_eq!(design.shirt_color, ShirtColor::Black);
    assert_eq!(design.text_position, Position::ORIGIN);
    assert_eq!(design.image_position, Position::ORIGIN);

    drop(designs);
    state.acknowledge_submission();
    assert!(!state.show_submitted);
    assert!(state.last_receipt.is_some());
}

#[test]
fn design_collects_text_options_and_positions() {
    let mut state = CustomizerState::new(Config::default());
    state.set_text("TEAM").unwrap();
    state.set_text_color(TextColor::Blue);
    state.set_text_background(true);
    state.set_text_size(80);
    state.set_image_size(10);
    state.select_shirt_color(ShirtColor::Yellow);

    state
        .text_drag
        .begin(eframe::egui::pos2(0.0, 0.0), None);
    state.text_drag.update(eframe::egui::pos2(12.0, -8.0));
    state.text_drag.end();

    let design = state.design();
    assert_eq!(design.text.as_deref(), Some("TEAM"));
    assert_eq!(design.text_color, TextColor::Blue);
    assert!(design.text_background_enabled);
    assert_eq!(design.text_size_percent.get(), 80);
    assert_eq!(design.image_size_percent.get(), 10);
    assert_eq!(design.shirt_color, ShirtColor::Yellow);
    assert_eq!(design.text_position, Position::new(12.0, -8.0));
    assert_eq!(design.image_position, Position::ORIGIN);
}

#[test]
fn design_json_uses_form_values() {
    let mut state = CustomizerState::new(Config::default());
    state.set_height(Height::Cm170);
    state.set_text_color(TextColor::Red);
    let json: serde_json::Value = serde_json::to_value(state.design()).unwrap();

    assert_eq!(json["measurements"]["height"], "170cm");
    assert_eq!(json["measurements"]["weight"], "80kg");
    assert_eq!(json["measurements"]["build"], "athletic");
    assert_eq!(json["textColor"], "#FF0000");
    assert_eq!(json["shirtColor"], "black");
    assert_eq!(json["textSizePercent"], 50);
    assert!(json["imageDataUri"].is_null());
    assert!(json["text"].is_null());
}

#[test]
fn failing_sink_is_reported_and_no_acknowledgment_shown() {
    let mut state = CustomizerState::with_sink(Config::default(), Box::new(FailingSink));
    assert!(state.submit().is_err());
    assert!(!state.show_submitted);
    assert!(state
        .status
        .as_deref()
        .unwrap()
        .contains("order service unavailable"));
}

#[test]
fn measurement_labels_are_capitalized() {
    assert_eq!(display_label(Build::Athletic.value()), "Athletic");
    assert_eq!(display_label(Height::Cm160.value()), "160cm");
    assert_eq!(display_label("height"), "Height");
    assert_eq!(Height::ALL.len(), 5);
    assert_eq!(Weight::ALL.len(), 5);
    assert_eq!(Build::ALL.len(), 4);
}
