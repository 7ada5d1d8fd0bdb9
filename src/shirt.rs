//! シャツ本体の色と、色ごとの画像アセット。

use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShirtColor {
    #[default]
    Black,
    White,
    Red,
    Green,
    Yellow,
}

impl ShirtColor {
    pub const ALL: [ShirtColor; 5] = [
        ShirtColor::Black,
        ShirtColor::White,
        ShirtColor::Red,
        ShirtColor::Green,
        ShirtColor::Yellow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShirtColor::Black => "black",
            ShirtColor::White => "white",
            ShirtColor::Red => "red",
            ShirtColor::Green => "green",
            ShirtColor::Yellow => "yellow",
        }
    }

    /// スウォッチの塗り色（CSS の名前付き色と同じ値）
    pub fn swatch(self) -> Color32 {
        match self {
            ShirtColor::Black => Color32::BLACK,
            ShirtColor::White => Color32::WHITE,
            ShirtColor::Red => Color32::from_rgb(0xFF, 0x00, 0x00),
            ShirtColor::Green => Color32::from_rgb(0x00, 0x80, 0x00),
            ShirtColor::Yellow => Color32::from_rgb(0xFF, 0xFF, 0x00),
        }
    }

    pub fn asset_file_name(self) -> String {
        format!("tshirt-{}.png", self.name())
    }

    /// `<asset_dir>/tshirt-<color>.png`
    pub fn asset_path(self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(self.asset_file_name())
    }
}
