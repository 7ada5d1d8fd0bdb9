//! テキストオーバーレイの状態（文字列・サイズ・色・背景）。

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::TextTooLong;
use crate::sizing::{text_font_size, SizePercent};

/// テキストの最大文字数
pub const MAX_TEXT_CHARS: usize = 15;

/// テキスト色のパレット。シリアライズ時は CSS の色指定文字列になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextColor {
    #[default]
    #[serde(rename = "white")]
    White,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "#FF0000")]
    Red,
    #[serde(rename = "#00FF00")]
    Green,
    #[serde(rename = "#0000FF")]
    Blue,
}

impl TextColor {
    pub const ALL: [TextColor; 5] = [
        TextColor::White,
        TextColor::Black,
        TextColor::Red,
        TextColor::Green,
        TextColor::Blue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextColor::White => "White",
            TextColor::Black => "Black",
            TextColor::Red => "Red",
            TextColor::Green => "Green",
            TextColor::Blue => "Blue",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
            TextColor::Red => "#FF0000",
            TextColor::Green => "#00FF00",
            TextColor::Blue => "#0000FF",
        }
    }

    pub fn color32(self) -> Color32 {
        match self {
            TextColor::White => Color32::WHITE,
            TextColor::Black => Color32::BLACK,
            TextColor::Red => Color32::from_rgb(0xFF, 0x00, 0x00),
            TextColor::Green => Color32::from_rgb(0x00, 0xFF, 0x00),
            TextColor::Blue => Color32::from_rgb(0x00, 0x00, 0xFF),
        }
    }
}

/// 背景ボックスの色（黒 70%）
pub const TEXT_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 179);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOverlay {
    text: String,
    pub size: SizePercent,
    pub color: TextColor,
    pub background: bool,
}

impl TextOverlay {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// オーバーレイとサイズスライダーを表示するかどうか
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// 入力全体を置き換える。上限を超える入力は丸ごと拒否し、現在の値を保つ。
    pub fn set_text(&mut self, input: &str) -> Result<(), TextTooLong> {
        let len = input.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }
        self.text.clear();
        self.text.push_str(input);
        Ok(())
    }

    pub fn font_size(&self) -> f32 {
        text_font_size(self.size)
    }
}
