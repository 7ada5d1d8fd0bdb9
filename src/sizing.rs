//! スライダー値（0〜100%）から表示サイズへの線形補間。
//!
//! - テキスト: 14px〜32px
//! - 画像: プレビュー幅の 20%〜40%

use serde::{Deserialize, Serialize};

pub const TEXT_FONT_MIN_PX: f32 = 14.0;
pub const TEXT_FONT_MAX_PX: f32 = 32.0;
pub const IMAGE_WIDTH_MIN_PERCENT: f32 = 20.0;
pub const IMAGE_WIDTH_MAX_PERCENT: f32 = 40.0;

/// 0〜100 に丸め込まれたスライダー値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizePercent(u8);

impl SizePercent {
    pub const MIN: SizePercent = SizePercent(0);
    pub const MAX: SizePercent = SizePercent(100);

    /// 100 を超える値は 100 に丸める
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn fraction(self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl Default for SizePercent {
    fn default() -> Self {
        Self(50)
    }
}

/// `min + (value / 100) * (max - min)`
pub fn calculate_size(value: SizePercent, min: f32, max: f32) -> f32 {
    min + value.fraction() * (max - min)
}

/// テキストのフォントサイズ（論理ピクセル）
pub fn text_font_size(value: SizePercent) -> f32 {
    calculate_size(value, TEXT_FONT_MIN_PX, TEXT_FONT_MAX_PX)
}

/// 画像の表示幅（プレビュー領域幅に対する %）
pub fn image_width_percent(value: SizePercent) -> f32 {
    calculate_size(value, IMAGE_WIDTH_MIN_PERCENT, IMAGE_WIDTH_MAX_PERCENT)
}
