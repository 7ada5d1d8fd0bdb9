//! 送信時にまとめられるデザイン全体（`Design`）。

use serde::{Deserialize, Serialize};

use crate::drag::Position;
use crate::measurements::Measurements;
use crate::shirt::ShirtColor;
use crate::sizing::SizePercent;
use crate::text_overlay::TextColor;

/// ユーザーの選択をすべてまとめたもの。送信時に一度だけ組み立てる。
///
/// JSON にしたときのキーは camelCase（`imageDataUri`, `textSizePercent` など）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub measurements: Measurements,
    pub image_data_uri: Option<String>,
    /// 空文字列は `None` として扱う
    pub text: Option<String>,
    pub text_size_percent: SizePercent,
    pub image_size_percent: SizePercent,
    pub text_color: TextColor,
    pub text_background_enabled: bool,
    pub shirt_color: ShirtColor,
    pub text_position: Position,
    pub image_position: Position,
}
