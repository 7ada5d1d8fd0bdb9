//! テーマに依存しない UI 定数（フォントサイズ・レイアウト・固定色）。
//!
//! テーマごとに変わる色は `crate::theme` 側に置く。

/// テーマに関係なく使う色
pub mod colors {
    use eframe::egui;

    /// プレビュー領域の背景（gray-100）
    pub const PREVIEW_BG: egui::Color32 = egui::Color32::from_rgb(0xF3, 0xF4, 0xF6);
    /// 補助テキスト（gray-500）
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(0x6B, 0x72, 0x80);
    /// 案内文（gray-400）
    pub const TEXT_PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(0x9C, 0xA3, 0xAF);
    /// ドロップゾーンの破線（gray-300）
    pub const DROP_BORDER: egui::Color32 = egui::Color32::from_rgb(0xD1, 0xD5, 0xDB);
    /// ファイルをホバー中のドロップゾーン枠（blue-500）
    pub const DROP_ACTIVE: egui::Color32 = egui::Color32::from_rgb(0x3B, 0x82, 0xF6);
    /// スウォッチの選択リング（gray-500）
    pub const SWATCH_RING: egui::Color32 = egui::Color32::from_rgb(0x6B, 0x72, 0x80);
    /// 移動アイコンの背景（黒 50%）
    pub const MOVE_BADGE: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 128);
}

/// フォントサイズ（論理ピクセル）
pub mod font_sizes {
    /// タイトル
    pub const TITLE: f32 = 22.0;
    /// セクション見出し
    pub const SECTION: f32 = 16.0;
    /// 本文
    pub const BODY: f32 = 14.0;
    /// ラベル
    pub const LABEL: f32 = 12.0;
    /// 注記
    pub const NOTE: f32 = 10.0;
}

/// レイアウト定数（論理ピクセル）
pub mod layout {
    pub const CARD_GAP: f32 = 12.0;
    pub const PANEL_MARGIN: f32 = 16.0;
    pub const CARD_PADDING: f32 = 14.0;
    pub const CARD_ROUNDING: f32 = 8.0;
    pub const INPUT_ROUNDING: f32 = 6.0;
    pub const INPUT_HEIGHT: f32 = 30.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;
    /// スウォッチの半径
    pub const SWATCH_RADIUS: f32 = 9.0;
    pub const DROP_ZONE_HEIGHT: f32 = 130.0;
    /// オーバーレイ文字を太く見せる重ね描きのずれ幅
    pub const BOLD_OFFSET: f32 = 0.8;
    /// ドロップゾーン内のサムネイル一辺
    pub const THUMBNAIL_SIZE: f32 = 72.0;
}
