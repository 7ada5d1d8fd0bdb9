//! テーマレジストリと、テーマ切り替えショートカット（Alt+Q）の購読。
//!
//! - テーマは固定順のリストで、実行中に増減しない。
//! - アクティブなテーマは「インデックス mod テーマ数」で決まる。

use eframe::egui::{Color32, Key, Modifiers};

/// 影の設定（ぼかし量と色）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeShadow {
    pub blur: f32,
    pub color: Color32,
}

/// 名前付きのカラーパレット
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub dark: bool,
    pub background: Color32,
    pub text: Color32,
    pub accent: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub panel: Color32,
    pub panel_border: Color32,
    pub input_border: Color32,
    pub shadow: ThemeShadow,
}

pub const THEMES: [Theme; 3] = [
    Theme {
        name: "Minimal",
        dark: false,
        background: Color32::from_rgb(0xFF, 0xFF, 0xFF),
        text: Color32::from_rgb(0x1F, 0x29, 0x37),
        accent: Color32::from_rgb(0x63, 0x66, 0xF1),
        button: Color32::from_rgb(0x63, 0x66, 0xF1),
        button_hover: Color32::from_rgb(0x4F, 0x46, 0xE5),
        panel: Color32::from_rgb(0xF9, 0xFA, 0xFB),
        panel_border: Color32::from_rgb(0xF3, 0xF4, 0xF6),
        input_border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
        shadow: ThemeShadow {
            blur: 4.0,
            color: Color32::from_rgba_premultiplied(0, 0, 0, 25),
        },
    },
    Theme {
        name: "Dark",
        dark: true,
        background: Color32::from_rgb(0x11, 0x18, 0x27),
        text: Color32::from_rgb(0xF3, 0xF4, 0xF6),
        accent: Color32::from_rgb(0x10, 0xB9, 0x81),
        button: Color32::from_rgb(0x10, 0xB9, 0x81),
        button_hover: Color32::from_rgb(0x05, 0x96, 0x69),
        panel: Color32::from_rgb(0x1F, 0x29, 0x37),
        panel_border: Color32::from_rgb(0x37, 0x41, 0x51),
        input_border: Color32::from_rgb(0x37, 0x41, 0x51),
        // gray-800 / 50%
        shadow: ThemeShadow {
            blur: 8.0,
            color: Color32::from_rgba_premultiplied(0x10, 0x15, 0x1B, 128),
        },
    },
    Theme {
        name: "Vintage",
        dark: false,
        background: Color32::from_rgb(0xFF, 0xFB, 0xEB),
        text: Color32::from_rgb(0x78, 0x35, 0x0F),
        accent: Color32::from_rgb(0xF4, 0x3F, 0x5E),
        button: Color32::from_rgb(0xF4, 0x3F, 0x5E),
        button_hover: Color32::from_rgb(0xE1, 0x1D, 0x48),
        panel: Color32::from_rgb(0xFE, 0xF3, 0xC7),
        panel_border: Color32::from_rgb(0xFD, 0xE6, 0x8A),
        input_border: Color32::from_rgb(0xFC, 0xD3, 0x4D),
        // amber-200 / 50%
        shadow: ThemeShadow {
            blur: 4.0,
            color: Color32::from_rgba_premultiplied(0x7E, 0x73, 0x45, 128),
        },
    },
];

/// テーマ一覧とアクティブなインデックス
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeRegistry {
    index: usize,
}

impl ThemeRegistry {
    /// `initial` はテーマ数で剰余を取る（設定ファイルの値をそのまま渡してよい）
    pub fn new(initial: usize) -> Self {
        Self {
            index: initial % THEMES.len(),
        }
    }

    pub fn themes(&self) -> &'static [Theme] {
        &THEMES
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> &'static Theme {
        &THEMES[self.index]
    }

    /// 次のテーマへ循環的に進める
    pub fn cycle(&mut self) -> &'static Theme {
        self.index = (self.index + 1) % THEMES.len();
        log::info!("Theme switched to {}", self.active().name);
        self.active()
    }
}

/// Alt+Q かどうか。文字キーは大文字・小文字を区別しない（egui の `Key` は Shift に依存しない）。
pub fn is_theme_shortcut(key: Key, modifiers: Modifiers) -> bool {
    key == Key::Q && modifiers.alt
}

/// グローバルなキーボードショートカットの購読。
///
/// アプリ起動時に `attach` し、終了時（`on_exit` または drop）に必ず解除される。
/// 解除後に届いたキーイベントは無視する。
#[derive(Debug, Default)]
pub struct ShortcutSubscription {
    attached: bool,
}

impl ShortcutSubscription {
    pub fn attach() -> Self {
        log::debug!("Theme shortcut (Alt+Q) attached");
        Self { attached: true }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!("Theme shortcut (Alt+Q) detached");
        }
    }

    /// キー押下を処理し、テーマを切り替えた場合は true を返す
    pub fn handle_key(
        &self,
        registry: &mut ThemeRegistry,
        key: Key,
        modifiers: Modifiers,
    ) -> bool {
        if !self.attached || !is_theme_shortcut(key, modifiers) {
            return false;
        }
        registry.cycle();
        true
    }
}

impl Drop for ShortcutSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}
