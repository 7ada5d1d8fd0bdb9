//! アプリケーション設定（`designer.toml`）の読み書き。
//!
//! - 設定ファイルにはアセットの場所やウィンドウサイズなど「アプリの設定」だけを置き、
//!   ユーザーが作ったデザインそのものは保存しない。

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::DesignerResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// `tshirt-<color>.png` が置かれているディレクトリ
    pub asset_dir: String,
    /// 起動時のテーマ番号（テーマ数で剰余を取る）
    #[serde(default)]
    pub initial_theme: usize,
    /// Submit ボタンに表示する価格
    #[serde(default = "default_price_label")]
    pub price_label: String,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_price_label() -> String {
    "$29.99".to_string()
}

fn default_window_width() -> f32 {
    1100.0
}

fn default_window_height() -> f32 {
    760.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: "assets".to_string(),
            initial_theme: 0,
            price_label: default_price_label(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

pub const SETTINGS_FILE: &str = "designer.toml";

pub fn load_or_create_config() -> DesignerResult<Config> {
    load_or_create_config_at(Path::new(SETTINGS_FILE))
}

/// 指定パスの設定を読み込む。存在しなければデフォルト値で作成する。
pub fn load_or_create_config_at(path: &Path) -> DesignerResult<Config> {
    if path.exists() {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg = toml::from_str(&contents)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config_at(&cfg, path)?;
        Ok(cfg)
    }
}

pub fn save_config_at(cfg: &Config, path: &Path) -> DesignerResult<()> {
    let toml_str = toml::to_string_pretty(cfg)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(toml_str.as_bytes())?;
    Ok(())
}
