use std::fs;

use tshirt_designer::config::{load_or_create_config_at, save_config_at, Config};

#[test]
fn missing_settings_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("designer.toml");

    let cfg = load_or_create_config_at(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

/// 後から追加された項目が無い古い設定ファイルでも既定値で補われる。
#[test]
fn partial_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("designer.toml");
    fs::write(&path, "asset_dir = \"shirts\"\n").unwrap();

    let cfg = load_or_create_config_at(&path).unwrap();
    assert_eq!(cfg.asset_dir, "shirts");
    assert_eq!(cfg.initial_theme, 0);
    assert_eq!(cfg.price_label, "$29.99");
}

#[test]
fn saved_settings_are_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("designer.toml");
    let cfg = Config {
        asset_dir: "/srv/shirts".to_string(),
        initial_theme: 1,
        price_label: "$35.00".to_string(),
        window_width: 1280.0,
        window_height: 800.0,
    };
    save_config_at(&cfg, &path).unwrap();
    assert_eq!(load_or_create_config_at(&path).unwrap(), cfg);
}

#[test]
fn malformed_settings_are_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("designer.toml");
    fs::write(&path, "asset_dir = [").unwrap();
    assert!(load_or_create_config_at(&path).is_err());
}
