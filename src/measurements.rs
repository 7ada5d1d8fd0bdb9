//! 体型入力フォーム（身長・体重・体格）。
//!
//! 各フィールドは列挙型で、UI には列挙された選択肢しか出さないため
//! 「選択肢のどれか」以外の値は存在しえない。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Height {
    #[serde(rename = "160cm")]
    Cm160,
    #[serde(rename = "170cm")]
    Cm170,
    #[default]
    #[serde(rename = "180cm")]
    Cm180,
    #[serde(rename = "190cm")]
    Cm190,
    #[serde(rename = "200cm")]
    Cm200,
}

impl Height {
    pub const ALL: [Height; 5] = [
        Height::Cm160,
        Height::Cm170,
        Height::Cm180,
        Height::Cm190,
        Height::Cm200,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Height::Cm160 => "160cm",
            Height::Cm170 => "170cm",
            Height::Cm180 => "180cm",
            Height::Cm190 => "190cm",
            Height::Cm200 => "200cm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weight {
    #[serde(rename = "60kg")]
    Kg60,
    #[serde(rename = "70kg")]
    Kg70,
    #[default]
    #[serde(rename = "80kg")]
    Kg80,
    #[serde(rename = "90kg")]
    Kg90,
    #[serde(rename = "100kg")]
    Kg100,
}

impl Weight {
    pub const ALL: [Weight; 5] = [
        Weight::Kg60,
        Weight::Kg70,
        Weight::Kg80,
        Weight::Kg90,
        Weight::Kg100,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Weight::Kg60 => "60kg",
            Weight::Kg70 => "70kg",
            Weight::Kg80 => "80kg",
            Weight::Kg90 => "90kg",
            Weight::Kg100 => "100kg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    pub fn value(self) -> &'static str {
        match self {
            Build::Lean => "lean",
            Build::Regular => "regular",
            Build::Athletic => "athletic",
            Build::Big => "big",
        }
    }
}

/// 先頭 1 文字だけ大文字にした表示用ラベル（"athletic" → "Athletic"）
pub fn display_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// フォーム全体の値。`Default` は 180cm / 80kg / athletic。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Measurements {
    pub height: Height,
    pub weight: Weight,
    pub build: Build,
}
