use std::error::Error;

use thiserror::Error;

// デザイナー全体で共有するエラー型の定義。
//
// - 入力の拒否（アップロード・テキスト）は thiserror の列挙型で表し、状態は一切変更しない。
// - 設定ファイルや送信先など I/O 寄りの処理は Box 化したエラーで返す。

/// I/O 寄りの処理（設定ファイル、送信シンク）で使う共通の結果型。
pub type DesignerResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// アップロードが拒否された理由。
///
/// どのバリアントでも保存済みのプレビュー画像は変化しない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("no file was provided")]
    NoFile,

    #[error("only one file can be uploaded at a time ({count} given)")]
    TooManyFiles { count: usize },

    #[error("unsupported file type: {name} ({mime})")]
    UnsupportedType { name: String, mime: String },

    #[error("{name} is {size} bytes, the limit is {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("could not read {name}: {reason}")]
    Unreadable { name: String, reason: String },
}

/// テキストが上限文字数を超えたため受け付けなかった。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("text is {len} characters, the limit is {max}")]
pub struct TextTooLong {
    pub len: usize,
    pub max: usize,
}
