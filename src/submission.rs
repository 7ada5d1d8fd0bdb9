//! デザインの送信処理。
//!
//! ネットワーク送信は行わない。既定の `LogSink` はデザインを JSON でログに残すだけで、
//! UI 側が「T-Shirt design submitted!」の確認ダイアログを出す。
//! 実際の注文 API へ送る場合は `SubmissionSink` を別途実装して差し替える。

use chrono::Local;

use crate::design::Design;
use crate::error::DesignerResult;

pub const SUBMITTED_MESSAGE: &str = "T-Shirt design submitted!";

/// デザインの送信先
pub trait SubmissionSink {
    fn submit(&mut self, design: &Design) -> DesignerResult<()>;
}

/// デザインをログに書き出すだけの送信先
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, design: &Design) -> DesignerResult<()> {
        let json = serde_json::to_string(design)?;
        log::info!("Form submitted with: {json}");
        Ok(())
    }
}

/// 送信結果の控え
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub design: Design,
    pub submitted_at: String,
}

/// デザインを送信先に渡し、控えを返す。
pub fn submit_design(
    sink: &mut dyn SubmissionSink,
    design: Design,
) -> DesignerResult<SubmissionReceipt> {
    sink.submit(&design)?;
    Ok(SubmissionReceipt {
        design,
        submitted_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
