//! 判定サーバーとのやり取りに使う型

use serde::{Deserialize, Serialize};

/// `/api/compare` の成功レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    /// 類似度スコア（0〜100）
    pub similarity: f64,
    /// 最も似ていた基準画像のファイル名（顔が特定できた場合のみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_match_filename: Option<String>,
}

/// 非2xxレスポンスのボディ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// サーバーがエラーメッセージを返さなかった場合の表示文言
pub const FALLBACK_ERROR_MESSAGE: &str = "サーバーでエラーが発生しました";

impl ErrorBody {
    /// サーバー提供のメッセージ、なければ汎用文言
    pub fn into_message(self) -> String {
        self.error
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
    }
}
