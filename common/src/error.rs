use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SokkuriError {
    #[error("あなたの写真をアップロードしてください")]
    NoImage,

    #[error("別の判定が進行中です")]
    SessionBusy,

    #[error("リセット済みセッションへの応答のため破棄しました")]
    SessionStale,

    /// 判定サーバーが返したエラーメッセージ（そのまま表示する）
    #[error("{0}")]
    Service(String),

    #[error("通信エラー: {0}")]
    Network(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),
}

pub type Result<T> = std::result::Result<T, SokkuriError>;
