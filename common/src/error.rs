//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// - Server: バックエンドが返したdetailメッセージ（そのまま表示する）
/// - Transport: 通信失敗・タイムアウト・detailなしのHTTPエラー
/// - Decode: レスポンス本文が期待した形式でない
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Server(String),

    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("応答の解析に失敗しました: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
