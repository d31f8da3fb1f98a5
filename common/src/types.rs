//! バックエンドAPIの型定義
//!
//! ワイヤフォーマットはバックエンド(FastAPI)に合わせてsnake_case:
//! - AnalyzeRequest: POST /analyze-name のリクエストボディ
//! - NameAnalysis: POST /analyze-name のレスポンス
//! - CsvAnalysis: POST /analyze-csv のレスポンス（contentは生CSVテキスト）

use serde::{Deserialize, Serialize};

/// 単一名前解析のリクエストボディ
///
/// 入力欄の値をそのまま送る。クライアント側バリデーションは行わない
/// （空文字や空白のみでも送信し、バックエンドが唯一の検証者）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeRequest {
    pub name: String,
}

/// 単一名前解析の結果
///
/// 3フィールドとも必須。欠けたレスポンスはデシリアライズ失敗として
/// Decodeエラーに落とす（形の検証はアダプタ境界で行う）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NameAnalysis {
    /// 性別ラベル
    pub gender: String,
    /// 正式名（正規化済みフルネーム）
    pub full_name: String,
    /// 整形済みの入力エコー
    pub corrected_input: String,
}

/// CSV一括解析のレスポンス
///
/// contentは解析結果列を付加した生CSVテキスト。
/// 表への変換はクライアント側（csv::CsvTable::decode）の責務。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CsvAnalysis {
    pub filename: String,
    pub content: String,
}
