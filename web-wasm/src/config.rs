//! 接続設定

/// バックエンドのベースURL
///
/// ビルド時の環境変数 API_BASE_URL で上書きできる。
/// 未指定時はローカルのFastAPI既定ポートに接続する。
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:8000")
}
