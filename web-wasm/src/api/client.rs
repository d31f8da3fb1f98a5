//! HTTPクライアントアダプタ
//!
//! fetch APIでバックエンドへPOSTし、トランスポート/HTTP失敗を
//! 統一したエラー形に正規化する:
//! - 非2xxでボディにdetailがあればServer（そのまま表示）
//! - 非2xxでdetailが取れなければHTTPステータスのTransport
//! - fetch自体の失敗・タイムアウトはTransport
//! - 2xxでもボディが期待形でなければDecode
//!
//! リトライ・キャッシュ・キューイングは行わない。

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use name_ai_common::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, FormData, Request, RequestInit, RequestMode, Response};

use crate::config;

/// リクエストタイムアウト。バックエンド側の上流(LLM)タイムアウトに合わせる
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// 非2xxレスポンスが持ちうるエラーボディ
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// JSONボディをPOSTしてレスポンスをデコードする
pub async fn post_json<T, R>(path: &str, payload: &T) -> Result<R>
where
    T: Serialize,
    R: DeserializeOwned,
{
    let body = serde_json::to_string(payload)?;
    let text = post_raw(path, &JsValue::from_str(&body), Some("application/json")).await?;
    decode_body(&text)
}

/// multipartフォームをPOSTしてレスポンスをデコードする
///
/// Content-Typeはブラウザがmultipart境界付きで設定するため指定しない
pub async fn post_form<R>(path: &str, form: &FormData) -> Result<R>
where
    R: DeserializeOwned,
{
    let text = post_raw(path, form.as_ref(), None).await?;
    decode_body(&text)
}

/// fetch実行の共通処理
///
/// タイムアウトとの競争で待ち、負けた場合はAbortControllerで
/// 進行中のリクエストを中断する。
async fn post_raw(path: &str, body: &JsValue, content_type: Option<&str>) -> Result<String> {
    let url = format!("{}{}", config::api_base(), path);

    let controller = AbortController::new().map_err(transport_error)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(body);
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport_error)?;
    if let Some(kind) = content_type {
        request
            .headers()
            .set("Content-Type", kind)
            .map_err(transport_error)?;
    }

    let window =
        web_sys::window().ok_or_else(|| Error::Transport("windowがありません".to_string()))?;
    let fetch = JsFuture::from(window.fetch_with_request(&request));
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(fetch, timeout);

    let resp_value = match select(fetch, timeout).await {
        Either::Left((result, _)) => result.map_err(transport_error)?,
        Either::Right(((), _)) => {
            controller.abort();
            return Err(Error::Transport(format!(
                "{}秒以内に応答がありません",
                REQUEST_TIMEOUT_MS / 1000
            )));
        }
    };

    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;
    let text = response_text(&resp).await?;

    if !resp.ok() {
        return Err(error_from_response(resp.status(), &resp.status_text(), &text));
    }
    Ok(text)
}

/// レスポンスボディをテキストで読み切る
async fn response_text(resp: &Response) -> Result<String> {
    let promise = resp.text().map_err(transport_error)?;
    let value = JsFuture::from(promise).await.map_err(transport_error)?;
    Ok(value.as_string().unwrap_or_default())
}

/// 2xxレスポンスのボディを期待型にデコードする
fn decode_body<R: DeserializeOwned>(text: &str) -> Result<R> {
    serde_json::from_str(text).map_err(|e| Error::Decode(e.to_string()))
}

/// 非2xxレスポンスをエラーに変換する
///
/// detailが取れればそれを優先し、なければステータス行で代替する
fn error_from_response(status: u16, status_text: &str, body: &str) -> Error {
    match detail_from_body(body) {
        Some(detail) => Error::Server(detail),
        None => Error::Transport(format!("HTTP {} {}", status, status_text)),
    }
}

/// エラーボディからdetail文字列を取り出す
fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.detail.filter(|detail| !detail.is_empty())
}

/// fetch層のJsValueエラーを表示可能なTransportエラーにする
fn transport_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use name_ai_common::{CsvAnalysis, NameAnalysis};

    // =============================================
    // エラーボディ解釈テスト
    // =============================================

    #[test]
    fn test_detail_from_body() {
        let detail = detail_from_body(r#"{"detail": "name too short"}"#);
        assert_eq!(detail, Some("name too short".to_string()));
    }

    #[test]
    fn test_detail_from_body_missing() {
        assert_eq!(detail_from_body(r#"{"message": "oops"}"#), None);
    }

    #[test]
    fn test_detail_from_body_empty_detail() {
        assert_eq!(detail_from_body(r#"{"detail": ""}"#), None);
    }

    #[test]
    fn test_detail_from_body_not_json() {
        assert_eq!(detail_from_body("Internal Server Error"), None);
    }

    #[test]
    fn test_error_from_response_prefers_detail() {
        // detail付きの非2xxはメッセージをそのまま使う
        let error = error_from_response(400, "Bad Request", r#"{"detail": "name too short"}"#);
        assert_eq!(error, Error::Server("name too short".to_string()));
        assert_eq!(format!("{}", error), "name too short");
    }

    #[test]
    fn test_error_from_response_fallback() {
        // ボディが解釈できなければ汎用メッセージに落ちる
        let error = error_from_response(502, "Bad Gateway", "<html>nope</html>");
        let message = format!("{}", error);
        assert!(matches!(error, Error::Transport(_)));
        assert!(message.contains("HTTP 502"));
        assert!(!message.is_empty());
    }

    #[test]
    fn test_error_from_response_empty_body() {
        let error = error_from_response(500, "Internal Server Error", "");
        assert!(matches!(error, Error::Transport(_)));
    }

    // =============================================
    // ボディデコードテスト
    // =============================================

    #[test]
    fn test_decode_body_name_analysis() {
        let text = r#"{"gender":"male","full_name":"Alexander","corrected_input":"alex"}"#;
        let result: NameAnalysis = decode_body(text).expect("デコード失敗");
        assert_eq!(result.gender, "male");
        assert_eq!(result.full_name, "Alexander");
        assert_eq!(result.corrected_input, "alex");
    }

    #[test]
    fn test_decode_body_csv_analysis() {
        let text = r#"{"filename":"names.csv","content":"a,b\n1,2"}"#;
        let result: CsvAnalysis = decode_body(text).expect("デコード失敗");
        assert_eq!(result.filename, "names.csv");
    }

    #[test]
    fn test_decode_body_malformed_is_decode_error() {
        // 形が崩れたレスポンスはDecodeエラーとして区別する
        let result = decode_body::<NameAnalysis>(r#"{"gender":"male"}"#);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_body_not_json() {
        let result = decode_body::<NameAnalysis>("not json at all");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
