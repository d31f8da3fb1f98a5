//! 名前解析バックエンド連携
//!
//! エンドポイントは2つ:
//! - POST /analyze-name: JSONで1名を送って解析結果を受け取る
//! - POST /analyze-csv: ファイルをmultipartで送り、解析列を付加した
//!   生CSVテキストを受け取る（表へのデコードはクライアント側）

use name_ai_common::{AnalyzeRequest, CsvAnalysis, CsvTable, Error, NameAnalysis, Result};
use web_sys::{File, FormData};

use super::client;

/// 1名を解析する
///
/// 入力値は検証せずそのまま送る（バックエンドが唯一の検証者）
pub async fn analyze_name(name: &str) -> Result<NameAnalysis> {
    let request = AnalyzeRequest {
        name: name.to_string(),
    };
    client::post_json("/analyze-name", &request).await
}

/// CSVファイルを一括解析する
///
/// 元ファイルのバイト列をfileフィールドで送り、レスポンスのcontentを
/// CsvTableにデコードして返す。contentが崩れていても空の表になるだけで
/// エラーにはならない（コーデックは失敗しない）。
pub async fn analyze_csv(file: &File) -> Result<(String, CsvTable)> {
    let form = build_form(file)?;
    let payload: CsvAnalysis = client::post_form("/analyze-csv", &form).await?;
    Ok((payload.filename, CsvTable::decode(&payload.content)))
}

/// multipartフォームを組み立てる
///
/// 元ファイルのバイト列をそのままfileフィールドに載せる
fn build_form(file: &File) -> Result<FormData> {
    let form = FormData::new().map_err(|e| Error::Transport(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| Error::Transport(format!("{:?}", e)))?;
    Ok(form)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_file() -> File {
        let parts = js_sys::Array::of1(&"name\nСаша\n".into());
        File::new_with_str_sequence(&parts, "names.csv").expect("File生成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_build_form_carries_file_field() {
        let form = build_form(&sample_file()).expect("フォーム組み立て失敗");
        let value = form.get("file");
        let file: File = value.dyn_into().expect("fileフィールドがFileでない");
        assert_eq!(file.name(), "names.csv");
    }

    #[wasm_bindgen_test]
    fn wasm_build_form_single_field_only() {
        let form = build_form(&sample_file()).expect("フォーム組み立て失敗");
        assert!(!form.get("file").is_undefined());
        assert!(form.get("files").is_undefined());
    }
}
