//! 一括解析結果テーブルコンポーネント
//!
//! 列はデコード済みの表のヘッダから動的に作る。
//! レコードが0件でもヘッダ行は（空のまま）描画される。

use leptos::prelude::*;
use name_ai_common::CsvTable;

#[component]
pub fn ResultTable(
    /// バックエンドがエコーしたファイル名
    filename: String,
    table: CsvTable,
) -> impl IntoView {
    view! {
        <div class="csv-result">
            <p class="file-name">{filename}</p>
            <table class="results-table">
                <thead>
                    <tr>
                        {table
                            .headers()
                            .iter()
                            .map(|header| view! { <th>{header.clone()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows()
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {row
                                        .cells()
                                        .iter()
                                        .map(|cell| view! { <td>{cell.clone()}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
