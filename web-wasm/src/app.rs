//! メインアプリケーションコンポーネント
//!
//! 2本の解析フロー（単一名前・CSV一括）をそれぞれ独立した
//! Flowスロットで持つ。ローディング表示とエラーバナーもフローごとで、
//! 片方の送信がもう片方の表示状態に干渉することはない。

use leptos::prelude::*;
use leptos::task::spawn_local;
use name_ai_common::{CsvTable, Flow, NameAnalysis};
use web_sys::File;

use crate::api::backend;
use crate::components::{
    csv_upload::CsvUpload, error_banner::ErrorBanner, header::Header, loader::Loader,
    name_form::NameForm, result_panel::ResultPanel, result_table::ResultTable,
};

/// CSV一括解析の成果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvOutcome {
    /// バックエンドがエコーしたファイル名
    pub filename: String,
    /// デコード済みの結果表
    pub table: CsvTable,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // フローごとに独立した状態スロット
    let (name_flow, set_name_flow) = signal(Flow::<NameAnalysis>::new());
    let (csv_flow, set_csv_flow) = signal(Flow::<CsvOutcome>::new());

    // 入力状態
    let (name, set_name) = signal(String::new());
    // web_sys::FileはSendでないのでローカルストレージに置く
    let (csv_file, set_csv_file) = signal_local(None::<File>);

    let name_submitting = Signal::derive(move || name_flow.get().is_submitting());
    let csv_submitting = Signal::derive(move || csv_flow.get().is_submitting());
    let selected_file_name = Signal::derive(move || csv_file.get().map(|file| file.name()));

    // 単一名前解析ハンドラ
    let on_submit_name = move |()| {
        let mut ticket = None;
        set_name_flow.update(|flow| ticket = flow.begin());
        let Some(ticket) = ticket else {
            // 送信中の再トリガーは無視（同一フローの同時リクエストは1件まで）
            return;
        };

        // 入力値は検証せずそのまま送る
        let value = name.get_untracked();
        spawn_local(async move {
            match backend::analyze_name(&value).await {
                Ok(result) => {
                    set_name_flow.update(|flow| {
                        flow.succeed(ticket, result);
                    });
                }
                Err(error) => {
                    gloo::console::error!(format!("名前解析失敗: {}", error));
                    set_name_flow.update(|flow| {
                        flow.fail(ticket, &error);
                    });
                }
            }
        });
    };

    // CSV一括解析ハンドラ
    let on_analyze_csv = move |()| {
        // ファイル未選択なら何もしない（ネットワーク呼び出しも状態変更もなし）
        let Some(file) = csv_file.get_untracked() else {
            return;
        };

        let mut ticket = None;
        set_csv_flow.update(|flow| ticket = flow.begin());
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            match backend::analyze_csv(&file).await {
                Ok((filename, table)) => {
                    set_csv_flow.update(|flow| {
                        flow.succeed(ticket, CsvOutcome { filename, table });
                    });
                }
                Err(error) => {
                    gloo::console::error!(format!("CSV解析失敗: {}", error));
                    set_csv_flow.update(|flow| {
                        flow.fail(ticket, &error);
                    });
                }
            }
        });
    };

    let on_file_selected = move |file: Option<File>| {
        set_csv_file.set(file);
    };

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <section class="card">
                    <h2>"単一名前の解析"</h2>
                    <NameForm
                        name=name
                        set_name=set_name
                        is_submitting=name_submitting
                        on_submit=on_submit_name
                    />
                    <Show when=move || name_submitting.get()>
                        <Loader label="解析中..." />
                    </Show>
                    {move || {
                        let flow = name_flow.get();
                        flow.error()
                            .map(|message| view! { <ErrorBanner message=message.to_string() /> })
                    }}
                    {move || {
                        let flow = name_flow.get();
                        flow.result()
                            .cloned()
                            .map(|result| view! { <ResultPanel result=result /> })
                    }}
                </section>

                <section class="card">
                    <h2>"CSV一括解析"</h2>
                    <CsvUpload
                        selected=selected_file_name
                        is_submitting=csv_submitting
                        on_file_selected=on_file_selected
                        on_analyze=on_analyze_csv
                    />
                    <Show when=move || csv_submitting.get()>
                        <Loader label="CSVを解析中..." />
                    </Show>
                    {move || {
                        let flow = csv_flow.get();
                        flow.error()
                            .map(|message| view! { <ErrorBanner message=message.to_string() /> })
                    }}
                    {move || {
                        let flow = csv_flow.get();
                        flow.result().cloned().map(|outcome| {
                            view! { <ResultTable filename=outcome.filename table=outcome.table /> }
                        })
                    }}
                </section>
            </main>

            <footer class="footer">
                "ローカルLLM (Ollama) の起動が必須です: http://localhost:11434"
            </footer>
        </div>
    }
}
