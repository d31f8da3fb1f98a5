//! CSVアップロードコンポーネント

use leptos::prelude::*;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn CsvUpload<FS, FA>(
    /// 選択中のファイル名（未選択ならNone）
    selected: Signal<Option<String>>,
    is_submitting: Signal<bool>,
    on_file_selected: FS,
    on_analyze: FA,
) -> impl IntoView
where
    FS: Fn(Option<File>) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        on_file_selected(file);
    };

    view! {
        <div class="csv-upload">
            <input type="file" accept=".csv" on:change=on_change />
            {move || {
                selected
                    .get()
                    .map(|name| view! { <span class="file-name">{name}</span> })
            }}
            <button
                class="btn btn-primary"
                disabled=move || is_submitting.get() || selected.get().is_none()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_submitting.get() { "解析中..." } else { "アップロードして解析" }}
            </button>
        </div>
    }
}
