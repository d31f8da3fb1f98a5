//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Name AI - ローカル名前解析"</h1>
            <p class="subtitle">"ローカルLLM (Ollama) で名前を解析します"</p>
        </header>
    }
}
