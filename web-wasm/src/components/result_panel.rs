//! 単一解析結果パネルコンポーネント

use leptos::prelude::*;
use name_ai_common::NameAnalysis;

#[component]
pub fn ResultPanel(result: NameAnalysis) -> impl IntoView {
    view! {
        <div class="result">
            <div class="result-row">
                <span class="result-label">"性別: "</span>
                {result.gender}
            </div>
            <div class="result-row">
                <span class="result-label">"正式名: "</span>
                {result.full_name}
            </div>
            <div class="result-row">
                <span class="result-label">"整形済み入力: "</span>
                {result.corrected_input}
            </div>
        </div>
    }
}
