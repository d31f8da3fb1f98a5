//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loader(label: &'static str) -> impl IntoView {
    view! { <div class="loader">{label}</div> }
}
