//! エラーバナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! { <div class="error">{message}</div> }
}
