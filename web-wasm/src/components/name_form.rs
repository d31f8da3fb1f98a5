//! 名前入力フォームコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn NameForm<F>(
    name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    is_submitting: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(());
    };

    view! {
        <form class="form" on:submit=on_form_submit>
            <input
                type="text"
                placeholder="名前を入力..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    set_name.set(event_target_value(&ev));
                }
            />
            <button type="submit" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() { "解析中..." } else { "解析する" }}
            </button>
        </form>
    }
}
