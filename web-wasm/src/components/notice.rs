//! 一時通知コンポーネント
//!
//! 表示の寿命はコントローラ側のタイマーが管理する。

use leptos::prelude::*;

#[component]
pub fn Notice(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! { <div class="notice">{text}</div> })}
    }
}
