//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"✨ 顔面そっくり度判定 ✨"</h1>
            <p class="text-muted">"AIがあなたの顔の特徴を分析し、類似度を判定します"</p>
        </header>
    }
}
