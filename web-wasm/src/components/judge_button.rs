//! 判定ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn JudgeButton<F>(
    is_judging: Signal<bool>,
    disabled: Signal<bool>,
    on_judge: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let handle_click = {
        let on_judge = on_judge.clone();
        move |_| on_judge()
    };

    view! {
        <div class="judge-section">
            <button
                class="btn btn-primary judge-btn"
                disabled=move || disabled.get()
                on:click=handle_click
            >
                {move || if is_judging.get() { "判定中..." } else { "そっくり度を判定！" }}
            </button>
            <Show when=move || is_judging.get()>
                <p class="judge-hint">"AIが顔の特徴を分析しています..."</p>
            </Show>
        </div>
    }
}
