//! 判定結果表示コンポーネント

use leptos::prelude::*;

use sokkuri_common::{headline_for_score, ScoreTier};

#[component]
pub fn ResultDisplay<F>(
    score: ReadSignal<f64>,
    comment: ReadSignal<String>,
    user_image: RwSignal<Option<String>>,
    matched_image: ReadSignal<Option<String>>,
    on_reset: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let handle_reset = {
        let on_reset = on_reset.clone();
        move |_| on_reset()
    };

    view! {
        <div class="result">
            <div class="result-grid">
                <div class="result-card">
                    <h3>"あなたの写真"</h3>
                    <div class="result-image">
                        {move || {
                            user_image
                                .get()
                                .map(|url| view! { <img src=url alt="あなたの画像" /> })
                        }}
                    </div>
                </div>
                <div class="result-card">
                    <h3>"最も似ていた基準画像"</h3>
                    <div class="result-image">
                        <Show
                            when=move || matched_image.get().is_some()
                            fallback=|| view! {
                                <div class="loading-placeholder">"読み込み中..."</div>
                            }
                        >
                            <img
                                src=move || matched_image.get().unwrap_or_default()
                                alt="最も似ていた基準画像"
                            />
                        </Show>
                    </div>
                </div>
            </div>

            <div class="result-score">
                <h3>"判定結果"</h3>
                <p class="result-headline">{move || headline_for_score(score.get())}</p>
                <div class="score-row">
                    <span class="text-muted">"類似度"</span>
                    <span class="score-value">{move || format!("{:.0}%", score.get())}</span>
                </div>
                <div class="score-bar">
                    <div
                        class=move || {
                            format!("score-fill {}", ScoreTier::for_score(score.get()).css_class())
                        }
                        style=move || format!("width: {}%", score.get().clamp(0.0, 100.0))
                    />
                </div>
                <p class="result-comment">{move || format!("「{}」", comment.get())}</p>
                <button class="btn btn-secondary" on:click=handle_reset>
                    "もう一度試す"
                </button>
            </div>
        </div>
    }
}
