//! プログレスバーコンポーネント

use leptos::prelude::*;

use crate::state::ProgressSimulator;

#[component]
pub fn ProgressBar(progress: ProgressSimulator) -> impl IntoView {
    let value = progress.value();

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", value.get())
                />
            </div>
            <p class="progress-text">
                {move || format!("解析中... {:.0}%", value.get())}
            </p>
        </div>
    }
}
