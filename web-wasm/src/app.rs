//! メインアプリケーションコンポーネント
//!
//! 3つのステートマシン（画像・セッション・プログレス）を束ねるコントローラ。
//! 送信時にプログレスとリクエストを同時に走らせ、合流はここの1箇所だけ:
//! `complete()` を先に呼んでから結果画面へ遷移する。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use sokkuri_common::{comment_for_score, SokkuriError};

use crate::api;
use crate::components::{
    footer::Footer, header::Header, judge_button::JudgeButton, notice::Notice,
    progress_bar::ProgressBar, result_display::ResultDisplay, upload_area::UploadArea,
};
use crate::state::{ComparisonSession, ImageSource, ProgressSimulator, SessionPhase};

/// 疑似プログレスの規定時間
const PROGRESS_DURATION_MS: f64 = 3000.0;
/// 完了演出を見せてから結果画面へ移るまでの間
const RESULT_SETTLE_DELAY_MS: u32 = 300;
/// 一時通知が自動で消えるまでの時間
const NOTICE_DISMISS_MS: u32 = 3000;

/// コントローラのフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgePhase {
    Idle,
    Submitting,
    AwaitingResult,
    Result,
}

impl JudgePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgePhase::Idle => "idle",
            JudgePhase::Submitting => "submitting",
            JudgePhase::AwaitingResult => "awaiting-result",
            JudgePhase::Result => "result",
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let image_source = ImageSource::new();
    let session = ComparisonSession::new();
    let progress = ProgressSimulator::new();

    let (judge_phase, set_judge_phase) = signal(JudgePhase::Idle);
    let (score, set_score) = signal(0.0f64);
    let (comment, set_comment) = signal(String::new());
    let (matched_image_url, set_matched_image_url) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let notice_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let is_judging = Signal::derive(move || {
        matches!(
            judge_phase.get(),
            JudgePhase::Submitting | JudgePhase::AwaitingResult
        )
    });
    let is_pending = Signal::derive(move || session.phase().get() == SessionPhase::Pending);
    let has_image = Signal::derive(move || image_source.preview_url().get().is_some());

    // 一時通知。表示し直すと前の消滅タイマーは差し替えでキャンセルされる
    let show_notice = move |message: String| {
        set_notice.set(Some(message));
        let timeout = Timeout::new(NOTICE_DISMISS_MS, move || set_notice.set(None));
        notice_timer.update_value(|timer| {
            *timer = Some(timeout);
        });
    };

    // 判定開始ハンドラ
    let on_judge = move || {
        let Some(file) = image_source.selected_file() else {
            show_notice(SokkuriError::NoImage.to_string());
            return;
        };

        set_judge_phase.set(JudgePhase::Submitting);
        progress.start(PROGRESS_DURATION_MS);

        spawn_local(async move {
            set_judge_phase.set(JudgePhase::AwaitingResult);
            match session.submit(&file).await {
                Ok(()) => {
                    // 完了演出を先に出し、少し置いてから結果へ
                    progress.complete();
                    Timeout::new(RESULT_SETTLE_DELAY_MS, move || {
                        let Some(result) = session.outcome().get_untracked() else {
                            // settle中にリセットされた
                            return;
                        };
                        set_score.set(result.similarity);
                        set_comment.set(comment_for_score(result.similarity).to_string());
                        if let Some(filename) = result.best_match_filename {
                            set_matched_image_url
                                .set(Some(api::reference_image_url(&filename)));
                        }
                        set_judge_phase.set(JudgePhase::Result);
                    })
                    .forget();
                }
                Err(SokkuriError::SessionBusy) | Err(SokkuriError::SessionStale) => {}
                Err(err) => {
                    let message = session
                        .failure()
                        .get_untracked()
                        .unwrap_or_else(|| err.to_string());
                    gloo::dialogs::alert(&message);
                    session.reset();
                    progress.reset();
                    set_judge_phase.set(JudgePhase::Idle);
                }
            }
        });
    };

    // もう一度試す: 3つのステートをまとめて初期化
    let on_reset = move || {
        image_source.clear();
        session.reset();
        progress.reset();
        set_score.set(0.0);
        set_comment.set(String::new());
        set_matched_image_url.set(None);
        set_judge_phase.set(JudgePhase::Idle);
    };

    on_cleanup(move || {
        progress.cancel();
        image_source.clear();
        notice_timer.update_value(|timer| {
            timer.take();
        });
    });

    view! {
        <div class=move || format!("container phase-{}", judge_phase.get().as_str())>
            <Header />
            <Notice message=notice />

            <main class="main-card">
                <Show
                    when=move || judge_phase.get() == JudgePhase::Result
                    fallback=move || view! {
                        <div class="judge-panel">
                            <UploadArea source=image_source disabled=is_pending />
                            <JudgeButton
                                is_judging=is_judging
                                disabled=Signal::derive(move || {
                                    is_judging.get() || !has_image.get()
                                })
                                on_judge=on_judge
                            />
                            <Show when=move || is_judging.get()>
                                <ProgressBar progress=progress />
                            </Show>
                        </div>
                    }
                >
                    <ResultDisplay
                        score=score
                        comment=comment
                        user_image=image_source.preview_url()
                        matched_image=matched_image_url
                        on_reset=on_reset
                    />
                </Show>
            </main>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_phase_as_str() {
        assert_eq!(JudgePhase::Idle.as_str(), "idle");
        assert_eq!(JudgePhase::Submitting.as_str(), "submitting");
        assert_eq!(JudgePhase::AwaitingResult.as_str(), "awaiting-result");
        assert_eq!(JudgePhase::Result.as_str(), "result");
    }
}
