//! 演出用プログレスシミュレータ
//!
//! 実際のリクエスト完了とは無関係に、経過時間だけで0→100を刻む。
//! 本物の結果が先に届いた場合は `complete()` で強制的に100へ飛ばす
//! （プログレスが跳ねて見えるのは仕様）。

use gloo::timers::callback::Interval;
use js_sys::Date;
use leptos::prelude::*;

const TICK_MS: u32 = 50;

/// 経過時間から進捗率を計算する
fn percent_of(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 100.0;
    }
    (elapsed_ms / duration_ms * 100.0).clamp(0.0, 100.0)
}

/// 時間駆動の疑似プログレス
///
/// タイマーはこのステートが所有する。`cancel()`（またはハンドルの差し替え）
/// 以外にタイマーを止める経路はなく、ビュー破棄時に必ず呼ぶこと。
#[derive(Clone, Copy)]
pub struct ProgressSimulator {
    value: RwSignal<f64>,
    active: RwSignal<bool>,
    timer: StoredValue<Option<Interval>, LocalStorage>,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(0.0),
            active: RwSignal::new(false),
            timer: StoredValue::new_local(None),
        }
    }

    /// 0から刻み直す
    ///
    /// `duration_ms` 経過で100に達し、タイマーは自動停止する。
    pub fn start(&self, duration_ms: f64) {
        self.cancel();
        self.value.set(0.0);
        self.active.set(true);

        let started_at = Date::now();
        let sim = *self;
        let interval = Interval::new(TICK_MS, move || {
            let percent = percent_of(Date::now() - started_at, duration_ms);
            sim.value.set(percent);
            if percent >= 100.0 {
                sim.active.set(false);
                sim.cancel();
            }
        });
        self.timer.set_value(Some(interval));
    }

    /// 本物の結果が揃ったので演出を即完了させる
    pub fn complete(&self) {
        self.cancel();
        self.value.set(100.0);
        self.active.set(false);
    }

    pub fn reset(&self) {
        self.cancel();
        self.value.set(0.0);
        self.active.set(false);
    }

    /// タイマーだけを止める（値は触らない）。ビュー破棄時用。
    pub fn cancel(&self) {
        self.timer.update_value(|timer| {
            timer.take();
        });
    }

    pub fn value(&self) -> RwSignal<f64> {
        self.value
    }

    pub fn active(&self) -> RwSignal<bool> {
        self.active
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new()
    }
}
