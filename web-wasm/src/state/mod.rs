//! 判定ワークフローの状態管理
//!
//! 3つの独立したステートマシンで構成する:
//! - [`ImageSource`]: 選択画像と表示ハンドルの所有
//! - [`ComparisonSession`]: 判定リクエストのライフサイクル
//! - [`ProgressSimulator`]: 演出用の疑似プログレス
//!
//! 3者はお互いを知らない。合流点はコントローラ（`app.rs`）のみ。

mod image_source;
mod progress;
mod session;

pub use image_source::{ImageSource, ObjectUrl};
pub use progress::ProgressSimulator;
pub use session::{ComparisonSession, SessionPhase};
