//! 判定リクエストのライフサイクル管理
//!
//! 同時に飛ぶリクエストは常に高々1つ。`Pending` 中の再送信は拒否する。
//! ネットワーク呼び出し自体は途中キャンセルしない代わりに、`reset()` 後に
//! 届いた応答は世代カウンタの不一致で破棄する。

use leptos::prelude::*;
use web_sys::File;

use sokkuri_common::{CompareResponse, Result, SokkuriError};

use crate::api;

/// 判定リクエストのフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// 判定サーバーとの1セッション
#[derive(Clone, Copy)]
pub struct ComparisonSession {
    phase: RwSignal<SessionPhase>,
    outcome: RwSignal<Option<CompareResponse>>,
    failure: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(SessionPhase::Idle),
            outcome: RwSignal::new(None),
            failure: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    /// ユーザー画像を判定に出す
    ///
    /// `Pending` 中は `SessionBusy` で拒否し、進行中のリクエストには
    /// 触れない。成功・失敗はシグナルに反映した上で結果を返す。
    pub async fn submit(&self, user_image: &File) -> Result<()> {
        let generation = self.begin()?;
        let result = api::compare_faces(user_image).await;
        self.finish(generation, result)
    }

    /// どのフェーズからでも `Idle` へ戻す
    ///
    /// 世代を進めるので、進行中だったリクエストの応答は適用されない。
    pub fn reset(&self) {
        self.generation.update_value(|g| *g += 1);
        self.phase.set(SessionPhase::Idle);
        self.outcome.set(None);
        self.failure.set(None);
    }

    pub fn phase(&self) -> RwSignal<SessionPhase> {
        self.phase
    }

    /// 成功時のみ `Some`
    pub fn outcome(&self) -> RwSignal<Option<CompareResponse>> {
        self.outcome
    }

    /// 失敗時のみ `Some`
    pub fn failure(&self) -> RwSignal<Option<String>> {
        self.failure
    }

    fn begin(&self) -> Result<u64> {
        if self.phase.get_untracked() == SessionPhase::Pending {
            return Err(SokkuriError::SessionBusy);
        }
        self.phase.set(SessionPhase::Pending);
        self.outcome.set(None);
        self.failure.set(None);
        Ok(self.generation.get_value())
    }

    fn finish(&self, generation: u64, result: Result<CompareResponse>) -> Result<()> {
        if self.generation.get_value() != generation {
            return Err(SokkuriError::SessionStale);
        }
        match result {
            Ok(response) => {
                self.outcome.set(Some(response));
                self.phase.set(SessionPhase::Succeeded);
                Ok(())
            }
            Err(err) => {
                self.failure.set(Some(err.to_string()));
                self.phase.set(SessionPhase::Failed);
                Err(err)
            }
        }
    }
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(similarity: f64) -> CompareResponse {
        CompareResponse {
            similarity,
            best_match_filename: Some("ref12.jpg".to_string()),
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ComparisonSession::new();
        assert_eq!(session.phase().get_untracked(), SessionPhase::Idle);
        assert!(session.outcome().get_untracked().is_none());
        assert!(session.failure().get_untracked().is_none());
    }

    #[test]
    fn test_success_path() {
        let session = ComparisonSession::new();
        let generation = session.begin().unwrap();
        assert_eq!(session.phase().get_untracked(), SessionPhase::Pending);

        session.finish(generation, Ok(response(92.0))).unwrap();
        assert_eq!(session.phase().get_untracked(), SessionPhase::Succeeded);
        assert_eq!(
            session.outcome().get_untracked().unwrap().similarity,
            92.0
        );
        assert!(session.failure().get_untracked().is_none());
    }

    #[test]
    fn test_failure_path() {
        let session = ComparisonSession::new();
        let generation = session.begin().unwrap();

        let err = session
            .finish(
                generation,
                Err(SokkuriError::Service("model unavailable".to_string())),
            )
            .unwrap_err();
        assert_eq!(err, SokkuriError::Service("model unavailable".to_string()));
        assert_eq!(session.phase().get_untracked(), SessionPhase::Failed);
        assert_eq!(
            session.failure().get_untracked().as_deref(),
            Some("model unavailable")
        );
        assert!(session.outcome().get_untracked().is_none());
    }

    /// Pending中の再送信は拒否され、進行中の状態は変わらない
    #[test]
    fn test_submit_while_pending_is_rejected() {
        let session = ComparisonSession::new();
        let generation = session.begin().unwrap();

        assert_eq!(session.begin().unwrap_err(), SokkuriError::SessionBusy);
        assert_eq!(session.phase().get_untracked(), SessionPhase::Pending);

        // 最初のリクエストはそのまま完了できる
        session.finish(generation, Ok(response(50.0))).unwrap();
        assert_eq!(session.phase().get_untracked(), SessionPhase::Succeeded);
    }

    /// reset後に届いた応答は破棄される
    #[test]
    fn test_stale_response_is_discarded() {
        let session = ComparisonSession::new();
        let generation = session.begin().unwrap();

        session.reset();
        assert_eq!(session.phase().get_untracked(), SessionPhase::Idle);

        let err = session
            .finish(generation, Ok(response(92.0)))
            .unwrap_err();
        assert_eq!(err, SokkuriError::SessionStale);
        assert_eq!(session.phase().get_untracked(), SessionPhase::Idle);
        assert!(session.outcome().get_untracked().is_none());
    }

    /// reset後の新しいセッションに古い応答が紛れ込まない
    #[test]
    fn test_stale_response_does_not_touch_next_session() {
        let session = ComparisonSession::new();
        let old_generation = session.begin().unwrap();
        session.reset();

        let new_generation = session.begin().unwrap();
        assert_ne!(old_generation, new_generation);

        assert_eq!(
            session.finish(old_generation, Ok(response(92.0))).unwrap_err(),
            SokkuriError::SessionStale
        );
        assert_eq!(session.phase().get_untracked(), SessionPhase::Pending);
        assert!(session.outcome().get_untracked().is_none());

        session.finish(new_generation, Ok(response(33.0))).unwrap();
        assert_eq!(
            session.outcome().get_untracked().unwrap().similarity,
            33.0
        );
    }

    #[test]
    fn test_reset_clears_failure() {
        let session = ComparisonSession::new();
        let generation = session.begin().unwrap();
        let _ = session.finish(
            generation,
            Err(SokkuriError::Network("fetch failed".to_string())),
        );

        session.reset();
        assert_eq!(session.phase().get_untracked(), SessionPhase::Idle);
        assert!(session.failure().get_untracked().is_none());
    }
}
