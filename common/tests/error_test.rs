//! エラーケーステスト
//!
//! エラー表示文言とフォールバックの挙動を検証

use sokkuri_common::{ErrorBody, SokkuriError, FALLBACK_ERROR_MESSAGE};

/// サーバー提供のメッセージはそのまま表示される
#[test]
fn test_service_error_displays_verbatim() {
    let err = SokkuriError::Service("model unavailable".to_string());
    assert_eq!(format!("{}", err), "model unavailable");
}

/// エラーボディにメッセージがなければ汎用文言に落ちる
#[test]
fn test_error_body_fallback() {
    let body: ErrorBody = serde_json::from_str(r#"{"similarity": 0}"#).unwrap();
    assert_eq!(body.into_message(), FALLBACK_ERROR_MESSAGE);
}

/// SokkuriErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SokkuriError::NoImage,
        SokkuriError::SessionBusy,
        SokkuriError::SessionStale,
        SokkuriError::Service("判定に失敗しました".to_string()),
        SokkuriError::Network("fetch failed".to_string()),
        SokkuriError::ApiParse("invalid json".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// 通信エラー・パースエラーは原因を文言に含む
#[test]
fn test_error_messages_carry_cause() {
    let network = SokkuriError::Network("fetch failed".to_string());
    assert!(format!("{}", network).contains("fetch failed"));

    let parse = SokkuriError::ApiParse("missing field".to_string());
    assert!(format!("{}", parse).contains("missing field"));
}
