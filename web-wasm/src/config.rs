//! 接続設定
//!
//! 判定サーバーのベースURLはビルド時に一度だけ解決する。
//! `SOKKURI_API_URL` 未設定時はローカルのバックエンドに向く。

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";

pub fn api_base_url() -> &'static str {
    option_env!("SOKKURI_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_resolves() {
        let base = api_base_url();
        assert!(base.starts_with("http"));
        assert!(!base.ends_with('/'));
    }
}
