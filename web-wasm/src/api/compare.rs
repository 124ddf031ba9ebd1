//! 顔比較API呼び出し
//!
//! `/api/compare` へ multipart でユーザー画像を送信し、類似度スコアと
//! 最も似ていた基準画像のファイル名を受け取る。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use sokkuri_common::{CompareResponse, ErrorBody, Result, SokkuriError, FALLBACK_ERROR_MESSAGE};

use crate::config;

/// multipartのフィールド名（バックエンドの期待値）
const USER_IMAGE_FIELD: &str = "userImage";
const USER_IMAGE_FILENAME: &str = "user.jpg";

fn compare_endpoint() -> String {
    format!("{}/api/compare", config::api_base_url())
}

/// 基準画像の表示URLを組み立てる
///
/// `filename` は `/api/compare` が返した `best_match_filename` をそのまま渡す。
pub fn reference_image_url(filename: &str) -> String {
    format!("{}/api/reference_image/{}", config::api_base_url(), filename)
}

/// ユーザー画像を判定サーバーへ送信する
pub async fn compare_faces(user_image: &File) -> Result<CompareResponse> {
    let form = FormData::new().map_err(|e| SokkuriError::Network(js_message(&e)))?;
    form.append_with_blob_and_filename(USER_IMAGE_FIELD, user_image, USER_IMAGE_FILENAME)
        .map_err(|e| SokkuriError::Network(js_message(&e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    // Content-Typeはブラウザがboundary付きで設定する
    let request = Request::new_with_str_and_init(&compare_endpoint(), &opts)
        .map_err(|e| SokkuriError::Network(js_message(&e)))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SokkuriError::Network(js_message(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| SokkuriError::Network(js_message(&e)))?;

    if !resp.ok() {
        return Err(SokkuriError::Service(read_error_message(&resp).await));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| SokkuriError::ApiParse(js_message(&e)))?,
    )
    .await
    .map_err(|e| SokkuriError::ApiParse(js_message(&e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| SokkuriError::ApiParse(e.to_string()))
}

/// 非2xxレスポンスからエラーメッセージを取り出す
///
/// ボディがJSONでない、または `error` フィールドがない場合は汎用文言。
async fn read_error_message(resp: &Response) -> String {
    let Ok(promise) = resp.json() else {
        return FALLBACK_ERROR_MESSAGE.to_string();
    };
    let Ok(json) = JsFuture::from(promise).await else {
        return FALLBACK_ERROR_MESSAGE.to_string();
    };
    serde_wasm_bindgen::from_value::<ErrorBody>(json)
        .map(ErrorBody::into_message)
        .unwrap_or_else(|_| FALLBACK_ERROR_MESSAGE.to_string())
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_endpoint() {
        let url = compare_endpoint();
        assert!(url.ends_with("/api/compare"));
        assert!(url.starts_with(config::api_base_url()));
    }

    /// 判定成功シナリオ: ref12.jpg の表示URL
    #[test]
    fn test_reference_image_url() {
        let url = reference_image_url("ref12.jpg");
        assert!(url.ends_with("/api/reference_image/ref12.jpg"));
    }

    /// ファイル名は不透明なトークンとしてそのまま埋め込む
    #[test]
    fn test_reference_image_url_is_opaque() {
        let url = reference_image_url("000_α.png");
        assert!(url.ends_with("/api/reference_image/000_α.png"));
    }
}
