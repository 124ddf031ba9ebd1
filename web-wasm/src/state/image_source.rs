//! 選択画像と表示ハンドルの管理
//!
//! object URLはブラウザのプロセス全体で共有されるテーブルに登録されるため、
//! 明示的に revoke しない限り解放されない。ここでは所有権ラッパー
//! [`ObjectUrl`] の `Drop` で revoke を保証し、差し替え・クリア・破棄の
//! どの経路でも前のハンドルが必ず解放されるようにする。

use leptos::prelude::*;
use web_sys::{Blob, File, Url};

/// revoke義務を持つobject URLの所有権ラッパー
///
/// 生成と解放が必ず対になる。URL文字列の複製は自由だが、revokeするのは
/// このラッパーを落とした時の一度だけ。
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn create(blob: &Blob) -> Option<Self> {
        match Url::create_object_url_with_blob(blob) {
            Ok(url) => Some(Self { url }),
            Err(e) => {
                web_sys::console::error_1(&e);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

/// ローカル選択画像のライフサイクルを所有するステート
///
/// `File` 本体と生きている表示ハンドルは常に高々1つ。ハンドルは
/// このステートだけが所有し、描画側にはURL文字列のシグナルだけを渡す。
#[derive(Clone, Copy)]
pub struct ImageSource {
    file: RwSignal<Option<File>, LocalStorage>,
    handle: StoredValue<Option<ObjectUrl>>,
    preview_url: RwSignal<Option<String>>,
}

impl ImageSource {
    pub fn new() -> Self {
        Self {
            file: RwSignal::new_local(None),
            handle: StoredValue::new(None),
            preview_url: RwSignal::new(None),
        }
    }

    /// 画像ファイルを選択する
    ///
    /// 画像以外（MIMEが `image/` で始まらないもの）は黙って無視する。
    /// 前のハンドルを解放してから新しいハンドルを作る。
    pub fn select(&self, file: File) {
        if !file.type_().starts_with("image/") {
            return;
        }

        self.release();

        let Some(url) = ObjectUrl::create(&file) else {
            self.preview_url.set(None);
            self.file.set(None);
            return;
        };

        self.preview_url.set(Some(url.as_str().to_string()));
        self.handle.set_value(Some(url));
        self.file.set(Some(file));
    }

    /// 選択を解除してハンドルを解放する。冪等。
    pub fn clear(&self) {
        self.release();
        self.preview_url.set(None);
        self.file.set(None);
    }

    fn release(&self) {
        self.handle.update_value(|handle| {
            handle.take();
        });
    }

    /// 送信時のスナップショット用
    pub fn selected_file(&self) -> Option<File> {
        self.file.get_untracked()
    }

    /// プレビュー描画用のURLシグナル
    pub fn preview_url(&self) -> RwSignal<Option<String>> {
        self.preview_url
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::new()
    }
}
