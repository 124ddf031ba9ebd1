//! フッター（注意事項）コンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-note">
                <h4>"重要な注意事項"</h4>
                <p>
                    "このアプリケーションはエンターテイメント目的のものです。"
                    "結果はAIによるものであり、正確性を保証するものではありません。"
                </p>
                <p>
                    "画像の取り扱いには十分ご注意ください。"
                    "特に、許可なく他人の画像をアップロードすることはおやめください。"
                </p>
            </div>
            <div class="footer-note">
                <h4>"プライバシー保護"</h4>
                <p>
                    "アップロードされた画像は処理後、即座にサーバーから削除されます。"
                    "お客様のプライバシーを最優先に考えています。"
                </p>
            </div>
        </footer>
    }
}
