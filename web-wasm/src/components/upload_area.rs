//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとクリック選択の両方から [`ImageSource::select`] に
//! 流し込む。画像かどうかの判定は `select` 側の1箇所で行う。

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, FileList, MouseEvent};

use crate::state::ImageSource;

#[component]
pub fn UploadArea(source: ImageSource, disabled: Signal<bool>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let pick_first_file = move |files: Option<FileList>| {
        if let Some(files) = files {
            if let Some(file) = files.get(0) {
                source.select(file);
            }
        }
    };

    let on_change = move |_| {
        if let Some(input) = input_ref.get() {
            pick_first_file(input.files());
            // 同じファイルの選び直しでもchangeが発火するように
            input.set_value("");
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if disabled.get_untracked() {
            return;
        }

        if let Some(dt) = ev.data_transfer() {
            pick_first_file(dt.files());
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_remove = move |ev: MouseEvent| {
        ev.stop_propagation();
        if !disabled.get_untracked() {
            source.clear();
        }
    };

    let preview_url = source.preview_url();

    view! {
        <div class="upload-section">
            <h2>"あなたの写真"</h2>
            <div
                class="upload-area"
                class:dragover=move || is_dragover.get()
                class:disabled=move || disabled.get()
                class:has-image=move || preview_url.get().is_some()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <Show
                    when=move || preview_url.get().is_some()
                    fallback=|| view! {
                        <div class="upload-icon">"📷"</div>
                        <p>"写真をドラッグ&ドロップ または クリックして選択"</p>
                        <p class="text-muted">"対応形式: JPEG, PNG"</p>
                    }
                >
                    <img
                        class="preview-image"
                        src=move || preview_url.get().unwrap_or_default()
                        alt="アップロードされた画像のプレビュー"
                    />
                    <Show when=move || !disabled.get()>
                        <button class="remove-btn" on:click=on_remove>"✕"</button>
                    </Show>
                </Show>
            </div>
            <input
                type="file"
                class="hidden"
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <p class="text-muted hint">
                "正面を向いた顔が鮮明に写っている写真を選択してください"
            </p>
        </div>
    }
}
