//! Click-to-upload boxes for the QC form.
//!
//! The `<input type=file>` sits outside the clickable box; the box opens it
//! through its `NodeRef`.

use aiqc::{accept_attribute, formats_hint, SlotId, SlotKind};
use leptos::*;
use web_sys::{Event, MouseEvent};

use crate::services::open_picker;
use crate::types::FileSummary;

#[component]
fn FileRow(
    file: FileSummary,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="file-row">
            <span class="file-icon">"📄"</span>
            <div class="file-info">
                <p class="file-name">{file.name}</p>
                <p class="file-size">{file.size}</p>
            </div>
            <button
                class="file-remove"
                on:click=move |ev: MouseEvent| {
                    // the row sits inside the clickable box
                    ev.stop_propagation();
                    on_remove.call(());
                }
            >
                "✕"
            </button>
        </div>
    }
}

/// Box for a slot that holds one file.
#[component]
pub fn SingleUploadBox(
    /// Prompt shown while empty
    prompt: &'static str,
    /// Current file, if any
    #[prop(into)]
    file: Signal<Option<FileSummary>>,
    input_ref: NodeRef<html::Input>,
    #[prop(into)] on_pick: Callback<Event>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="upload-box" on:click=move |_| open_picker(input_ref)>
            {move || match file.get() {
                Some(summary) => view! { <FileRow file=summary on_remove=on_remove/> }.into_view(),
                None => view! {
                    <div class="upload-empty">
                        <div class="upload-icon">"📤"</div>
                        <p class="upload-text">{prompt}</p>
                        <p class="upload-hint">{format!("支持: {}", formats_hint())}</p>
                    </div>
                }
                .into_view(),
            }}
        </div>
        <input
            type="file"
            class="hidden"
            accept=accept_attribute()
            node_ref=input_ref
            on:change=move |ev| on_pick.call(ev)
        />
    }
}

/// Box for the supporting-files list.
#[component]
pub fn MultiUploadBox(
    #[prop(into)] files: Signal<Vec<FileSummary>>,
    input_ref: NodeRef<html::Input>,
    #[prop(into)] on_pick: Callback<Event>,
    #[prop(into)] on_remove: Callback<SlotId>,
) -> impl IntoView {
    view! {
        <div class="upload-box" on:click=move |_| open_picker(input_ref)>
            <Show
                when=move || !files.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="upload-empty">
                        <div class="upload-icon">"📤"</div>
                        <p class="upload-text">"点击上传其他资料（可选）"</p>
                        <p class="upload-hint">{format!("支持多个文件，格式: {}", formats_hint())}</p>
                    </div>
                }
            >
                <div class="upload-count">
                    {move || format!("已上传 {} 个文件", files.with(Vec::len))}
                </div>
                <div class="file-list">
                    <For
                        each=move || files.get()
                        key=|file| file.id.clone()
                        children=move |file| {
                            let id = file.id.clone();
                            view! { <FileRow file=file on_remove=move |_| on_remove.call(id.clone())/> }
                        }
                    />
                </div>
                <div class="upload-hint">"点击继续添加更多文件"</div>
            </Show>
        </div>
        <input
            type="file"
            class="hidden"
            multiple=SlotKind::Supporting.is_multiple()
            accept=accept_attribute()
            node_ref=input_ref
            on:change=move |ev| on_pick.call(ev)
        />
    }
}
