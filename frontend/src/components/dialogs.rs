//! Modal dialogs of the QC flow: nickname, progress, failure, report.

use leptos::*;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::config::{CONTACT_QR_SRC, REPORT_DELIVERY_HOURS};

/// Text under the progress bar.
pub fn progress_label(progress: f64) -> String {
    if progress >= 100.0 {
        "报告已生成，即将跳转...".to_string()
    } else {
        format!("正在分析您的文稿... {}%", progress.round())
    }
}

#[component]
fn Modal(
    #[prop(into)] title: TextProp,
    /// Called on overlay click; without it the overlay does nothing
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            on:click=move |_| {
                if let Some(close) = on_close {
                    close.call(());
                }
            }
        >
            <div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                <h2 class="modal-title">{move || title.get()}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn InfoDialog(
    #[prop(into)] nickname: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let is_blank = move || nickname.with(|n| n.trim().is_empty());

    view! {
        <Modal title="信息补充" on_close=on_cancel>
            <div class="modal-body">
                <label for="nickname">"你的昵称 *"</label>
                <input
                    id="nickname"
                    type="text"
                    placeholder="请输入您的昵称"
                    prop:value=move || nickname.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_confirm.call(());
                        }
                    }
                />
                <p class="hint">"查收QC报告时需要昵称对应哦~"</p>

                <div class="modal-actions">
                    <button class="button-outline" on:click=move |_| on_cancel.call(())>
                        "取消"
                    </button>
                    <button
                        class="button-primary"
                        disabled=is_blank
                        on:click=move |_| on_confirm.call(())
                    >
                        "一键 QC"
                    </button>
                </div>
            </div>
        </Modal>
    }
}

/// Progress dialog. Only the cancel button closes it.
#[component]
pub fn GeneratingDialog(
    #[prop(into)] progress: Signal<f64>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let done = move || progress.get() >= 100.0;
    let title = move || if done() { "生成完成" } else { "正在生成QC报告" };

    view! {
        <Modal title=title>
            <div class="modal-body centered">
                <div class="spinner"></div>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style:width=move || format!("{:.0}%", progress.get())
                    ></div>
                </div>
                <p class="hint">{move || progress_label(progress.get())}</p>
                <Show
                    when=move || !done()
                    fallback=|| view! { }
                >
                    <button class="button-outline" on:click=move |_| on_cancel.call(())>
                        "取消"
                    </button>
                </Show>
            </div>
        </Modal>
    }
}

#[component]
pub fn FailedDialog(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="检测未完成" on_close=on_dismiss>
            <div class="modal-body centered">
                <p class="error-message">{move || message.get()}</p>
                <div class="modal-actions">
                    <button class="button-outline" on:click=move |_| on_dismiss.call(())>
                        "取消"
                    </button>
                    <button class="button-primary" on:click=move |_| on_retry.call(())>
                        "重试"
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[component]
pub fn ReportDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="查看QC报告" on_close=on_close>
            <div class="modal-body centered">
                <div class="qr-wrapper">
                    <img class="qr-code" src=CONTACT_QR_SRC alt="微信二维码"/>
                    <span class="qr-check">"✅"</span>
                </div>
                <p class="report-text">"添加微信查收你的QC报告~"</p>
                <p class="hint">
                    {format!("报告将在{}小时内发送到您的微信", REPORT_DELIVERY_HOURS)}
                </p>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_label() {
        assert_eq!(progress_label(0.0), "正在分析您的文稿... 0%");
        assert_eq!(progress_label(42.6), "正在分析您的文稿... 43%");
        assert_eq!(progress_label(100.0), "报告已生成，即将跳转...");
    }
}
