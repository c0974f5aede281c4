//! AI QC upload form and submission flow.
//!
//! All workflow rules live in [`aiqc::QcForm`]; this component keeps one in
//! a signal, feeds it picked files and button clicks, and shows the dialog
//! that matches the current [`Phase`].

use aiqc::{CancelToken, GenerationTicket, Notice, Phase, QcForm, SlotId, SlotKind};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{
    FailedDialog, GeneratingDialog, InfoDialog, MultiUploadBox, ReportDialog, SingleUploadBox,
};
use crate::services::{picked_files, reset_picker, start_generation, use_toaster, BrowserFile};
use crate::types::FileSummary;

#[component]
pub fn QcSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let toaster = use_toaster();
    let form = create_rw_signal(QcForm::<BrowserFile>::new());
    let active_run = store_value(None::<CancelToken>);

    let requirement_input = create_node_ref::<html::Input>();
    let draft_input = create_node_ref::<html::Input>();
    let supporting_input = create_node_ref::<html::Input>();

    // A run must not outlive the section
    on_cleanup(move || {
        active_run.try_with_value(|run| {
            if let Some(token) = run {
                token.cancel();
            }
        });
    });

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    let phase = create_memo(move |_| form.with(|f| f.submission.phase().clone()));
    let progress = Signal::derive(move || form.with(|f| f.submission.progress()));
    let has_completed = move || form.with(|f| f.submission.has_completed());
    let requirement_file =
        Signal::derive(move || form.with(|f| f.requirement.get().map(FileSummary::from)));
    let draft_file = Signal::derive(move || form.with(|f| f.draft.get().map(FileSummary::from)));
    let supporting_files = Signal::derive(move || {
        form.with(|f| f.supporting.entries().iter().map(FileSummary::from).collect::<Vec<_>>())
    });
    let nickname = Signal::derive(move || form.with(|f| f.submission.nickname.clone()));
    let failure = Signal::derive(move || match phase.get() {
        Phase::Failed(err) => Notice::from(&err).description,
        _ => String::new(),
    });

    // -------------------------------------------------------------------------
    // Slot handlers
    // -------------------------------------------------------------------------

    let on_single_pick = move |kind: SlotKind, input: NodeRef<html::Input>, ev: Event| {
        let target: HtmlInputElement = event_target(&ev);
        let Some(file) = picked_files(&target).into_iter().next() else {
            return;
        };
        let accepted = toaster.batch(|sink| {
            form.try_update(|f| f.attach(kind, file, sink).is_ok())
                .unwrap_or(false)
        });
        if !accepted {
            // let the user pick the same file again after fixing the problem
            reset_picker(input);
        }
    };

    let on_single_remove = move |kind: SlotKind, input: NodeRef<html::Input>| {
        form.update(|f| {
            f.detach(kind);
        });
        reset_picker(input);
    };

    let on_supporting_pick = move |ev: Event| {
        let target: HtmlInputElement = event_target(&ev);
        let files = picked_files(&target);
        if files.is_empty() {
            return;
        }
        toaster.batch(|sink| {
            form.update(|f| {
                f.supporting.attach_many(files, sink);
            })
        });
        reset_picker(supporting_input);
    };

    let on_supporting_remove = move |id: SlotId| {
        form.update(|f| {
            f.supporting.detach_one(&id);
        });
    };

    // -------------------------------------------------------------------------
    // Flow handlers
    // -------------------------------------------------------------------------

    let run = move |ticket: Option<GenerationTicket>| {
        if let Some(ticket) = ticket {
            let token = start_generation(form, ticket, toaster);
            active_run.set_value(Some(token));
        }
    };

    let cancel_run = move || {
        active_run.update_value(|run| {
            if let Some(token) = run.take() {
                token.cancel();
            }
        });
    };

    let on_submit = move |_| {
        toaster.batch(|sink| {
            form.update(|f| {
                if let Err(err) = f.submit(sink) {
                    log::debug!("submit not accepted: {}", err);
                }
            })
        });
    };

    let on_confirm = move |_: ()| {
        let ticket = toaster.batch(|sink| {
            form.try_update(|f| f.submission.confirm(sink).ok()).flatten()
        });
        run(ticket);
    };

    let on_retry = move |_: ()| {
        let ticket = form.try_update(|f| f.submission.retry().ok()).flatten();
        run(ticket);
    };

    let on_cancel_generation = move |_: ()| {
        cancel_run();
        form.update(|f| {
            f.submission.cancel_generation();
        });
    };

    view! {
        <section class="qc-section" node_ref=section_ref>
            <div class="section-heading">
                <h2>"AI 质量检测"</h2>
                <p>"上传您的作业要求和完成文稿，获取专业的AI质量检测报告"</p>
            </div>

            <div class="card">
                <div class="form-group">
                    <label class="form-label">{SlotKind::Requirement.label()}</label>
                    <div class="form-grid">
                        <div>
                            <label class="form-sublabel">"上传文件"</label>
                            <SingleUploadBox
                                prompt="点击上传作业要求文件"
                                file=requirement_file
                                input_ref=requirement_input
                                on_pick=move |ev| on_single_pick(SlotKind::Requirement, requirement_input, ev)
                                on_remove=move |_| on_single_remove(SlotKind::Requirement, requirement_input)
                            />
                        </div>
                        <div>
                            <label class="form-sublabel">"手动输入"</label>
                            <textarea
                                class="requirement-text"
                                placeholder="在此输入作业要求..."
                                prop:value=move || form.with(|f| f.submission.requirement_text.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    form.update(|f| f.submission.requirement_text = text);
                                }
                            ></textarea>
                        </div>
                    </div>
                </div>

                <div class="form-group">
                    <label class="form-label">{SlotKind::Draft.label()}</label>
                    <SingleUploadBox
                        prompt="点击上传完成文稿"
                        file=draft_file
                        input_ref=draft_input
                        on_pick=move |ev| on_single_pick(SlotKind::Draft, draft_input, ev)
                        on_remove=move |_| on_single_remove(SlotKind::Draft, draft_input)
                    />
                </div>

                <div class="form-group">
                    <label class="form-label">
                        {SlotKind::Supporting.label()}
                        <span class="optional">" (选填)"</span>
                    </label>
                    <MultiUploadBox
                        files=supporting_files
                        input_ref=supporting_input
                        on_pick=on_supporting_pick
                        on_remove=on_supporting_remove
                    />
                </div>

                <div class="form-actions">
                    <button class="button-primary" on:click=on_submit>"提交 QC"</button>
                    <Show
                        when=has_completed
                        fallback=|| view! { }
                    >
                        <button
                            class="button-outline"
                            on:click=move |_| form.update(|f| {
                                f.submission.view_report();
                            })
                        >
                            "查看 QC 报告"
                        </button>
                    </Show>
                </div>
            </div>

            {move || match phase.get() {
                Phase::Idle => view! { }.into_view(),
                Phase::InfoCapture => view! {
                    <InfoDialog
                        nickname=nickname
                        on_input=move |text| form.update(|f| f.submission.nickname = text)
                        on_cancel=move |_| form.update(|f| f.submission.close_info())
                        on_confirm=on_confirm
                    />
                }
                .into_view(),
                Phase::Generating => view! {
                    <GeneratingDialog progress=progress on_cancel=on_cancel_generation/>
                }
                .into_view(),
                Phase::Failed(_) => view! {
                    <FailedDialog
                        message=failure
                        on_retry=on_retry
                        on_dismiss=move |_| form.update(|f| f.submission.dismiss_failure())
                    />
                }
                .into_view(),
                Phase::ReportReady => view! {
                    <ReportDialog on_close=move |_| form.update(|f| f.submission.close_report())/>
                }
                .into_view(),
            }}
        </section>
    }
}
