//! Fixed navigation bar.
//!
//! Turns opaque once the page is scrolled past the threshold and collapses
//! into a toggle menu on small screens.

use leptos::*;

use crate::config::APP_NAME;
use crate::services::{is_past_threshold, scroll_to_section, scroll_to_top, scroll_y};
use crate::types::SectionRefs;

#[component]
pub fn Navigation(sections: SectionRefs) -> impl IntoView {
    let (is_scrolled, set_is_scrolled) = create_signal(false);
    let (menu_open, set_menu_open) = create_signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        set_is_scrolled.set(is_past_threshold(scroll_y()));
    });
    on_cleanup(move || listener.remove());

    let go = move |target: NodeRef<html::Section>| {
        scroll_to_section(target);
        set_menu_open.set(false);
    };

    view! {
        <nav class="nav" class:scrolled=move || is_scrolled.get()>
            <div class="nav-inner">
                <button class="logo" on:click=move |_| scroll_to_top()>
                    {APP_NAME}
                </button>

                <div class="nav-links">
                    <button class="nav-link" on:click=move |_| go(sections.qc)>"AI QC"</button>
                    <button class="nav-link" on:click=move |_| go(sections.introduction)>
                        "服务介绍"
                    </button>
                    <button class="nav-cta" on:click=move |_| go(sections.qc)>"开始检测"</button>
                </div>

                <button
                    class="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show
                when=move || menu_open.get()
                fallback=|| view! { }
            >
                <div class="nav-mobile">
                    <button class="nav-mobile-link" on:click=move |_| go(sections.qc)>"AI QC"</button>
                    <button class="nav-mobile-link" on:click=move |_| go(sections.introduction)>
                        "服务介绍"
                    </button>
                    <button class="nav-cta wide" on:click=move |_| go(sections.qc)>"开始检测"</button>
                </div>
            </Show>
        </nav>
    }
}
