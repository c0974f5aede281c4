//! AI QC - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page where students upload an assignment brief
//! and a finished draft, then request an AI quality-check report.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navigation (section links, mobile menu)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (headline, stats)                                  │
//! │  ├── QcSection (upload slots, submit, flow dialogs)          │
//! │  └── Introduction (feature cards)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack (notices from every section)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Workflow rules (validation, slots, phases, progress) live in the
//! `aiqc` core crate; this crate only renders them and drives them with
//! browser events and timers.
//!
//! # Modules
//!
//! - [`types`] - Common types (ToastEntry, FileSummary, SectionRefs)
//! - [`components`] - UI components (Navigation, QcSection, dialogs, etc.)
//! - [`services`] - Browser plumbing (files, toasts, timers, scrolling)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Toasts
    ToastEntry,
    // Files
    FileSummary,
    // Layout
    SectionRefs,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting {} landing page", APP_NAME);

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One toaster for the whole page
    let toaster = Toaster::new();
    provide_context(toaster);

    view! {
        <Title text=format!("{} - {}", APP_NAME, COMPANY_NAME)/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
        <ToastStack toaster=toaster/>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let sections = SectionRefs::new();

    view! {
        <Navigation sections=sections/>

        <div class="container">
            <Hero sections=sections/>
            <QcSection section_ref=sections.qc/>
            <Introduction section_ref=sections.introduction qc_ref=sections.qc/>
        </div>

        <Footer/>
    }
}
