//! Scrolling helpers.

use leptos::{html, NodeRef};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::config::SCROLL_THRESHOLD_PX;

/// Whether the page is scrolled far enough for the solid navigation bar.
pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}

/// Smoothly bring `target` into view.
pub fn scroll_to_section(target: NodeRef<html::Section>) {
    let Some(section) = target.get_untracked() else {
        log::warn!("scroll target not mounted");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}
