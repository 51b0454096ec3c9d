//! Main shell component.
//!
//! Lays out the header controls, the animation area and the terminal, and
//! installs the page-wide effects: autoscroll and quick-open.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::terminal::Terminal;
use crate::app::AppContext;
use crate::components::controls::{Controls, CornerNote};
use crate::components::matrix::MatrixArea;
use crate::models::Visibility;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Elements that consume their own keystrokes.
const EDITABLE_TAGS: [&str; 4] = ["INPUT", "TEXTAREA", "BUTTON", "SELECT"];

/// Single printable character or Enter, unless the key was aimed at a
/// form control. The terminal's own input submits `exit` on Enter and that
/// keydown still bubbles to the window.
fn opens_terminal(key: &str, target_tag: Option<&str>) -> bool {
    let from_control = target_tag
        .is_some_and(|tag| EDITABLE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)));
    !from_control && (key == "Enter" || key.chars().count() == 1)
}

/// Auto-scroll output to bottom when the transcript changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.with(|c| c.transcript().len());
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Any printable key opens the terminal while it shows the placeholder.
/// The listener lives as long as the page.
fn setup_quick_open(ctx: AppContext) {
    window_event_listener(ev::keydown, move |ev| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let target_tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.tag_name());
        let closed = ctx.with(|c| c.visibility() == Visibility::Closed);
        if closed && opens_terminal(&ev.key(), target_tag.as_deref()) {
            ctx.open();
        }
    });
}

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx, output_ref);
    setup_quick_open(ctx);

    view! {
        <section class=css::screen aria-label="Terminal">
            <Controls />
            <MatrixArea />
            <div class=css::main>
                <Terminal output_ref=output_ref />
            </div>
            <CornerNote />
        </section>
    }
}
