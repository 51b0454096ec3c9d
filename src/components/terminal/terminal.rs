//! Terminal view component.
//!
//! The transcript, and either the prompt or the "closed" placeholder.

use leptos::prelude::*;

use super::INPUT_ID;
use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::models::Visibility;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| ctx.submit(input))
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32, Option<String>> {
    Callback::new(move |direction: i32| {
        if direction < 0 {
            ctx.history_previous()
        } else {
            ctx.history_next()
        }
    })
}

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let prompt = Signal::derive(move || ctx.with(|c| c.prompt()));
    let is_open = Signal::derive(move || ctx.with(|c| c.visibility() == Visibility::Open));

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);

    let handle_click = move |_| {
        dom::focus_element(INPUT_ID);
    };

    view! {
        <div class=css::container on:click=handle_click>
            <div
                node_ref=output_ref
                class=css::output
                role="log"
                aria-live="polite"
            >
                <For
                    each=move || ctx.with(|c| c.transcript().to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show
                when=move || is_open.get()
                fallback=move || view! {
                    <div class=css::closed>
                        <span class=css::closedText>
                            "Terminal fechado. Pressione qualquer tecla ou"
                        </span>
                        <button class=css::openButton on:click=move |_| ctx.open()>
                            "Abrir terminal"
                        </button>
                    </div>
                }
            >
                <div class=css::inputArea>
                    <Input prompt=prompt on_submit=on_submit on_history_nav=on_history_nav />
                </div>
            </Show>
        </div>
    }
}
