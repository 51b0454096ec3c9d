//! Header bar: title, timestamps and the widget's buttons.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::animation::{CMATRIX_DURATION_MS, CURL_BUTTON_DURATION_MS};
use crate::core::rain::RainParams;

stylance::import_crate_style!(css, "src/components/controls.module.css");

#[component]
pub fn Controls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let paused = Signal::derive(move || ctx.with(|c| c.session().paused));
    let hidden = Signal::derive(move || ctx.with(|c| c.session().hidden));
    let sound_on = Signal::derive(move || ctx.with(|c| c.sound().enabled));
    let last_updated = Signal::derive(move || {
        ctx.with(|c| c.last_updated().map(str::to_string))
            .unwrap_or_else(|| "—".to_string())
    });
    let top_line = Signal::derive(move || ctx.with(|c| c.top_line()));

    view! {
        <header class=css::bar>
            <div class=css::titleRow>
                <span class=css::dots aria-hidden="true">
                    <span class=css::dotRed></span>
                    <span class=css::dotYellow></span>
                    <span class=css::dotGreen></span>
                </span>
                <span class=format!("{} glow", css::topLine)>{top_line}</span>
                <span class=css::meta>
                    "Atualizado: "
                    <time class=css::metaValue>{last_updated}</time>
                </span>
                <span class=css::badge title="Hora local">{move || ctx.badge.get()}</span>
            </div>

            <div class=css::buttons>
                <button class=css::button on:click=move |_| ctx.replay()>"Replay"</button>
                <button
                    class=css::button
                    aria-pressed=move || paused.get().to_string()
                    on:click=move |_| ctx.toggle_pause()
                >
                    {move || if paused.get() { "Retomar" } else { "Pausar" }}
                </button>
                <button
                    class=css::button
                    aria-pressed=move || hidden.get().to_string()
                    on:click=move |_| ctx.toggle_hidden()
                >
                    {move || if hidden.get() { "Mostrar" } else { "Ocultar" }}
                </button>
                <button
                    class=css::button
                    title="Som da animação"
                    aria-pressed=move || sound_on.get().to_string()
                    on:click=move |_| ctx.toggle_sound()
                >
                    {move || if sound_on.get() { "🔊" } else { "🔈" }}
                </button>
                <span class=css::spacer></span>
                <button
                    class=css::accent
                    on:click=move |_| {
                        ctx.quick_rain("curl", CURL_BUTTON_DURATION_MS, RainParams::standard())
                    }
                >
                    "curl"
                </button>
                <button
                    class=css::accent
                    on:click=move |_| {
                        ctx.quick_rain("cmatrix", CMATRIX_DURATION_MS, RainParams::intensified())
                    }
                >
                    "cmatrix"
                </button>
            </div>
        </header>
    }
}

/// Small note in the widget's corner; a teaser until the greeting is known.
#[component]
pub fn CornerNote() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    view! {
        <p class=css::cornerNote aria-live="polite">{move || ctx.with(|c| c.corner_note())}</p>
    }
}
