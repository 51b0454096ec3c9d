//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that bridges the
//! non-reactive [`Console`](crate::core::Console) into Leptos.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;

use crate::backend::{BrowserHost, TickSink, WebConsole, badge_time, build_console};
use crate::components::Shell;
use crate::components::terminal::INPUT_ID;
use crate::config::BADGE_REFRESH_MS;
use crate::core::PendingTask;
use crate::core::locale::detect_greeting;
use crate::core::rain::RainParams;
use crate::models::Visibility;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The console lives in a local [`StoredValue`]; every mutation goes
/// through [`AppContext::update`], which bumps a revision signal so views
/// that read through [`AppContext::with`] re-render.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    console: StoredValue<WebConsole, LocalStorage>,
    host: StoredValue<BrowserHost>,
    revision: RwSignal<u64>,
    /// Wall-clock label shown in the header badge.
    pub badge: RwSignal<String>,
}

impl AppContext {
    /// Build the console and connect the animation scheduler back to it.
    pub fn new() -> Self {
        let sink = TickSink::default();
        let ctx = Self {
            console: StoredValue::new_local(build_console(sink.clone())),
            host: StoredValue::new(BrowserHost::from_page()),
            revision: RwSignal::new(0),
            badge: RwSignal::new(badge_time()),
        };

        // Frames only bump the revision when they produced a visible change.
        sink.connect(move |tick| {
            let changed = ctx
                .console
                .try_update_value(|c| c.handle_tick(tick))
                .unwrap_or(false);
            if changed {
                ctx.bump();
            }
        });
        ctx
    }

    fn bump(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }

    /// Read the console, subscribing the caller to changes.
    pub fn with<R>(&self, f: impl FnOnce(&WebConsole) -> R) -> R {
        self.revision.track();
        self.console.with_value(f)
    }

    /// Mutate the console and notify readers.
    pub fn update<R>(&self, f: impl FnOnce(&mut WebConsole) -> R) -> Option<R> {
        let out = self.console.try_update_value(f);
        self.bump();
        out
    }

    /// Run a command line typed into the prompt.
    pub fn submit(&self, raw: String) {
        if let Some(Some(task)) = self.update(|c| c.submit(&raw)) {
            self.spawn(task);
        }
    }

    /// Run the demo listing again.
    pub fn replay(&self) {
        if let Some(Some(task)) = self.update(|c| c.replay()) {
            self.spawn(task);
        }
    }

    fn spawn(&self, task: PendingTask) {
        let ctx = *self;
        let host = self.host.get_value();
        spawn_local(async move {
            let lines = task.run(&host).await;
            ctx.update(|c| c.append(lines));
        });
    }

    /// Open the terminal and move focus to the prompt once it renders.
    pub fn open(&self) {
        if self.update(|c| c.open()).unwrap_or(false) {
            focus_prompt();
        }
    }

    pub fn toggle_hidden(&self) {
        self.update(|c| c.toggle_hidden());
        if self.console.with_value(|c| c.visibility()) == Visibility::Open {
            focus_prompt();
        }
    }

    pub fn toggle_pause(&self) {
        self.update(|c| c.toggle_pause());
    }

    pub fn toggle_sound(&self) {
        self.update(|c| c.toggle_sound());
    }

    /// Open the terminal, echo `label` and start an animation.
    pub fn quick_rain(&self, label: &'static str, duration_ms: u32, params: RainParams) {
        self.update(|c| c.quick_rain(label, duration_ms, params));
        focus_prompt();
    }

    /// Walk the command history; `None` clears the field.
    pub fn history_previous(&self) -> Option<String> {
        self.console
            .try_update_value(|c| c.history_previous())
            .flatten()
    }

    pub fn history_next(&self) -> Option<String> {
        self.console.try_update_value(|c| c.history_next()).flatten()
    }

    /// Look up the visitor's locale and swap in a matching greeting.
    fn detect_locale(&self) {
        let ctx = *self;
        let host = self.host.get_value();
        spawn_local(async move {
            let greeting = detect_greeting(&host).await;
            debug!("greeting: {}", greeting);
            ctx.update(|c| c.set_greeting(greeting));
        });
    }

    /// Refresh the header badge on a fixed interval.
    fn start_badge_clock(&self) {
        let badge = self.badge;
        Interval::new(BADGE_REFRESH_MS, move || badge.set(badge_time())).forget();
    }
}

/// Focus the prompt input after the next render.
fn focus_prompt() {
    request_animation_frame(|| {
        dom::focus_element(INPUT_ID);
    });
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts locale detection and the badge clock
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.detect_locale();
    ctx.start_badge_clock();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 40vh;
                    padding: 2rem;
                    background: #00110a;
                    color: #c8facc;
                    font-family: 'Fira Code', monospace;
                ">
                    <h1 style="color: #ff5f56; margin-bottom: 1rem;">
                        "Algo deu errado"
                    </h1>
                    <p style="color: #7fa88a; margin-bottom: 1.5rem;">
                        "O terminal encontrou um erro inesperado. Recarregue a página."
                    </p>
                    <ul style="color: #ff5f56; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #00ff66;
                            color: #00110a;
                            border: none;
                            padding: 0.6rem 1.5rem;
                            border-radius: 4px;
                            cursor: pointer;
                            font-family: 'Fira Code', monospace;
                        "
                    >
                        "Recarregar"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
