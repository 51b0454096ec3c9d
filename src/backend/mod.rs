//! Browser implementations of the capabilities the core is written against.
//!
//! - [`canvas`] - 2D canvas [`Surface`](crate::core::rain::Surface)
//! - [`scheduler`] - animation frames and timeouts
//! - [`audio`] - Web Audio tone output
//! - [`storage`] - localStorage preferences
//! - [`host`] - lookup services, remote fallback and wall clock

pub mod audio;
pub mod canvas;
pub mod host;
pub mod scheduler;
pub mod storage;

pub use audio::WebAudio;
pub use canvas::CanvasSurface;
pub use host::{BrowserClock, BrowserHost, badge_time};
pub use scheduler::{FrameScheduler, TickSink};
pub use storage::LocalStore;

use crate::core::rain::{RainConfig, RainEngine, SoundSettings};
use crate::core::{Console, Platform};
use crate::models::ShellFlavor;
use crate::utils::dom;

/// The page's platform.
pub struct WebPlatform;

impl Platform for WebPlatform {
    type Surface = CanvasSurface;
    type Scheduler = FrameScheduler;
    type Tones = WebAudio;
    type Store = LocalStore;
    type Clock = BrowserClock;
}

pub type WebConsole = Console<WebPlatform>;

/// Assemble the page console. Ticks from the scheduler go to `sink`,
/// which the caller connects once the console has a home.
pub fn build_console(sink: TickSink) -> WebConsole {
    let (platform, user_agent) = dom::platform_hints();
    let flavor = ShellFlavor::detect(&platform, &user_agent);
    let engine = RainEngine::new(
        CanvasSurface::new(),
        FrameScheduler::new(sink),
        WebAudio::new(),
        SoundSettings::default(),
    )
    .with_config(RainConfig::default());
    Console::new(flavor, engine, LocalStore, BrowserClock)
}
