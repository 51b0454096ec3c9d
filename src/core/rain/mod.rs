//! Matrix-style rain animation.
//!
//! [`RainEngine`] owns a [`Surface`], a [`Scheduler`] and an [`AudioCue`]
//! and advances only when the host hands it a [`Tick`]. At most one
//! animation is live at a time: `start` always stops the previous one, so
//! there is never more than one pending frame and one pending timer.

mod audio;
mod params;
mod platform;
mod stream;

pub use audio::{AudioCue, SoundSettings, Tone, ToneSink};
pub use params::{RainConfig, RainParams};
pub use platform::{Extent, FrameHandle, Scheduler, Surface, Tick, TimerHandle, TimerKind};
pub use stream::RainStream;

#[cfg(test)]
pub(crate) use audio::testing::RecordingSink;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::animation::{BASELINE_INSET, COMPLETION_MESSAGE, MESSAGE_INSET};
use crate::core::error::SurfaceError;

pub const WAITING_NOTICE: &str = "Aguardando renderização do terminal...";
pub const TOO_SMALL_ERROR: &str = "Erro: não foi possível inicializar a animação (área muito pequena).";
pub const MISSING_AREA_ERROR: &str = "Erro: área de animação não encontrada.";

/// Something the transcript should hear about.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    Notice(String),
    Failed(String),
    Finished,
}

/// State of a running animation.
#[derive(Debug)]
pub struct AnimationSession {
    pub started_at: f64,
    pub duration_ms: u32,
    /// Cues only play until this scheduler time.
    pub sound_deadline: f64,
    pub extent: Extent,
    pub params: RainParams,
    pub streams: Vec<RainStream>,
    glyphs: Vec<char>,
    frame: Option<FrameHandle>,
    finish: Option<TimerHandle>,
}

#[derive(Debug)]
struct PendingStart {
    duration_ms: u32,
    params: RainParams,
    attempts: u32,
    retry: Option<TimerHandle>,
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Waiting(PendingStart),
    Running(AnimationSession),
    /// Completion message is on screen.
    Finished,
}

pub struct RainEngine<S, K, A> {
    surface: S,
    scheduler: K,
    audio: AudioCue<A>,
    rng: SmallRng,
    config: RainConfig,
    phase: Phase,
    frozen: bool,
}

impl<S: Surface, K: Scheduler, A: ToneSink> RainEngine<S, K, A> {
    pub fn new(surface: S, scheduler: K, sink: A, sound: SoundSettings) -> Self {
        Self {
            surface,
            scheduler,
            audio: AudioCue::new(sink, sound),
            rng: SmallRng::from_entropy(),
            config: RainConfig::default(),
            phase: Phase::Idle,
            frozen: false,
        }
    }

    pub fn with_rng(mut self, rng: SmallRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_config(mut self, config: RainConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop whatever is running and begin a new animation.
    ///
    /// If the surface has no usable size yet the start is deferred and the
    /// surface is polled until it does or the attempts run out.
    pub fn start(&mut self, duration_ms: u32, params: RainParams) -> Vec<EngineEvent> {
        self.stop();
        self.surface.set_visible(true);
        debug!("rain: start {}ms x{}", duration_ms, params.speed_multiplier);
        self.phase = Phase::Waiting(PendingStart {
            duration_ms,
            params,
            attempts: 0,
            retry: None,
        });
        self.try_launch()
    }

    /// Cancel the frame loop and timers, clear and hide the surface and
    /// release audio. Safe to call when nothing is running.
    pub fn stop(&mut self) {
        match std::mem::take(&mut self.phase) {
            Phase::Waiting(pending) => {
                if let Some(handle) = pending.retry {
                    self.scheduler.clear_timer(handle);
                }
            }
            Phase::Running(session) => {
                if let Some(handle) = session.frame {
                    self.scheduler.cancel_frame(handle);
                }
                if let Some(handle) = session.finish {
                    self.scheduler.clear_timer(handle);
                }
            }
            Phase::Idle | Phase::Finished => {}
        }
        self.surface.clear();
        self.surface.set_visible(false);
        self.audio.release();
    }

    /// Feed a fired frame or timer back into the engine.
    pub fn handle(&mut self, tick: Tick) -> Vec<EngineEvent> {
        match tick {
            Tick::Frame => {
                self.on_frame();
                Vec::new()
            }
            Tick::Timer(TimerKind::Retry) => {
                if let Phase::Waiting(pending) = &mut self.phase {
                    pending.retry = None;
                    self.try_launch()
                } else {
                    Vec::new()
                }
            }
            Tick::Timer(TimerKind::Finish) => self.finish(),
        }
    }

    /// While frozen, frames keep arriving but nothing moves or draws.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Waiting for layout or running.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Waiting(_) | Phase::Running(_))
    }

    pub fn session(&self) -> Option<&AnimationSession> {
        match &self.phase {
            Phase::Running(session) => Some(session),
            _ => None,
        }
    }

    pub fn sound(&self) -> SoundSettings {
        self.audio.settings()
    }

    pub fn set_sound(&mut self, settings: SoundSettings) {
        self.audio.set_settings(settings);
    }

    #[cfg(test)]
    pub(crate) fn tones(&self) -> &A {
        self.audio.sink()
    }

    fn try_launch(&mut self) -> Vec<EngineEvent> {
        let Phase::Waiting(mut pending) = std::mem::take(&mut self.phase) else {
            return Vec::new();
        };

        let extent = match self.surface.measure() {
            Ok(extent) => extent,
            Err(SurfaceError::Unavailable) => {
                warn!("rain: animation area missing");
                return self.abort(MISSING_AREA_ERROR.to_string());
            }
            Err(e) => return self.abort(format!("Erro ao iniciar a animação: {}", e)),
        };

        if extent.fits(self.config.min_extent) {
            return match self.launch(pending, extent) {
                Ok(()) => Vec::new(),
                Err(e) => self.abort(format!("Erro ao iniciar a animação: {}", e)),
            };
        }

        let mut events = Vec::new();
        if pending.attempts == 0 {
            events.push(EngineEvent::Notice(WAITING_NOTICE.to_string()));
        }
        pending.attempts += 1;
        if pending.attempts > self.config.max_poll_attempts {
            debug!("rain: gave up after {} polls", pending.attempts - 1);
            events.extend(self.abort(TOO_SMALL_ERROR.to_string()));
            return events;
        }

        pending.retry = self
            .scheduler
            .set_timer(TimerKind::Retry, self.config.poll_interval_ms);
        if pending.retry.is_none() {
            events.extend(self.abort(TOO_SMALL_ERROR.to_string()));
            return events;
        }
        self.phase = Phase::Waiting(pending);
        events
    }

    fn launch(&mut self, pending: PendingStart, extent: Extent) -> Result<(), SurfaceError> {
        self.surface.prepare(extent)?;

        let params = pending.params;
        let rows = (extent.height / params.row_height()).floor() as usize;
        let streams = (0..rows)
            .map(|row| RainStream::spawn(row, extent.width, params.speed_multiplier, &mut self.rng))
            .collect();
        let now = self.scheduler.now();

        let mut session = AnimationSession {
            started_at: now,
            duration_ms: pending.duration_ms,
            sound_deadline: now + self.config.sound_window_ms,
            extent,
            glyphs: params.alphabet.chars().collect(),
            params,
            streams,
            frame: None,
            finish: None,
        };
        session.frame = self.scheduler.request_frame();
        session.finish = self
            .scheduler
            .set_timer(TimerKind::Finish, session.duration_ms);
        debug!(
            "rain: running {}x{} with {} streams",
            extent.width,
            extent.height,
            session.streams.len()
        );
        self.phase = Phase::Running(session);
        Ok(())
    }

    fn abort(&mut self, message: String) -> Vec<EngineEvent> {
        self.stop();
        vec![EngineEvent::Failed(message)]
    }

    fn on_frame(&mut self) {
        let Phase::Running(session) = &mut self.phase else {
            return;
        };
        session.frame = None;

        if !self.frozen {
            let now = self.scheduler.now();
            draw_frame(
                session,
                &mut self.surface,
                &mut self.audio,
                &mut self.rng,
                &self.config,
                now,
            );
        }

        session.frame = self.scheduler.request_frame();
    }

    fn finish(&mut self) -> Vec<EngineEvent> {
        let Phase::Running(session) = std::mem::take(&mut self.phase) else {
            return Vec::new();
        };
        if let Some(handle) = session.frame {
            self.scheduler.cancel_frame(handle);
        }
        self.audio.release();

        let params = &session.params;
        self.surface.clear();
        self.surface.fill_background(params.background);
        self.surface.set_font(params.row_height());
        self.surface.draw_text(
            COMPLETION_MESSAGE,
            MESSAGE_INSET,
            session.extent.height / 2.0,
            &params.ink_solid(),
        );
        debug!("rain: finished after {}ms", session.duration_ms);
        self.phase = Phase::Finished;
        vec![EngineEvent::Finished]
    }
}

fn draw_frame<S: Surface, A: ToneSink>(
    session: &mut AnimationSession,
    surface: &mut S,
    audio: &mut AudioCue<A>,
    rng: &mut SmallRng,
    config: &RainConfig,
    now: f64,
) {
    let params = &session.params;
    let size = params.row_height();
    let width = session.extent.width;

    surface.fill_background(params.background);
    surface.set_font(size);

    for stream in session.streams.iter_mut() {
        stream.advance(width, params.speed_multiplier, config, rng);
        let baseline = (stream.row as f64 + 1.0) * size - BASELINE_INSET;

        if !session.glyphs.is_empty() {
            let trail = config.trail_min + rng.gen_range(0..config.trail_spread.max(1));
            for k in 0..trail {
                let x = stream.x - k as f64 * size * config.glyph_advance;
                if x < -config.clip_margin || x > width + config.clip_margin {
                    continue;
                }
                let glyph = session.glyphs[rng.gen_range(0..session.glyphs.len())];
                surface.draw_glyph(glyph, x, baseline, &params.ink_with_alpha(config.trail_alpha(k)));
            }
        }

        audio.maybe_cue(now, session.sound_deadline, config.cue_scale, rng);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fakes for driving the engine without a browser.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug)]
    pub struct SurfaceLog {
        pub extent: Result<Extent, SurfaceError>,
        pub visible: bool,
        pub prepared: Option<Extent>,
        pub glyphs_drawn: usize,
        pub texts: Vec<String>,
        pub clears: usize,
    }

    /// Shares its log with the test through an `Rc`.
    #[derive(Clone, Debug)]
    pub struct FakeSurface(pub Rc<RefCell<SurfaceLog>>);

    impl FakeSurface {
        pub fn sized(width: f64, height: f64) -> Self {
            Self(Rc::new(RefCell::new(SurfaceLog {
                extent: Ok(Extent::new(width, height)),
                visible: false,
                prepared: None,
                glyphs_drawn: 0,
                texts: Vec::new(),
                clears: 0,
            })))
        }

        pub fn resize(&self, width: f64, height: f64) {
            self.0.borrow_mut().extent = Ok(Extent::new(width, height));
        }

        pub fn glyphs_drawn(&self) -> usize {
            self.0.borrow().glyphs_drawn
        }

        pub fn visible(&self) -> bool {
            self.0.borrow().visible
        }

        pub fn texts(&self) -> Vec<String> {
            self.0.borrow().texts.clone()
        }
    }

    impl Surface for FakeSurface {
        fn measure(&self) -> Result<Extent, SurfaceError> {
            self.0.borrow().extent.clone()
        }

        fn prepare(&mut self, extent: Extent) -> Result<(), SurfaceError> {
            self.0.borrow_mut().prepared = Some(extent);
            Ok(())
        }

        fn set_visible(&mut self, visible: bool) {
            self.0.borrow_mut().visible = visible;
        }

        fn clear(&mut self) {
            let mut log = self.0.borrow_mut();
            log.clears += 1;
            log.texts.clear();
        }

        fn fill_background(&mut self, _color: &str) {}

        fn set_font(&mut self, _size: f64) {}

        fn draw_glyph(&mut self, _glyph: char, _x: f64, _y: f64, _fill: &str) {
            self.0.borrow_mut().glyphs_drawn += 1;
        }

        fn draw_text(&mut self, text: &str, _x: f64, _y: f64, _fill: &str) {
            self.0.borrow_mut().texts.push(text.to_string());
        }
    }

    #[derive(Debug, Default)]
    pub struct Clockwork {
        pub now: f64,
        next_id: u32,
        pub frames: Vec<FrameHandle>,
        pub timers: Vec<(TimerHandle, TimerKind, f64)>,
    }

    /// Manual clock with inspectable pending frames and timers.
    #[derive(Clone, Debug, Default)]
    pub struct FakeScheduler(pub Rc<RefCell<Clockwork>>);

    impl FakeScheduler {
        pub fn pending_frames(&self) -> usize {
            self.0.borrow().frames.len()
        }

        pub fn pending_timers(&self) -> Vec<TimerKind> {
            self.0.borrow().timers.iter().map(|(_, kind, _)| *kind).collect()
        }

        /// Move the clock forward and collect what fired, timers first.
        pub fn step(&self, ms: f64) -> Vec<Tick> {
            let mut clock = self.0.borrow_mut();
            clock.now += ms;
            let now = clock.now;

            let mut ticks = Vec::new();
            clock.timers.retain(|(_, kind, due)| {
                if *due <= now {
                    ticks.push(Tick::Timer(*kind));
                    false
                } else {
                    true
                }
            });
            if !clock.frames.is_empty() {
                clock.frames.clear();
                ticks.push(Tick::Frame);
            }
            ticks
        }
    }

    impl Scheduler for FakeScheduler {
        fn now(&self) -> f64 {
            self.0.borrow().now
        }

        fn request_frame(&mut self) -> Option<FrameHandle> {
            let mut clock = self.0.borrow_mut();
            clock.next_id += 1;
            let handle = FrameHandle(clock.next_id as i32);
            clock.frames.push(handle);
            Some(handle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.0.borrow_mut().frames.retain(|h| *h != handle);
        }

        fn set_timer(&mut self, kind: TimerKind, delay_ms: u32) -> Option<TimerHandle> {
            let mut clock = self.0.borrow_mut();
            clock.next_id += 1;
            let handle = TimerHandle(clock.next_id);
            let due = clock.now + delay_ms as f64;
            clock.timers.push((handle, kind, due));
            Some(handle)
        }

        fn clear_timer(&mut self, handle: TimerHandle) {
            self.0.borrow_mut().timers.retain(|(h, _, _)| *h != handle);
        }
    }

    pub type TestEngine = RainEngine<FakeSurface, FakeScheduler, RecordingSink>;

    pub fn engine(width: f64, height: f64) -> (TestEngine, FakeSurface, FakeScheduler) {
        let surface = FakeSurface::sized(width, height);
        let scheduler = FakeScheduler::default();
        let engine = RainEngine::new(
            surface.clone(),
            scheduler.clone(),
            RecordingSink::default(),
            SoundSettings::default(),
        )
        .with_rng(SmallRng::seed_from_u64(42));
        (engine, surface, scheduler)
    }

    /// Step the clock in frame-sized increments, feeding every tick back.
    pub fn run(engine: &mut TestEngine, clock: &FakeScheduler, total_ms: f64) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        let mut elapsed = 0.0;
        while elapsed < total_ms {
            for tick in clock.step(16.0) {
                events.extend(engine.handle(tick));
            }
            elapsed += 16.0;
        }
        events
    }
}
