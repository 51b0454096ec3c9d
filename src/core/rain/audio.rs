//! Short synthesized "bit" cues that accompany the first seconds of an
//! animation.

use rand::Rng;
use tracing::debug;

use crate::config::sound;
use crate::core::error::AudioError;

/// Visitor-controlled sound options, persisted as preferences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundSettings {
    pub enabled: bool,
    /// Master gain in `0.0..=1.0`.
    pub volume: f64,
    /// Cue density in `0.0..=1.0`.
    pub intensity: f64,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: sound::DEFAULT_VOLUME,
            intensity: sound::DEFAULT_INTENSITY,
        }
    }
}

/// One sine blip through a lowpass filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub cutoff_hz: f32,
    pub gain: f32,
    /// Exponential ramp target reached at `ramp_secs`.
    pub floor: f32,
    pub ramp_secs: f64,
    pub stop_secs: f64,
}

impl Tone {
    pub fn random(gain: f32, rng: &mut impl Rng) -> Self {
        Self {
            frequency_hz: sound::FREQ_MIN_HZ + rng.r#gen::<f32>() * sound::FREQ_SPREAD_HZ,
            cutoff_hz: sound::CUTOFF_MIN_HZ + rng.r#gen::<f32>() * sound::CUTOFF_SPREAD_HZ,
            gain,
            floor: sound::RAMP_FLOOR,
            ramp_secs: sound::RAMP_SECS,
            stop_secs: sound::STOP_SECS,
        }
    }
}

/// Audio output the cues are played through.
pub trait ToneSink {
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError>;
    /// Drop the audio context. The next `play` creates a fresh one.
    fn release(&mut self);
}

/// Decides when a cue plays and forwards it to a [`ToneSink`].
///
/// Output failures are swallowed; sound is never load-bearing.
#[derive(Debug)]
pub struct AudioCue<A> {
    sink: A,
    settings: SoundSettings,
}

impl<A: ToneSink> AudioCue<A> {
    pub fn new(sink: A, settings: SoundSettings) -> Self {
        Self { sink, settings }
    }

    pub fn settings(&self) -> SoundSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: SoundSettings) {
        self.settings = settings;
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    /// Roll the per-stream chance and play a cue if it hits while
    /// `now` is before `deadline`. Returns whether a cue was played.
    pub fn maybe_cue(&mut self, now: f64, deadline: f64, cue_scale: f64, rng: &mut impl Rng) -> bool {
        if !self.settings.enabled {
            return false;
        }
        if rng.r#gen::<f64>() >= self.settings.intensity * cue_scale {
            return false;
        }
        if now > deadline {
            return false;
        }
        let tone = Tone::random(self.settings.volume as f32, rng);
        match self.sink.play(&tone) {
            Ok(()) => true,
            Err(e) => {
                debug!("sound cue skipped: {}", e);
                false
            }
        }
    }

    pub fn release(&mut self) {
        self.sink.release();
    }
}
