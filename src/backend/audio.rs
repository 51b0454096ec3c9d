//! Web Audio output for the rain's sound cues.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, BiquadFilterType, GainNode, OscillatorType};

use crate::core::error::AudioError;
use crate::core::rain::{Tone, ToneSink};

fn blocked(e: JsValue) -> AudioError {
    AudioError::Blocked(format!("{:?}", e))
}

/// Lazily created `AudioContext` with one shared gain node.
#[derive(Default)]
pub struct WebAudio {
    graph: Option<(AudioContext, GainNode)>,
}

impl WebAudio {
    pub fn new() -> Self {
        Self::default()
    }

    fn graph(&mut self) -> Result<&(AudioContext, GainNode), AudioError> {
        if self.graph.is_none() {
            let ctx = AudioContext::new().map_err(|_| AudioError::Unavailable)?;
            let gain = ctx.create_gain().map_err(blocked)?;
            gain.connect_with_audio_node(&ctx.destination())
                .map_err(blocked)?;
            self.graph = Some((ctx, gain));
        }
        self.graph.as_ref().ok_or(AudioError::Unavailable)
    }
}

impl ToneSink for WebAudio {
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        let (ctx, gain) = self.graph()?;

        let osc = ctx.create_oscillator().map_err(blocked)?;
        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(tone.frequency_hz);

        let filter = ctx.create_biquad_filter().map_err(blocked)?;
        filter.set_type(BiquadFilterType::Lowpass);
        filter.frequency().set_value(tone.cutoff_hz);

        osc.connect_with_audio_node(&filter).map_err(blocked)?;
        filter.connect_with_audio_node(gain).map_err(blocked)?;

        let now = ctx.current_time();
        let level = gain.gain();
        level.cancel_scheduled_values(now).map_err(blocked)?;
        level.set_value_at_time(tone.gain, now).map_err(blocked)?;
        level
            .exponential_ramp_to_value_at_time(tone.floor, now + tone.ramp_secs)
            .map_err(blocked)?;

        osc.start().map_err(blocked)?;
        osc.stop_with_when(now + tone.stop_secs).map_err(blocked)?;
        Ok(())
    }

    fn release(&mut self) {
        if let Some((ctx, _)) = self.graph.take() {
            let _ = ctx.close();
        }
    }
}
