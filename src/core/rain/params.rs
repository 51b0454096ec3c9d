//! Visual parameters and tuning constants for the rain animation.

use crate::config::{animation, sound};

/// Per-animation look: the only thing `curl` and `cmatrix` differ in
/// besides duration.
#[derive(Clone, Debug, PartialEq)]
pub struct RainParams {
    /// Glyph height in CSS pixels; also the row height.
    pub glyph_size: f64,
    pub speed_multiplier: f64,
    pub alphabet: &'static str,
    pub ink: (u8, u8, u8),
    pub background: &'static str,
}

impl RainParams {
    /// Letters and digits at base speed.
    pub fn standard() -> Self {
        Self {
            glyph_size: animation::GLYPH_SIZE,
            speed_multiplier: 1.0,
            alphabet: animation::ALPHABET,
            ink: animation::INK,
            background: animation::BACKGROUND,
        }
    }

    /// Twice as fast with punctuation mixed into the alphabet.
    pub fn intensified() -> Self {
        Self {
            speed_multiplier: animation::CMATRIX_SPEED_MULTIPLIER,
            alphabet: animation::ALPHABET_EXTENDED,
            ..Self::standard()
        }
    }

    /// Row height actually used for layout. Falls back to the standard
    /// glyph size when `glyph_size` is not a usable positive number.
    pub fn row_height(&self) -> f64 {
        if self.glyph_size.is_finite() && self.glyph_size >= 1.0 {
            self.glyph_size
        } else {
            animation::GLYPH_SIZE
        }
    }

    /// CSS color for a glyph at the given opacity.
    pub fn ink_with_alpha(&self, alpha: f64) -> String {
        let (r, g, b) = self.ink;
        format!("rgba({},{},{},{:.2})", r, g, b, alpha)
    }

    /// Opaque ink color.
    pub fn ink_solid(&self) -> String {
        let (r, g, b) = self.ink;
        format!("rgb({},{},{})", r, g, b)
    }
}

/// Timing and geometry knobs shared by every animation.
///
/// Defaults come from [`crate::config::animation`] and
/// [`crate::config::sound`]; none of them are invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    pub poll_interval_ms: u32,
    pub max_poll_attempts: u32,
    pub min_extent: f64,
    pub wrap_margin: f64,
    pub respawn_spread: f64,
    pub clip_margin: f64,
    pub trail_min: usize,
    pub trail_spread: usize,
    pub alpha_step: f64,
    pub alpha_floor: f64,
    /// Horizontal advance per glyph as a fraction of glyph size.
    pub glyph_advance: f64,
    pub sound_window_ms: f64,
    pub cue_scale: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: animation::POLL_INTERVAL_MS,
            max_poll_attempts: animation::MAX_POLL_ATTEMPTS,
            min_extent: animation::MIN_EXTENT,
            wrap_margin: animation::WRAP_MARGIN,
            respawn_spread: animation::RESPAWN_SPREAD,
            clip_margin: animation::CLIP_MARGIN,
            trail_min: animation::TRAIL_MIN,
            trail_spread: animation::TRAIL_SPREAD,
            alpha_step: animation::ALPHA_STEP,
            alpha_floor: animation::ALPHA_FLOOR,
            glyph_advance: animation::GLYPH_ADVANCE,
            sound_window_ms: sound::WINDOW_MS,
            cue_scale: sound::CUE_SCALE,
        }
    }
}

impl RainConfig {
    /// Opacity of the `k`th glyph behind a stream's head.
    pub fn trail_alpha(&self, k: usize) -> f64 {
        (1.0 - k as f64 * self.alpha_step).max(self.alpha_floor)
    }
}
