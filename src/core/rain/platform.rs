//! Host capabilities the rain engine is driven through.
//!
//! The engine never touches the DOM, timers or the frame scheduler
//! directly. The host implements [`Surface`] and [`Scheduler`] and feeds
//! every scheduled callback back to the engine as a [`Tick`].

use crate::core::error::SurfaceError;

/// Measured size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides are at least `min`.
    pub fn fits(&self, min: f64) -> bool {
        self.width >= min && self.height >= min
    }
}

/// A canvas-like target for the animation.
pub trait Surface {
    /// Current layout size of the host container.
    fn measure(&self) -> Result<Extent, SurfaceError>;
    /// Size the backing store for `extent` and reset transforms.
    fn prepare(&mut self, extent: Extent) -> Result<(), SurfaceError>;
    fn set_visible(&mut self, visible: bool);
    fn clear(&mut self);
    fn fill_background(&mut self, color: &str);
    fn set_font(&mut self, size: f64);
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, fill: &str);
    fn draw_text(&mut self, text: &str, x: f64, y: f64, fill: &str);
}

/// Purpose of a one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Re-measure a surface that had no usable size.
    Retry,
    /// End of the animation's duration.
    Finish,
}

/// A scheduled callback delivered back to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Frame,
    Timer(TimerKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u32);

/// Frame and timer scheduling plus a monotonic clock in milliseconds.
///
/// A fired frame or timer is consumed by the scheduler; the engine only
/// cancels handles that have not fired yet.
pub trait Scheduler {
    fn now(&self) -> f64;
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    fn set_timer(&mut self, kind: TimerKind, delay_ms: u32) -> Option<TimerHandle>;
    fn clear_timer(&mut self, handle: TimerHandle);
}
