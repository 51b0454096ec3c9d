//! `requestAnimationFrame` and `setTimeout` behind the engine's
//! [`Scheduler`] trait.
//!
//! Every fired callback is forwarded as a [`Tick`] to whatever the
//! [`TickSink`] is connected to, normally the console.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::rain::{FrameHandle, Scheduler, Tick, TimerHandle, TimerKind};
use crate::utils::dom;

type Dispatch = Box<dyn Fn(Tick)>;

/// Late-bound receiver for ticks.
///
/// The scheduler is built before the console that owns it, so the
/// receiver is connected afterwards.
#[derive(Clone, Default)]
pub struct TickSink(Rc<RefCell<Option<Dispatch>>>);

impl TickSink {
    pub fn connect(&self, dispatch: impl Fn(Tick) + 'static) {
        *self.0.borrow_mut() = Some(Box::new(dispatch));
    }

    fn dispatch(&self, tick: Tick) {
        if let Some(dispatch) = self.0.borrow().as_ref() {
            dispatch(tick);
        }
    }
}

pub struct FrameScheduler {
    sink: TickSink,
    on_frame: Closure<dyn FnMut(f64)>,
    timers: HashMap<u32, Timeout>,
    /// Ids whose callbacks already ran; dropped on the next timer call.
    fired: Rc<RefCell<Vec<u32>>>,
    next_timer: u32,
}

impl FrameScheduler {
    pub fn new(sink: TickSink) -> Self {
        let frame_sink = sink.clone();
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            frame_sink.dispatch(Tick::Frame);
        });
        Self {
            sink,
            on_frame,
            timers: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
            next_timer: 0,
        }
    }

    fn prune(&mut self) {
        let fired: Vec<u32> = self.fired.borrow_mut().drain(..).collect();
        for id in fired {
            self.timers.remove(&id);
        }
    }
}

impl Scheduler for FrameScheduler {
    fn now(&self) -> f64 {
        dom::performance_now()
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = dom::window()?;
        match window.request_animation_frame(self.on_frame.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(window) = dom::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }

    fn set_timer(&mut self, kind: TimerKind, delay_ms: u32) -> Option<TimerHandle> {
        self.prune();
        self.next_timer = self.next_timer.wrapping_add(1);
        let id = self.next_timer;

        let sink = self.sink.clone();
        let fired = Rc::clone(&self.fired);
        // The id is marked only after dispatch so a nested prune never
        // drops the callback that is still running.
        let timeout = Timeout::new(delay_ms, move || {
            sink.dispatch(Tick::Timer(kind));
            fired.borrow_mut().push(id);
        });
        self.timers.insert(id, timeout);
        Some(TimerHandle(id))
    }

    fn clear_timer(&mut self, handle: TimerHandle) {
        self.prune();
        if let Some(timeout) = self.timers.remove(&handle.0) {
            timeout.cancel();
        }
    }
}
