use std::cell::RefCell;
use std::rc::Rc;

use crate::Shimmer;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// A running (or stopped) shimmer sweep.
///
/// Cloning yields another handle to the same instance. Progress only moves
/// when the host calls [`ShimmerAnimation::on_frame`], so an instance that
/// nobody ticks costs nothing.
#[derive(Clone)]
pub struct ShimmerAnimation {
    inner: Rc<RefCell<ShimmerAnimationInner>>,
}

struct ShimmerAnimationInner {
    config: Shimmer,
    running: bool,
    start_time_nanos: Option<u64>,
    progress: f32,
}

impl ShimmerAnimation {
    pub fn new(config: Shimmer) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ShimmerAnimationInner {
                config,
                running: false,
                start_time_nanos: None,
                progress: 0.0,
            })),
        }
    }

    pub fn config(&self) -> Shimmer {
        self.inner.borrow().config
    }

    /// Installs a new configuration.
    ///
    /// A running sweep restarts from the beginning of its cycle; a stopped one
    /// starts if the new configuration asks for auto start.
    pub fn set_config(&self, config: Shimmer) {
        let mut inner = self.inner.borrow_mut();
        inner.config = config;
        inner.start_time_nanos = None;
        inner.progress = 0.0;
        if !inner.running && config.auto_start {
            inner.running = true;
        }
    }

    pub fn start(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.running {
            return;
        }
        inner.running = true;
        inner.start_time_nanos = None;
        inner.progress = 0.0;
        log::trace!("shimmer started");
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.running {
            return;
        }
        inner.running = false;
        inner.start_time_nanos = None;
        log::trace!("shimmer stopped");
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Position of the band within the current sweep, in `[0, 1]`. Stays at
    /// `1` during the repeat delay.
    pub fn progress(&self) -> f32 {
        self.inner.borrow().progress
    }

    /// Advances the sweep to `frame_time_nanos`. Returns whether the
    /// animation is running and wants further frames.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.running {
            return false;
        }
        let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);

        let duration_nanos = inner.config.duration_millis.saturating_mul(NANOS_PER_MILLI).max(1);
        let cycle_nanos = duration_nanos
            .saturating_add(inner.config.repeat_delay_millis.saturating_mul(NANOS_PER_MILLI));
        let into_cycle = elapsed_nanos % cycle_nanos;
        inner.progress = (into_cycle as f32 / duration_nanos as f32).min(1.0);
        true
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
