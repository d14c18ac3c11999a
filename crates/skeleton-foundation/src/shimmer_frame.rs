use std::borrow::Cow;

use skeleton_animation::{Shimmer, ShimmerAnimation};
use skeleton_core::View;

/// Container that overlays a shimmer sweep on its children.
///
/// The sweep stops whenever the frame leaves the attached tree. On attach it
/// starts again if the frame was built with
/// [`ShimmerFrame::restarting_on_attach`] or its configuration asks for auto
/// start.
pub struct ShimmerFrame {
    animation: ShimmerAnimation,
    restart_on_attach: bool,
}

impl ShimmerFrame {
    pub fn new(config: Shimmer) -> Self {
        Self {
            animation: ShimmerAnimation::new(config),
            restart_on_attach: false,
        }
    }

    pub fn restarting_on_attach(mut self) -> Self {
        self.restart_on_attach = true;
        self
    }

    /// Handle to this frame's own animation instance.
    pub fn animation(&self) -> ShimmerAnimation {
        self.animation.clone()
    }

    pub fn set_shimmer(&mut self, config: Shimmer) {
        self.animation.set_config(config);
    }

    pub fn start_shimmer(&mut self) {
        self.animation.start();
    }

    pub fn stop_shimmer(&mut self) {
        self.animation.stop();
    }

    pub fn is_shimmer_started(&self) -> bool {
        self.animation.is_running()
    }
}

impl View for ShimmerFrame {
    fn mount(&mut self) {
        if self.restart_on_attach || self.animation.config().auto_start {
            self.animation.start();
        }
    }

    fn unmount(&mut self) {
        self.animation.stop();
    }

    fn on_frame(&mut self, frame_time_nanos: u64) {
        self.animation.on_frame(frame_time_nanos);
    }

    fn is_container(&self) -> bool {
        true
    }

    fn describe(&self) -> Cow<'static, str> {
        let state = if self.animation.is_running() {
            "running"
        } else {
            "stopped"
        };
        Cow::Owned(format!("ShimmerFrame({state})"))
    }
}

#[cfg(test)]
#[path = "tests/shimmer_frame_tests.rs"]
mod tests;
