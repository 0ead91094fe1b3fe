//! Bookkeeping for the animation loop, independent of the browser.

use crate::error::RenderError;
use crate::uniforms::timestamp_to_seconds;

/// Lifecycle of a renderer. There is no explicit stop; the page unloading
/// ends the `Running` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Uninitialized,
    Initialized,
    Running,
}

/// Converts host timestamps into the shader's `u_time`.
///
/// Browsers hand `requestAnimationFrame` a non-decreasing timestamp, but the
/// clock clamps anyway so `u_time` can never step backwards.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let now = timestamp_to_seconds(timestamp_ms);
        if now > self.last {
            self.last = now;
        }
        self.last
    }
}

/// Tracks outstanding `requestAnimationFrame` calls.
///
/// The loop keeps exactly one request in flight: every frame consumes the
/// pending request and must issue the next one before returning.
#[derive(Debug, Default)]
pub struct FrameRequests {
    outstanding: u32,
    frames: u64,
}

impl FrameRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new request. Fails if one is already pending.
    pub fn request(&mut self) -> Result<(), RenderError> {
        if self.outstanding > 0 {
            return Err(RenderError::FrameAlreadyScheduled);
        }
        self.outstanding = 1;
        Ok(())
    }

    /// Called on entry to the frame callback.
    pub fn begin_frame(&mut self) {
        if self.outstanding == 0 {
            log::warn!("frame callback ran without a pending request");
        }
        self.outstanding = 0;
        self.frames += 1;
    }

    /// The request issued after a failed `requestAnimationFrame` never fires.
    pub fn cancel(&mut self) {
        self.outstanding = 0;
    }

    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
