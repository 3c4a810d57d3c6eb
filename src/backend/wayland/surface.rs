//! The toplevel window plus the shared-memory pool its frames are drawn into.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

/// Window handle, buffer pool and frame pacing for the single canvas window.
///
/// The pool is sized for the current window and dropped whenever the size
/// changes, so a configure never leaves stale buffers behind.
#[derive(Default)]
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    awaiting_frame: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Records a new window size; returns `true` (and drops the pool) if it changed.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        if (self.width, self.height) == (width, height) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pool = None;
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Called once the compositor has sent the first configure.
    pub fn mark_configured(&mut self) {
        self.configured = true;
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// A frame callback was requested with the last commit.
    pub fn frame_requested(&mut self) {
        self.awaiting_frame = true;
    }

    /// The compositor signalled that the last frame was presented.
    pub fn frame_done(&mut self) {
        self.awaiting_frame = false;
    }

    pub fn awaiting_frame(&self) -> bool {
        self.awaiting_frame
    }

    /// Returns the buffer pool, allocating room for `buffer_count` frames at the current size.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let pool_size = (self.width * self.height * 4) as usize * buffer_count;
            info!(
                "Allocating {} byte buffer pool for {}x{} window ({} buffers)",
                pool_size, self.width, self.height, buffer_count
            );
            self.pool = Some(SlotPool::new(pool_size, shm).context("Failed to create slot pool")?);
        }

        self.pool.as_mut().context("Buffer pool missing after allocation")
    }
}
