// Reacts to xdg toplevel configure/close events: resizes the canvas and
// replays the action log at the new size.
use log::{debug, info};
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        serial: u32,
    ) {
        let (width, height) = self.configured_size(configure.new_size);
        debug!(
            "Window configured: {}x{} (serial {}, suggested {:?})",
            width, height, serial, configure.new_size
        );

        if self.surface.update_dimensions(width, height) {
            info!("Window size is now {}x{}", width, height);
        }
        self.input_state.update_screen_dimensions(width, height);

        self.surface.mark_configured();
        self.input_state.needs_redraw = true;
    }
}
