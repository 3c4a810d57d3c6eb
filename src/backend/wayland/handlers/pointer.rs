// Feeds pointer motion and button events into the gesture state.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

fn mouse_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            // Fractional positions are kept; truncation happens when actions are built
            let (x, y) = event.position;

            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({:.1}, {:.1})", x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    self.input_state.on_mouse_motion(x, y);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({:.1}, {:.1})", button, x, y);
                    let Some(mb) = mouse_button(button) else {
                        continue;
                    };
                    self.input_state.on_mouse_press(mb, x, y);
                    self.input_state.needs_redraw = true;
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released at ({:.1}, {:.1})", button, x, y);
                    let Some(mb) = mouse_button(button) else {
                        continue;
                    };
                    self.input_state.on_mouse_release(mb, x, y);
                    self.input_state.needs_redraw = true;
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
