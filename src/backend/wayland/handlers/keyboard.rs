// Bridges Wayland key events into `InputState` and runs any export a shortcut queued.
use log::debug;
use smithay_client_toolkit::seat::keyboard::{
    KeyEvent, KeyboardHandler, Keysym, Modifiers, RawModifiers,
};
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_keyboard, wl_surface},
};

use crate::input::Key;

use super::super::state::WaylandState;

impl KeyboardHandler for WaylandState {
    fn enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
        _raw: &[u32],
        _keysyms: &[Keysym],
    ) {
        debug!("Keyboard focus entered");
    }

    fn leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
    ) {
        debug!("Keyboard focus left");
        self.input_state.modifiers = Default::default();
    }

    fn press_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym, event.utf8.as_deref());
        debug!("Key pressed: {:?}", key);
        self.input_state.on_key_press(key);
        self.input_state.needs_redraw = true;
        self.handle_pending_export();
    }

    fn release_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym, event.utf8.as_deref());
        debug!("Key released: {:?}", key);
        self.input_state.on_key_release(key);
    }

    fn update_modifiers(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        modifiers: Modifiers,
        _layout: RawModifiers,
        _group: u32,
    ) {
        debug!(
            "Modifiers: ctrl={} alt={} shift={}",
            modifiers.ctrl, modifiers.alt, modifiers.shift
        );
        // xkb is authoritative; this also fixes state after focus changes
        let tracked = &mut self.input_state.modifiers;
        tracked.ctrl = modifiers.ctrl;
        tracked.alt = modifiers.alt;
        tracked.shift = modifiers.shift;
        self.input_state.needs_redraw = true;
    }

    fn repeat_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym, event.utf8.as_deref());
        debug!("Key repeated: {:?}", key);
        self.input_state.on_key_press(key);
        self.input_state.needs_redraw = true;
        self.handle_pending_export();
    }
}

/// Maps an xkb keysym (plus its composed text) onto our key model.
fn keysym_to_key(keysym: Keysym, utf8: Option<&str>) -> Key {
    match keysym {
        Keysym::Escape => Key::Escape,
        Keysym::Return | Keysym::KP_Enter => Key::Return,
        Keysym::BackSpace => Key::Backspace,
        Keysym::Tab => Key::Tab,
        Keysym::space => Key::Space,
        Keysym::Shift_L | Keysym::Shift_R => Key::Shift,
        Keysym::Control_L | Keysym::Control_R => Key::Ctrl,
        Keysym::Alt_L | Keysym::Alt_R => Key::Alt,
        _ => {
            let raw = keysym.raw();
            if (0x20..=0x7E).contains(&raw) {
                return Key::Char(raw as u8 as char);
            }

            // Non-ASCII layouts still type their composed character
            utf8.and_then(|text| text.chars().find(|c| !c.is_control()))
                .map_or(Key::Unknown, Key::Char)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_directly() {
        assert_eq!(keysym_to_key(Keysym::Escape, None), Key::Escape);
        assert_eq!(keysym_to_key(Keysym::KP_Enter, None), Key::Return);
        assert_eq!(keysym_to_key(Keysym::space, Some(" ")), Key::Space);
        assert_eq!(keysym_to_key(Keysym::Control_R, None), Key::Ctrl);
    }

    #[test]
    fn printable_ascii_becomes_char() {
        assert_eq!(keysym_to_key(Keysym::z, Some("z")), Key::Char('z'));
        assert_eq!(keysym_to_key(Keysym::Z, Some("Z")), Key::Char('Z'));
        assert_eq!(keysym_to_key(Keysym::_4, Some("4")), Key::Char('4'));
    }

    #[test]
    fn composed_text_is_used_for_other_keysyms() {
        assert_eq!(keysym_to_key(Keysym::eacute, Some("é")), Key::Char('é'));
        assert_eq!(keysym_to_key(Keysym::F5, None), Key::Unknown);
    }
}
