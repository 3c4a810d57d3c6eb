//! Wayland window backend built on smithay-client-toolkit.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
