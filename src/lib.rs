//! Library exports for the sketchpad drawing canvas.
//!
//! The binary only parses arguments and hands off to [`backend`]; everything
//! else (action log, replay, gesture handling, export) lives here so it can be
//! exercised without a compositor.

pub mod backend;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
