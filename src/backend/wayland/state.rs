// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides rendering and export routing used across them.
use anyhow::{Context, Result};
use log::{debug, info};
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell}, shm::Shm,
};
use std::num::NonZeroU32;
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{config::Config, draw::color::WHITE, export::ExportSettings, input::InputState};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,
    pub(super) export_settings: ExportSettings,

    // Input state
    pub(super) input_state: InputState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        let export_settings = config.export_settings();
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            export_settings,
            input_state,
        }
    }

    /// Picks the window size for a configure event.
    ///
    /// The compositor's suggestion wins; otherwise the current size is kept,
    /// falling back to the configured default before the first configure.
    pub(super) fn configured_size(
        &self,
        suggested: (Option<NonZeroU32>, Option<NonZeroU32>),
    ) -> (u32, u32) {
        resolve_window_size(
            suggested,
            (self.surface.width(), self.surface.height()),
            (self.config.ui.window_width, self.config.ui.window_height),
        )
    }

    /// Runs any export the last key press asked for.
    pub(super) fn handle_pending_export(&mut self) {
        let Some(format) = self.input_state.take_pending_export() else {
            return;
        };

        if let Ok(path) = self.input_state.export(format, &self.export_settings) {
            info!("{} export written to {}", format.label(), path.display());
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed to Wayland,
        //    ensuring Cairo doesn't access memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Copy the canvas; it already holds the replayed log plus any live preview
        ctx.set_operator(cairo::Operator::Source);
        match &self.input_state.canvas {
            Some(drawing) => {
                ctx.set_source_surface(drawing.surface(), 0.0, 0.0)
                    .context("Failed to use canvas as source")?;
            }
            None => WHITE.apply(&ctx),
        }
        ctx.paint().context("Failed to paint canvas")?;
        ctx.set_operator(cairo::Operator::Over);

        if self.input_state.show_status_bar {
            crate::ui::render_status_bar(
                &ctx,
                &self.input_state,
                self.config.ui.status_bar_position,
                &self.config.ui.status_bar_style,
                width,
                height,
            );
        }

        if self.input_state.show_help {
            crate::ui::render_help_overlay(&ctx, &self.config.ui.help_overlay_style, width, height);
        }

        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(
            0,
            0,
            width.min(i32::MAX as u32) as i32,
            height.min(i32::MAX as u32) as i32,
        );

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

fn resolve_window_size(
    suggested: (Option<NonZeroU32>, Option<NonZeroU32>),
    current: (u32, u32),
    default: (u32, u32),
) -> (u32, u32) {
    let fallback = if current.0 > 0 && current.1 > 0 {
        current
    } else {
        default
    };

    (
        suggested.0.map_or(fallback.0, NonZeroU32::get),
        suggested.1.map_or(fallback.1, NonZeroU32::get),
    )
}
