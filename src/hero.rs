//! Hero controller: binds scroll progress to the frame sweep and overlay, and
//! coordinates resizes.
//!
//! The controller starts `Idle`, becomes `Bound` once every frame has settled
//! and ends `Unbound` at teardown. The playback cursor is a plain field: the
//! browser runs all callbacks on one thread, and the controller is the only
//! writer.

use crate::config::HeroConfig;
use crate::pin::ScrollPin;
use crate::renderer::{DrawContext, Renderer, Viewport};
use crate::timeline::{clamp_progress, frame_index, overlay_update, OverlayUpdate};

/// Text layer driven by the overlay timeline.
pub trait OverlayLayer {
    fn apply(&mut self, update: OverlayUpdate);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    Idle,
    Bound,
    Unbound,
}

pub struct HeroController<C, P, O>
where
    C: DrawContext,
    P: ScrollPin,
    O: OverlayLayer,
{
    config: HeroConfig,
    renderer: Renderer<C>,
    pin: P,
    overlay: Option<O>,
    state: BinderState,
    cursor: usize,
    progress: f64,
}

impl<C, P, O> HeroController<C, P, O>
where
    C: DrawContext,
    P: ScrollPin,
    O: OverlayLayer,
{
    /// Mount: size the surface for `viewport`. Nothing is drawn until the
    /// frames are ready.
    pub fn new(
        config: HeroConfig,
        context: Option<C>,
        pin: P,
        overlay: Option<O>,
        viewport: Viewport,
    ) -> Self {
        let mut renderer = Renderer::new(context);
        renderer.configure_surface(viewport);
        Self {
            config,
            renderer,
            pin,
            overlay,
            state: BinderState::Idle,
            cursor: 0,
            progress: 0.0,
        }
    }

    pub fn state(&self) -> BinderState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Frames settled: draw the current frame and register the pinned region.
    /// Only the first call while `Idle` has any effect.
    pub fn on_frames_ready(&mut self, frames: Vec<C::Image>) -> bool {
        if self.state != BinderState::Idle {
            log::debug!("frames ready in state {:?}, ignoring", self.state);
            return false;
        }
        self.renderer.set_frames(frames);
        self.renderer.draw_frame(self.cursor);
        self.bind();
        true
    }

    fn bind(&mut self) {
        let length = self.pin_length();
        self.pin.create(length);
        self.state = BinderState::Bound;
        log::info!(
            "hero bound: {} frames over {:.0}px",
            self.renderer.frame_count(),
            length
        );
    }

    /// Scroll progress through the pinned region.
    pub fn on_progress(&mut self, progress: f64) {
        if self.state != BinderState::Bound {
            return;
        }
        let p = clamp_progress(progress);
        self.progress = p;
        self.cursor = frame_index(p, self.renderer.frame_count());
        self.renderer.draw_frame(self.cursor);

        if let (Some(cfg), Some(layer)) = (self.config.overlay, self.overlay.as_mut()) {
            layer.apply(overlay_update(p, cfg));
        }
    }

    /// Viewport changed: resize the surface, redraw the current frame at the
    /// new size, then re-measure the pin.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.state == BinderState::Unbound {
            return;
        }
        self.renderer.configure_surface(viewport);
        self.renderer.draw_frame(self.cursor);
        if self.state == BinderState::Bound {
            let length = self.pin_length();
            self.pin.refresh(length);
        }
    }

    /// Teardown. Idempotent and safe before the frames were ever ready.
    pub fn unbind(&mut self) {
        if self.state == BinderState::Unbound {
            return;
        }
        self.pin.kill();
        self.renderer.detach();
        self.state = BinderState::Unbound;
        log::debug!("hero unbound");
    }

    fn pin_length(&self) -> f64 {
        let height = self.renderer.viewport().map_or(0.0, |v| v.height);
        self.config.pin_length(height)
    }
}
