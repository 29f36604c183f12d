//! Canvas renderer: sizes the drawing surface for the device pixel ratio and
//! draws one frame of the sequence with cover placement.
//!
//! The renderer is generic over the drawing context so the same code drives
//! the browser's 2D context and the recording context used in tests.

use crate::fit::{cover_fit, DrawRect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Missing or non-positive pixel ratios fall back to 1.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Backing store size in device pixels.
    pub fn device_size(&self) -> (u32, u32) {
        (
            to_device(self.width * self.pixel_ratio),
            to_device(self.height * self.pixel_ratio),
        )
    }
}

// Browsers truncate a fractional `canvas.width`.
fn to_device(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.floor().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// The operations the renderer needs from a 2D drawing surface.
pub trait DrawContext {
    type Image: FrameImage;

    fn set_backing_size(&mut self, width: u32, height: u32);
    fn set_css_size(&mut self, width: f64, height: f64);
    fn reset_transform(&mut self);
    fn scale(&mut self, factor: f64);
    fn clear_rect(&mut self, width: f64, height: f64);
    fn draw_image(&mut self, image: &Self::Image, rect: DrawRect);
}

/// A decoded frame. `None` means the image failed to load or is not decoded
/// yet and must not be drawn.
pub trait FrameImage {
    fn natural_size(&self) -> Option<(f64, f64)>;
}

pub struct Renderer<C: DrawContext> {
    context: Option<C>,
    frames: Vec<C::Image>,
    viewport: Option<Viewport>,
}

impl<C: DrawContext> Renderer<C> {
    pub fn new(context: Option<C>) -> Self {
        Self {
            context,
            frames: Vec::new(),
            viewport: None,
        }
    }

    pub fn set_frames(&mut self, frames: Vec<C::Image>) {
        self.frames = frames;
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Drop the surface; every later call becomes a no-op.
    pub fn detach(&mut self) -> Option<C> {
        self.context.take()
    }

    /// Resize the backing store to device pixels while keeping drawing
    /// coordinates in CSS pixels.
    pub fn configure_surface(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        let Some(ctx) = self.context.as_mut() else {
            return;
        };
        let (w, h) = viewport.device_size();
        ctx.set_backing_size(w, h);
        ctx.set_css_size(viewport.width, viewport.height);
        ctx.reset_transform();
        ctx.scale(viewport.pixel_ratio);
    }

    /// Clear and draw frame `index`. Returns whether anything was drawn.
    pub fn draw_frame(&mut self, index: usize) -> bool {
        let (Some(ctx), Some(viewport)) = (self.context.as_mut(), self.viewport) else {
            return false;
        };
        let Some(image) = self.frames.get(index) else {
            return false;
        };
        let Some(size) = image.natural_size() else {
            return false;
        };
        let Some(rect) = cover_fit(size, (viewport.width, viewport.height)) else {
            return false;
        };
        ctx.clear_rect(viewport.width, viewport.height);
        ctx.draw_image(image, rect);
        true
    }
}
