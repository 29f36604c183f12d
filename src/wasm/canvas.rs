use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::fit::DrawRect;
use crate::renderer::{DrawContext, FrameImage};

/// Canvas element plus its 2D context.
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

impl DrawContext for Canvas2d {
    type Image = HtmlImageElement;

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        let style = self.canvas.style();
        warn_on_err("canvas width", style.set_property("width", &format!("{width}px")));
        warn_on_err("canvas height", style.set_property("height", &format!("{height}px")));
    }

    fn reset_transform(&mut self) {
        warn_on_err("setTransform", self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0));
    }

    fn scale(&mut self, factor: f64) {
        warn_on_err("scale", self.ctx.scale(factor, factor));
    }

    fn clear_rect(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: DrawRect) {
        warn_on_err(
            "drawImage",
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            ),
        );
    }
}

impl FrameImage for HtmlImageElement {
    fn natural_size(&self) -> Option<(f64, f64)> {
        if self.complete() && self.natural_width() > 0 && self.natural_height() > 0 {
            Some((self.natural_width() as f64, self.natural_height() as f64))
        } else {
            None
        }
    }
}
