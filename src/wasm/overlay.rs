use web_sys::HtmlElement;

use crate::hero::OverlayLayer;
use crate::timeline::{overlay_transform, OverlayUpdate};

pub struct OverlayElement {
    element: HtmlElement,
}

impl OverlayElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl OverlayLayer for OverlayElement {
    fn apply(&mut self, update: OverlayUpdate) {
        let style = self.element.style();
        let result = match update {
            OverlayUpdate::Visible {
                translate_z,
                opacity,
            } => style
                .set_property("transform", &overlay_transform(translate_z))
                .and_then(|_| style.set_property("opacity", &opacity.to_string())),
            OverlayUpdate::Hidden => style.set_property("opacity", "0"),
        };
        if let Err(e) = result {
            log::warn!("overlay style update failed: {e:?}");
        }
    }
}
