use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use super::canvas::Canvas2d;
use super::loader::FrameCache;
use super::overlay::OverlayElement;
use super::scroll::{SmoothScroller, StickyPin};
use crate::config::HeroConfig;
use crate::hero::{BinderState, HeroController};
use crate::renderer::Viewport;

type WebHero = HeroController<Canvas2d, StickyPin, OverlayElement>;

const CANVAS_SELECTOR: &str = "canvas";
const STAGE_SELECTOR: &str = ".hero-stage";
const OVERLAY_SELECTOR: &str = "[data-hero-overlay]";

fn current_viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    Viewport::new(width, height, window.device_pixel_ratio())
}

fn find<T: JsCast>(root: &HtmlElement, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

struct Mounted {
    window: Window,
    hero: Rc<RefCell<WebHero>>,
    cache: FrameCache,
    scroller: SmoothScroller,
    subscription: u32,
    resize: Closure<dyn FnMut()>,
}

impl Mounted {
    fn teardown(mut self) {
        self.scroller.unsubscribe(self.subscription);
        self.scroller.stop();
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
        {
            log::warn!("removing resize listener failed: {e:?}");
        }
        self.cache.abandon();
        self.hero.borrow_mut().unbind();
    }
}

/// A mounted hero section. Dropping the handle without `unmount` leaves the
/// animation running for the lifetime of the page.
#[wasm_bindgen]
pub struct HeroHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Remove listeners, abandon pending loads and release the pin. Calling it
    /// again does nothing.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.teardown();
            log::info!("hero unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.hero.borrow().cursor())
    }

    /// Whether every frame has settled and the section is pinned.
    #[wasm_bindgen(getter, js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.hero.borrow().state() == BinderState::Bound)
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.mounted
            .as_ref()
            .map_or(0.0, |m| m.hero.borrow().progress())
    }
}

impl Drop for HeroHandle {
    fn drop(&mut self) {
        // JS-side `free()` lands here; without it the closures would outlive
        // their Rust state.
        self.unmount();
    }
}

/// Mount the hero in the section with id `section_id`. Options are read from
/// the section's `data-*` attributes.
#[wasm_bindgen]
pub fn mount_hero(section_id: &str) -> Result<HeroHandle, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document: Document = window.document().ok_or("no document")?;
    let section = document
        .get_element_by_id(section_id)
        .ok_or("hero section not found")?
        .dyn_into::<HtmlElement>()?;

    let config = HeroConfig::from_attributes(|name| section.get_attribute(name))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let context = match find::<HtmlCanvasElement>(&section, CANVAS_SELECTOR)? {
        Some(canvas) => Some(Canvas2d::new(canvas)?),
        None => {
            log::warn!("#{section_id} has no canvas, frames will not be drawn");
            None
        }
    };
    let stage = find::<HtmlElement>(&section, STAGE_SELECTOR)?.unwrap_or_else(|| section.clone());
    let overlay = find::<HtmlElement>(&section, OVERLAY_SELECTOR)?.map(OverlayElement::new);

    let pin = StickyPin::new(window.clone(), section.clone(), stage);
    let geometry = pin.geometry();

    let hero = Rc::new(RefCell::new(HeroController::new(
        config.clone(),
        context,
        pin,
        overlay,
        current_viewport(&window),
    )));

    // The sweep starts at frame 0 even when the browser restores a scroll
    // position on reload.
    if config.reset_scroll {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
    let scroller = SmoothScroller::new(window.clone(), config.lerp);
    let subscription = {
        let hero = hero.clone();
        let geometry = geometry.clone();
        scroller.subscribe(move |offset| {
            if let Some(pin) = geometry.get() {
                hero.borrow_mut().on_progress(pin.progress(offset));
            }
        })
    };

    let cache = {
        let hero = hero.clone();
        let scroller = scroller.clone();
        FrameCache::load(&config.frame_path, config.frame_count, move |frames| {
            let mut hero = hero.borrow_mut();
            if hero.on_frames_ready(frames) {
                if let Some(pin) = geometry.get() {
                    hero.on_progress(pin.progress(scroller.current()));
                }
            }
        })?
    };

    let resize = {
        let hero = hero.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            hero.borrow_mut().on_resize(current_viewport(&window));
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

    scroller.start()?;
    log::info!(
        "hero #{section_id} mounted: {} frames from {}",
        config.frame_count,
        config.frame_path.url(0)
    );

    Ok(HeroHandle {
        mounted: Some(Mounted {
            window,
            hero,
            cache,
            scroller,
            subscription,
            resize,
        }),
    })
}
