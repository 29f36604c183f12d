use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlElement, Window};

use crate::pin::{PinGeometry, ScrollPin};
use crate::smooth::SmoothScroll;

type Listener = Box<dyn FnMut(f64)>;

struct ScrollerInner {
    smooth: SmoothScroll,
    listeners: Vec<(u32, Listener)>,
    next_id: u32,
    frame_id: Option<i32>,
}

/// Eased scroll offset published to subscribers once per animation frame
/// while it moves.
#[derive(Clone)]
pub struct SmoothScroller {
    window: Window,
    inner: Rc<RefCell<ScrollerInner>>,
    // `raf` holds the animation-frame closure so it can reschedule itself.
    raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl SmoothScroller {
    pub fn new(window: Window, lerp: f64) -> Self {
        let mut smooth = SmoothScroll::new(lerp);
        smooth.jump_to(window.scroll_y().unwrap_or(0.0));
        Self {
            window,
            inner: Rc::new(RefCell::new(ScrollerInner {
                smooth,
                listeners: Vec::new(),
                next_id: 0,
                frame_id: None,
            })),
            raf: Rc::new(RefCell::new(None)),
        }
    }

    pub fn current(&self) -> f64 {
        self.inner.borrow().smooth.current()
    }

    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> u32 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: u32) {
        self.inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }

    pub fn start(&self) -> Result<(), JsValue> {
        if self.raf.borrow().is_some() {
            return Ok(());
        }
        let this = self.clone();
        *self.raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            this.frame();
        }) as Box<dyn FnMut()>));
        self.schedule()
    }

    /// Cancel the pending frame and drop the loop closure. Subscribers stay
    /// registered until they unsubscribe.
    pub fn stop(&self) {
        let pending = self.inner.borrow_mut().frame_id.take();
        if let Some(id) = pending {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
        self.raf.borrow_mut().take();
    }

    fn schedule(&self) -> Result<(), JsValue> {
        let raf = self.raf.borrow();
        let Some(callback) = raf.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.inner.borrow_mut().frame_id = Some(id);
        Ok(())
    }

    fn frame(&self) {
        let target = self.window.scroll_y().unwrap_or(0.0);
        let moved = {
            let mut inner = self.inner.borrow_mut();
            inner.frame_id = None;
            inner.smooth.set_target(target);
            inner.smooth.tick()
        };
        if moved {
            let mut inner = self.inner.borrow_mut();
            let offset = inner.smooth.current();
            for (_, listener) in inner.listeners.iter_mut() {
                listener(offset);
            }
        }
        if let Err(e) = self.schedule() {
            log::error!("requestAnimationFrame: {e:?}");
        }
    }
}

/// Pins the hero by stretching the section to `viewport + length` and making
/// its stage sticky for that distance.
pub struct StickyPin {
    window: Window,
    section: HtmlElement,
    stage: HtmlElement,
    geometry: Rc<Cell<Option<PinGeometry>>>,
    saved: Option<SavedStyles>,
}

struct SavedStyles {
    section_height: String,
    stage_position: String,
    stage_top: String,
    stage_height: String,
}

impl StickyPin {
    pub fn new(window: Window, section: HtmlElement, stage: HtmlElement) -> Self {
        Self {
            window,
            section,
            stage,
            geometry: Rc::new(Cell::new(None)),
            saved: None,
        }
    }

    /// Shared view of the current geometry; `None` while unpinned.
    pub fn geometry(&self) -> Rc<Cell<Option<PinGeometry>>> {
        self.geometry.clone()
    }

    fn apply(&mut self, length: f64) -> Result<(), JsValue> {
        let viewport_height = self
            .window
            .inner_height()?
            .as_f64()
            .unwrap_or_default();
        self.section
            .style()
            .set_property("height", &format!("{}px", viewport_height + length))?;

        let stage = self.stage.style();
        stage.set_property("position", "sticky")?;
        stage.set_property("top", "0")?;
        stage.set_property("height", "100vh")?;

        let top = self.section.get_bounding_client_rect().top();
        let start = top + self.window.scroll_y()?;
        self.geometry.set(Some(PinGeometry::new(start, length)));
        Ok(())
    }
}

impl ScrollPin for StickyPin {
    fn create(&mut self, length: f64) {
        if self.saved.is_none() {
            let section = self.section.style();
            let stage = self.stage.style();
            self.saved = Some(SavedStyles {
                section_height: section.get_property_value("height").unwrap_or_default(),
                stage_position: stage.get_property_value("position").unwrap_or_default(),
                stage_top: stage.get_property_value("top").unwrap_or_default(),
                stage_height: stage.get_property_value("height").unwrap_or_default(),
            });
        }
        if let Err(e) = self.apply(length) {
            log::warn!("pinning hero failed: {e:?}");
        }
    }

    fn refresh(&mut self, length: f64) {
        if self.saved.is_none() {
            return;
        }
        if let Err(e) = self.apply(length) {
            log::warn!("refreshing hero pin failed: {e:?}");
        }
    }

    fn kill(&mut self) {
        self.geometry.set(None);
        let Some(saved) = self.saved.take() else {
            return;
        };
        let section = self.section.style();
        let stage = self.stage.style();
        let restored = section
            .set_property("height", &saved.section_height)
            .and_then(|_| stage.set_property("position", &saved.stage_position))
            .and_then(|_| stage.set_property("top", &saved.stage_top))
            .and_then(|_| stage.set_property("height", &saved.stage_height));
        if let Err(e) = restored {
            log::warn!("restoring hero styles failed: {e:?}");
        }
    }
}
