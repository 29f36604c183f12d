use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::frames::{FramePath, LoadTracker};

type ReadyFn = Box<dyn FnOnce(Vec<HtmlImageElement>)>;

/// Frame images in flight. Every image is requested at once; `on_ready` runs
/// exactly once, after each of them loaded or failed.
pub struct FrameCache {
    images: Vec<HtmlImageElement>,
    handlers: Vec<Closure<dyn FnMut()>>,
    abandoned: Rc<Cell<bool>>,
}

impl FrameCache {
    pub fn load<F>(path: &FramePath, count: usize, on_ready: F) -> Result<Self, JsValue>
    where
        F: FnOnce(Vec<HtmlImageElement>) + 'static,
    {
        let tracker = Rc::new(RefCell::new(LoadTracker::new(count)));
        let abandoned = Rc::new(Cell::new(false));
        let on_ready: Rc<RefCell<Option<ReadyFn>>> =
            Rc::new(RefCell::new(Some(Box::new(on_ready))));

        let images = (0..count)
            .map(|_| HtmlImageElement::new())
            .collect::<Result<Vec<_>, _>>()?;
        let shared = Rc::new(images.clone());

        let mut handlers = Vec::with_capacity(count * 2);
        for (index, img) in images.iter().enumerate() {
            let url = path.url(index);
            let settle = {
                let tracker = tracker.clone();
                let abandoned = abandoned.clone();
                let on_ready = on_ready.clone();
                let shared = shared.clone();
                move || {
                    if abandoned.get() {
                        return;
                    }
                    let done = tracker.borrow_mut().settle(index);
                    if done {
                        if let Some(ready) = on_ready.borrow_mut().take() {
                            ready(shared.as_ref().clone());
                        }
                    }
                }
            };

            let on_error = {
                let settle = settle.clone();
                let url = url.clone();
                Closure::wrap(Box::new(move || {
                    log::debug!("frame {url} failed to load");
                    settle();
                }) as Box<dyn FnMut()>)
            };
            let on_load = Closure::wrap(Box::new(settle) as Box<dyn FnMut()>);

            img.set_onload(Some(on_load.as_ref().unchecked_ref()));
            img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            img.set_src(&url);

            handlers.push(on_load);
            handlers.push(on_error);
        }

        log::debug!("requested {count} frames from {}", path.prefix);
        Ok(Self {
            images,
            handlers,
            abandoned,
        })
    }

    /// Stop listening for completions. Pending loads are left to finish on
    /// their own and never reach the ready callback.
    pub fn abandon(&mut self) {
        self.abandoned.set(true);
        for img in &self.images {
            img.set_onload(None);
            img.set_onerror(None);
        }
        self.handlers.clear();
    }
}

impl Drop for FrameCache {
    fn drop(&mut self) {
        self.abandon();
    }
}
