#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Scroll-driven image sequence player for a pinned hero section.
//!
//! The platform-independent core (configuration, frame bookkeeping, cover
//! placement, the scroll timeline and the controller state machine) builds on
//! every target so it can be tested on the host. Browser bindings only compile
//! for wasm32.

pub mod config;
pub mod fit;
pub mod frames;
pub mod hero;
pub mod pin;
pub mod renderer;
pub mod smooth;
pub mod timeline;

#[doc(hidden)]
pub mod testing;

pub use config::{ConfigError, HeroConfig, OverlayConfig};
pub use frames::{FramePath, LoadTracker};
pub use hero::{BinderState, HeroController, OverlayLayer};
pub use renderer::Viewport;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    mod canvas;
    #[doc(hidden)]
    pub mod loader;
    mod mount;
    mod overlay;
    mod scroll;

    pub use mount::{mount_hero, HeroHandle};

    /// Section the page mounts automatically.
    const DEFAULT_SECTION: &str = "hero";

    thread_local! {
        static PAGE_HERO: RefCell<Option<HeroHandle>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let section = document.get_element_by_id(DEFAULT_SECTION);

        let level = section
            .as_ref()
            .and_then(|s| s.get_attribute("data-log-level"))
            .and_then(|l| l.parse::<log::Level>().ok())
            .unwrap_or(log::Level::Info);
        let _logger_already_set = console_log::init_with_level(level);

        if section.is_none() {
            log::warn!("#{DEFAULT_SECTION} not found, hero not mounted");
            return Ok(());
        }

        let handle = mount_hero(DEFAULT_SECTION)?;
        PAGE_HERO.with(|slot| *slot.borrow_mut() = Some(handle));
        Ok(())
    }

    /// Tear down the automatically mounted hero.
    #[wasm_bindgen]
    pub fn unmount_page_hero() {
        PAGE_HERO.with(|slot| {
            if let Some(mut handle) = slot.borrow_mut().take() {
                handle.unmount();
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount_hero, HeroHandle};

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use wasm::loader::FrameCache;
