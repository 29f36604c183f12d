#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use hero_frames::renderer::FrameImage;
use hero_frames::{FrameCache, FramePath};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let section = document.create_element("section").unwrap();
    section.set_id(id);
    section.set_attribute("data-preset", "classic").unwrap();
    section.set_attribute("data-frame-count", "3").unwrap();
    section
        .set_attribute("data-frame-prefix", "/does-not-exist")
        .unwrap();
    section.set_inner_html(
        r#"<div class="hero-stage"><canvas></canvas><div data-hero-overlay></div></div>"#,
    );
    document.body().unwrap().append_child(&section).unwrap();
    section.dyn_into().unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Poll `done` every 20ms for up to `timeout_ms`.
async fn wait_for(timeout_ms: i32, done: impl Fn() -> bool) -> bool {
    let mut waited = 0;
    while !done() {
        if waited >= timeout_ms {
            return false;
        }
        sleep(20).await;
        waited += 20;
    }
    true
}

#[wasm_bindgen_test]
fn unloaded_image_is_not_drawable() {
    let img = web_sys::HtmlImageElement::new().unwrap();
    assert!(img.natural_size().is_none());
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_and_unmount_is_idempotent() {
    let section = fixture("hero-test");
    let mut handle = hero_frames::mount_hero("hero-test").unwrap();

    let canvas = section
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    let rect = canvas.get_bounding_client_rect();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);
    assert_eq!(handle.cursor(), 0);

    handle.unmount();
    handle.unmount();
    section.remove();
}

#[wasm_bindgen_test]
fn missing_section_is_an_error() {
    assert!(hero_frames::mount_hero("no-such-section").is_err());
}

#[wasm_bindgen_test]
async fn failed_frames_still_bind_the_hero() {
    let section = fixture("hero-missing-frames");
    let mut handle = hero_frames::mount_hero("hero-missing-frames").unwrap();
    assert!(!handle.is_bound());

    assert!(wait_for(5000, || handle.is_bound()).await, "hero never bound");
    assert_eq!(handle.cursor(), 0);

    handle.unmount();
    assert!(!handle.is_bound());
    section.remove();
}

#[wasm_bindgen_test]
async fn frame_cache_reports_ready_once_after_all_errors() {
    let calls = Rc::new(Cell::new(0));
    let drawable = Rc::new(Cell::new(usize::MAX));
    let path = FramePath::new("/does-not-exist", 0, "png");
    let _cache = {
        let calls = calls.clone();
        let drawable = drawable.clone();
        FrameCache::load(&path, 4, move |frames| {
            calls.set(calls.get() + 1);
            drawable.set(frames.iter().filter(|f| f.natural_size().is_some()).count());
        })
        .unwrap()
    };
    assert_eq!(calls.get(), 0);

    assert!(wait_for(5000, || calls.get() > 0).await, "ready never fired");
    sleep(200).await;
    assert_eq!(calls.get(), 1);
    assert_eq!(drawable.get(), 0);
}

#[wasm_bindgen_test]
async fn abandoned_frame_cache_never_reports_ready() {
    let fired = Rc::new(Cell::new(false));
    let path = FramePath::new("/does-not-exist", 0, "png");
    let mut cache = {
        let fired = fired.clone();
        FrameCache::load(&path, 4, move |_| fired.set(true)).unwrap()
    };
    // Load events are queued; nothing has settled yet.
    cache.abandon();

    sleep(1000).await;
    assert!(!fired.get());
}
