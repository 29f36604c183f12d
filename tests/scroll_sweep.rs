use hero_frames::pin::PinGeometry;
use hero_frames::smooth::SmoothScroll;
use hero_frames::testing::{
    Journal, Op, RecordingContext, RecordingOverlay, RecordingPin, StubImage,
};
use hero_frames::{BinderState, HeroConfig, HeroController, LoadTracker, Viewport};

type Controller = HeroController<RecordingContext, RecordingPin, RecordingOverlay>;

fn mount(config: HeroConfig, journal: &Journal, viewport: Viewport) -> Controller {
    HeroController::new(
        config,
        Some(RecordingContext::new(journal.clone())),
        RecordingPin::new(journal.clone()),
        Some(RecordingOverlay::new(journal.clone())),
        viewport,
    )
}

/// Out-of-order completions with a failure in the middle still produce one
/// ready signal, after the last completion.
#[test]
fn ready_after_last_of_scrambled_loads() {
    let config = HeroConfig::classic();
    let journal = Journal::default();
    let mut hero = mount(config.clone(), &journal, Viewport::new(1920.0, 1080.0, 1.0));

    let mut tracker = LoadTracker::new(config.frame_count);
    let mut slots: Vec<Option<StubImage>> = vec![None; config.frame_count];
    let order: Vec<usize> = (0..config.frame_count).rev().collect();
    let mut ready_calls = 0;

    for (n, &index) in order.iter().enumerate() {
        slots[index] = Some(if index == 7 {
            StubImage::failed()
        } else {
            StubImage::tagged(index, 4000.0, 2000.0)
        });
        if tracker.settle(index) {
            ready_calls += 1;
            assert_eq!(n, config.frame_count - 1);
            let frames = slots.iter().map(|s| s.unwrap()).collect();
            assert!(hero.on_frames_ready(frames));
        }
        assert_eq!(hero.state() == BinderState::Bound, tracker.is_ready());
    }
    assert_eq!(ready_calls, 1);
}

/// Eased scrolling through the pinned region walks the frames forward and
/// ends on the last one.
#[test]
fn eased_scroll_sweeps_all_frames() {
    let config = HeroConfig::unfold();
    let viewport = Viewport::new(1280.0, 800.0, 1.0);
    let journal = Journal::default();
    let mut hero = mount(config.clone(), &journal, viewport);
    hero.on_frames_ready(StubImage::sequence(config.frame_count, 1920.0, 1080.0));

    let pin = PinGeometry::new(0.0, config.pin_length(viewport.height));
    let mut smooth = SmoothScroll::new(config.lerp);
    smooth.set_target(pin.end());

    let mut last = 0;
    while smooth.tick() {
        hero.on_progress(pin.progress(smooth.current()));
        assert!(hero.cursor() >= last);
        last = hero.cursor();
    }
    assert_eq!(hero.cursor(), config.frame_count - 1);
    assert_eq!(hero.progress(), 1.0);
}

#[test]
fn resize_after_scroll_redraws_current_frame_once() {
    let config = HeroConfig::classic();
    let journal = Journal::default();
    let mut hero = mount(config.clone(), &journal, Viewport::new(1920.0, 1080.0, 1.0));
    hero.on_frames_ready(StubImage::sequence(config.frame_count, 4000.0, 2000.0));
    hero.on_progress(0.45);
    journal.clear();

    hero.on_resize(Viewport::new(1024.0, 768.0, 1.5));
    let ops = journal.ops();

    let configure = ops
        .iter()
        .filter(|op| matches!(op, Op::BackingSize(..)))
        .count();
    let draws: Vec<usize> = ops
        .iter()
        .filter_map(|op| match op {
            Op::Draw(tag, _) => Some(*tag),
            _ => None,
        })
        .collect();
    assert_eq!(configure, 1);
    assert_eq!(draws, vec![20]);

    let configure_at = ops.iter().position(|op| matches!(op, Op::BackingSize(..)));
    let draw_at = ops.iter().position(|op| matches!(op, Op::Draw(..)));
    assert!(configure_at < draw_at);
    assert_eq!(ops.last(), Some(&Op::PinRefresh(768.0 * 2.5)));
}
