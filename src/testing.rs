//! Recording collaborators for exercising the renderer and controller off the
//! browser. Every call lands in a shared journal so ordering across the
//! surface, the pin and the overlay can be asserted.

use std::cell::RefCell;
use std::rc::Rc;

use crate::fit::DrawRect;
use crate::hero::OverlayLayer;
use crate::pin::ScrollPin;
use crate::renderer::{DrawContext, FrameImage};
use crate::timeline::OverlayUpdate;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    BackingSize(u32, u32),
    CssSize(f64, f64),
    ResetTransform,
    Scale(f64),
    Clear(f64, f64),
    Draw(usize, DrawRect),
    PinCreate(f64),
    PinRefresh(f64),
    PinKill,
    Overlay(OverlayUpdate),
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Op>>>);

impl Journal {
    pub fn push(&self, op: Op) {
        self.0.borrow_mut().push(op);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StubImage {
    pub tag: usize,
    pub size: Option<(f64, f64)>,
}

impl StubImage {
    pub fn loaded(width: f64, height: f64) -> Self {
        Self::tagged(0, width, height)
    }

    pub fn tagged(tag: usize, width: f64, height: f64) -> Self {
        Self {
            tag,
            size: Some((width, height)),
        }
    }

    pub fn failed() -> Self {
        Self { tag: 0, size: None }
    }

    /// `count` usable frames tagged with their index.
    pub fn sequence(count: usize, width: f64, height: f64) -> Vec<Self> {
        (0..count).map(|i| Self::tagged(i, width, height)).collect()
    }
}

impl FrameImage for StubImage {
    fn natural_size(&self) -> Option<(f64, f64)> {
        self.size
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    pub journal: Journal,
}

impl RecordingContext {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    pub fn ops(&self) -> Vec<Op> {
        self.journal.ops()
    }
}

impl DrawContext for RecordingContext {
    type Image = StubImage;

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.journal.push(Op::BackingSize(width, height));
    }

    fn set_css_size(&mut self, width: f64, height: f64) {
        self.journal.push(Op::CssSize(width, height));
    }

    fn reset_transform(&mut self) {
        self.journal.push(Op::ResetTransform);
    }

    fn scale(&mut self, factor: f64) {
        self.journal.push(Op::Scale(factor));
    }

    fn clear_rect(&mut self, width: f64, height: f64) {
        self.journal.push(Op::Clear(width, height));
    }

    fn draw_image(&mut self, image: &StubImage, rect: DrawRect) {
        self.journal.push(Op::Draw(image.tag, rect));
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingPin {
    pub journal: Journal,
}

impl RecordingPin {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl ScrollPin for RecordingPin {
    fn create(&mut self, length: f64) {
        self.journal.push(Op::PinCreate(length));
    }

    fn refresh(&mut self, length: f64) {
        self.journal.push(Op::PinRefresh(length));
    }

    fn kill(&mut self) {
        self.journal.push(Op::PinKill);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    pub journal: Journal,
}

impl RecordingOverlay {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl OverlayLayer for RecordingOverlay {
    fn apply(&mut self, update: OverlayUpdate) {
        self.journal.push(Op::Overlay(update));
    }
}
