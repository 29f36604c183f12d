/// Collaborator that pins the hero section and reports progress through it.
pub trait ScrollPin {
    /// Pin the section for `length` CSS px of scrolling.
    fn create(&mut self, length: f64);
    /// Re-measure boundaries after the viewport changed.
    fn refresh(&mut self, length: f64);
    /// Release the pin. Must be safe to call repeatedly or without `create`.
    fn kill(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinGeometry {
    /// Document offset at which the section reaches the top of the viewport.
    pub start: f64,
    /// Scroll distance the section stays pinned for.
    pub distance: f64,
}

impl PinGeometry {
    pub fn new(start: f64, distance: f64) -> Self {
        Self { start, distance }
    }

    pub fn end(&self) -> f64 {
        self.start + self.distance.max(0.0)
    }

    /// Normalized progress for a scroll `offset`, clamped into `[0, 1]`.
    pub fn progress(&self, offset: f64) -> f64 {
        if !(self.distance > 0.0) {
            return if offset > self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / self.distance).clamp(0.0, 1.0)
    }
}
