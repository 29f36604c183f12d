/// Distance below which the eased value snaps onto the target.
const SNAP: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    lerp: f64,
}

impl SmoothScroll {
    /// `lerp` is clamped into `(0, 1]`; 1 disables easing.
    pub fn new(lerp: f64) -> Self {
        let lerp = if lerp.is_finite() {
            lerp.clamp(f64::EPSILON, 1.0)
        } else {
            1.0
        };
        Self {
            current: 0.0,
            target: 0.0,
            lerp,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Move to `offset` without easing (page load, anchor jumps).
    pub fn jump_to(&mut self, offset: f64) {
        if offset.is_finite() {
            self.current = offset;
            self.target = offset;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame. Returns whether the eased value changed.
    pub fn tick(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        let next = self.current + (self.target - self.current) * self.lerp;
        self.current = if (self.target - next).abs() < SNAP {
            self.target
        } else {
            next
        };
        true
    }
}
