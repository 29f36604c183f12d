use crate::config::OverlayConfig;

/// Fraction of the pinned distance over which the frames play.
pub const SWEEP_END: f64 = 0.9;
/// Progress per unit of overlay depth travel.
pub const DEPTH_STEP: f64 = 0.1;
pub const FADE_START: f64 = 0.2;
pub const FADE_END: f64 = 0.25;
/// Past this point the overlay is hidden and its transform no longer updated.
pub const OVERLAY_CUTOFF: f64 = 0.8;

/// Clamp raw progress into `[0, 1]`; NaN counts as the start.
pub fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

pub fn animation_progress(p: f64) -> f64 {
    (clamp_progress(p) / SWEEP_END).min(1.0)
}

/// Frame shown at progress `p` for a sequence of `frame_count` frames.
pub fn frame_index(p: f64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let last = (frame_count - 1) as f64;
    (animation_progress(p) * last).round() as usize
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayUpdate {
    /// Write both the depth transform and the opacity.
    Visible { translate_z: f64, opacity: f64 },
    /// Past the cutoff: only the opacity is written, the transform stays.
    Hidden,
}

impl OverlayUpdate {
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Visible { opacity, .. } => *opacity,
            Self::Hidden => 0.0,
        }
    }
}

pub fn overlay_update(p: f64, overlay: OverlayConfig) -> OverlayUpdate {
    let p = clamp_progress(p);
    if p > OVERLAY_CUTOFF {
        return OverlayUpdate::Hidden;
    }
    let translate_z = (p / DEPTH_STEP) * overlay.depth;
    let opacity = if p < FADE_START {
        1.0
    } else if p >= FADE_END {
        0.0
    } else {
        1.0 - (p - FADE_START) / (FADE_END - FADE_START)
    };
    OverlayUpdate::Visible {
        translate_z,
        opacity,
    }
}

/// CSS transform for the overlay; the leading translate keeps it centered.
pub fn overlay_transform(translate_z: f64) -> String {
    format!("translate(-50%, -50%) translateZ({translate_z}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAY: OverlayConfig = OverlayConfig { depth: -500.0 };

    #[test]
    fn sweep_endpoints() {
        assert_eq!(frame_index(0.0, 40), 0);
        assert_eq!(frame_index(0.9, 40), 39);
        assert_eq!(frame_index(1.0, 40), 39);
        assert_eq!(frame_index(0.45, 40), 20);
    }

    #[test]
    fn sweep_is_monotonic() {
        let mut last = 0;
        for step in 0..=900 {
            let f = frame_index(step as f64 / 1000.0, 60);
            assert!(f >= last, "frame went back at step {step}");
            last = f;
        }
        assert_eq!(last, 59);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(frame_index(-0.5, 10), 0);
        assert_eq!(frame_index(3.0, 10), 9);
        assert_eq!(frame_index(f64::NAN, 10), 0);
        assert_eq!(frame_index(0.5, 1), 0);
        assert_eq!(frame_index(0.5, 0), 0);
    }

    #[test]
    fn overlay_fades_between_twenty_and_twenty_five_percent() {
        assert_eq!(overlay_update(0.1, OVERLAY).opacity(), 1.0);
        assert_eq!(overlay_update(0.2, OVERLAY).opacity(), 1.0);
        let mid = overlay_update(0.225, OVERLAY).opacity();
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(overlay_update(0.25, OVERLAY).opacity(), 0.0);
        assert_eq!(overlay_update(0.6, OVERLAY).opacity(), 0.0);
    }

    #[test]
    fn overlay_depth_and_cutoff() {
        match overlay_update(0.3, OVERLAY) {
            OverlayUpdate::Visible { translate_z, .. } => {
                assert!((translate_z + 1500.0).abs() < 1e-9)
            }
            OverlayUpdate::Hidden => panic!("hidden too early"),
        }
        assert!(matches!(
            overlay_update(0.8, OVERLAY),
            OverlayUpdate::Visible { .. }
        ));
        assert_eq!(overlay_update(0.81, OVERLAY), OverlayUpdate::Hidden);
    }

    #[test]
    fn transform_string() {
        assert_eq!(
            overlay_transform(-250.0),
            "translate(-50%, -50%) translateZ(-250px)"
        );
    }
}
