//! Hero options.
//!
//! One configurable hero replaces the handful of near-identical page variants:
//! the frame count, the asset path convention, how far the section stays
//! pinned, whether a text overlay flies away, and the smooth-scroll damping.
//! Options normally come from `data-*` attributes on the hero section.

use std::str::FromStr;

use thiserror::Error;

use crate::frames::FramePath;

/// Upper bound on `frame_count`; every frame is a live image element.
pub const MAX_FRAMES: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("frame count must be at least 1")]
    NoFrames,
    #[error("frame count {0} exceeds the maximum of {max}", max = MAX_FRAMES)]
    TooManyFrames(usize),
    #[error("pin distance must be a positive multiple of the viewport height, got {0}")]
    PinDistance(f64),
    #[error("lerp factor must be in (0, 1], got {0}")]
    Lerp(f64),
    #[error("overlay depth must be finite, got {0}")]
    OverlayDepth(f64),
    #[error("frame extension must not be empty")]
    EmptyExtension,
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("invalid value `{value}` for `{attr}`")]
    Parse { attr: &'static str, value: String },
}

/// Text overlay that recedes along Z while the frames play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    /// translateZ reached per 10% of scroll progress, in CSS px (negative).
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    pub frame_count: usize,
    pub frame_path: FramePath,
    /// Pinned scroll length as a multiple of the viewport height.
    pub pin_distance: f64,
    pub overlay: Option<OverlayConfig>,
    /// Damping applied by the smooth scroller each animation frame.
    pub lerp: f64,
    /// Scroll the page to the top at mount so the sweep starts at frame 0.
    pub reset_scroll: bool,
}

impl HeroConfig {
    /// 40 unpadded PNG frames, short 2.5x pin.
    pub fn classic() -> Self {
        Self {
            frame_count: 40,
            frame_path: FramePath::new("/images/frames", 0, "png"),
            pin_distance: 2.5,
            overlay: Some(OverlayConfig { depth: -600.0 }),
            lerp: 0.1,
            reset_scroll: true,
        }
    }

    /// 60 two-digit WebP frames, 5x pin.
    pub fn unfold() -> Self {
        Self {
            frame_count: 60,
            frame_path: FramePath::new("/images/frames", 2, "webp"),
            pin_distance: 5.0,
            overlay: Some(OverlayConfig { depth: -500.0 }),
            lerp: 0.1,
            reset_scroll: true,
        }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "classic" => Ok(Self::classic()),
            "unfold" => Ok(Self::unfold()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    pub fn with_frame_path(mut self, frame_path: FramePath) -> Self {
        self.frame_path = frame_path;
        self
    }

    pub fn with_pin_distance(mut self, pin_distance: f64) -> Self {
        self.pin_distance = pin_distance;
        self
    }

    pub fn with_overlay(mut self, overlay: Option<OverlayConfig>) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn with_lerp(mut self, lerp: f64) -> Self {
        self.lerp = lerp;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.frame_count > MAX_FRAMES {
            return Err(ConfigError::TooManyFrames(self.frame_count));
        }
        if !self.pin_distance.is_finite() || self.pin_distance <= 0.0 {
            return Err(ConfigError::PinDistance(self.pin_distance));
        }
        if !(self.lerp > 0.0 && self.lerp <= 1.0) {
            return Err(ConfigError::Lerp(self.lerp));
        }
        if let Some(overlay) = self.overlay {
            if !overlay.depth.is_finite() {
                return Err(ConfigError::OverlayDepth(overlay.depth));
            }
        }
        if self.frame_path.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(())
    }

    /// Pinned scroll length in CSS px for a viewport of `viewport_height`.
    pub fn pin_length(&self, viewport_height: f64) -> f64 {
        viewport_height * self.pin_distance
    }

    /// Build a config from element attributes. `lookup` receives full
    /// attribute names such as `data-frame-count`. `data-preset` picks the base
    /// values, every other attribute overrides one field.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("data-preset") {
            Some(name) => Self::preset(name.trim())?,
            None => Self::default(),
        };

        if let Some(n) = parse_attr::<usize, _>(&lookup, "data-frame-count")? {
            config.frame_count = n;
        }
        if let Some(prefix) = lookup("data-frame-prefix") {
            config.frame_path.prefix = prefix.trim().trim_end_matches('/').to_string();
        }
        if let Some(padding) = parse_attr::<usize, _>(&lookup, "data-frame-padding")? {
            config.frame_path.padding = padding;
        }
        if let Some(ext) = lookup("data-frame-ext") {
            config.frame_path.extension = ext.trim().trim_start_matches('.').to_string();
        }
        if let Some(pin) = parse_attr::<f64, _>(&lookup, "data-pin-distance")? {
            config.pin_distance = pin;
        }
        if let Some(raw) = lookup("data-overlay-depth") {
            let raw = raw.trim();
            config.overlay = if raw.eq_ignore_ascii_case("none") {
                None
            } else {
                let depth = raw.parse::<f64>().map_err(|_| ConfigError::Parse {
                    attr: "data-overlay-depth",
                    value: raw.to_string(),
                })?;
                Some(OverlayConfig { depth })
            };
        }
        if let Some(lerp) = parse_attr::<f64, _>(&lookup, "data-lerp")? {
            config.lerp = lerp;
        }
        if let Some(reset) = parse_attr::<bool, _>(&lookup, "data-reset-scroll")? {
            config.reset_scroll = reset;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self::unfold()
    }
}

fn parse_attr<T, F>(lookup: &F, attr: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(attr) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Parse { attr, value: raw }),
    }
}
