#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale an image of `image` size so it fully covers `viewport`, cropping the
/// longer axis.
///
/// A relatively wider image matches the viewport height, is centered
/// horizontally and top-aligned. Otherwise it matches the viewport width, is
/// left-aligned and centered vertically. Returns `None` when either size is
/// zero, negative or not finite.
pub fn cover_fit(image: (f64, f64), viewport: (f64, f64)) -> Option<DrawRect> {
    let (iw, ih) = image;
    let (vw, vh) = viewport;
    if [iw, ih, vw, vh].iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return None;
    }

    let image_aspect = iw / ih;
    let viewport_aspect = vw / vh;

    let rect = if image_aspect > viewport_aspect {
        let height = vh;
        let width = height * image_aspect;
        DrawRect {
            x: (vw - width) / 2.0,
            y: 0.0,
            width,
            height,
        }
    } else {
        let width = vw;
        let height = width / image_aspect;
        DrawRect {
            x: 0.0,
            y: (vh - height) / 2.0,
            width,
            height,
        }
    };
    Some(rect)
}
