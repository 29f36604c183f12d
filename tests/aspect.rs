use hero_frames::fit::cover_fit;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn cover_always_fills_viewport() {
    let viewports = [(1920.0, 1080.0), (1080.0, 1920.0), (800.0, 800.0), (375.0, 812.0)];
    let images = [(4000.0, 2000.0), (1000.0, 2000.0), (1920.0, 1080.0), (512.0, 512.0)];

    for &vp in &viewports {
        for &img in &images {
            let rect = cover_fit(img, vp).unwrap();
            // no gaps on any edge
            assert!(rect.x <= 1e-9 && rect.y <= 1e-9, "{img:?} on {vp:?}: {rect:?}");
            assert!(rect.x + rect.width >= vp.0 - 1e-9);
            assert!(rect.y + rect.height >= vp.1 - 1e-9);
            // aspect ratio preserved
            assert!(approx_eq(rect.width / rect.height, img.0 / img.1, 1e-9));
        }
    }
}

#[test]
fn wide_image_matches_height_and_centers_horizontally() {
    let vp = (1920.0, 1080.0);
    let rect = cover_fit((4000.0, 2000.0), vp).unwrap();
    assert_eq!(rect.height, vp.1);
    assert!(rect.width > vp.0);
    assert_eq!(rect.y, 0.0);
    assert!(approx_eq(rect.x + rect.width / 2.0, vp.0 / 2.0, 1e-9));
}

#[test]
fn tall_image_matches_width_and_centers_vertically() {
    let vp = (1920.0, 1080.0);
    let rect = cover_fit((1080.0, 1920.0), vp).unwrap();
    assert_eq!(rect.width, vp.0);
    assert!(rect.height > vp.1);
    assert_eq!(rect.x, 0.0);
    assert!(approx_eq(rect.y + rect.height / 2.0, vp.1 / 2.0, 1e-9));
}
