use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="10" height="10">
  <rect width="10" height="10" fill="#ff0000"/>
</svg>"##;

#[test]
fn rasterize_fills_pixels_at_scale() {
    let p = rasterize(SQUARE, 2.0).unwrap();
    assert_eq!((p.width, p.height), (20, 20));
    assert_eq!(p.rgba8.len(), 20 * 20 * 4);
    assert_eq!(p.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(p.pixel(20, 0), None);
}

#[test]
fn transparent_canvas_stays_transparent() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8" width="8" height="8"></svg>"#;
    let p = rasterize(svg, 1.0).unwrap();
    assert!(p.rgba8.iter().all(|&b| b == 0));
}

#[test]
fn bad_input_is_an_error() {
    assert!(rasterize("not svg", 1.0).is_err());
    assert!(matches!(
        rasterize(SQUARE, 0.0).unwrap_err(),
        CannonError::Validation(_)
    ));
    assert!(rasterize(SQUARE, 10_000.0).is_err());
}
