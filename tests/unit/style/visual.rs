use super::*;
use crate::foundation::core::fmt_num;
use serde_json::json;

#[test]
fn defaults_validate() {
    let style = VisualStyle::default();
    style.validate().unwrap();
    assert_eq!(style.launcher, LauncherArt::Shooter);
    assert_eq!(style.impact.particle_count, 6);
    assert_eq!(fmt_num(style.pop.settle_time().as_f64()), "0.3");
}

#[test]
fn partial_json_fills_defaults() {
    let style: VisualStyle = serde_json::from_value(json!({
        "launcher": "cannon",
        "impact": { "particle_count": 8 }
    }))
    .unwrap();
    assert_eq!(style.launcher, LauncherArt::Cannon);
    assert_eq!(style.impact.particle_count, 8);
    assert_eq!(style.impact.ring_scale, 1.8);
    assert_eq!(style.pop, PopStyle::default());

    assert!(serde_json::from_value::<VisualStyle>(json!({ "sparkles": true })).is_err());
}

#[test]
fn rejects_out_of_order_pop_and_bad_values() {
    let mut style = VisualStyle::default();
    style.pop.recolor_at = Seconds(0.1);
    assert!(style.validate().is_err());

    let mut style = VisualStyle::default();
    style.pop.fade_in_at = Seconds(0.18);
    assert!(style.validate().is_err());

    let mut style = VisualStyle::default();
    style.marker.radius = 0.0;
    assert!(style.validate().is_err());

    let mut style = VisualStyle::default();
    style.impact.particle_count = 100;
    assert!(style.validate().is_err());

    let mut style = VisualStyle::default();
    style.impact.particle_count = 0;
    style.validate().unwrap();
}
