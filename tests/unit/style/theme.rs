use super::*;
use serde_json::json;

#[test]
fn presets_resolve_to_literal_colors() {
    let t = ThemePreset::Github.theme();
    assert_eq!(t.marker.to_string(), "#216e39");
    assert_eq!(t.impact.to_string(), "#ff4444");
    assert_eq!(t.background.unwrap().to_string(), "#f6f8fa");

    for p in ThemePreset::ALL {
        assert!(p.theme().background.is_some(), "{}", p.label());
    }
}

#[test]
fn theme_choice_accepts_name_or_object() {
    let c: ThemeChoice = serde_json::from_value(json!("ocean")).unwrap();
    assert_eq!(c.resolve(), ThemePreset::Ocean.theme());

    let c: ThemeChoice = serde_json::from_value(json!({
        "marker": "#111111",
        "impact": "#222222"
    }))
    .unwrap();
    let t = c.resolve();
    assert_eq!(t.marker, HexColor::rgb(0x11, 0x11, 0x11));
    assert_eq!(t.background, None);

    assert!(serde_json::from_value::<ThemeChoice>(json!("neon")).is_err());
}

#[test]
fn speed_multipliers() {
    assert_eq!(Speed::Fast.multiplier(), 0.6);
    assert_eq!(Speed::Normal.multiplier(), 1.0);
    assert_eq!(Speed::Slow.multiplier(), 1.6);
    let s: Speed = serde_json::from_value(json!("slow")).unwrap();
    assert_eq!(s, Speed::Slow);
}

#[test]
fn level_color_honors_empty_override_only_for_level_zero() {
    let gray = HexColor::rgb(0xe5, 0xe7, 0xeb);
    assert_eq!(level_color(Level::NONE, None), DEFAULT_EMPTY_CELL);
    assert_eq!(level_color(Level::NONE, Some(gray)), gray);
    assert_eq!(
        level_color(Level::SECOND_QUARTILE, Some(gray)).to_string(),
        "#40c463"
    );
    assert_eq!(
        Palette::GITHUB_DARK.color(Level::FOURTH_QUARTILE, None).to_string(),
        "#39d353"
    );
}

#[test]
fn empty_presets_include_default() {
    assert!(
        EMPTY_CELL_PRESETS
            .iter()
            .any(|(_, c)| *c == DEFAULT_EMPTY_CELL)
    );
}
