use super::*;
use serde_json::json;

#[test]
fn parses_and_formats_hex() {
    let c: HexColor = "#FF6B35".parse().unwrap();
    assert_eq!(c, HexColor::rgb(0xff, 0x6b, 0x35));
    assert_eq!(c.to_string(), "#ff6b35");

    let c: HexColor = "#0000ff80".parse().unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_string(), "#0000ff80");

    let c: HexColor = " #abc ".parse().unwrap();
    assert_eq!(c, HexColor::rgb(0xaa, 0xbb, 0xcc));
}

#[test]
fn rejects_bad_literals() {
    for bad in ["ff6b35", "#ff6b3", "#gggggg", "#", "#ff6b35ff00", "#ééé", "#+f+f+f", "#-1-1-1", "#fff+"] {
        assert!(bad.parse::<HexColor>().is_err(), "{bad}");
    }
}

#[test]
fn serde_uses_string_form() {
    let c: HexColor = serde_json::from_value(json!("#ebedf0")).unwrap();
    assert_eq!(c, HexColor::rgb(0xeb, 0xed, 0xf0));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#ebedf0"));
    assert!(serde_json::from_value::<HexColor>(json!("red")).is_err());
}
