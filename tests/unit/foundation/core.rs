use super::*;

#[test]
fn fmt_num_trims_and_rounds() {
    assert_eq!(fmt_num(5.0), "5");
    assert_eq!(fmt_num(10.0), "10");
    assert_eq!(fmt_num(7.5), "7.5");
    assert_eq!(fmt_num(0.1 + 0.2), "0.3");
    assert_eq!(fmt_num(0.85 * 3.0), "2.55");
    assert_eq!(fmt_num(5.4), "5.4");
    assert_eq!(fmt_num(1.23456), "1.235");
}

#[test]
fn fmt_num_never_prints_negative_zero() {
    assert_eq!(fmt_num(-0.0), "0");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(0.0), "0");
}

#[test]
fn seconds_arithmetic() {
    let shot = Seconds(0.6);
    let gap = Seconds(0.25);
    assert_eq!(fmt_num((shot + gap).as_f64()), "0.85");
    assert_eq!(fmt_num((shot * 1.6).as_f64()), "0.96");
    assert_eq!(fmt_num((shot - gap).as_f64()), "0.35");
    assert!(Seconds::ZERO.is_zero());
    assert!(!gap.is_zero());
}
