use super::*;
use crate::calendar::model::Level;
use crate::foundation::core::fmt_num;

fn bubbles(counts: &[u32]) -> Vec<Bubble> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bubble {
            week: i / 7,
            day: i % 7,
            center: Point::new(i as f64, 0.0),
            level: Level::fallback_for_count(count),
            count,
        })
        .collect()
}

#[test]
fn targets_follow_traversal_order() {
    let b = bubbles(&[0, 3, 0, 1, 1, 0, 0, 2]);
    let s = Schedule::plan(&b, DEFAULT_MAX_TARGETS, ShotTiming::default());

    let picked: Vec<usize> = s.targets().iter().map(|t| t.bubble).collect();
    assert_eq!(picked, vec![1, 3, 4, 7]);
    for (i, t) in s.targets().iter().enumerate() {
        assert_eq!(t.shot, ShotIndex(i));
    }
    assert_eq!(s.shot_for_bubble(3), Some(ShotIndex(1)));
    assert_eq!(s.shot_for_bubble(2), None);
    assert_eq!(s.shot_for_bubble(99), None);
    assert_eq!(s.dropped(), 0);
}

#[test]
fn fire_times_are_uniform() {
    let b = bubbles(&[1, 1, 1]);
    let s = Schedule::plan(&b, DEFAULT_MAX_TARGETS, ShotTiming::default());
    let fires: Vec<String> = s
        .targets()
        .iter()
        .map(|t| fmt_num(t.fire_at.as_f64()))
        .collect();
    assert_eq!(fires, vec!["0", "0.85", "1.7"]);
    assert_eq!(fmt_num(s.targets()[2].arrive_at.as_f64()), "2.3");
    // 3 * 0.85 + 0.5
    assert_eq!(fmt_num(s.total_duration().as_f64()), "3.05");
    assert_eq!(fmt_num(s.cycle_period().as_f64()), "4.05");
}

#[test]
fn speed_scales_shot_and_gap() {
    let fast = ShotTiming::for_speed(0.6);
    assert_eq!(fmt_num(fast.shot.as_f64()), "0.36");
    assert_eq!(fmt_num(fast.gap.as_f64()), "0.15");
    let slow = ShotTiming::for_speed(1.6);
    assert_eq!(fmt_num(slow.step().as_f64()), "1.36");
    assert_eq!(slow.trailer, Seconds(0.5));
}

#[test]
fn cap_keeps_earliest_targets() {
    let b = bubbles(&[1; 10]);
    let s = Schedule::plan(&b, 4, ShotTiming::default());
    assert_eq!(s.len(), 4);
    assert_eq!(s.dropped(), 6);
    assert_eq!(s.targets().last().unwrap().bubble, 3);
    assert_eq!(s.shot_for_bubble(4), None);
}

#[test]
fn empty_history_uses_fixed_minimum() {
    let s = Schedule::plan(&bubbles(&[0; 14]), DEFAULT_MAX_TARGETS, ShotTiming::default());
    assert!(s.is_empty());
    assert_eq!(s.total_duration(), Seconds(2.0));

    let s = Schedule::plan(&bubbles(&[5; 14]), 0, ShotTiming::default());
    assert!(s.is_empty());
    assert_eq!(s.dropped(), 14);
    assert_eq!(s.total_duration(), Seconds(2.0));
}

#[test]
fn flight_and_impact_queries() {
    let s = Schedule::plan(&bubbles(&[1, 1]), DEFAULT_MAX_TARGETS, ShotTiming::default());
    assert_eq!(s.shot_in_flight(Seconds(0.0)), Some(ShotIndex(0)));
    assert_eq!(s.shot_in_flight(Seconds(0.3)), Some(ShotIndex(0)));
    assert_eq!(s.shot_in_flight(Seconds(0.7)), None);
    assert_eq!(s.shot_in_flight(Seconds(1.0)), Some(ShotIndex(1)));
    assert_eq!(s.shot_in_flight(Seconds(5.0)), None);
    assert_eq!(s.shot_in_flight(Seconds(-1.0)), None);

    assert_eq!(s.impacts_by(Seconds(0.5)), 0);
    assert_eq!(s.impacts_by(Seconds(0.6)), 1);
    assert_eq!(s.impacts_by(Seconds(10.0)), 2);
}
