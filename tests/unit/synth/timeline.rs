use super::*;
use crate::calendar::model::{ContributionDay, ContributionGrid, ContributionWeek, Level};
use crate::foundation::core::fmt_num;
use crate::style::theme::{DEFAULT_EMPTY_CELL, ThemePreset};
use crate::synth::geometry::GeometryParams;
use crate::synth::schedule::{DEFAULT_MAX_TARGETS, ShotTiming};

fn one_week(days: [(u32, Level); 7]) -> ContributionGrid {
    let days = days.map(|(count, level)| ContributionDay::new(None, count, level));
    ContributionGrid::new(vec![ContributionWeek::new(days)])
}

fn build(grid: &ContributionGrid, hide_empty_days: bool) -> Timeline {
    let style = VisualStyle::default();
    let geometry = Geometry::resolve(grid.week_count(), &GeometryParams::default()).unwrap();
    let bubbles = geometry.bubbles(grid);
    let schedule = Schedule::plan(&bubbles, DEFAULT_MAX_TARGETS, ShotTiming::default());
    let opts = EmitOptions {
        theme: ThemePreset::Default.theme(),
        palette: Palette::GITHUB_LIGHT,
        empty_cell: DEFAULT_EMPTY_CELL,
        hide_empty_days,
        style: &style,
    };
    Timeline::build(&geometry, &bubbles, &schedule, &opts)
}

fn single_target() -> ContributionGrid {
    let mut days = [(0, Level::NONE); 7];
    days[0] = (5, Level::SECOND_QUARTILE);
    one_week(days)
}

#[test]
fn idle_reset_is_anchored_at_cycle_begin() {
    let tl = build(&single_target(), false);
    assert_eq!(tl.bubbles.len(), 7);
    for b in &tl.bubbles {
        let idle: Vec<&Step> = b
            .steps
            .iter()
            .filter(|s| s.begin().anchor == Anchor::CycleBegin)
            .collect();
        assert_eq!(idle.len(), 3);
        assert!(idle.iter().all(|s| matches!(s, Step::Set { .. })));
        assert!(idle.iter().all(|s| s.begin().offset == Seconds::ZERO));
        let attrs: Vec<Attr> = idle.iter().map(|s| s.attr()).collect();
        assert_eq!(attrs, vec![Attr::Opacity, Attr::R, Attr::Fill]);
    }
}

#[test]
fn only_the_target_bounces() {
    let tl = build(&single_target(), false);
    let target = tl.bubble(0, 0).unwrap();
    assert_eq!(target.shot, Some(ShotIndex(0)));
    assert!(target.bounces());
    assert_eq!(target.fill, Palette::GITHUB_LIGHT.levels[2]);

    for day in 1..7 {
        let b = tl.bubble(0, day).unwrap();
        assert!(!b.bounces());
        assert_eq!(b.steps.len(), 3);
        assert_eq!(b.fill, DEFAULT_EMPTY_CELL);
    }
}

#[test]
fn bounce_offsets_follow_pop_style() {
    let tl = build(&single_target(), false);
    let target = tl.bubble(0, 0).unwrap();
    let bounce: Vec<(Attr, String)> = target
        .steps
        .iter()
        .filter_map(|s| match s.begin().anchor {
            Anchor::MarkerEnd(ShotIndex(0)) => {
                Some((s.attr(), fmt_num(s.begin().offset.as_f64())))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        bounce,
        vec![
            (Attr::R, "0".to_owned()),
            (Attr::R, "0.12".to_owned()),
            (Attr::Opacity, "0.12".to_owned()),
            (Attr::Fill, "0.19".to_owned()),
            (Attr::Opacity, "0.22".to_owned()),
        ]
    );

    let Step::Animate { to, .. } = target.steps[3] else {
        panic!("expected grow animation");
    };
    // 6 * 1.35
    assert_eq!(to, AttrValue::Num(6.0 * 1.35));
    let Step::Set { to, .. } = target.steps[6] else {
        panic!("expected recolor");
    };
    assert_eq!(to, AttrValue::Color(DEFAULT_EMPTY_CELL));
}

#[test]
fn markers_and_impacts_pair_with_targets() {
    let tl = build(&single_target(), false);
    assert_eq!(tl.markers.len(), 1);
    assert_eq!(tl.impacts.len(), 1);

    let m = tl.markers[0];
    assert_eq!(m.shot, ShotIndex(0));
    assert_eq!(m.fire_at, Seconds::ZERO);
    assert_eq!(m.from, tl.launcher.origin);
    assert_eq!(m.to, Point::new(7.0, 7.0));
    assert_eq!(m.color, ThemePreset::Default.theme().marker);

    let imp = &tl.impacts[0];
    assert_eq!(imp.center, m.to);
    assert_eq!(imp.ring_from, 6.0);
    assert_eq!(fmt_num(imp.ring_to), "10.8");
    assert_eq!(imp.particles.len(), 6);
    // First particle heads along +x.
    assert_eq!(fmt_num(imp.particles[0].to.x), fmt_num(7.0 + 6.0 * 1.6));
    assert_eq!(fmt_num(imp.particles[0].to.y), "7");
    // Fourth particle points along -x.
    assert_eq!(fmt_num(imp.particles[3].to.x), fmt_num(7.0 - 6.0 * 1.6));
}

#[test]
fn hide_empty_days_drops_quiet_bubbles_only() {
    let tl = build(&single_target(), true);
    assert_eq!(tl.bubbles.len(), 1);
    assert_eq!((tl.bubbles[0].week, tl.bubbles[0].day), (0, 0));
    assert_eq!(tl.markers.len(), 1);
}

#[test]
fn empty_history_still_has_a_cycle() {
    let tl = build(&one_week([(0, Level::NONE); 7]), false);
    assert!(tl.markers.is_empty());
    assert!(tl.impacts.is_empty());
    assert_eq!(tl.cycle.duration, Seconds(2.0));
    assert_eq!(tl.cycle.pause, Seconds(1.0));
    assert_eq!((tl.width, tl.height), (14, 98 + 26));
    assert!(tl.bubbles.iter().all(|b| !b.bounces()));
}
