use super::*;

fn day(count: u32, level: u8) -> ContributionDay {
    ContributionDay::new(
        NaiveDate::from_ymd_opt(2024, 1, 7),
        count,
        Level::try_from(level).unwrap(),
    )
}

#[test]
fn labels_map_to_levels() {
    assert_eq!(Level::from_label("NONE"), Level::NONE);
    assert_eq!(Level::from_label("FIRST_QUARTILE"), Level::FIRST_QUARTILE);
    assert_eq!(Level::from_label("second_quartile"), Level::SECOND_QUARTILE);
    assert_eq!(Level::from_label("THIRD_QUARTILE"), Level::THIRD_QUARTILE);
    assert_eq!(Level::from_label("FOURTH_QUARTILE"), Level::FOURTH_QUARTILE);
    assert_eq!(Level::from_label("FIFTH_QUARTILE"), Level::NONE);
    assert_eq!(Level::from_label(""), Level::NONE);
}

#[test]
fn fallback_level_from_count() {
    assert_eq!(Level::fallback_for_count(0), Level::NONE);
    assert_eq!(Level::fallback_for_count(1), Level::FIRST_QUARTILE);
    assert_eq!(Level::fallback_for_count(2), Level::FIRST_QUARTILE);
    assert_eq!(Level::fallback_for_count(3), Level::SECOND_QUARTILE);
    assert_eq!(Level::fallback_for_count(8), Level::FOURTH_QUARTILE);
    assert_eq!(Level::fallback_for_count(500), Level::FOURTH_QUARTILE);
}

#[test]
fn clamped_and_try_from_bounds() {
    assert_eq!(Level::clamped(-3), Level::NONE);
    assert_eq!(Level::clamped(9), Level::FOURTH_QUARTILE);
    assert!(Level::try_from(5).is_err());
    assert_eq!(Level::try_from(4).unwrap().get(), 4);
}

#[test]
fn zero_count_forces_level_zero() {
    let d = day(0, 3);
    assert_eq!(d.level, Level::NONE);
    assert!(!d.has_contributions());

    let d = day(5, 2);
    assert_eq!(d.level, Level::SECOND_QUARTILE);
    assert!(d.has_contributions());
}

#[test]
fn cells_iterate_week_major() {
    let mut days = [ContributionDay::placeholder(); DAYS_PER_WEEK];
    days[3] = day(4, 2);
    let w0 = ContributionWeek::new(days);
    let w1 = ContributionWeek::new([day(1, 1); DAYS_PER_WEEK]);
    let grid = ContributionGrid::new(vec![w0, w1]);

    let order: Vec<(usize, usize)> = grid.cells().map(|(w, d, _)| (w, d)).collect();
    assert_eq!(order.len(), 14);
    assert_eq!(order[0], (0, 0));
    assert_eq!(order[6], (0, 6));
    assert_eq!(order[7], (1, 0));

    assert_eq!(grid.total_contributions(), 4 + 7);
    assert_eq!(grid.active_days(), 8);
    assert!(grid.weeks()[0].days[0].is_placeholder());
}

#[test]
fn level_serde_rejects_out_of_range() {
    let ok: Level = serde_json::from_str("3").unwrap();
    assert_eq!(ok, Level::THIRD_QUARTILE);
    assert!(serde_json::from_str::<Level>("7").is_err());
}
