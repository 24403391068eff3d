use chrono::NaiveDate;

/// Days per calendar week; every [`ContributionWeek`] holds exactly this many.
pub const DAYS_PER_WEEK: usize = 7;

/// Quartile bucket (0..=4) classifying a day's contribution count.
///
/// Level comes from the provider; it is independent of the raw count except that a day with no
/// contributions is always level 0.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const NONE: Self = Self(0);
    pub const FIRST_QUARTILE: Self = Self(1);
    pub const SECOND_QUARTILE: Self = Self(2);
    pub const THIRD_QUARTILE: Self = Self(3);
    pub const FOURTH_QUARTILE: Self = Self(4);
    pub const MAX: u8 = 4;

    /// Clamp an integer from a provider into the 0..=4 scale.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, i64::from(Self::MAX)) as u8)
    }

    /// Map a provider quartile label. Unrecognized labels are level 0.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "FIRST_QUARTILE" => Self::FIRST_QUARTILE,
            "SECOND_QUARTILE" => Self::SECOND_QUARTILE,
            "THIRD_QUARTILE" => Self::THIRD_QUARTILE,
            "FOURTH_QUARTILE" => Self::FOURTH_QUARTILE,
            _ => Self::NONE,
        }
    }

    /// Level used only when the provider did not supply one.
    pub fn fallback_for_count(count: u32) -> Self {
        if count == 0 {
            return Self::NONE;
        }
        Self(count.div_ceil(2).min(u32::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if v > Self::MAX {
            return Err(format!("level must be in 0..={}, got {v}", Self::MAX));
        }
        Ok(Self(v))
    }
}

impl From<Level> for u8 {
    fn from(l: Level) -> u8 {
        l.0
    }
}

/// One calendar day of activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContributionDay {
    /// Calendar date; `None` only for zero-padding placeholders.
    pub date: Option<NaiveDate>,
    pub count: u32,
    pub level: Level,
}

impl ContributionDay {
    /// Build a day, forcing level 0 when there were no contributions.
    pub fn new(date: Option<NaiveDate>, count: u32, level: Level) -> Self {
        let level = if count == 0 { Level::NONE } else { level };
        Self { date, count, level }
    }

    /// Placeholder used to pad partial weeks.
    pub fn placeholder() -> Self {
        Self {
            date: None,
            count: 0,
            level: Level::NONE,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }

    pub fn has_contributions(&self) -> bool {
        self.count > 0
    }
}

/// Seven days; index is day-of-week (0 = provider's first weekday).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContributionWeek {
    pub days: [ContributionDay; DAYS_PER_WEEK],
}

impl ContributionWeek {
    pub fn new(days: [ContributionDay; DAYS_PER_WEEK]) -> Self {
        Self { days }
    }

    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.count)).sum()
    }
}

/// Chronologically ordered weeks of contribution days.
///
/// Produced once per render by [`crate::normalize_calendar`] and treated as immutable input.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContributionGrid {
    weeks: Vec<ContributionWeek>,
}

impl ContributionGrid {
    pub fn new(weeks: Vec<ContributionWeek>) -> Self {
        Self { weeks }
    }

    pub fn weeks(&self) -> &[ContributionWeek] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterate `(week, day, &ContributionDay)` in week-major, day-minor order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &ContributionDay)> + '_ {
        self.weeks
            .iter()
            .enumerate()
            .flat_map(|(wi, w)| w.days.iter().enumerate().map(move |(di, d)| (wi, di, d)))
    }

    pub fn total_contributions(&self) -> u64 {
        self.weeks.iter().map(ContributionWeek::total).sum()
    }

    pub fn active_days(&self) -> usize {
        self.cells().filter(|(_, _, d)| d.has_contributions()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/model.rs"]
mod tests;
