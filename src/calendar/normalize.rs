use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::calendar::model::{
    ContributionDay, ContributionGrid, ContributionWeek, DAYS_PER_WEEK, Level,
};
use crate::foundation::error::{CannonError, CannonResult, FetchFailureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathElem {
    Field(&'static str),
    Index(usize),
}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

fn malformed_at(path: &[PathElem], message: impl AsRef<str>) -> CannonError {
    CannonError::malformed(format!("{}: {}", format_path(path), message.as_ref()))
}

/// Convert a provider payload into a [`ContributionGrid`].
///
/// Accepts a GitHub GraphQL response, a `contributionCalendar`-like object carrying `weeks`, or a
/// bare array of weeks. Weeks and days keep the order they arrive in. Weeks shorter than seven
/// days are zero-padded. Any structural problem fails the whole conversion.
pub fn normalize_calendar(payload: &Value) -> CannonResult<ContributionGrid> {
    let mut path = Vec::new();
    let weeks = locate_weeks(payload, &mut path)?;

    let mut out = Vec::with_capacity(weeks.len());
    let mut padded_weeks = 0usize;
    for (wi, week) in weeks.iter().enumerate() {
        path.push(PathElem::Index(wi));
        let (week, padded) = normalize_week(week, &mut path)?;
        path.pop();
        if padded {
            padded_weeks += 1;
        }
        out.push(week);
    }

    if padded_weeks > 0 {
        tracing::warn!(padded_weeks, "zero-padded partial calendar weeks");
    }
    tracing::debug!(weeks = out.len(), "normalized contribution calendar");
    Ok(ContributionGrid::new(out))
}

impl ContributionGrid {
    /// Parse and normalize a calendar payload from JSON text.
    pub fn from_json_str(s: &str) -> CannonResult<Self> {
        let v: Value = serde_json::from_str(s)
            .map_err(|e| CannonError::malformed(format!("parse calendar JSON: {e}")))?;
        normalize_calendar(&v)
    }

    /// Parse and normalize a calendar payload from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CannonResult<Self> {
        let v: Value = serde_json::from_reader(r)
            .map_err(|e| CannonError::malformed(format!("parse calendar JSON: {e}")))?;
        normalize_calendar(&v)
    }

    /// Parse and normalize a calendar payload from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CannonResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open calendar JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

fn locate_weeks<'a>(payload: &'a Value, path: &mut Vec<PathElem>) -> CannonResult<&'a [Value]> {
    match payload {
        Value::Array(weeks) => Ok(weeks.as_slice()),
        Value::Object(obj) => {
            if let Some(errors) = obj.get("errors").and_then(Value::as_array)
                && !errors.is_empty()
            {
                return Err(graphql_failure(errors));
            }

            if let Some(data) = obj.get("data") {
                path.push(PathElem::Field("data"));
                let user = data.get("user").unwrap_or(&Value::Null);
                if user.is_null() {
                    return Err(CannonError::upstream(
                        FetchFailureKind::NotFound,
                        "provider returned no user for the requested login",
                    ));
                }
                path.push(PathElem::Field("user"));
                let collection = require_field(user, "contributionsCollection", path)?;
                path.push(PathElem::Field("contributionsCollection"));
                let calendar = require_field(collection, "contributionCalendar", path)?;
                path.push(PathElem::Field("contributionCalendar"));
                return weeks_array(calendar, path);
            }

            if let Some(calendar) = obj.get("contributionCalendar") {
                path.push(PathElem::Field("contributionCalendar"));
                return weeks_array(calendar, path);
            }

            weeks_array(payload, path)
        }
        _ => Err(malformed_at(
            path,
            "expected a weeks array, a calendar object or a GraphQL response",
        )),
    }
}

fn require_field<'a>(
    v: &'a Value,
    name: &'static str,
    path: &[PathElem],
) -> CannonResult<&'a Value> {
    v.get(name)
        .ok_or_else(|| malformed_at(path, format!("missing field `{name}`")))
}

fn weeks_array<'a>(v: &'a Value, path: &mut Vec<PathElem>) -> CannonResult<&'a [Value]> {
    let weeks = require_field(v, "weeks", path)?;
    path.push(PathElem::Field("weeks"));
    weeks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| malformed_at(path, "expected an array of weeks"))
}

fn graphql_failure(errors: &[Value]) -> CannonError {
    let first = &errors[0];
    let message = first
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("provider reported an error")
        .to_owned();
    let kind = match first.get("type").and_then(Value::as_str) {
        Some("NOT_FOUND") => FetchFailureKind::NotFound,
        Some("RATE_LIMITED") => FetchFailureKind::RateLimited,
        Some("FORBIDDEN") | Some("INSUFFICIENT_SCOPES") => FetchFailureKind::AccessDenied,
        _ => FetchFailureKind::Other,
    };
    CannonError::upstream(kind, message)
}

fn normalize_week(
    week: &Value,
    path: &mut Vec<PathElem>,
) -> CannonResult<(ContributionWeek, bool)> {
    let days = match week {
        Value::Array(days) => days.as_slice(),
        Value::Object(_) => {
            let days = require_field(week, "contributionDays", path)?;
            path.push(PathElem::Field("contributionDays"));
            let days = days
                .as_array()
                .ok_or_else(|| malformed_at(path, "expected an array of days"))?;
            path.pop();
            days.as_slice()
        }
        _ => return Err(malformed_at(path, "expected a week object or array of days")),
    };
    let days_field = matches!(week, Value::Object(_));

    if days.len() > DAYS_PER_WEEK {
        return Err(malformed_at(
            path,
            format!("week has {} days (max {DAYS_PER_WEEK})", days.len()),
        ));
    }

    let mut slots: [Option<ContributionDay>; DAYS_PER_WEEK] = [None; DAYS_PER_WEEK];
    for (di, raw) in days.iter().enumerate() {
        if days_field {
            path.push(PathElem::Field("contributionDays"));
        }
        path.push(PathElem::Index(di));

        let (day, slot) = parse_day(raw, path)?;
        if slots[slot].is_some() {
            return Err(malformed_at(path, format!("duplicate day for weekday {slot}")));
        }
        slots[slot] = Some(day);

        path.pop();
        if days_field {
            path.pop();
        }
    }

    let padded = slots.iter().any(Option::is_none);
    let days = slots.map(|d| d.unwrap_or_else(ContributionDay::placeholder));
    Ok((ContributionWeek::new(days), padded))
}

/// Parse one day and the week slot it belongs in (0 = Sunday).
///
/// An explicit `weekday` wins; otherwise the slot comes from the date, so a leading partial week
/// still lands in the right rows.
fn parse_day(raw: &Value, path: &mut Vec<PathElem>) -> CannonResult<(ContributionDay, usize)> {
    if !raw.is_object() {
        return Err(malformed_at(path, "expected a day object"));
    }

    let (count_key, count) = first_present(raw, &["contributionCount", "count"])
        .ok_or_else(|| malformed_at(path, "missing field `contributionCount`"))?;
    path.push(PathElem::Field(count_key));
    let count = count
        .as_u64()
        .and_then(|c| u32::try_from(c).ok())
        .ok_or_else(|| malformed_at(path, "expected a non-negative integer count"))?;
    path.pop();

    let date = require_field(raw, "date", path)?;
    path.push(PathElem::Field("date"));
    let date = date
        .as_str()
        .ok_or_else(|| malformed_at(path, "expected a date string"))?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| malformed_at(path, format!("invalid date \"{date}\": {e}")))?;
    path.pop();

    let level = match first_present(raw, &["contributionLevel", "level"]) {
        None | Some((_, Value::Null)) => Level::fallback_for_count(count),
        Some((key, v)) => {
            path.push(PathElem::Field(key));
            let level = parse_level(v).ok_or_else(|| {
                malformed_at(path, "expected a quartile label or integer level")
            })?;
            path.pop();
            level
        }
    };

    let weekday = match raw.get("weekday") {
        None | Some(Value::Null) => None,
        Some(v) => {
            path.push(PathElem::Field("weekday"));
            let wd = v
                .as_u64()
                .filter(|&wd| wd < DAYS_PER_WEEK as u64)
                .ok_or_else(|| malformed_at(path, "weekday must be an integer in 0..=6"))?;
            path.pop();
            Some(wd as usize)
        }
    };
    let slot = weekday.unwrap_or(date.weekday().num_days_from_sunday() as usize);

    Ok((ContributionDay::new(Some(date), count, level), slot))
}

fn first_present<'a>(
    obj: &'a Value,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter().find_map(|&k| obj.get(k).map(|v| (k, v)))
}

fn parse_level(v: &Value) -> Option<Level> {
    match v {
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(n) => Some(Level::clamped(n)),
            Err(_) => Some(Level::from_label(s)),
        },
        Value::Number(n) => n.as_i64().map(Level::clamped),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/normalize.rs"]
mod tests;
