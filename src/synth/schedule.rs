use crate::foundation::core::{Point, Seconds};
use crate::synth::geometry::Bubble;

/// Default cap on animated targets per document.
pub const DEFAULT_MAX_TARGETS: usize = 220;

/// Per-shot durations for one render.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShotTiming {
    /// Marker flight time.
    pub shot: Seconds,
    /// Idle time between one arrival and the next launch.
    pub gap: Seconds,
    /// Tail after the last shot before the cycle ends.
    pub trailer: Seconds,
    /// Cycle length when there is nothing to shoot.
    pub empty_total: Seconds,
    /// Pause between the end of one cycle and the start of the next.
    pub cycle_pause: Seconds,
}

impl ShotTiming {
    pub const BASE_SHOT: Seconds = Seconds(0.6);
    pub const BASE_GAP: Seconds = Seconds(0.25);

    /// Timing for a speed multiplier (> 0; larger is slower).
    pub fn for_speed(multiplier: f64) -> Self {
        Self {
            shot: Self::BASE_SHOT * multiplier,
            gap: Self::BASE_GAP * multiplier,
            trailer: Seconds(0.5),
            empty_total: Seconds(2.0),
            cycle_pause: Seconds(1.0),
        }
    }

    /// Launch-to-launch spacing.
    pub fn step(&self) -> Seconds {
        self.shot + self.gap
    }
}

impl Default for ShotTiming {
    fn default() -> Self {
        Self::for_speed(1.0)
    }
}

/// Rank of a target in firing order; the key shared by a marker and the bubble it hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ShotIndex(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Target {
    pub shot: ShotIndex,
    /// Index into the bubble list this schedule was planned from.
    pub bubble: usize,
    pub week: usize,
    pub day: usize,
    pub center: Point,
    /// Launch time after cycle start.
    pub fire_at: Seconds,
    /// Arrival time after cycle start.
    pub arrive_at: Seconds,
}

/// Firing order and timing for every target in one cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Schedule {
    targets: Vec<Target>,
    #[serde(skip)]
    shot_by_bubble: Vec<Option<ShotIndex>>,
    timing: ShotTiming,
    dropped: usize,
    total: Seconds,
}

impl Schedule {
    /// Pick targets in traversal order and space them uniformly.
    ///
    /// Only the first `max_targets` active bubbles are kept, so when a history is over the cap it
    /// is the most recent activity that goes unanimated.
    pub fn plan(bubbles: &[Bubble], max_targets: usize, timing: ShotTiming) -> Self {
        let mut targets = Vec::new();
        let mut shot_by_bubble = vec![None; bubbles.len()];
        let mut active = 0usize;

        for (bi, b) in bubbles.iter().enumerate() {
            if !b.is_target() {
                continue;
            }
            active += 1;
            if targets.len() >= max_targets {
                continue;
            }
            let shot = ShotIndex(targets.len());
            let fire_at = timing.step() * shot.0 as f64;
            shot_by_bubble[bi] = Some(shot);
            targets.push(Target {
                shot,
                bubble: bi,
                week: b.week,
                day: b.day,
                center: b.center,
                fire_at,
                arrive_at: fire_at + timing.shot,
            });
        }

        let dropped = active - targets.len();
        if dropped > 0 {
            tracing::warn!(
                kept = targets.len(),
                dropped,
                max_targets,
                "target cap reached; later contribution days stay static"
            );
        }

        let total = if targets.is_empty() {
            timing.empty_total
        } else {
            timing.step() * targets.len() as f64 + timing.trailer
        };

        tracing::debug!(
            targets = targets.len(),
            total_s = total.as_f64(),
            "planned shot schedule"
        );
        Self {
            targets,
            shot_by_bubble,
            timing,
            dropped,
            total,
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Active days that did not make the cap.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn timing(&self) -> &ShotTiming {
        &self.timing
    }

    /// Length of one cycle (excluding the restart pause).
    pub fn total_duration(&self) -> Seconds {
        self.total
    }

    /// Cycle length plus the restart pause.
    pub fn cycle_period(&self) -> Seconds {
        self.total + self.timing.cycle_pause
    }

    pub fn target(&self, shot: ShotIndex) -> Option<&Target> {
        self.targets.get(shot.0)
    }

    pub fn shot_for_bubble(&self, bubble: usize) -> Option<ShotIndex> {
        self.shot_by_bubble.get(bubble).copied().flatten()
    }

    /// The marker airborne at `t` seconds into the cycle, if any.
    pub fn shot_in_flight(&self, t: Seconds) -> Option<ShotIndex> {
        if t.as_f64() < 0.0 {
            return None;
        }
        let step = self.timing.step().as_f64();
        let i = (t.as_f64() / step).floor() as usize;
        let target = self.targets.get(i)?;
        (target.fire_at <= t && t < target.arrive_at).then_some(target.shot)
    }

    /// Number of markers that have landed by `t` seconds into the cycle.
    pub fn impacts_by(&self, t: Seconds) -> usize {
        self.targets.partition_point(|tg| tg.arrive_at <= t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/schedule.rs"]
mod tests;
