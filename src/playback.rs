use crate::foundation::core::Seconds;
use crate::foundation::error::{CannonError, CannonResult};
use crate::synth::schedule::{Schedule, ShotIndex};

/// Maps wall-clock time since load onto the looping document timeline.
///
/// A preview can ask "where is the document now" instead of keeping its own mutable cursor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackClock {
    pub cycle_duration: Seconds,
    pub pause: Seconds,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PlaybackPhase {
    /// `t` seconds into the cycle; `progress` in `[0, 1)`.
    Running { t: Seconds, progress: f64 },
    /// Between cycles.
    Paused { remaining: Seconds },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackPosition {
    /// Zero-based cycle count.
    pub cycle: u64,
    #[serde(flatten)]
    pub phase: PlaybackPhase,
}

/// Position plus what the schedule says is happening at that moment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackSnapshot {
    pub position: PlaybackPosition,
    pub in_flight: Option<ShotIndex>,
    pub impacts: usize,
}

impl PlaybackClock {
    pub fn new(cycle_duration: Seconds, pause: Seconds) -> CannonResult<Self> {
        if !(cycle_duration.as_f64().is_finite() && cycle_duration.as_f64() > 0.0) {
            return Err(CannonError::validation("cycle duration must be > 0"));
        }
        if !(pause.as_f64().is_finite() && pause.as_f64() >= 0.0) {
            return Err(CannonError::validation("cycle pause must be >= 0"));
        }
        Ok(Self {
            cycle_duration,
            pause,
        })
    }

    pub fn for_schedule(schedule: &Schedule) -> CannonResult<Self> {
        Self::new(schedule.total_duration(), schedule.timing().cycle_pause)
    }

    pub fn period(&self) -> Seconds {
        self.cycle_duration + self.pause
    }

    pub fn position(&self, elapsed: Seconds) -> PlaybackPosition {
        let elapsed = elapsed.as_f64().max(0.0);
        let period = self.period().as_f64();
        let cycle = (elapsed / period).floor();
        let within = elapsed - cycle * period;
        let duration = self.cycle_duration.as_f64();

        let phase = if within < duration {
            PlaybackPhase::Running {
                t: Seconds(within),
                progress: within / duration,
            }
        } else {
            PlaybackPhase::Paused {
                remaining: Seconds(period - within),
            }
        };
        PlaybackPosition {
            cycle: cycle as u64,
            phase,
        }
    }

    pub fn snapshot(&self, schedule: &Schedule, elapsed: Seconds) -> PlaybackSnapshot {
        let position = self.position(elapsed);
        let (in_flight, impacts) = match position.phase {
            PlaybackPhase::Running { t, .. } => (schedule.shot_in_flight(t), schedule.impacts_by(t)),
            PlaybackPhase::Paused { .. } => (None, schedule.len()),
        };
        PlaybackSnapshot {
            position,
            in_flight,
            impacts,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/playback.rs"]
mod tests;
