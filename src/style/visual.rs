use crate::foundation::core::Seconds;
use crate::foundation::error::{CannonError, CannonResult};
use crate::style::color::HexColor;

/// Launcher artwork drawn at the marker origin. Purely cosmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LauncherArt {
    /// Rounded base with an upward nozzle.
    #[default]
    Shooter,
    /// Wheeled cannon with an upward barrel.
    Cannon,
    /// No launcher drawn; markers still start from the origin.
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerStyle {
    pub radius: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { radius: 3.5 }
    }
}

/// The bounce a target bubble plays when its marker lands.
///
/// Offsets are relative to the marker's arrival. The shrink and the fade-out both start when the
/// grow ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopStyle {
    pub scale: f64,
    pub grow: Seconds,
    pub shrink: Seconds,
    pub fade_out: Seconds,
    pub recolor_at: Seconds,
    pub fade_in_at: Seconds,
    pub fade_in: Seconds,
}

impl Default for PopStyle {
    fn default() -> Self {
        Self {
            scale: 1.35,
            grow: Seconds(0.12),
            shrink: Seconds(0.12),
            fade_out: Seconds(0.06),
            recolor_at: Seconds(0.19),
            fade_in_at: Seconds(0.22),
            fade_in: Seconds(0.08),
        }
    }
}

impl PopStyle {
    /// Time from arrival until the bubble is back at full opacity.
    pub fn settle_time(&self) -> Seconds {
        let shrink_done = self.grow + self.shrink;
        let fade_done = self.fade_in_at + self.fade_in;
        if shrink_done > fade_done {
            shrink_done
        } else {
            fade_done
        }
    }
}

/// Ring and particle burst played at each impact.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImpactStyle {
    pub ring_scale: f64,
    pub ring_stroke: f64,
    pub duration: Seconds,
    pub particle_count: u32,
    /// Particle travel distance as a multiple of the bubble radius.
    pub particle_reach: f64,
    pub particle_radius: f64,
    pub particle_color: HexColor,
}

impl Default for ImpactStyle {
    fn default() -> Self {
        Self {
            ring_scale: 1.8,
            ring_stroke: 2.0,
            duration: Seconds(0.35),
            particle_count: 6,
            particle_reach: 1.6,
            particle_radius: 1.6,
            particle_color: HexColor::rgb(0xff, 0xd7, 0x00),
        }
    }
}

/// Cosmetic knobs that used to distinguish separate generator variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualStyle {
    pub launcher: LauncherArt,
    pub marker: MarkerStyle,
    pub pop: PopStyle,
    pub impact: ImpactStyle,
}

const MAX_PARTICLES: u32 = 32;

impl VisualStyle {
    pub fn validate(&self) -> CannonResult<()> {
        fn positive(name: &str, v: f64) -> CannonResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(CannonError::validation(format!("{name} must be > 0, got {v}")))
            }
        }

        positive("style.marker.radius", self.marker.radius)?;
        positive("style.pop.scale", self.pop.scale)?;
        positive("style.pop.grow", self.pop.grow.as_f64())?;
        positive("style.pop.shrink", self.pop.shrink.as_f64())?;
        positive("style.pop.fade_out", self.pop.fade_out.as_f64())?;
        positive("style.pop.fade_in", self.pop.fade_in.as_f64())?;
        positive("style.impact.ring_scale", self.impact.ring_scale)?;
        positive("style.impact.ring_stroke", self.impact.ring_stroke)?;
        positive("style.impact.duration", self.impact.duration.as_f64())?;
        positive("style.impact.particle_reach", self.impact.particle_reach)?;
        positive("style.impact.particle_radius", self.impact.particle_radius)?;

        let faded = self.pop.grow + self.pop.fade_out;
        if self.pop.recolor_at < faded {
            return Err(CannonError::validation(
                "style.pop.recolor_at must not precede the end of the fade-out",
            ));
        }
        if self.pop.fade_in_at < self.pop.recolor_at {
            return Err(CannonError::validation(
                "style.pop.fade_in_at must not precede style.pop.recolor_at",
            ));
        }
        if self.impact.particle_count > MAX_PARTICLES {
            return Err(CannonError::validation(format!(
                "style.impact.particle_count must be <= {MAX_PARTICLES}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/visual.rs"]
mod tests;
