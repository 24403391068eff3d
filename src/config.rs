use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::calendar::username::validate_username;
use crate::foundation::error::{CannonError, CannonResult};
use crate::style::color::HexColor;
use crate::style::theme::{DEFAULT_EMPTY_CELL, Speed, Theme, ThemeChoice};
use crate::style::visual::VisualStyle;
use crate::synth::geometry::GeometryParams;
use crate::synth::schedule::{DEFAULT_MAX_TARGETS, ShotTiming};

const MAX_WIDTH: u32 = 16_384;
const MAX_TARGETS_LIMIT: usize = 10_000;

/// Filenames for the two generated documents.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputNames {
    pub animated: String,
    pub static_doc: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            animated: "contribution-animation.svg".to_owned(),
            static_doc: "contribution-static.svg".to_owned(),
        }
    }
}

impl OutputNames {
    /// `<login>-contribution-animation.svg` and `<login>-contribution-static.svg`.
    pub fn for_user(login: &str) -> CannonResult<Self> {
        validate_username(login)?;
        Ok(Self {
            animated: format!("{login}-contribution-animation.svg"),
            static_doc: format!("{login}-contribution-static.svg"),
        })
    }

    fn validate(&self) -> CannonResult<()> {
        for (field, name) in [
            ("output.animated", &self.animated),
            ("output.static_doc", &self.static_doc),
        ] {
            if name.trim().is_empty() {
                return Err(CannonError::validation(format!("{field} must not be empty")));
            }
            if name.contains(['/', '\\']) {
                return Err(CannonError::validation(format!(
                    "{field} must be a bare filename, got \"{name}\""
                )));
            }
        }
        Ok(())
    }
}

/// Every user-facing knob for one render.
///
/// `geometry.target_width` is overridden by `width`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub theme: ThemeChoice,
    pub transparent_background: bool,
    pub speed: Speed,
    pub empty_cell_color: HexColor,
    pub hide_empty_days: bool,
    pub max_targets: usize,
    pub style: VisualStyle,
    pub geometry: GeometryParams,
    pub output: OutputNames,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: GeometryParams::default().target_width,
            theme: ThemeChoice::default(),
            transparent_background: false,
            speed: Speed::default(),
            empty_cell_color: DEFAULT_EMPTY_CELL,
            hide_empty_days: false,
            max_targets: DEFAULT_MAX_TARGETS,
            style: VisualStyle::default(),
            geometry: GeometryParams::default(),
            output: OutputNames::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> CannonResult<Self> {
        serde_json::from_str(s).map_err(|e| CannonError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> CannonResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CannonError::serde(format!("parse config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CannonResult<Self> {
        let path = path.as_ref();
        let f =
            File::open(path).with_context(|| format!("open config JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> CannonResult<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(CannonError::validation(format!(
                "width must be in 1..={MAX_WIDTH}, got {}",
                self.width
            )));
        }
        if self.max_targets > MAX_TARGETS_LIMIT {
            return Err(CannonError::validation(format!(
                "max_targets must be <= {MAX_TARGETS_LIMIT}, got {}",
                self.max_targets
            )));
        }
        self.geometry_params().validate()?;
        self.style.validate()?;

        // The last pop has to settle before the next cycle's idle reset.
        let timing = self.timing();
        let window = timing.gap + timing.trailer + timing.cycle_pause;
        let settle = self.style.pop.settle_time();
        if settle > window {
            return Err(CannonError::validation(format!(
                "style.pop settles after {:.3}s but only {:.3}s remain before the cycle restarts",
                settle.as_f64(),
                window.as_f64()
            )));
        }

        self.output.validate()?;
        Ok(())
    }

    pub fn geometry_params(&self) -> GeometryParams {
        GeometryParams {
            target_width: self.width,
            ..self.geometry
        }
    }

    /// Theme with the background dropped when a transparent canvas was asked for.
    pub fn resolved_theme(&self) -> Theme {
        let mut theme = self.theme.resolve();
        if self.transparent_background {
            theme.background = None;
        }
        theme
    }

    pub fn timing(&self) -> ShotTiming {
        ShotTiming::for_speed(self.speed.multiplier())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
