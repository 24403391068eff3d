//! Turn a contribution calendar into a self-looping animated SVG.
//!
//! The pipeline is pure and deterministic:
//!
//! - Normalize a provider payload into a [`ContributionGrid`]
//! - Resolve [`Geometry`] and plan a [`Schedule`] of shots
//! - Emit a declarative [`Timeline`] and write it as SMIL SVG
//!
//! [`synthesize`] runs all of it from a [`RenderConfig`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod calendar;
pub mod config;
pub mod playback;
pub mod pipeline;
pub(crate) mod render;
pub(crate) mod style;
pub(crate) mod synth;

pub use crate::foundation::core::{Point, Seconds, Vec2, fmt_num};
pub use crate::foundation::error::{CannonError, CannonResult, FetchFailureKind};

pub use crate::calendar::model::{
    ContributionDay, ContributionGrid, ContributionWeek, DAYS_PER_WEEK, Level,
};
pub use crate::calendar::normalize::normalize_calendar;
pub use crate::calendar::username::validate_username;
pub use crate::config::{OutputNames, RenderConfig};
pub use crate::pipeline::{Synthesis, render_static, synthesize};
pub use crate::playback::{PlaybackClock, PlaybackPhase, PlaybackPosition, PlaybackSnapshot};
pub use crate::render::raster::{Poster, parse_svg, rasterize};
pub use crate::render::static_svg::{StaticOptions, StaticVariant, render_static_svg};
pub use crate::render::svg::{begin_expr, bubble_id, marker_id, render_svg, write_svg};
pub use crate::style::color::HexColor;
pub use crate::style::theme::{
    DEFAULT_EMPTY_CELL, EMPTY_CELL_PRESETS, Palette, Speed, Theme, ThemeChoice, ThemePreset,
    level_color,
};
pub use crate::style::visual::{ImpactStyle, LauncherArt, MarkerStyle, PopStyle, VisualStyle};
pub use crate::synth::geometry::{Bubble, Geometry, GeometryParams};
pub use crate::synth::schedule::{DEFAULT_MAX_TARGETS, Schedule, ShotIndex, ShotTiming, Target};
pub use crate::synth::timeline::{
    Anchor, Attr, AttrValue, BubbleNode, Cycle, EmitOptions, ImpactNode, Launcher, MarkerNode,
    Particle, Step, TimeRef, Timeline,
};
