//! Declarative timeline model for one animated document.
//!
//! Every begin time is a [`TimeRef`]: an offset from either the cycle start or a marker's end.
//! There is no absolute clock anywhere in the model, which is what lets a document loop forever
//! with a single restart rule on the cycle driver.

use crate::foundation::core::{Point, Seconds, Vec2};
use crate::style::color::HexColor;
use crate::style::theme::{Palette, Theme};
use crate::style::visual::{LauncherArt, VisualStyle};
use crate::synth::geometry::{Bubble, Geometry};
use crate::synth::schedule::{Schedule, ShotIndex, Target};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "shot", rename_all = "snake_case")]
pub enum Anchor {
    CycleBegin,
    MarkerEnd(ShotIndex),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimeRef {
    pub anchor: Anchor,
    pub offset: Seconds,
}

impl TimeRef {
    pub fn cycle(offset: Seconds) -> Self {
        Self {
            anchor: Anchor::CycleBegin,
            offset,
        }
    }

    pub fn after_marker(shot: ShotIndex, offset: Seconds) -> Self {
        Self {
            anchor: Anchor::MarkerEnd(shot),
            offset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attr {
    Opacity,
    R,
    Fill,
    Cx,
    Cy,
}

impl Attr {
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::R => "r",
            Self::Fill => "fill",
            Self::Cx => "cx",
            Self::Cy => "cy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Num(f64),
    Color(HexColor),
}

/// One discrete or interpolated attribute change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Set {
        attr: Attr,
        to: AttrValue,
        begin: TimeRef,
    },
    /// Interpolates `from` to `to` and holds the final value.
    Animate {
        attr: Attr,
        from: AttrValue,
        to: AttrValue,
        begin: TimeRef,
        dur: Seconds,
    },
}

impl Step {
    pub fn attr(&self) -> Attr {
        match self {
            Self::Set { attr, .. } | Self::Animate { attr, .. } => *attr,
        }
    }

    pub fn begin(&self) -> TimeRef {
        match self {
            Self::Set { begin, .. } | Self::Animate { begin, .. } => *begin,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BubbleNode {
    pub week: usize,
    pub day: usize,
    pub center: Point,
    pub radius: f64,
    /// Idle fill, also the initial attribute value.
    pub fill: HexColor,
    pub shot: Option<ShotIndex>,
    pub steps: Vec<Step>,
}

impl BubbleNode {
    /// Whether this bubble bounces when its marker lands.
    pub fn bounces(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s.begin().anchor, Anchor::MarkerEnd(_)))
    }
}

/// A marker shot from the launcher to one target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MarkerNode {
    pub shot: ShotIndex,
    pub from: Point,
    pub to: Point,
    pub radius: f64,
    pub color: HexColor,
    /// Launch, relative to cycle start.
    pub fire_at: Seconds,
    pub flight: Seconds,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub to: Point,
}

/// Ring and particle burst at one target.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ImpactNode {
    pub shot: ShotIndex,
    pub center: Point,
    pub ring_from: f64,
    pub ring_to: f64,
    pub ring_stroke: f64,
    pub ring_color: HexColor,
    pub duration: Seconds,
    pub particle_radius: f64,
    pub particle_color: HexColor,
    pub particles: Vec<Particle>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Cycle {
    pub duration: Seconds,
    /// Delay between one cycle's end and the next cycle's begin.
    pub pause: Seconds,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Launcher {
    pub art: LauncherArt,
    pub origin: Point,
    pub color: HexColor,
}

/// Colors and switches the emitter needs beyond geometry and schedule.
#[derive(Clone, Copy, Debug)]
pub struct EmitOptions<'a> {
    pub theme: Theme,
    pub palette: Palette,
    pub empty_cell: HexColor,
    pub hide_empty_days: bool,
    pub style: &'a VisualStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    pub width: u32,
    pub height: u32,
    pub background: Option<HexColor>,
    pub cycle: Cycle,
    pub launcher: Launcher,
    pub bubbles: Vec<BubbleNode>,
    pub markers: Vec<MarkerNode>,
    pub impacts: Vec<ImpactNode>,
}

impl Timeline {
    /// Emit the full timeline. Total over valid geometry and schedule.
    pub fn build(
        geometry: &Geometry,
        bubbles: &[Bubble],
        schedule: &Schedule,
        opts: &EmitOptions<'_>,
    ) -> Self {
        let radius = geometry.radius_f64();
        let (width, height) = geometry.view_box();

        let bubble_nodes = bubbles
            .iter()
            .enumerate()
            .filter(|(_, b)| !opts.hide_empty_days || b.count > 0)
            .map(|(bi, b)| bubble_node(b, schedule.shot_for_bubble(bi), radius, opts))
            .collect();

        let markers = schedule
            .targets()
            .iter()
            .map(|t| MarkerNode {
                shot: t.shot,
                from: geometry.launcher,
                to: t.center,
                radius: opts.style.marker.radius,
                color: opts.theme.marker,
                fire_at: t.fire_at,
                flight: schedule.timing().shot,
            })
            .collect();

        let impacts = schedule
            .targets()
            .iter()
            .map(|t| impact_node(t, radius, opts))
            .collect();

        Self {
            width,
            height,
            background: opts.theme.background,
            cycle: Cycle {
                duration: schedule.total_duration(),
                pause: schedule.timing().cycle_pause,
            },
            launcher: Launcher {
                art: opts.style.launcher,
                origin: geometry.launcher,
                color: opts.theme.marker,
            },
            bubbles: bubble_nodes,
            markers,
            impacts,
        }
    }

    pub fn bubble(&self, week: usize, day: usize) -> Option<&BubbleNode> {
        self.bubbles.iter().find(|b| b.week == week && b.day == day)
    }
}

fn bubble_node(
    b: &Bubble,
    shot: Option<ShotIndex>,
    radius: f64,
    opts: &EmitOptions<'_>,
) -> BubbleNode {
    let fill = opts.palette.color(b.level, Some(opts.empty_cell));
    let at_cycle = TimeRef::cycle(Seconds::ZERO);

    let mut steps = vec![
        Step::Set {
            attr: Attr::Opacity,
            to: AttrValue::Num(1.0),
            begin: at_cycle,
        },
        Step::Set {
            attr: Attr::R,
            to: AttrValue::Num(radius),
            begin: at_cycle,
        },
        Step::Set {
            attr: Attr::Fill,
            to: AttrValue::Color(fill),
            begin: at_cycle,
        },
    ];

    if let Some(shot) = shot {
        let pop = &opts.style.pop;
        let peak = radius * pop.scale;
        steps.extend([
            Step::Animate {
                attr: Attr::R,
                from: AttrValue::Num(radius),
                to: AttrValue::Num(peak),
                begin: TimeRef::after_marker(shot, Seconds::ZERO),
                dur: pop.grow,
            },
            Step::Animate {
                attr: Attr::R,
                from: AttrValue::Num(peak),
                to: AttrValue::Num(radius),
                begin: TimeRef::after_marker(shot, pop.grow),
                dur: pop.shrink,
            },
            Step::Animate {
                attr: Attr::Opacity,
                from: AttrValue::Num(1.0),
                to: AttrValue::Num(0.0),
                begin: TimeRef::after_marker(shot, pop.grow),
                dur: pop.fade_out,
            },
            Step::Set {
                attr: Attr::Fill,
                to: AttrValue::Color(opts.empty_cell),
                begin: TimeRef::after_marker(shot, pop.recolor_at),
            },
            Step::Animate {
                attr: Attr::Opacity,
                from: AttrValue::Num(0.0),
                to: AttrValue::Num(1.0),
                begin: TimeRef::after_marker(shot, pop.fade_in_at),
                dur: pop.fade_in,
            },
        ]);
    }

    BubbleNode {
        week: b.week,
        day: b.day,
        center: b.center,
        radius,
        fill,
        shot,
        steps,
    }
}

fn impact_node(t: &Target, radius: f64, opts: &EmitOptions<'_>) -> ImpactNode {
    let fx = &opts.style.impact;
    let n = fx.particle_count;
    let reach = radius * fx.particle_reach;
    let particles = (0..n)
        .map(|k| {
            let angle = f64::from(k) * std::f64::consts::TAU / f64::from(n);
            Particle {
                to: t.center + Vec2::from_angle(angle) * reach,
            }
        })
        .collect();

    ImpactNode {
        shot: t.shot,
        center: t.center,
        ring_from: radius,
        ring_to: radius * fx.ring_scale,
        ring_stroke: fx.ring_stroke,
        ring_color: opts.theme.impact,
        duration: fx.duration,
        particle_radius: fx.particle_radius,
        particle_color: fx.particle_color,
        particles,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/timeline.rs"]
mod tests;
