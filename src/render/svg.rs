use std::fmt::{self, Write};

use crate::foundation::core::{Point, Seconds, fmt_num};
use crate::foundation::error::{CannonError, CannonResult};
use crate::style::color::HexColor;
use crate::style::visual::LauncherArt;
use crate::synth::schedule::ShotIndex;
use crate::synth::timeline::{
    Anchor, AttrValue, BubbleNode, ImpactNode, Launcher, MarkerNode, Step, TimeRef, Timeline,
};

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Id of the repeating animation every cycle-relative begin time hangs off.
pub const CYCLE_ID: &str = "cycle";

pub fn marker_id(shot: ShotIndex) -> String {
    format!("marker-{}", shot.0)
}

pub fn bubble_id(week: usize, day: usize) -> String {
    format!("bubble-{week}-{day}")
}

/// SMIL begin expression for a time reference.
pub fn begin_expr(t: TimeRef) -> String {
    let base = match t.anchor {
        Anchor::CycleBegin => format!("{CYCLE_ID}.begin"),
        Anchor::MarkerEnd(shot) => format!("{}.end", marker_id(shot)),
    };
    offset_expr(base, t.offset)
}

fn offset_expr(base: String, offset: Seconds) -> String {
    if offset.is_zero() {
        base
    } else {
        format!("{base}+{}s", fmt_num(offset.as_f64()))
    }
}

fn secs(s: Seconds) -> String {
    format!("{}s", fmt_num(s.as_f64()))
}

fn value(v: AttrValue) -> String {
    match v {
        AttrValue::Num(n) => fmt_num(n),
        AttrValue::Color(c) => c.to_string(),
    }
}

/// Serialize a timeline as a self-contained animated SVG document.
pub fn render_svg(timeline: &Timeline) -> CannonResult<String> {
    let mut out = String::with_capacity(256 + timeline.bubbles.len() * 512);
    write_svg(&mut out, timeline)
        .map_err(|e| CannonError::Other(anyhow::anyhow!("svg write failed: {e}")))?;
    Ok(out)
}

pub fn write_svg<W: Write>(out: &mut W, tl: &Timeline) -> fmt::Result {
    let (w, h) = (tl.width, tl.height);
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )?;
    if let Some(bg) = tl.background {
        writeln!(out, r#"  <rect width="{w}" height="{h}" fill="{bg}"/>"#)?;
    }
    writeln!(
        out,
        r#"  <rect id="cycleTimer" x="-10" y="-10" width="1" height="1" fill="none"><animate id="{CYCLE_ID}" attributeName="x" from="-10" to="-9" begin="0s;{CYCLE_ID}.end+{pause}" dur="{dur}" fill="freeze"/></rect>"#,
        pause = secs(tl.cycle.pause),
        dur = secs(tl.cycle.duration),
    )?;

    write_launcher(out, &tl.launcher)?;

    writeln!(out, r#"  <g id="bubbles">"#)?;
    for b in &tl.bubbles {
        write_bubble(out, b)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g id="markers">"#)?;
    for m in &tl.markers {
        write_marker(out, m)?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g id="impacts">"#)?;
    for imp in &tl.impacts {
        write_impact(out, imp)?;
    }
    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

fn write_launcher<W: Write>(out: &mut W, l: &Launcher) -> fmt::Result {
    let (x, y) = (l.origin.x, l.origin.y);
    let n = fmt_num;
    let c = l.color;
    match l.art {
        LauncherArt::None => Ok(()),
        LauncherArt::Shooter => {
            writeln!(out, r#"  <g id="launcher">"#)?;
            writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="32" height="10" rx="5" fill="{c}" opacity="0.9"/>"#,
                n(x - 16.0),
                n(y - 10.0)
            )?;
            writeln!(
                out,
                r#"    <polygon points="{},{} {},{} {},{}" fill="{c}"/>"#,
                n(x - 5.0),
                n(y - 10.0),
                n(x + 5.0),
                n(y - 10.0),
                n(x),
                n(y - 22.0)
            )?;
            writeln!(out, "  </g>")
        }
        LauncherArt::Cannon => {
            writeln!(out, r#"  <g id="launcher">"#)?;
            writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="6" height="12" rx="2" fill="{c}"/>"#,
                n(x - 3.0),
                n(y - 24.0)
            )?;
            writeln!(
                out,
                r#"    <rect x="{}" y="{}" width="24" height="8" rx="3" fill="{c}"/>"#,
                n(x - 12.0),
                n(y - 14.0)
            )?;
            for dx in [-9.0, 9.0] {
                writeln!(
                    out,
                    r#"    <circle cx="{}" cy="{}" r="4" fill="{c}" opacity="0.8"/>"#,
                    n(x + dx),
                    n(y - 4.0)
                )?;
            }
            writeln!(out, "  </g>")
        }
    }
}

fn write_step<W: Write>(out: &mut W, step: &Step) -> fmt::Result {
    match *step {
        Step::Set { attr, to, begin } => writeln!(
            out,
            r#"      <set attributeName="{}" to="{}" begin="{}"/>"#,
            attr.name(),
            value(to),
            begin_expr(begin)
        ),
        Step::Animate {
            attr,
            from,
            to,
            begin,
            dur,
        } => writeln!(
            out,
            r#"      <animate attributeName="{}" from="{}" to="{}" begin="{}" dur="{}" fill="freeze"/>"#,
            attr.name(),
            value(from),
            value(to),
            begin_expr(begin),
            secs(dur)
        ),
    }
}

fn write_bubble<W: Write>(out: &mut W, b: &BubbleNode) -> fmt::Result {
    writeln!(
        out,
        r#"    <circle id="{}" cx="{}" cy="{}" r="{}" fill="{}">"#,
        bubble_id(b.week, b.day),
        fmt_num(b.center.x),
        fmt_num(b.center.y),
        fmt_num(b.radius),
        b.fill
    )?;
    for s in &b.steps {
        write_step(out, s)?;
    }
    writeln!(out, "    </circle>")
}

fn write_marker<W: Write>(out: &mut W, m: &MarkerNode) -> fmt::Result {
    let id = marker_id(m.shot);
    let launch = begin_expr(TimeRef::cycle(m.fire_at));
    let flight = secs(m.flight);
    writeln!(
        out,
        r#"    <circle cx="{}" cy="{}" r="{}" fill="{}" opacity="0">"#,
        fmt_num(m.from.x),
        fmt_num(m.from.y),
        fmt_num(m.radius),
        m.color
    )?;
    writeln!(
        out,
        r#"      <set attributeName="opacity" to="1" begin="{launch}"/>"#
    )?;
    writeln!(
        out,
        r#"      <animate id="{id}" attributeName="cy" from="{}" to="{}" begin="{launch}" dur="{flight}" fill="freeze"/>"#,
        fmt_num(m.from.y),
        fmt_num(m.to.y)
    )?;
    writeln!(
        out,
        r#"      <animate attributeName="cx" from="{}" to="{}" begin="{launch}" dur="{flight}" fill="freeze"/>"#,
        fmt_num(m.from.x),
        fmt_num(m.to.x)
    )?;
    writeln!(
        out,
        r#"      <set attributeName="opacity" to="0" begin="{id}.end"/>"#
    )?;
    writeln!(out, "    </circle>")
}

fn write_fade<W: Write>(out: &mut W, begin: &str, dur: &str) -> fmt::Result {
    writeln!(
        out,
        r#"        <animate attributeName="opacity" from="1" to="0" begin="{begin}" dur="{dur}" fill="freeze"/>"#
    )
}

fn write_impact<W: Write>(out: &mut W, imp: &ImpactNode) -> fmt::Result {
    let begin = begin_expr(TimeRef::after_marker(imp.shot, Seconds::ZERO));
    let dur = secs(imp.duration);
    let (cx, cy) = (fmt_num(imp.center.x), fmt_num(imp.center.y));

    writeln!(out, r#"    <g id="impact-{}">"#, imp.shot.0)?;
    writeln!(
        out,
        r#"      <circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{}" stroke-width="{}" opacity="0">"#,
        fmt_num(imp.ring_from),
        imp.ring_color,
        fmt_num(imp.ring_stroke)
    )?;
    writeln!(
        out,
        r#"        <animate attributeName="r" from="{}" to="{}" begin="{begin}" dur="{dur}" fill="freeze"/>"#,
        fmt_num(imp.ring_from),
        fmt_num(imp.ring_to)
    )?;
    write_fade(out, &begin, &dur)?;
    writeln!(out, "      </circle>")?;

    for p in &imp.particles {
        write_particle(out, imp.center, p.to, imp.particle_radius, imp.particle_color, &begin, &dur)?;
    }
    writeln!(out, "    </g>")
}

fn write_particle<W: Write>(
    out: &mut W,
    from: Point,
    to: Point,
    radius: f64,
    color: HexColor,
    begin: &str,
    dur: &str,
) -> fmt::Result {
    writeln!(
        out,
        r#"      <circle cx="{}" cy="{}" r="{}" fill="{color}" opacity="0">"#,
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(radius)
    )?;
    for (attr, a, b) in [("cx", from.x, to.x), ("cy", from.y, to.y)] {
        writeln!(
            out,
            r#"        <animate attributeName="{attr}" from="{}" to="{}" begin="{begin}" dur="{dur}" fill="freeze"/>"#,
            fmt_num(a),
            fmt_num(b)
        )?;
    }
    write_fade(out, begin, dur)?;
    writeln!(out, "      </circle>")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
