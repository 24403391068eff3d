use std::fmt::{self, Write};

use crate::foundation::core::fmt_num;
use crate::foundation::error::{CannonError, CannonResult};
use crate::render::svg::{SVG_NS, bubble_id};
use crate::style::color::HexColor;
use crate::style::theme::Palette;
use crate::synth::geometry::{Bubble, Geometry};

/// Color scheme for the static artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticVariant {
    #[default]
    Light,
    Dark,
}

impl StaticVariant {
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::GITHUB_LIGHT,
            Self::Dark => Palette::GITHUB_DARK,
        }
    }

    /// The dark palette carries its own empty color; a light override would wash it out.
    fn empty_override(self, empty: Option<HexColor>) -> Option<HexColor> {
        match self {
            Self::Light => empty,
            Self::Dark => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StaticOptions {
    pub variant: StaticVariant,
    pub empty_cell: Option<HexColor>,
    pub hide_empty_days: bool,
    pub background: Option<HexColor>,
}

/// Unanimated calendar with the same cell layout as the animated document.
pub fn render_static_svg(
    geometry: &Geometry,
    bubbles: &[Bubble],
    opts: &StaticOptions,
) -> CannonResult<String> {
    let mut out = String::with_capacity(256 + bubbles.len() * 96);
    write_static(&mut out, geometry, bubbles, opts)
        .map_err(|e| CannonError::Other(anyhow::anyhow!("svg write failed: {e}")))?;
    Ok(out)
}

fn write_static<W: Write>(
    out: &mut W,
    geometry: &Geometry,
    bubbles: &[Bubble],
    opts: &StaticOptions,
) -> fmt::Result {
    let (w, h) = (geometry.grid_width, geometry.grid_height);
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )?;
    if let Some(bg) = opts.background {
        writeln!(out, r#"  <rect width="{w}" height="{h}" fill="{bg}"/>"#)?;
    }

    let palette = opts.variant.palette();
    let empty = opts.variant.empty_override(opts.empty_cell);
    let r = fmt_num(geometry.radius_f64());
    writeln!(out, r#"  <g id="bubbles">"#)?;
    for b in bubbles
        .iter()
        .filter(|b| !opts.hide_empty_days || b.count > 0)
    {
        writeln!(
            out,
            r#"    <circle id="{}" cx="{}" cy="{}" r="{r}" fill="{}"/>"#,
            bubble_id(b.week, b.day),
            fmt_num(b.center.x),
            fmt_num(b.center.y),
            palette.color(b.level, empty)
        )?;
    }
    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

#[cfg(test)]
#[path = "../../tests/unit/render/static_svg.rs"]
mod tests;
