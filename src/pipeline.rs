use crate::calendar::model::ContributionGrid;
use crate::config::RenderConfig;
use crate::foundation::error::CannonResult;
use crate::render::static_svg::{StaticOptions, StaticVariant, render_static_svg};
use crate::render::svg::render_svg;
use crate::style::theme::Palette;
use crate::synth::geometry::Geometry;
use crate::synth::schedule::Schedule;
use crate::synth::timeline::{EmitOptions, Timeline};

/// Everything produced for one animated render.
#[derive(Clone, Debug)]
pub struct Synthesis {
    pub document: String,
    pub geometry: Geometry,
    pub schedule: Schedule,
    pub timeline: Timeline,
}

/// Grid in, animated SVG out.
#[tracing::instrument(skip(grid, cfg), fields(weeks = grid.week_count()))]
pub fn synthesize(grid: &ContributionGrid, cfg: &RenderConfig) -> CannonResult<Synthesis> {
    cfg.validate()?;
    let geometry = Geometry::resolve(grid.week_count(), &cfg.geometry_params())?;
    let bubbles = geometry.bubbles(grid);
    let schedule = Schedule::plan(&bubbles, cfg.max_targets, cfg.timing());

    let opts = EmitOptions {
        theme: cfg.resolved_theme(),
        palette: Palette::GITHUB_LIGHT,
        empty_cell: cfg.empty_cell_color,
        hide_empty_days: cfg.hide_empty_days,
        style: &cfg.style,
    };
    let timeline = Timeline::build(&geometry, &bubbles, &schedule, &opts);
    let document = render_svg(&timeline)?;

    tracing::debug!(
        targets = schedule.len(),
        bytes = document.len(),
        "synthesized animated document"
    );
    Ok(Synthesis {
        document,
        geometry,
        schedule,
        timeline,
    })
}

/// Grid in, static SVG out, with the same layout as [`synthesize`].
#[tracing::instrument(skip(grid, cfg), fields(weeks = grid.week_count()))]
pub fn render_static(
    grid: &ContributionGrid,
    cfg: &RenderConfig,
    variant: StaticVariant,
) -> CannonResult<String> {
    cfg.validate()?;
    let geometry = Geometry::resolve(grid.week_count(), &cfg.geometry_params())?;
    let bubbles = geometry.bubbles(grid);
    render_static_svg(
        &geometry,
        &bubbles,
        &StaticOptions {
            variant,
            empty_cell: Some(cfg.empty_cell_color),
            hide_empty_days: cfg.hide_empty_days,
            background: cfg.resolved_theme().background,
        },
    )
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
