use crate::calendar::model::{ContributionGrid, DAYS_PER_WEEK, Level};
use crate::foundation::core::Point;
use crate::foundation::error::{CannonError, CannonResult};

/// Largest cell edge a config may ask for.
pub const MAX_CELL: u32 = 64;
/// Largest gap between the grid and the launcher.
pub const MAX_LAUNCHER_OFFSET: u32 = 256;
/// Hard ceiling on either side of the document.
pub const MAX_VIEW_DIM: u32 = 16_384;

/// Inputs to the geometry resolver, in device units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryParams {
    /// Width the calendar should roughly fill.
    pub target_width: u32,
    /// Week count below which cells stop growing.
    pub min_week_floor: u32,
    pub min_cell: u32,
    pub max_cell: u32,
    /// Bubble radius as a percentage of the cell size.
    pub radius_percent: u32,
    /// Distance from the bottom of the grid down to the launcher.
    pub launcher_offset: u32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            target_width: 1200,
            min_week_floor: 30,
            min_cell: 10,
            max_cell: 14,
            radius_percent: 45,
            launcher_offset: 26,
        }
    }
}

impl GeometryParams {
    pub fn validate(&self) -> CannonResult<()> {
        if self.target_width == 0 {
            return Err(CannonError::validation("width must be > 0"));
        }
        if self.min_week_floor == 0 {
            return Err(CannonError::validation("geometry.min_week_floor must be >= 1"));
        }
        if self.min_cell < 2 {
            return Err(CannonError::validation("geometry.min_cell must be >= 2"));
        }
        if self.min_cell > self.max_cell {
            return Err(CannonError::validation(format!(
                "geometry.min_cell ({}) must be <= geometry.max_cell ({})",
                self.min_cell, self.max_cell
            )));
        }
        if self.max_cell > MAX_CELL {
            return Err(CannonError::validation(format!(
                "geometry.max_cell must be <= {MAX_CELL}, got {}",
                self.max_cell
            )));
        }
        if self.launcher_offset > MAX_LAUNCHER_OFFSET {
            return Err(CannonError::validation(format!(
                "geometry.launcher_offset must be <= {MAX_LAUNCHER_OFFSET}, got {}",
                self.launcher_offset
            )));
        }
        if !(1..=50).contains(&self.radius_percent) {
            return Err(CannonError::validation(
                "geometry.radius_percent must be in 1..=50",
            ));
        }
        Ok(())
    }
}

/// Resolved layout for one grid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Geometry {
    pub week_count: u32,
    pub cell_size: u32,
    pub radius: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    pub launcher_offset: u32,
    /// Marker origin: horizontally centered, below the grid.
    pub launcher: Point,
}

impl Geometry {
    /// Size cells so the grid tracks the calendar's true width, within fixed bounds.
    pub fn resolve(week_count: usize, params: &GeometryParams) -> CannonResult<Self> {
        params.validate()?;
        if week_count == 0 {
            return Err(CannonError::EmptyCalendar);
        }
        let week_count = u32::try_from(week_count)
            .map_err(|_| CannonError::validation("too many weeks"))?;

        let denom = week_count.max(params.min_week_floor);
        let cell_size = (params.target_width / denom).clamp(params.min_cell, params.max_cell);
        let radius = cell_size * params.radius_percent / 100;
        let grid_width = week_count
            .checked_mul(cell_size)
            .ok_or_else(|| CannonError::validation("grid width overflows"))?;
        let grid_height = (DAYS_PER_WEEK as u32)
            .checked_mul(cell_size)
            .ok_or_else(|| CannonError::validation("grid height overflows"))?;
        let view_height = grid_height
            .checked_add(params.launcher_offset)
            .ok_or_else(|| CannonError::validation("document height overflows"))?;
        if grid_width > MAX_VIEW_DIM || view_height > MAX_VIEW_DIM {
            return Err(CannonError::validation(format!(
                "document size {grid_width}x{view_height} exceeds {MAX_VIEW_DIM}x{MAX_VIEW_DIM}"
            )));
        }

        let launcher = Point::new(
            f64::from(grid_width) / 2.0,
            f64::from(view_height),
        );

        tracing::debug!(week_count, cell_size, radius, grid_width, grid_height, "resolved geometry");
        Ok(Self {
            week_count,
            cell_size,
            radius,
            grid_width,
            grid_height,
            launcher_offset: params.launcher_offset,
            launcher,
        })
    }

    /// Tight `(width, height)` of the document.
    pub fn view_box(&self) -> (u32, u32) {
        (self.grid_width, self.grid_height + self.launcher_offset)
    }

    pub fn cell_center(&self, week: usize, day: usize) -> Point {
        let cell = f64::from(self.cell_size);
        Point::new(
            week as f64 * cell + cell / 2.0,
            day as f64 * cell + cell / 2.0,
        )
    }

    pub fn radius_f64(&self) -> f64 {
        f64::from(self.radius)
    }

    /// One bubble per grid cell, in week-major/day-minor order.
    pub fn bubbles(&self, grid: &ContributionGrid) -> Vec<Bubble> {
        grid.cells()
            .map(|(week, day, d)| Bubble {
                week,
                day,
                center: self.cell_center(week, day),
                level: d.level,
                count: d.count,
            })
            .collect()
    }
}

/// A laid-out grid cell.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bubble {
    pub week: usize,
    pub day: usize,
    pub center: Point,
    pub level: Level,
    pub count: u32,
}

impl Bubble {
    pub fn is_target(&self) -> bool {
        self.count > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/geometry.rs"]
mod tests;
