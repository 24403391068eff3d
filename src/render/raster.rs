use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CannonError, CannonResult};

const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 still of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poster {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

/// Parse an SVG document with the same options used for rasterization.
pub fn parse_svg(svg: &str) -> CannonResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_str(svg, &opts)
        .map_err(|e| CannonError::Other(anyhow::anyhow!("parse svg tree: {e}")))
}

/// Rasterize a document at `scale` device pixels per user unit.
///
/// Animation elements are ignored, so an animated document yields its idle frame: every bubble
/// at its level color and no markers in flight.
pub fn rasterize(svg: &str, scale: f32) -> CannonResult<Poster> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(CannonError::validation(format!(
            "poster scale must be > 0, got {scale}"
        )));
    }
    let tree = parse_svg(svg)?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(CannonError::validation(format!(
            "poster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CannonError::validation("failed to allocate poster pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let rgba8 = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    tracing::debug!(width, height, scale, "rasterized poster");
    Ok(Poster {
        width,
        height,
        rgba8,
    })
}

impl Poster {
    pub fn write_png(&self, path: &Path) -> CannonResult<()> {
        image::save_buffer_with_format(
            path,
            &self.rgba8,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    /// RGBA at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
