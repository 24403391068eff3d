pub(crate) mod raster;
pub(crate) mod static_svg;
pub(crate) mod svg;
