pub(crate) mod color;
pub(crate) mod theme;
pub(crate) mod visual;
