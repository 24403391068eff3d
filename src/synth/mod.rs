pub(crate) mod geometry;
pub(crate) mod schedule;
pub(crate) mod timeline;
