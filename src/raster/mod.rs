pub(crate) mod line;
pub(crate) mod mask;
pub(crate) mod rasterize;
