pub(crate) mod axes;
pub(crate) mod circle;
pub(crate) mod cube;
pub(crate) mod descriptor;
pub(crate) mod grid;
pub(crate) mod plot;
pub(crate) mod regular;
