pub(crate) mod animated;
pub(crate) mod blend;
pub(crate) mod surface;
