pub(crate) mod gif;
pub(crate) mod save;
pub(crate) mod sink;
