pub(crate) mod font;
