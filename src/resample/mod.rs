pub(crate) mod contour;
