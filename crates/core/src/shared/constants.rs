/// Suffix that replaces the input's final extension; also marks files that are already framed.
pub const DEFAULT_OUTPUT_MARKER: &str = "pola.tif";

/// Classic instant-film proportions: narrow top and sides, deep bottom margin.
pub const INSTANT_THIN_RATIO: f64 = 0.05;
pub const INSTANT_THICK_RATIO: f64 = 0.277778;

pub const GALLERY_TOP_RATIO: f64 = 1.0 / 12.0;
pub const GALLERY_BOTTOM_RATIO: f64 = 5.0 / 18.0;
pub const GALLERY_SIDE_RATIO: f64 = 1.0 / 13.0;

pub const UNIFORM_RATIO: f64 = 0.05;
