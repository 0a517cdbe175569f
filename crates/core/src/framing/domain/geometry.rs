use crate::shared::error::FrameError;
use crate::shared::rect::Rect;

use super::border_spec::BorderSpec;

/// Border widths in pixels for one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderWidths {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// Placement of a source image inside its framed output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub source: Rect,
    pub output: Rect,
    pub borders: BorderWidths,
}

impl Geometry {
    pub fn output_width(&self) -> u64 {
        self.output.width() as u64
    }

    pub fn output_height(&self) -> u64 {
        self.output.height() as u64
    }

    /// The source rectangle in canvas coordinates (origin at the output's top-left).
    pub fn photo_in_canvas(&self) -> Rect {
        self.source.relative_to(&self.output)
    }
}

/// Derives border widths and the output rectangle for a `width` x `height` source.
///
/// Each side is truncated independently. Large borders are not clamped.
pub fn compute_geometry(width: u32, height: u32, spec: &BorderSpec) -> Result<Geometry, FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::InvalidGeometry { width, height });
    }

    let borders = BorderWidths {
        top: spec.top.pixels(width, height),
        bottom: spec.bottom.pixels(width, height),
        left: spec.left.pixels(width, height),
        right: spec.right.pixels(width, height),
    };

    let source = Rect::from_size(width, height);
    let output = Rect::new(
        source.min_x - borders.left as i64,
        source.min_y - borders.top as i64,
        source.max_x + borders.right as i64,
        source.max_y + borders.bottom as i64,
    );

    Ok(Geometry {
        source,
        output,
        borders,
    })
}
