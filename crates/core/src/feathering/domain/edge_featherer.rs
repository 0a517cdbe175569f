use crate::shared::error::FrameError;
use crate::shared::raster::Raster;
use crate::shared::rect::Rect;

/// Domain interface for softening the seam between a photo and its border.
///
/// `photo` is the source rectangle in canvas coordinates; pixels inside it
/// must come out unchanged. Implementations modify the canvas in place.
pub trait EdgeFeatherer: Send + Sync {
    fn feather(&self, canvas: &mut Raster, photo: &Rect, source_width: u32)
        -> Result<(), FrameError>;
}
