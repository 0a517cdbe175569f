use std::path::Path;

use crate::shared::error::FrameError;
use crate::shared::raster::Raster;

/// Decodes an image file into a [`Raster`].
///
/// Implementations report open failures as `FileAccess` and unreadable or
/// unsupported content as `Decode`.
pub trait ImageReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Raster, FrameError>;
}
