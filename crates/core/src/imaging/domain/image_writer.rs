use std::path::Path;

use crate::shared::error::FrameError;
use crate::shared::raster::Raster;

/// Lossless compression applied to the encoded output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    Uncompressed,
    #[default]
    Deflate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub compression: Compression,
    /// Horizontal differencing before compression.
    pub predictor: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Deflate,
            predictor: true,
        }
    }
}

/// Encodes a [`Raster`] to a file.
pub trait ImageWriter: Send + Sync {
    fn write(&self, path: &Path, raster: &Raster, options: &EncodeOptions)
        -> Result<(), FrameError>;
}
