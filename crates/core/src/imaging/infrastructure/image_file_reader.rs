use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::{CodecError, FrameError};
use crate::shared::raster::Raster;

/// Reads any format the `image` crate can decode, widened to RGBA16.
///
/// The format is guessed from the content, not the extension.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes an in-memory or streamed image.
    pub fn decode<R: BufRead + Seek>(reader: R) -> Result<Raster, CodecError> {
        let decoded = image::ImageReader::new(reader)
            .with_guessed_format()?
            .decode()?;
        let rgba = decoded.to_rgba16();
        let (width, height) = rgba.dimensions();
        Ok(Raster::new(rgba.into_raw(), width, height))
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Raster, FrameError> {
        let file = File::open(path).map_err(|source| FrameError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(BufReader::new(file)).map_err(|source| FrameError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}
