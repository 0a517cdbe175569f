use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use tiff::encoder::colortype::RGBA16;
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression as TiffCompression, TiffEncoder};
use tiff::tags::Predictor;

use crate::imaging::domain::image_writer::{Compression, EncodeOptions, ImageWriter};
use crate::shared::error::{CodecError, FrameError};
use crate::shared::raster::Raster;

/// Writes 16-bit RGBA TIFF files with the `tiff` crate.
pub struct TiffFileWriter;

impl TiffFileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Encodes to any seekable sink.
    pub fn encode<W: Write + Seek>(
        sink: W,
        raster: &Raster,
        options: &EncodeOptions,
    ) -> Result<(), CodecError> {
        let compression = match options.compression {
            Compression::Uncompressed => TiffCompression::Uncompressed,
            Compression::Deflate => TiffCompression::Deflate(DeflateLevel::Balanced),
        };
        let predictor = if options.predictor {
            Predictor::Horizontal
        } else {
            Predictor::None
        };

        let mut encoder = TiffEncoder::new(sink)?
            .with_compression(compression)
            .with_predictor(predictor);
        encoder.write_image::<RGBA16>(raster.width(), raster.height(), raster.data())?;
        Ok(())
    }

    /// Creates `path` and hands a buffered sink to `fill`.
    ///
    /// A half-written file would carry the output marker and be skipped on the
    /// next run, so it is removed when `fill` or the final flush fails.
    fn write_file<F>(path: &Path, fill: F) -> Result<(), FrameError>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<(), CodecError>,
    {
        let file = File::create(path).map_err(|source| FrameError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut sink = BufWriter::new(file);
        let result = fill(&mut sink).and_then(|()| sink.flush().map_err(CodecError::from));
        drop(sink);

        result.map_err(|source| {
            if let Err(e) = fs::remove_file(path) {
                log::warn!("Could not remove partial output {}: {e}", path.display());
            }
            FrameError::Encode {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl Default for TiffFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for TiffFileWriter {
    fn write(
        &self,
        path: &Path,
        raster: &Raster,
        options: &EncodeOptions,
    ) -> Result<(), FrameError> {
        Self::write_file(path, |sink| Self::encode(sink, raster, options))
    }
}
