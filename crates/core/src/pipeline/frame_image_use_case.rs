use std::path::Path;
use std::time::Instant;

use crate::feathering::domain::edge_featherer::EdgeFeatherer;
use crate::feathering::infrastructure::featherer_factory::create_featherer;
use crate::framing::domain::canvas_compositor::compose_canvas;
use crate::framing::domain::geometry::compute_geometry;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::imaging::infrastructure::image_file_reader::ImageFileReader;
use crate::imaging::infrastructure::tiff_file_writer::TiffFileWriter;
use crate::pipeline::batch_executor::JobOutcome;
use crate::pipeline::frame_config::FrameConfig;
use crate::pipeline::output_naming::{is_framed_output, output_path};
use crate::shared::error::FrameError;

/// Single-image framing job: read → geometry → compose → feather → write.
///
/// Holds no per-job state, so one instance can serve every worker.
pub struct FrameImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    featherer: Option<Box<dyn EdgeFeatherer>>,
    config: FrameConfig,
}

impl FrameImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        featherer: Option<Box<dyn EdgeFeatherer>>,
        config: FrameConfig,
    ) -> Self {
        Self {
            reader,
            writer,
            featherer,
            config,
        }
    }

    /// File-based job: decodes with `image`, encodes TIFF, feathers when the
    /// config asks for it.
    pub fn from_config(config: FrameConfig) -> Self {
        let featherer = create_featherer(config.feather);
        Self::new(
            Box::new(ImageFileReader::new()),
            Box::new(TiffFileWriter::new()),
            featherer,
            config,
        )
    }

    /// Frames one input file and writes it next to the input.
    ///
    /// Inputs that already carry the output marker are skipped without error.
    pub fn execute(&self, input: &Path) -> Result<JobOutcome, FrameError> {
        if is_framed_output(input, &self.config.marker) {
            return Ok(JobOutcome::Skipped);
        }

        let start = Instant::now();
        let source = self.reader.read(input)?;
        let geometry = compute_geometry(source.width(), source.height(), &self.config.borders)?;
        log::debug!(
            "{}: {}x{} source, borders {:?}",
            input.display(),
            source.width(),
            source.height(),
            geometry.borders
        );

        let mut canvas = compose_canvas(&source, &geometry, self.config.background)?;
        let source_width = source.width();
        drop(source);

        if let Some(featherer) = &self.featherer {
            featherer.feather(&mut canvas, &geometry.photo_in_canvas(), source_width)?;
        }

        let output = output_path(input, &self.config.marker);
        self.writer.write(&output, &canvas, &self.config.encode)?;
        log::debug!(
            "{} framed in {:.1}ms",
            output.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(JobOutcome::Written(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feathering::domain::feather_spec::FeatherSpec;
    use crate::framing::domain::border_spec::BorderSpec;
    use crate::imaging::domain::image_writer::EncodeOptions;
    use crate::shared::color::Rgba16;
    use crate::shared::raster::{Raster, CHANNELS};
    use crate::shared::rect::Rect;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubImageReader {
        raster: Raster,
    }

    impl ImageReader for StubImageReader {
        fn read(&self, _path: &Path) -> Result<Raster, FrameError> {
            Ok(self.raster.clone())
        }
    }

    struct FailingReader;

    impl ImageReader for FailingReader {
        fn read(&self, path: &Path) -> Result<Raster, FrameError> {
            Err(FrameError::Decode {
                path: path.to_path_buf(),
                source: "corrupt".into(),
            })
        }
    }

    type Written = Arc<Mutex<Vec<(PathBuf, Raster, EncodeOptions)>>>;

    struct StubImageWriter {
        written: Written,
    }

    impl StubImageWriter {
        fn new() -> Self {
            Self {
                written: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl ImageWriter for StubImageWriter {
        fn write(
            &self,
            path: &Path,
            raster: &Raster,
            options: &EncodeOptions,
        ) -> Result<(), FrameError> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), raster.clone(), *options));
            Ok(())
        }
    }

    struct RecordingFeatherer {
        calls: Arc<Mutex<Vec<(Rect, u32)>>>,
    }

    impl EdgeFeatherer for RecordingFeatherer {
        fn feather(
            &self,
            _canvas: &mut Raster,
            photo: &Rect,
            source_width: u32,
        ) -> Result<(), FrameError> {
            self.calls.lock().unwrap().push((*photo, source_width));
            Ok(())
        }
    }

    // --- Helpers ---

    /// Opaque source where every pixel is distinct.
    fn gradient(width: u32, height: u32) -> Raster {
        let mut data = Vec::with_capacity((width * height) as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x * 61) as u16, (y * 79) as u16, 1234, u16::MAX]);
            }
        }
        Raster::new(data, width, height)
    }

    fn gallery_config() -> FrameConfig {
        FrameConfig {
            borders: BorderSpec::new(1.0 / 12.0, 5.0 / 18.0, 1.0 / 13.0, 1.0 / 13.0).unwrap(),
            ..FrameConfig::default()
        }
    }

    fn use_case(
        raster: Raster,
        featherer: Option<Box<dyn EdgeFeatherer>>,
        config: FrameConfig,
    ) -> (FrameImageUseCase, Written) {
        let writer = StubImageWriter::new();
        let written = writer.written.clone();
        let uc = FrameImageUseCase::new(
            Box::new(StubImageReader { raster }),
            Box::new(writer),
            featherer,
            config,
        );
        (uc, written)
    }

    // --- Tests ---

    #[test]
    fn test_gallery_example_without_feather() {
        let source = gradient(1000, 800);
        let (uc, written) = use_case(source.clone(), None, gallery_config());

        let outcome = uc.execute(Path::new("shots/photo.jpg")).unwrap();
        assert_eq!(
            outcome,
            JobOutcome::Written(PathBuf::from("shots/photo.pola.tif"))
        );

        let written = written.lock().unwrap();
        let (path, canvas, _) = &written[0];
        assert_eq!(path, &PathBuf::from("shots/photo.pola.tif"));

        let side = 1000 / 13;
        let top = 800 / 12;
        let bottom = 800 * 5 / 18;
        assert_eq!(canvas.width(), 1000 + 2 * side);
        assert_eq!(canvas.height(), 800 + top + bottom);

        for y in (0..800).step_by(7) {
            for x in (0..1000).step_by(13) {
                assert_eq!(canvas.pixel(x + side, y + top), source.pixel(x, y));
            }
        }
        assert_eq!(canvas.pixel(0, 0), Rgba16::WHITE.0);
    }

    #[test]
    fn test_gallery_example_with_feather() {
        let config = FrameConfig {
            feather: FeatherSpec::new(5.0),
            ..gallery_config()
        };
        let source = gradient(1000, 800);
        let (uc, written) = use_case(source.clone(), create_featherer(config.feather), config);

        uc.execute(Path::new("photo.jpg")).unwrap();

        let written = written.lock().unwrap();
        let canvas = &written[0].1;
        let (side, top) = (76u32, 66u32);
        // Photo stays sharp, including its outermost pixels.
        for y in [0, 1, 400, 798, 799] {
            for x in [0, 1, 500, 998, 999] {
                assert_eq!(canvas.pixel(x + side, y + top), source.pixel(x, y));
            }
        }
        // Border next to the seam picks up the photo's colors.
        assert_ne!(canvas.pixel(side - 1, top + 400), Rgba16::WHITE.0);
        // Far corner is out of the kernel's reach.
        assert_eq!(canvas.pixel(0, 0), Rgba16::WHITE.0);
    }

    #[test]
    fn test_featherer_receives_photo_rect_and_source_width() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let featherer = RecordingFeatherer {
            calls: calls.clone(),
        };
        let (uc, _) = use_case(gradient(130, 120), Some(Box::new(featherer)), gallery_config());

        uc.execute(Path::new("a.png")).unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        // side 130/13 = 10, top 120/12 = 10
        assert_eq!(calls[0], (Rect::new(10, 10, 140, 130), 130));
    }

    #[test]
    fn test_framed_input_is_skipped() {
        let (uc, written) = use_case(gradient(4, 4), None, FrameConfig::default());
        let outcome = uc.execute(Path::new("photo.pola.tif")).unwrap();
        assert_eq!(outcome, JobOutcome::Skipped);
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_decode_error_propagates_without_writing() {
        let writer = StubImageWriter::new();
        let written = writer.written.clone();
        let uc = FrameImageUseCase::new(
            Box::new(FailingReader),
            Box::new(writer),
            None,
            FrameConfig::default(),
        );
        let err = uc.execute(Path::new("bad.jpg")).unwrap_err();
        assert!(matches!(err, FrameError::Decode { .. }));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_degenerate_source_is_invalid_geometry() {
        let (uc, written) = use_case(Raster::new(Vec::new(), 0, 5), None, FrameConfig::default());
        let err = uc.execute(Path::new("empty.png")).unwrap_err();
        assert!(matches!(
            err,
            FrameError::InvalidGeometry {
                width: 0,
                height: 5
            }
        ));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_encode_options_and_background_forwarded() {
        let config = FrameConfig {
            background: Rgba16::BLACK,
            encode: EncodeOptions {
                predictor: false,
                ..EncodeOptions::default()
            },
            marker: "framed.tiff".to_string(),
            ..FrameConfig::default()
        };
        let (uc, written) = use_case(gradient(40, 40), None, config);

        uc.execute(Path::new("x.png")).unwrap();

        let written = written.lock().unwrap();
        let (path, canvas, options) = &written[0];
        assert_eq!(path, &PathBuf::from("x.framed.tiff"));
        assert!(!options.predictor);
        assert_eq!(canvas.pixel(0, 0), Rgba16::BLACK.0);
    }

    #[test]
    fn test_end_to_end_with_real_codecs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        image::RgbImage::from_pixel(26, 24, image::Rgb([10, 20, 30]))
            .save(&input)
            .unwrap();

        let uc = FrameImageUseCase::from_config(gallery_config());
        let outcome = uc.execute(&input).unwrap();
        let output = dir.path().join("photo.pola.tif");
        assert_eq!(outcome, JobOutcome::Written(output.clone()));

        let framed = image::open(&output).unwrap().to_rgba16();
        // side 26/13 = 2, top 24/12 = 2, bottom 24*5/18 = 6
        assert_eq!(framed.dimensions(), (30, 32));
        assert_eq!(framed.get_pixel(2, 2).0, [10 * 257, 20 * 257, 30 * 257, u16::MAX]);
        assert_eq!(framed.get_pixel(0, 31).0, [u16::MAX; 4]);

        // A second run over the output is a no-op.
        assert_eq!(uc.execute(&output).unwrap(), JobOutcome::Skipped);
    }
}
