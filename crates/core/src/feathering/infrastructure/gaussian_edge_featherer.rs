use crate::feathering::domain::edge_featherer::EdgeFeatherer;
use crate::feathering::domain::feather_spec::FeatherSpec;
use crate::feathering::domain::mask::Mask;
use crate::shared::error::FrameError;
use crate::shared::raster::Raster;
use crate::shared::rect::Rect;

use super::gaussian;

/// CPU featherer: blurs a copy of the whole canvas with a separable Gaussian
/// and lets it through only over the border band.
///
/// The kernel is sized per call because the feather scales with each
/// source's width.
pub struct GaussianEdgeFeatherer {
    spec: FeatherSpec,
}

impl GaussianEdgeFeatherer {
    pub fn new(spec: FeatherSpec) -> Self {
        Self { spec }
    }
}

impl EdgeFeatherer for GaussianEdgeFeatherer {
    fn feather(
        &self,
        canvas: &mut Raster,
        photo: &Rect,
        source_width: u32,
    ) -> Result<(), FrameError> {
        let extent = canvas.width().max(canvas.height());
        let Some(kernel_size) = self.spec.kernel_size(source_width, extent) else {
            log::debug!(
                "Feather under one pixel at width {source_width}, leaving canvas sharp"
            );
            return Ok(());
        };

        let kernel = gaussian::gaussian_kernel_1d(kernel_size);
        let blurred = gaussian::separable_gaussian_blur(canvas, &kernel);
        let mask = Mask::border_band(canvas.width(), canvas.height(), photo);
        mask.blend(canvas, &blurred)
    }
}
