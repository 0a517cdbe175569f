/// Feather strength, in thousandths of the source width.
///
/// Expressed relative to the source so the feather looks the same at every
/// resolution. Zero disables feathering.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatherSpec {
    pub edge_per_mille: f64,
}

impl FeatherSpec {
    pub fn new(edge_per_mille: f64) -> Self {
        Self { edge_per_mille }
    }

    pub fn is_enabled(&self) -> bool {
        self.edge_per_mille > 0.0
    }

    pub fn edge_pixels(&self, source_width: u32) -> f64 {
        source_width as f64 * self.edge_per_mille / 1000.0
    }

    /// Odd Gaussian kernel length for a source of `source_width`, or `None`
    /// when the feather is under one pixel.
    ///
    /// `radius = round(edge_pixels)`, so with sigma = size / 6 the kernel spans
    /// roughly +-3 sigma and sigma ~= edge_pixels / 3. The radius never exceeds
    /// `max_radius`: edge lookups clamp, so taps past the canvas extent only
    /// repeat the edge pixel.
    pub fn kernel_size(&self, source_width: u32, max_radius: u32) -> Option<usize> {
        let edge = self.edge_pixels(source_width);
        if edge.is_nan() || edge < 1.0 {
            return None;
        }
        let radius = edge.round().min(f64::from(max_radius.max(1))) as usize;
        radius.checked_mul(2)?.checked_add(1)
    }
}
