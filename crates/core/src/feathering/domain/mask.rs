use crate::shared::error::FrameError;
use crate::shared::raster::{Raster, CHANNELS};
use crate::shared::rect::Rect;

const OPAQUE: u16 = u16::MAX;

/// Per-pixel blend weight for the feathered composite.
///
/// Opaque over the border band, transparent over the photo.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    data: Vec<u16>,
    width: u32,
    height: u32,
}

impl Mask {
    /// Opaque everywhere except `hole`, which is clipped to the mask bounds.
    pub fn border_band(width: u32, height: u32, hole: &Rect) -> Self {
        let mut data = vec![OPAQUE; width as usize * height as usize];
        let x0 = hole.min_x.clamp(0, width as i64) as usize;
        let x1 = hole.max_x.clamp(0, width as i64) as usize;
        let y0 = hole.min_y.clamp(0, height as i64) as usize;
        let y1 = hole.max_y.clamp(0, height as i64) as usize;
        if x0 < x1 {
            for y in y0..y1 {
                let row = y * width as usize;
                data[row + x0..row + x1].fill(0);
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn weight(&self, x: u32, y: u32) -> u16 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Mixes `overlay` into `base` with this mask as the per-pixel weight.
    ///
    /// Weight 0 keeps `base` exactly, full weight takes `overlay` exactly.
    pub fn blend(&self, base: &mut Raster, overlay: &Raster) -> Result<(), FrameError> {
        for r in [&*base, overlay] {
            if r.width() != self.width || r.height() != self.height {
                return Err(FrameError::InvalidGeometry {
                    width: r.width(),
                    height: r.height(),
                });
            }
        }

        let full = OPAQUE as u32;
        let base_px = base.data_mut().chunks_exact_mut(CHANNELS);
        let overlay_px = overlay.data().chunks_exact(CHANNELS);
        for ((dst, src), &m) in base_px.zip(overlay_px).zip(&self.data) {
            match m {
                0 => {}
                OPAQUE => dst.copy_from_slice(src),
                m => {
                    let m = m as u32;
                    for (d, &s) in dst.iter_mut().zip(src) {
                        *d = ((*d as u32 * (full - m) + s as u32 * m + full / 2) / full) as u16;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::color::Rgba16;

    #[test]
    fn test_border_band_hole_is_transparent() {
        let mask = Mask::border_band(6, 5, &Rect::new(1, 1, 4, 3));
        for y in 0..5 {
            for x in 0..6 {
                let inside = (1..4).contains(&x) && (1..3).contains(&y);
                let expected = if inside { 0 } else { OPAQUE };
                assert_eq!(mask.weight(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_hole_outside_bounds_is_clipped() {
        let mask = Mask::border_band(4, 4, &Rect::new(-3, 2, 10, 10));
        assert_eq!(mask.weight(0, 1), OPAQUE);
        assert_eq!(mask.weight(0, 2), 0);
        assert_eq!(mask.weight(3, 3), 0);
    }

    #[test]
    fn test_empty_hole_is_all_opaque() {
        let mask = Mask::border_band(3, 3, &Rect::new(2, 2, 2, 2));
        assert!(mask.data.iter().all(|&w| w == OPAQUE));
    }

    #[test]
    fn test_blend_selects_by_mask() {
        let mask = Mask::border_band(4, 4, &Rect::new(1, 1, 3, 3));
        let mut base = Raster::filled(4, 4, Rgba16::BLACK);
        let overlay = Raster::filled(4, 4, Rgba16::WHITE);
        mask.blend(&mut base, &overlay).unwrap();
        assert_eq!(base.pixel(0, 0), Rgba16::WHITE.0);
        assert_eq!(base.pixel(1, 1), Rgba16::BLACK.0);
        assert_eq!(base.pixel(2, 2), Rgba16::BLACK.0);
        assert_eq!(base.pixel(3, 2), Rgba16::WHITE.0);
    }

    #[test]
    fn test_blend_partial_weight_mixes() {
        let mut mask = Mask::border_band(1, 1, &Rect::new(0, 0, 0, 0));
        mask.data[0] = OPAQUE / 2;
        let mut base = Raster::filled(1, 1, Rgba16([0, 0, 0, OPAQUE]));
        let overlay = Raster::filled(1, 1, Rgba16([OPAQUE, OPAQUE, OPAQUE, OPAQUE]));
        mask.blend(&mut base, &overlay).unwrap();
        let px = base.pixel(0, 0);
        assert!((px[0] as i32 - (OPAQUE / 2) as i32).abs() <= 1);
        assert_eq!(px[3], OPAQUE);
    }

    #[test]
    fn test_blend_rejects_mismatched_sizes() {
        let mask = Mask::border_band(4, 4, &Rect::new(1, 1, 3, 3));
        let mut base = Raster::filled(4, 4, Rgba16::BLACK);
        let overlay = Raster::filled(5, 4, Rgba16::WHITE);
        assert!(mask.blend(&mut base, &overlay).is_err());
    }
}
