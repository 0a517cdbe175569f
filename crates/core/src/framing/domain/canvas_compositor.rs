use ndarray::{s, ArrayView1, ArrayViewMut1, Axis, Zip};

use crate::shared::color::Rgba16;
use crate::shared::error::FrameError;
use crate::shared::raster::Raster;

use super::geometry::Geometry;

const OPAQUE: u64 = u16::MAX as u64;

/// Builds the framed canvas: background everywhere, then the source laid
/// over it at its border offset.
///
/// The source is only read. Opaque source pixels land on the canvas unchanged;
/// translucent ones are blended source-over onto the background.
pub fn compose_canvas(
    source: &Raster,
    geometry: &Geometry,
    background: Rgba16,
) -> Result<Raster, FrameError> {
    if source.width() as i64 != geometry.source.width()
        || source.height() as i64 != geometry.source.height()
    {
        return Err(FrameError::InvalidGeometry {
            width: source.width(),
            height: source.height(),
        });
    }

    let (width, height) = canvas_size(geometry)?;
    let mut canvas = Raster::filled(width, height, background);

    let photo = geometry.photo_in_canvas();
    let (x0, y0) = (photo.min_x as usize, photo.min_y as usize);
    let (x1, y1) = (photo.max_x as usize, photo.max_y as usize);

    let mut canvas_view = canvas.as_ndarray_mut();
    let mut target = canvas_view.slice_mut(s![y0..y1, x0..x1, ..]);
    Zip::from(target.lanes_mut(Axis(2)))
        .and(source.as_ndarray().lanes(Axis(2)))
        .for_each(source_over);

    Ok(canvas)
}

fn canvas_size(geometry: &Geometry) -> Result<(u32, u32), FrameError> {
    let (w, h) = (geometry.output_width(), geometry.output_height());
    match (u32::try_from(w), u32::try_from(h)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(FrameError::CanvasTooLarge {
            width: w,
            height: h,
        }),
    }
}

/// Straight-alpha Porter-Duff "over" of one RGBA16 pixel onto another.
fn source_over(mut dst: ArrayViewMut1<'_, u16>, src: ArrayView1<'_, u16>) {
    let sa = src[3] as u64;
    if sa == OPAQUE {
        dst.assign(&src);
        return;
    }
    if sa == 0 {
        return;
    }

    let da = dst[3] as u64;
    // Destination weight, still scaled by OPAQUE.
    let dw = da * (OPAQUE - sa) / OPAQUE;
    let out_a = sa + dw;
    for c in 0..3 {
        let blended = (src[c] as u64 * sa + dst[c] as u64 * dw + out_a / 2) / out_a;
        dst[c] = blended.min(OPAQUE) as u16;
    }
    dst[3] = out_a.min(OPAQUE) as u16;
}
