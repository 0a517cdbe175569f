use crate::shared::raster::{Raster, CHANNELS};

/// Normalised Gaussian weights for a feather kernel of `kernel_size` taps.
///
/// A feather of radius `r` uses `2r + 1` taps with sigma = taps / 6, which puts
/// the outermost tap about three sigma from the centre.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size % 2 == 1);
    let radius = (kernel_size / 2) as f64;
    let two_sigma_sq = 2.0 * (kernel_size as f64 / 6.0).powi(2);
    let weights: Vec<f64> = (0..kernel_size)
        .map(|tap| {
            let offset = tap as f64 - radius;
            (-offset * offset / two_sigma_sq).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.iter().map(|w| (w / total) as f32).collect()
}

/// Returns a blurred copy of `src`; the input is left untouched.
///
/// Horizontal pass `src -> temp`, vertical pass `temp -> out`, each reading
/// only from the previous buffer. Lookups past an edge clamp to the nearest
/// valid pixel.
pub fn separable_gaussian_blur(src: &Raster, kernel: &[f32]) -> Raster {
    let width = src.width() as usize;
    let height = src.height() as usize;
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return src.clone();
    }
    let half = kernel_size / 2;
    let data = src.data();

    // Horizontal pass: src → temp
    let mut temp = vec![0.0f32; width * height * CHANNELS];
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - half as isize)
                        .clamp(0, (width - 1) as isize) as usize;
                    sum += data[(y * width + sx) * CHANNELS + c] as f32 * w;
                }
                temp[(y * width + x) * CHANNELS + c] = sum;
            }
        }
    }

    // Vertical pass: temp → out
    let mut out = vec![0u16; width * height * CHANNELS];
    for y in 0..height {
        for x in 0..width {
            for c in 0..CHANNELS {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - half as isize)
                        .clamp(0, (height - 1) as isize) as usize;
                    sum += temp[(sy * width + x) * CHANNELS + c] * w;
                }
                out[(y * width + x) * CHANNELS + c] =
                    sum.round().clamp(0.0, u16::MAX as f32) as u16;
            }
        }
    }

    Raster::new(out, src.width(), src.height())
}
