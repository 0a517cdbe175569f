use ndarray::{ArrayView3, ArrayViewMut3};

use super::color::Rgba16;

/// Channels per pixel. Every raster is RGBA.
pub const CHANNELS: usize = 4;

/// A decoded image or output canvas: contiguous RGBA16 samples in row-major order.
///
/// Decoders widen whatever they read to 16-bit RGBA at the I/O boundary, so
/// the framing and feathering code only ever sees this one layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    data: Vec<u16>,
    width: u32,
    height: u32,
}

impl Raster {
    pub fn new(data: Vec<u16>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Allocates a raster with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba16) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&color.0);
        }
        Self::new(data, width, height)
    }

    pub fn data(&self) -> &[u16] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u16> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u16; CHANNELS] {
        let i = ((y as usize) * (self.width as usize) + x as usize) * CHANNELS;
        let mut px = [0u16; CHANNELS];
        px.copy_from_slice(&self.data[i..i + CHANNELS]);
        px
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u16> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Raster data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u16> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Raster data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}
