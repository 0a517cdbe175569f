use crate::shared::constants::{
    GALLERY_BOTTOM_RATIO, GALLERY_SIDE_RATIO, GALLERY_TOP_RATIO, INSTANT_THICK_RATIO,
    INSTANT_THIN_RATIO, UNIFORM_RATIO,
};
use crate::shared::error::FrameError;

/// Which source dimension a border ratio is multiplied by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatioBasis {
    Width,
    Height,
    ShorterSide,
    LongerSide,
}

impl RatioBasis {
    pub fn dimension(self, width: u32, height: u32) -> u32 {
        match self {
            RatioBasis::Width => width,
            RatioBasis::Height => height,
            RatioBasis::ShorterSide => width.min(height),
            RatioBasis::LongerSide => width.max(height),
        }
    }
}

/// One side of the frame: a non-negative fraction of a chosen source dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSide {
    ratio: f64,
    basis: RatioBasis,
}

impl BorderSide {
    pub fn new(ratio: f64, basis: RatioBasis) -> Result<Self, FrameError> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(FrameError::InvalidRatio(ratio));
        }
        Ok(Self { ratio, basis })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn basis(&self) -> RatioBasis {
        self.basis
    }

    /// Border width in pixels, truncated toward zero.
    pub fn pixels(&self, width: u32, height: u32) -> u32 {
        let dim = self.basis.dimension(width, height) as f64;
        // Saturates for absurd ratios rather than wrapping.
        (dim * self.ratio) as u32
    }
}

/// Border proportions for all four sides, fixed for a whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSpec {
    pub top: BorderSide,
    pub bottom: BorderSide,
    pub left: BorderSide,
    pub right: BorderSide,
}

impl BorderSpec {
    /// Top and bottom scale with height, left and right with width.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Result<Self, FrameError> {
        Ok(Self {
            top: BorderSide::new(top, RatioBasis::Height)?,
            bottom: BorderSide::new(bottom, RatioBasis::Height)?,
            left: BorderSide::new(left, RatioBasis::Width)?,
            right: BorderSide::new(right, RatioBasis::Width)?,
        })
    }

    /// Instant-film framing: thin top and sides scaled by the shorter side,
    /// deep bottom margin scaled by height.
    pub fn instant() -> Self {
        let thin = side(INSTANT_THIN_RATIO, RatioBasis::ShorterSide);
        Self {
            top: thin,
            bottom: side(INSTANT_THICK_RATIO, RatioBasis::Height),
            left: thin,
            right: thin,
        }
    }

    pub fn gallery() -> Self {
        Self {
            top: side(GALLERY_TOP_RATIO, RatioBasis::Height),
            bottom: side(GALLERY_BOTTOM_RATIO, RatioBasis::Height),
            left: side(GALLERY_SIDE_RATIO, RatioBasis::Width),
            right: side(GALLERY_SIDE_RATIO, RatioBasis::Width),
        }
    }

    /// Equal borders on every side, independent of aspect ratio.
    pub fn uniform() -> Self {
        let s = side(UNIFORM_RATIO, RatioBasis::ShorterSide);
        Self {
            top: s,
            bottom: s,
            left: s,
            right: s,
        }
    }

    pub fn with_top(mut self, ratio: f64) -> Result<Self, FrameError> {
        self.top = BorderSide::new(ratio, self.top.basis)?;
        Ok(self)
    }

    pub fn with_bottom(mut self, ratio: f64) -> Result<Self, FrameError> {
        self.bottom = BorderSide::new(ratio, self.bottom.basis)?;
        Ok(self)
    }

    pub fn with_left(mut self, ratio: f64) -> Result<Self, FrameError> {
        self.left = BorderSide::new(ratio, self.left.basis)?;
        Ok(self)
    }

    pub fn with_right(mut self, ratio: f64) -> Result<Self, FrameError> {
        self.right = BorderSide::new(ratio, self.right.basis)?;
        Ok(self)
    }

    /// Rebases the left and right borders, keeping their ratios.
    pub fn with_side_basis(mut self, basis: RatioBasis) -> Self {
        self.left.basis = basis;
        self.right.basis = basis;
        self
    }
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self::instant()
    }
}

// Preset ratios are compile-time constants known to be valid.
fn side(ratio: f64, basis: RatioBasis) -> BorderSide {
    BorderSide { ratio, basis }
}
