//! Proportional border framing and seam feathering for photographs.
//!
//! `framing` computes border geometry and composes the canvas, `feathering`
//! softens the photo/border seam, `imaging` holds the codecs, and `pipeline`
//! runs one job per input file across a worker pool.

pub mod feathering;
pub mod framing;
pub mod imaging;
pub mod pipeline;
pub mod shared;
