use crate::feathering::domain::feather_spec::FeatherSpec;
use crate::framing::domain::border_spec::BorderSpec;
use crate::imaging::domain::image_writer::EncodeOptions;
use crate::shared::color::Rgba16;
use crate::shared::constants::DEFAULT_OUTPUT_MARKER;

/// Everything a framing job needs to know, fixed for the whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameConfig {
    pub borders: BorderSpec,
    pub feather: FeatherSpec,
    pub background: Rgba16,
    pub encode: EncodeOptions,
    pub marker: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            borders: BorderSpec::default(),
            feather: FeatherSpec::default(),
            background: Rgba16::WHITE,
            encode: EncodeOptions::default(),
            marker: DEFAULT_OUTPUT_MARKER.to_string(),
        }
    }
}
