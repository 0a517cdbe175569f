/// A straight-alpha RGBA color at 16 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba16(pub [u16; 4]);

impl Rgba16 {
    pub const WHITE: Rgba16 = Rgba16([u16::MAX; 4]);
    pub const BLACK: Rgba16 = Rgba16([0, 0, 0, u16::MAX]);

    /// Parses `RRGGBB` or `RRGGBBAA` (optionally prefixed with `#`), widening
    /// each 8-bit component to 16 bits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None;
        }
        let mut channels = [u16::MAX; 4];
        for (i, slot) in channels.iter_mut().take(hex.len() / 2).enumerate() {
            let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            *slot = widen(byte);
        }
        Some(Rgba16(channels))
    }
}

impl Default for Rgba16 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Maps 0..=255 onto 0..=65535 so that 255 becomes full intensity.
pub fn widen(v: u8) -> u16 {
    v as u16 * 257
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::white("ffffff", Rgba16::WHITE)]
    #[case::hash_prefix("#000000", Rgba16::BLACK)]
    #[case::with_alpha("ff000080", Rgba16([65535, 0, 0, 128 * 257]))]
    #[case::mixed_case("FfFfFf", Rgba16::WHITE)]
    fn test_from_hex_valid(#[case] input: &str, #[case] expected: Rgba16) {
        assert_eq!(Rgba16::from_hex(input), Some(expected));
    }

    #[rstest]
    #[case::too_short("fff")]
    #[case::odd_length("fffffff")]
    #[case::not_hex("gggggg")]
    #[case::empty("")]
    fn test_from_hex_invalid(#[case] input: &str) {
        assert_eq!(Rgba16::from_hex(input), None);
    }

    #[test]
    fn test_widen_endpoints() {
        assert_eq!(widen(0), 0);
        assert_eq!(widen(255), u16::MAX);
    }

    #[test]
    fn test_default_is_opaque_white() {
        assert_eq!(Rgba16::default(), Rgba16::WHITE);
        assert_eq!(Rgba16::default().0[3], u16::MAX);
    }
}
