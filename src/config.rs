// Run configuration, captured once at startup and immutable afterwards.
// The per-tick ripple state lives in `ripple`; nothing here changes mid-run,
// which is what keeps the tick function pure and testable on its own.

use crate::error::Error;

/// Everything the animation needs to know, validated before the loop starts.
#[derive(Clone, Copy, Debug)]
pub struct RippleConfig {
    pub color: u32,        // ring color as 0x00RRGGBB
    pub speed: f32,        // radius gained per tick, pixels
    pub density: f32,      // minimum radius gap between spawned rings, pixels
    pub stroke_width: f32, // stroke thickness at radius 0, pixels
    pub fill: bool,        // filled discs instead of stroke rings
    pub fade: bool,        // alpha falloff as rings near the rim
}

impl RippleConfig {
    /// Reject degenerate values up front rather than clamping them; a clamped
    /// zero speed or density would just animate nothing, silently.
    pub fn validate(&self) -> Result<(), Error> {
        require_positive("speed", self.speed)?;
        require_positive("density", self.density)?;
        require_positive("stroke width", self.stroke_width)?;
        Ok(())
    }
}

/// Shared guard for numeric parameters: finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f32) -> Result<(), Error> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Config(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

/// Parse an `RRGGBB` hex color, leading `#` optional.
pub fn parse_color(input: &str) -> Result<u32, Error> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 {
        return Err(Error::Config(format!(
            "color must be 6 hex digits (RRGGBB), got {input:?}"
        )));
    }
    u32::from_str_radix(hex, 16)
        .map_err(|e| Error::Config(format!("color {input:?} is not valid hex: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config() -> RippleConfig {
        RippleConfig {
            color: 0x00AAEE,
            speed: 2.0,
            density: 24.0,
            stroke_width: 8.0,
            fill: false,
            fade: true,
        }
    }

    #[rstest]
    #[case("00AAEE", 0x00AAEE)]
    #[case("#ff0000", 0xFF0000)]
    #[case("FFFFFF", 0xFFFFFF)]
    fn parses_hex_colors(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_color(input).unwrap(), expected);
    }

    #[rstest]
    #[case("aee")]      // too short
    #[case("00AAEEFF")] // too long
    #[case("zzzzzz")]   // not hex
    fn rejects_malformed_colors(#[case] input: &str) {
        assert!(matches!(parse_color(input), Err(Error::Config(_))));
    }

    #[test]
    fn accepts_sane_configuration() {
        assert!(config().validate().is_ok());
    }

    #[rstest]
    #[case(RippleConfig { speed: 0.0, ..config() })]
    #[case(RippleConfig { density: -1.0, ..config() })]
    #[case(RippleConfig { stroke_width: 0.0, ..config() })]
    #[case(RippleConfig { speed: f32::INFINITY, ..config() })]
    fn rejects_degenerate_configuration(#[case] cfg: RippleConfig) {
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }
}
