//! Color string parsing, conversion and palette arithmetic.
//!
//! Surfaces hand us colors as strings, either `#RGB`/`#RRGGBB` hex or
//! `rgb(r,g,b)` / `rgba(r,g,b,a)`. Internally everything is normalized to an
//! `[u8; 3]` channel triple for arithmetic and re-serialized on the way out.
//! Classification is explicit ([`ColorFormat`]) and consumed via exhaustive
//! matching; strings that fit neither grammar fail with a typed
//! [`ColorParseError`] rather than decoding to garbage.

use crate::error::ColorParseError;

/// RGB channel triple, 0–255 per channel.
pub type Rgb = [u8; 3];

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Recognized color string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `rgb(r,g,b)` or `rgba(r,g,b,a)`.
    Rgb,
    /// Anything else.
    Unknown,
}

/// Classify a color string. Pure and total.
pub fn classify(color: &str) -> ColorFormat {
    if is_hex(color) {
        ColorFormat::Hex
    } else if is_rgb(color) {
        ColorFormat::Rgb
    } else {
        ColorFormat::Unknown
    }
}

fn is_hex(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_channel(s: &str) -> bool {
    (1..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

// Alpha literal grammar: `0`, `1`, or a fraction `0?.d+`.
fn is_alpha_literal(s: &str) -> bool {
    match s {
        "0" | "1" => true,
        _ => {
            let frac = s.strip_prefix("0.").or_else(|| s.strip_prefix('.'));
            matches!(frac, Some(d) if !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        }
    }
}

fn is_rgb(s: &str) -> bool {
    let Some(body) = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))
        .and_then(|r| r.strip_prefix('('))
        .and_then(|r| r.strip_suffix(')'))
    else {
        return false;
    };
    let mut parts = body.split(',');
    // First channel: no leading whitespace allowed.
    if !parts.next().is_some_and(is_channel) {
        return false;
    }
    for _ in 0..2 {
        if !parts.next().is_some_and(|p| is_channel(p.trim_start())) {
            return false;
        }
    }
    match parts.next() {
        None => true,
        Some(alpha) => is_alpha_literal(alpha.trim_start()) && parts.next().is_none(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a hex color into its channel triple.
///
/// Accepts `#RRGGBB` and shorthand `#RGB` (digits doubled), with or without
/// the leading `#`. Anything else fails.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(hex));
    }
    let expanded;
    let digits = match digits.len() {
        6 => digits,
        3 => {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            &expanded
        }
        _ => return Err(ColorParseError::new(hex)),
    };
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
            .map_err(|_| ColorParseError::new(hex))?;
    }
    Ok(rgb)
}

/// Serialize a channel triple as uppercase `#RRGGBB` (always 7 characters,
/// channels zero-padded).
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb;
    let packed = u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b);
    format!("#{packed:06X}")
}

/// Serialize a channel triple as `rgb(r,g,b)` (no alpha).
pub fn rgb_to_string(rgb: Rgb) -> String {
    let [r, g, b] = rgb;
    format!("rgb({r},{g},{b})")
}

/// Serialize a channel triple plus opacity as `rgba(r,g,b,a)`.
pub fn rgba_string(rgb: Rgb, alpha: f64) -> String {
    let [r, g, b] = rgb;
    format!("rgba({r},{g},{b},{alpha})")
}

/// Lenient rgb(a) channel extraction.
///
/// Unlike [`classify`], this accepts any digit run per channel and any
/// numeric alpha. An absent alpha is surfaced as `None`, never defaulted.
/// Hex strings do not match; convert them with [`hex_to_rgb`] /
/// [`rgb_to_string`] first.
pub fn parse_channels(color: &str) -> Result<(Rgb, Option<f64>), ColorParseError> {
    let err = || ColorParseError::new(color);
    let body = color
        .strip_prefix("rgba")
        .or_else(|| color.strip_prefix("rgb"))
        .and_then(|r| r.strip_prefix('('))
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(err)?;
    let mut parts = body.split(',').map(str::trim);
    let mut rgb = [0u8; 3];
    for channel in &mut rgb {
        let field = parts.next().ok_or_else(err)?;
        *channel = field.parse().map_err(|_| err())?;
    }
    let alpha = match parts.next() {
        None | Some("") => None,
        Some(field) => Some(field.parse::<f64>().map_err(|_| err())?),
    };
    if parts.next().is_some() {
        return Err(err());
    }
    Ok((rgb, alpha))
}

// ─────────────────────────────────────────────────────────────────────────────
// Chroma / gradient
// ─────────────────────────────────────────────────────────────────────────────

/// Darkest chroma level: blends toward black.
pub const CHROMA_DARK: u8 = 0;
/// Lightest chroma level: blends toward white.
pub const CHROMA_LIGHT: u8 = 5;

/// Blend a color toward a gray ramp value.
///
/// `level` runs 0–5; each channel becomes `round((channel + level*51) / 2)`
/// (51 = 255/5). Level 0 darkens, level 5 lightens. Levels above 5 saturate.
pub fn adjust_chroma(rgb: Rgb, level: u8) -> Rgb {
    let mix = f64::from(level.min(CHROMA_LIGHT)) * 51.0;
    rgb.map(|c| ((f64::from(c) + mix) / 2.0).round() as u8)
}

/// Light/dark gradient pair derived from one base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    /// Base blended toward white (chroma level 5).
    pub min_color: String,
    /// Base blended toward black (chroma level 0).
    pub max_color: String,
}

/// Derive a [`Gradient`] from a base hex color.
pub fn simple_gradient(hex: &str) -> Result<Gradient, ColorParseError> {
    let rgb = hex_to_rgb(hex)?;
    Ok(Gradient {
        min_color: rgb_to_hex(adjust_chroma(rgb, CHROMA_LIGHT)),
        max_color: rgb_to_hex(adjust_chroma(rgb, CHROMA_DARK)),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette reordering
// ─────────────────────────────────────────────────────────────────────────────

/// Reorder a palette so even-indexed entries come first, then odd-indexed,
/// each keeping their relative order.
///
/// Length-preserving. Cyclic assignment over the result keeps adjacent
/// categories visually distinct.
pub fn interleave<T: Clone>(colors: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(colors.len());
    out.extend(colors.iter().step_by(2).cloned());
    out.extend(colors.iter().skip(1).step_by(2).cloned());
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_hex() {
        assert_eq!(classify("#1A2B3C"), ColorFormat::Hex);
        assert_eq!(classify("#abc"), ColorFormat::Hex);
        assert_eq!(classify("#ABCDEF"), ColorFormat::Hex);
    }

    #[test]
    fn classify_recognizes_rgb_and_rgba() {
        assert_eq!(classify("rgb(1,2,3)"), ColorFormat::Rgb);
        assert_eq!(classify("rgb(255, 127, 0)"), ColorFormat::Rgb);
        assert_eq!(classify("rgba(1,2,3,0.5)"), ColorFormat::Rgb);
        assert_eq!(classify("rgba(1,2,3, .5)"), ColorFormat::Rgb);
        assert_eq!(classify("rgba(1,2,3,0)"), ColorFormat::Rgb);
        assert_eq!(classify("rgba(1,2,3,1)"), ColorFormat::Rgb);
    }

    #[test]
    fn classify_rejects_everything_else() {
        assert_eq!(classify(""), ColorFormat::Unknown);
        assert_eq!(classify("#12"), ColorFormat::Unknown);
        assert_eq!(classify("#12345"), ColorFormat::Unknown);
        assert_eq!(classify("#GGGGGG"), ColorFormat::Unknown);
        assert_eq!(classify("rgb(1,2)"), ColorFormat::Unknown);
        assert_eq!(classify("rgb(1,2,3,4,5)"), ColorFormat::Unknown);
        assert_eq!(classify("rgb(1234,2,3)"), ColorFormat::Unknown);
        assert_eq!(classify("rebeccapurple"), ColorFormat::Unknown);
        assert_eq!(classify("rgb(1,2,3"), ColorFormat::Unknown);
    }

    #[test]
    fn hex_round_trips_through_rgb() {
        for hex in ["#000000", "#FFFFFF", "#1A2B3C", "#D62728", "#0A0B0C"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()), hex.to_uppercase());
        }
        // Lowercase input round-trips to the uppercase form.
        assert_eq!(rgb_to_hex(hex_to_rgb("#1a2b3c").unwrap()), "#1A2B3C");
    }

    #[test]
    fn hex_shorthand_expands() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), [0xAA, 0xBB, 0xCC]);
        assert_eq!(hex_to_rgb("fff").unwrap(), [255, 255, 255]);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#GGHHII").is_err());
        assert!(hex_to_rgb("rgb(1,2,3)").is_err());
    }

    #[test]
    fn rgb_to_hex_zero_pads_channels() {
        assert_eq!(rgb_to_hex([0, 1, 2]), "#000102");
        assert_eq!(rgb_to_hex([255, 0, 16]), "#FF0010");
    }

    #[test]
    fn parse_channels_with_and_without_alpha() {
        assert_eq!(parse_channels("rgb(1,2,3)").unwrap(), ([1, 2, 3], None));
        assert_eq!(
            parse_channels("rgba(10, 20, 30, 0.5)").unwrap(),
            ([10, 20, 30], Some(0.5))
        );
        assert_eq!(
            parse_channels("rgba(10,20,30,1)").unwrap(),
            ([10, 20, 30], Some(1.0))
        );
    }

    #[test]
    fn parse_channels_fails_loudly() {
        let err = parse_channels("#1A2B3C").unwrap_err();
        assert_eq!(err.color, "#1A2B3C");
        assert!(parse_channels("rgb(1,2)").is_err());
        assert!(parse_channels("rgb(300,2,3)").is_err());
        assert!(parse_channels("not a color").is_err());
    }

    #[test]
    fn chroma_levels_stay_in_range_and_order() {
        for rgb in [[0, 0, 0], [12, 200, 255], [127, 127, 127]] {
            let dark = adjust_chroma(rgb, CHROMA_DARK);
            let light = adjust_chroma(rgb, CHROMA_LIGHT);
            for i in 0..3 {
                assert!(light[i] >= dark[i]);
            }
        }
        // Level 0 halves, level 5 mixes toward white.
        assert_eq!(adjust_chroma([100, 100, 100], CHROMA_DARK), [50, 50, 50]);
        assert_eq!(adjust_chroma([100, 100, 100], CHROMA_LIGHT), [178, 178, 178]);
    }

    #[test]
    fn gradient_matches_chroma_extremes() {
        let g = simple_gradient("#6496C8").unwrap();
        let rgb = hex_to_rgb("#6496C8").unwrap();
        assert_eq!(g.min_color, rgb_to_hex(adjust_chroma(rgb, CHROMA_LIGHT)));
        assert_eq!(g.max_color, rgb_to_hex(adjust_chroma(rgb, CHROMA_DARK)));
    }

    #[test]
    fn interleave_puts_even_indices_first() {
        let colors = ["c0", "c1", "c2", "c3", "c4"];
        assert_eq!(interleave(&colors), ["c0", "c2", "c4", "c1", "c3"]);
        assert_eq!(interleave::<&str>(&[]), Vec::<&str>::new());
        assert_eq!(interleave(&["only"]), ["only"]);
    }

    #[test]
    fn rgba_string_formats_alpha_like_a_number() {
        assert_eq!(rgba_string([1, 2, 3], 0.2), "rgba(1,2,3,0.2)");
        assert_eq!(rgba_string([1, 2, 3], 1.0), "rgba(1,2,3,1)");
    }
}
