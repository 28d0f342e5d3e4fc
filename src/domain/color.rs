//! Hex color strings -> packed pixels for the render buffer.

/// Opaque black, packed.
pub const FALLBACK_COLOR: u32 = 0xFF00_0000;

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into a pixel packed as
/// `(a << 24) | (b << 16) | (g << 8) | r`, i.e. RGBA byte order in memory.
///
/// Returns `None` for anything else; callers fall back to [`FALLBACK_COLOR`].
pub fn parse_hex_color(color: &str) -> Option<u32> {
    let hex = color.strip_prefix('#')?;
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    let (r, g, b, a) = match digits.len() {
        3 => (digits[0] * 17, digits[1] * 17, digits[2] * 17, 0xFF),
        6 => (
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
            0xFF,
        ),
        8 => (
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
            digits[6] << 4 | digits[7],
        ),
        _ => return None,
    };

    Some(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
}

pub fn packed_color(color: &str) -> u32 {
    parse_hex_color(color).unwrap_or(FALLBACK_COLOR)
}
