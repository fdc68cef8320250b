//! Hex color conversion for the styled export format.
//!
//! The styled format stores colors as `&HAABBGGRR` with the channel
//! bytes reversed relative to web hex notation. The alpha prefix is
//! fixed at `00` (opaque).

use crate::error::{Result, SubwireError};

/// Convert a `#RRGGBB` hex color to the styled format's `&H00BBGGRR`.
///
/// All channel pairs are upper-cased. Malformed input (wrong length,
/// missing `#`, non-hex characters) is rejected.
pub fn styled_color(hex: &str) -> Result<String> {
    if !is_hex_color(hex) {
        return Err(SubwireError::ExportValidation {
            subject: format!("color {hex:?}"),
            message: "expected a #RRGGBB hex color".to_string(),
        });
    }
    let r = &hex[1..3];
    let g = &hex[3..5];
    let b = &hex[5..7];
    Ok(format!(
        "&H00{}{}{}",
        b.to_ascii_uppercase(),
        g.to_ascii_uppercase(),
        r.to_ascii_uppercase()
    ))
}

/// True if the string is a 7-character `#RRGGBB` hex color.
pub fn is_hex_color(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].chars().all(|c| c.is_ascii_hexdigit())
}
