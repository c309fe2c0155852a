//! Hex color values for tags and text foregrounds.
//!
//! Colors enter the system from a color prompt and are carried around as
//! values, compared structurally, and rendered by the UI layer. The
//! canonical textual form is lowercase `#rrggbb`; parsing accepts either
//! case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An RGB color in `#rrggbb` form.
///
/// Serializes as its canonical display string, so a `Tag` round-trips
/// through JSON with the color as a plain `"#rrggbb"` value.
///
/// # Examples
///
/// ```
/// use delo_model::HexColor;
///
/// let red: HexColor = "#FF0000".parse().unwrap();
/// assert_eq!(red, HexColor::new(0xff, 0, 0));
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Creates a color from its RGB components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the `(r, g, b)` components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ModelError;

    /// Parses `#rrggbb` (case-insensitive). Anything else, including
    /// shorthand `#rgb` or a missing `#`, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidColor {
            input: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let component =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
