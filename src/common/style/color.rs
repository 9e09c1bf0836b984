use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use ave_docgen::common::RGBColor;
///
/// let brand = RGBColor::new(128, 4, 0);
/// assert_eq!(brand.to_hex(), "800400");
///
/// let blue = RGBColor::from_hex("#003366").unwrap();
/// assert_eq!(blue, RGBColor::new(0, 51, 102));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string such as `"C80000"` or `"#C80000"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string without the `#` prefix, the form
    /// WordprocessingML and DrawingML expect in `val` attributes.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let red = RGBColor::new(200, 0, 0);
        assert_eq!(red.to_hex(), "C80000");
        assert_eq!(RGBColor::from_hex("c80000"), Some(red));
        assert_eq!(red.to_string(), "#C80000");
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(RGBColor::from_hex("12345"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ééé"), None);
    }
}
