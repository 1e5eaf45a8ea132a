use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use pptx_fixtures::common::RGBColor;
///
/// // The fill of the rectangle in the conversion-test fixture
/// let green = RGBColor::new(0x70, 0xC0, 0x00);
///
/// // Create from hex string
/// let black = RGBColor::from_hex("000000").unwrap();
/// assert_eq!(black, RGBColor::BLACK);
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
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "FF0000" or "#FF0000")
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

    /// Convert to hex string (without # prefix), upper case as DrawingML
    /// writes it in `a:srgbClr/@val`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pptx_fixtures::common::RGBColor;
    ///
    /// let color = RGBColor::new(0x70, 0xC0, 0x00);
    /// assert_eq!(color.to_hex(), "70C000");
    /// ```
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
    fn test_from_hex_accepts_prefix() {
        assert_eq!(RGBColor::from_hex("#70c000"), Some(RGBColor::new(0x70, 0xC0, 0x00)));
        assert_eq!(RGBColor::from_hex("70C0"), None);
        assert_eq!(RGBColor::from_hex("zz0000"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::BLACK.to_string(), "#000000");
    }
}
