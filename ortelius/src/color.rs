//! Validation of user supplied colors.

use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RGB_FORMAT: Regex =
        Regex::new(r"^rgb\((\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})\)$").expect("invalid color regex");
}

/// A color in the `rgb(r, g, b)` form.
///
/// This is a syntactic gate, not a color model: components are accepted as any
/// 1 to 3 digit number, so values above 255 pass through unchanged and are left
/// for the rendering surface to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    r: u16,
    g: u16,
    b: u16,
}

impl RgbColor {
    /// Constructs the color from its components.
    pub const fn rgb(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from a `rgb(r, g, b)` string.
    ///
    /// The string must match the form exactly: lowercase `rgb`, no spaces
    /// before the opening parenthesis, optional whitespace after each comma and
    /// nothing around the expression.
    ///
    /// ```
    /// use ortelius::RgbColor;
    ///
    /// let color = RgbColor::try_from_css("rgb(0, 122, 135)").expect("valid color");
    /// assert_eq!(color.to_css(), "rgb(0, 122, 135)");
    ///
    /// assert!(RgbColor::try_from_css("red").is_none());
    /// ```
    pub fn try_from_css(value: &str) -> Option<Self> {
        let captures = RGB_FORMAT.captures(value)?;
        let r = captures.get(1)?.as_str().parse().ok()?;
        let g = captures.get(2)?.as_str().parse().ok()?;
        let b = captures.get(3)?.as_str().parse().ok()?;

        Some(Self { r, g, b })
    }

    /// Renders the color back into the canonical `rgb(r, g, b)` string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Red component.
    pub fn r(&self) -> u16 {
        self.r
    }

    /// Green component.
    pub fn g(&self) -> u16 {
        self.g
    }

    /// Blue component.
    pub fn b(&self) -> u16 {
        self.b
    }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_canonical_form() {
        let color = RgbColor::try_from_css("rgb(255, 0, 122)").expect("valid color");
        assert_eq!(color, RgbColor::rgb(255, 0, 122));
    }

    #[test]
    fn accepts_missing_and_extra_whitespace_after_commas() {
        assert_eq!(
            RgbColor::try_from_css("rgb(1,2,3)"),
            Some(RgbColor::rgb(1, 2, 3))
        );
        assert_eq!(
            RgbColor::try_from_css("rgb(1,  2,   3)"),
            Some(RgbColor::rgb(1, 2, 3))
        );
    }

    #[test]
    fn accepts_any_three_digit_component() {
        // The check is about form, so out of range components pass.
        assert_eq!(
            RgbColor::try_from_css("rgb(999, 999, 999)"),
            Some(RgbColor::rgb(999, 999, 999))
        );
    }

    #[test]
    fn rejects_named_colors() {
        assert_eq!(RgbColor::try_from_css("red"), None);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(RgbColor::try_from_css("rgb(1, 2)"), None);
        assert_eq!(RgbColor::try_from_css("rgb(1, 2, 3, 4)"), None);
    }

    #[test]
    fn rejects_uppercase_function_name() {
        assert_eq!(RgbColor::try_from_css("RGB(1, 2, 3)"), None);
    }

    #[test]
    fn rejects_components_longer_than_three_digits() {
        assert_eq!(RgbColor::try_from_css("rgb(1234, 5, 6)"), None);
    }

    #[test]
    fn rejects_padded_input() {
        assert_eq!(RgbColor::try_from_css(" rgb(1, 2, 3)"), None);
        assert_eq!(RgbColor::try_from_css("rgb(1, 2, 3) "), None);
        assert_eq!(RgbColor::try_from_css("rgb (1, 2, 3)"), None);
    }

    #[test]
    fn renders_canonical_css() {
        let color = RgbColor::try_from_css("rgb(0,122,135)").expect("valid color");
        assert_eq!(color.to_css(), "rgb(0, 122, 135)");
    }
}
