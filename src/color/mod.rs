//! Accent color handling.
//!
//! The host sends the accent as `"R G B"`. Values are trusted: nothing is
//! clamped or rejected, and a component that does not parse renders as
//! `NaN` in the CSS string instead of failing the update.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One color component as the host sent it.
///
/// `None` is a component that could not be read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel(pub Option<i64>);

impl Channel {
    /// Fully saturated component.
    pub const MAX: Channel = Channel(Some(255));

    /// Reads the leading integer of `raw`.
    ///
    /// Leading whitespace and a single sign are accepted, and parsing stops
    /// at the first non-digit, so `"12px"` reads as 12. No digits at all
    /// yields the not-a-number channel.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let digits_len = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits_len == 0 {
            return Channel(None);
        }

        Channel(trimmed[..sign_len + digits_len].parse().ok())
    }

    /// True when the component did not parse.
    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("NaN"),
        }
    }
}

/// The accent color currently applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorState {
    /// Red component.
    pub r: Channel,
    /// Green component.
    pub g: Channel,
    /// Blue component.
    pub b: Channel,
    /// False only for pure white, the host's "no custom color" value.
    pub is_custom: bool,
}

impl ColorState {
    /// Builds a state from components, deriving `is_custom`.
    pub fn new(r: Channel, g: Channel, b: Channel) -> Self {
        let is_custom = [r, g, b].iter().any(|c| *c != Channel::MAX);
        Self { r, g, b, is_custom }
    }

    /// Parses the host's `"R G B"` value.
    ///
    /// Components are whitespace separated; missing ones are not-a-number.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.split_whitespace().map(Channel::parse);
        let mut next = || parts.next().unwrap_or(Channel(None));
        let (r, g, b) = (next(), next(), next());
        Self::new(r, g, b)
    }

    /// CSS `rgb()` value for the custom color property.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Channel::MAX, Channel::MAX, Channel::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_not_custom() {
        let color = ColorState::parse("255 255 255");

        assert!(!color.is_custom);
        assert_eq!(color, ColorState::default());
        assert_eq!(color.css(), "rgb(255, 255, 255)");
    }

    #[test]
    fn other_colors_are_custom() {
        let color = ColorState::parse("10 20 30");

        assert!(color.is_custom);
        assert_eq!(color.css(), "rgb(10, 20, 30)");
    }

    #[test]
    fn single_off_channel_is_custom() {
        assert!(ColorState::parse("255 255 254").is_custom);
    }

    #[test]
    fn malformed_components_render_nan() {
        let color = ColorState::parse("abc x 255");

        assert!(color.r.is_nan());
        assert!(color.is_custom);
        assert_eq!(color.css(), "rgb(NaN, NaN, 255)");
    }

    #[test]
    fn missing_components_render_nan() {
        assert_eq!(ColorState::parse("12").css(), "rgb(12, NaN, NaN)");
        assert_eq!(ColorState::parse("").css(), "rgb(NaN, NaN, NaN)");
    }

    #[test]
    fn out_of_range_values_pass_through() {
        assert_eq!(ColorState::parse("300 -5 0").css(), "rgb(300, -5, 0)");
    }

    #[test]
    fn channel_reads_leading_integer() {
        assert_eq!(Channel::parse("12px"), Channel(Some(12)));
        assert_eq!(Channel::parse("+7"), Channel(Some(7)));
        assert_eq!(Channel::parse("-"), Channel(None));
        assert_eq!(Channel::parse("1.9"), Channel(Some(1)));
    }
}
