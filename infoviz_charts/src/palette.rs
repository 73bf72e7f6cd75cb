// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editorial theme colors and color-token parsing.
//!
//! Renderers only ever see a resolved [`Color`]. Textual tokens from configuration are turned
//! into colors here, at the edge, by [`parse_color_token`].

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use peniko::Color;
use peniko::color::{Srgb, parse_color};

/// The named editorial theme colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    /// `#b2945e`
    Gold,
    /// `#c32026`
    #[default]
    Red,
    /// `#1e293b`
    Navy,
    /// `#065f46`
    Emerald,
    /// `#000000`
    Black,
    /// `#a3e635`
    Chartreuse,
}

impl ThemeColor {
    /// Every theme color, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Gold,
        Self::Red,
        Self::Navy,
        Self::Emerald,
        Self::Black,
        Self::Chartreuse,
    ];

    /// Returns the resolved color.
    pub const fn color(self) -> Color {
        match self {
            Self::Gold => Color::from_rgb8(0xb2, 0x94, 0x5e),
            Self::Red => Color::from_rgb8(0xc3, 0x20, 0x26),
            Self::Navy => Color::from_rgb8(0x1e, 0x29, 0x3b),
            Self::Emerald => Color::from_rgb8(0x06, 0x5f, 0x46),
            Self::Black => Color::from_rgb8(0x00, 0x00, 0x00),
            Self::Chartreuse => Color::from_rgb8(0xa3, 0xe6, 0x35),
        }
    }

    /// Returns the configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Red => "red",
            Self::Navy => "navy",
            Self::Emerald => "emerald",
            Self::Black => "black",
            Self::Chartreuse => "chartreuse",
        }
    }

    /// Looks a theme color up by name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        value.color()
    }
}

/// A color token that could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTokenError {
    /// The offending token, as given.
    pub token: String,
}

impl fmt::Display for ColorTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color token `{}`", self.token)
    }
}

impl core::error::Error for ColorTokenError {}

/// Resolves a configuration color token.
///
/// Theme names (`"navy"`) win over CSS names, so `"gold"` and `"red"` mean the editorial
/// shades. Anything else goes through CSS color parsing (`"#c32026"`, `"rgb(0 0 0)"`,
/// `"tomato"`).
pub fn parse_color_token(token: &str) -> Result<Color, ColorTokenError> {
    if let Some(theme) = ThemeColor::from_name(token) {
        return Ok(theme.color());
    }
    parse_color(token.trim())
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| ColorTokenError {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn theme_names_resolve_to_editorial_shades() {
        assert_eq!(parse_color_token("red"), Ok(ThemeColor::Red.color()));
        assert_eq!(parse_color_token(" Navy "), Ok(ThemeColor::Navy.color()));
        assert_eq!(
            ThemeColor::Chartreuse.color().to_rgba8().to_u8_array(),
            [0xa3, 0xe6, 0x35, 0xff]
        );
        for c in ThemeColor::ALL {
            assert_eq!(ThemeColor::from_name(c.name()), Some(c));
        }
    }

    #[test]
    fn hex_tokens_parse() {
        let c = parse_color_token("#c32026").unwrap();
        assert_eq!(c.to_rgba8().to_u8_array(), [0xc3, 0x20, 0x26, 0xff]);
    }

    #[test]
    fn unknown_tokens_report_the_input() {
        let err = parse_color_token("not-a-color").unwrap_err();
        assert_eq!(err.token, "not-a-color");
        assert_eq!(err.to_string(), "unrecognized color token `not-a-color`");
    }
}
