//! Row alignment policy.
//!
//! Gravity is a pair of independent axis choices. An axis that is not named
//! keeps its default (`Start` horizontally, `Top` vertically).
//!
//! # Example
//!
//! ```
//! use rating_layout::gravity::*;
//!
//! let g: Gravity = "end|bottom".parse().unwrap();
//! assert_eq!(g, Gravity::new(HorizontalGravity::End, VerticalGravity::Bottom));
//!
//! // Only the vertical axis is named; horizontal stays at Start.
//! let g: Gravity = "center_vertical".parse().unwrap();
//! assert_eq!(g.horizontal, HorizontalGravity::Start);
//! assert_eq!(g.vertical, VerticalGravity::Center);
//! ```

use core::str::FromStr;

/// Horizontal placement of each row inside the padded content box.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HorizontalGravity {
    /// Rows start at the left padding edge.
    #[default]
    Start,
    /// Each row is centred on its own star span.
    Center,
    /// Rows end at the right padding edge.
    End,
}

/// Vertical placement of the whole block of rows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VerticalGravity {
    /// First row at the top padding edge.
    #[default]
    Top,
    /// Row block centred between top and bottom padding.
    Center,
    /// Last row at the bottom padding edge.
    Bottom,
}

/// Combined alignment policy for both axes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Gravity {
    /// Horizontal axis policy.
    pub horizontal: HorizontalGravity,
    /// Vertical axis policy.
    pub vertical: VerticalGravity,
}

impl Gravity {
    /// Start / Top.
    pub const START: Self = Self::new(HorizontalGravity::Start, VerticalGravity::Top);

    /// Centred on both axes.
    pub const CENTER: Self = Self::new(HorizontalGravity::Center, VerticalGravity::Center);

    /// End / Bottom.
    pub const END: Self = Self::new(HorizontalGravity::End, VerticalGravity::Bottom);

    /// Creates a gravity from explicit axis values.
    pub const fn new(horizontal: HorizontalGravity, vertical: VerticalGravity) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Replaces the horizontal axis.
    pub const fn with_horizontal(mut self, horizontal: HorizontalGravity) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Replaces the vertical axis.
    pub const fn with_vertical(mut self, vertical: VerticalGravity) -> Self {
        self.vertical = vertical;
        self
    }
}

/// Error returned when a gravity string contains an unknown token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseGravityError;

#[cfg(feature = "std")]
impl std::error::Error for ParseGravityError {}

impl core::fmt::Display for ParseGravityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown gravity token (expected start, end, left, right, top, bottom, \
             center, center_horizontal or center_vertical)"
        )
    }
}

impl FromStr for Gravity {
    type Err = ParseGravityError;

    /// Parses `|`-separated tokens. Later tokens override earlier ones on the
    /// same axis; `center` sets both axes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut gravity = Self::default();

        for token in s.split('|').map(str::trim).filter(|t| !t.is_empty()) {
            gravity = match parse_token(token).ok_or(ParseGravityError)? {
                Token::Start => gravity.with_horizontal(HorizontalGravity::Start),
                Token::End => gravity.with_horizontal(HorizontalGravity::End),
                Token::CenterHorizontal => gravity.with_horizontal(HorizontalGravity::Center),
                Token::Top => gravity.with_vertical(VerticalGravity::Top),
                Token::Bottom => gravity.with_vertical(VerticalGravity::Bottom),
                Token::CenterVertical => gravity.with_vertical(VerticalGravity::Center),
                Token::Center => Self::CENTER,
            };
        }

        Ok(gravity)
    }
}

enum Token {
    Start,
    End,
    CenterHorizontal,
    Top,
    Bottom,
    CenterVertical,
    Center,
}

fn parse_token(token: &str) -> Option<Token> {
    const TABLE: [(&str, Token); 9] = [
        ("start", Token::Start),
        ("left", Token::Start),
        ("end", Token::End),
        ("right", Token::End),
        ("center_horizontal", Token::CenterHorizontal),
        ("top", Token::Top),
        ("bottom", Token::Bottom),
        ("center_vertical", Token::CenterVertical),
        ("center", Token::Center),
    ];

    TABLE
        .into_iter()
        .find(|(name, _)| token.eq_ignore_ascii_case(name))
        .map(|(_, token)| token)
}
