//! Configuration errors.
//!
//! A widget mid-configuration (icons not yet assigned, zero width before the
//! first measure) is a normal transient state. The layout pass therefore never
//! returns these errors; it falls back to an empty layout and logs the reason.
//! Hosts that want the reason call `validate()` on the config themselves.

/// Reasons a configuration cannot produce a non-empty layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Icon width or height is zero (icon not resolved yet).
    ZeroIconSize {
        /// Reported icon width.
        width: u32,
        /// Reported icon height.
        height: u32,
    },
    /// Step is zero, negative or not finite.
    InvalidStep,
    /// Maximum rating is negative or not finite.
    InvalidMaxRating,
    /// Padding leaves no horizontal room for content.
    NoContentWidth {
        /// Width offered by the host.
        available: u32,
        /// Left + right padding.
        padding: u32,
    },
    /// More stars than a single pass can hold.
    TooManyStars {
        /// Requested star count.
        requested: u32,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroIconSize { width, height } => {
                write!(f, "icon size {width}x{height} has a zero dimension")
            }
            Self::InvalidStep => write!(f, "rating step must be a positive finite number"),
            Self::InvalidMaxRating => {
                write!(f, "maximum rating must be zero or a positive finite number")
            }
            Self::NoContentWidth { available, padding } => write!(
                f,
                "horizontal padding {padding} leaves no room in available width {available}"
            ),
            Self::TooManyStars { requested } => write!(
                f,
                "star count {requested} exceeds the per-pass limit of {}",
                crate::pass::MAX_STARS
            ),
        }
    }
}
