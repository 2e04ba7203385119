//! Day segments and the boundary mappings that select them.
//!
//! The hour partition and the slider partition are the two authoritative
//! mappings of the crate. Both validate their domain and reject
//! out-of-range input instead of clamping; an out-of-range hour or slider
//! position is a caller bug worth surfacing, not a value worth guessing
//! at.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contract violations at the input boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Hour outside 0-23.
    #[error("hour {hour} is outside the valid range 0-23")]
    HourOutOfRange {
        /// The rejected hour.
        hour: u32,
    },
    /// Slider position outside 0-100 or not finite.
    #[error("slider position {value} is outside the valid range 0-100")]
    SliderOutOfRange {
        /// The rejected position.
        value: f64,
    },
}

/// One of the four day segments that drive theme selection.
///
/// Ordered morning < afternoon < evening < night along the slider track;
/// otherwise a categorical tag used for palette lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All segments in slider order.
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Map a wall-clock hour to its segment.
    ///
    /// The partition is half-open: [6,12) morning, [12,18) afternoon,
    /// [18,22) evening, and [22,24) plus [0,6) night. Hour 6 is already
    /// morning, hour 22 already night.
    ///
    /// # Errors
    ///
    /// Rejects hours above 23.
    pub fn from_hour(hour: u32) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::HourOutOfRange { hour });
        }
        Ok(match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        })
    }

    /// Map a slider position to its segment.
    ///
    /// The track splits into quarters with boundary values belonging to
    /// the lower segment: 25.0 is still morning, 50.0 still afternoon.
    ///
    /// # Errors
    ///
    /// Rejects non-finite values and values outside [0,100].
    pub fn from_slider(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DomainError::SliderOutOfRange { value });
        }
        Ok(if value <= 25.0 {
            Self::Morning
        } else if value <= 50.0 {
            Self::Afternoon
        } else if value <= 75.0 {
            Self::Evening
        } else {
            Self::Night
        })
    }

    /// The midpoint of this segment's quarter of the slider track.
    ///
    /// Deliberately not an inverse of [`Self::from_slider`]: choosing a
    /// segment by name snaps the thumb to the middle of its quarter, so
    /// a drag to 3.0 reads back as 12.5 after a round trip.
    #[must_use]
    pub const fn slider_midpoint(self) -> f64 {
        match self {
            Self::Morning => 12.5,
            Self::Afternoon => 37.5,
            Self::Evening => 62.5,
            Self::Night => 87.5,
        }
    }

    /// Lowercase token name, matching the serde form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Capitalized display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    /// Compact glyph for headers and quick-select rows.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Morning => "☀",
            Self::Afternoon => "🌤",
            Self::Evening => "🌅",
            Self::Night => "🌙",
        }
    }

    /// Fixed greeting line for this segment.
    #[must_use]
    pub const fn greeting(self) -> &'static str {
        match self {
            Self::Morning => "Good Morning! ☀️",
            Self::Afternoon => "Good Afternoon! 🌤️",
            Self::Evening => "Good Evening! 🌅",
            Self::Night => "Good Night! 🌙",
        }
    }

    /// Greeting derived straight from an hour.
    ///
    /// Keyed off [`Self::from_hour`], so the greeting partition can never
    /// drift from the theme partition.
    ///
    /// # Errors
    ///
    /// Rejects hours above 23.
    pub fn greeting_for_hour(hour: u32) -> Result<&'static str, DomainError> {
        Ok(Self::from_hour(hour)?.greeting())
    }

    /// Parse a lowercase token name back into a segment.
    #[must_use]
    pub fn parse_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
