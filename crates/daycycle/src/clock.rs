//! Clock seam for anything that reads the current hour.
//!
//! Components never call the system clock directly; they take a
//! [`Clock`] so tests can pin the hour and scenario runs stay
//! deterministic.

use chrono::Timelike;

use crate::{palette_for, DomainError, Palette, TimeOfDay};

/// Source of the current local hour.
pub trait Clock {
    /// Hour of day in 0-23.
    fn local_hour(&self) -> u32;
}

/// Real local time via [`chrono::Local`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock pinned to one hour, for tests and the `--time-of-day`
/// override.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0
    }
}

/// Read the clock and return the palette for the current segment.
///
/// # Errors
///
/// Rejects clocks that report an hour above 23.
pub fn current_palette(clock: &dyn Clock) -> Result<Palette, DomainError> {
    Ok(palette_for(TimeOfDay::from_hour(clock.local_hour())?))
}

/// Read the clock and return the current segment.
///
/// # Errors
///
/// Rejects clocks that report an hour above 23.
pub fn current_time_of_day(clock: &dyn Clock) -> Result<TimeOfDay, DomainError> {
    TimeOfDay::from_hour(clock.local_hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_hour() {
        assert_eq!(FixedClock(9).local_hour(), 9);
        assert_eq!(current_time_of_day(&FixedClock(9)), Ok(TimeOfDay::Morning));
    }

    #[test]
    fn current_palette_composes_lookup_with_the_clock() {
        assert_eq!(
            current_palette(&FixedClock(9)),
            Ok(palette_for(TimeOfDay::Morning))
        );
        assert_eq!(
            current_palette(&FixedClock(23)),
            Ok(palette_for(TimeOfDay::Night))
        );
    }

    #[test]
    fn rogue_clock_is_rejected() {
        assert_eq!(
            current_palette(&FixedClock(24)),
            Err(DomainError::HourOutOfRange { hour: 24 })
        );
    }

    #[test]
    fn system_clock_stays_in_range() {
        // chrono guarantees 0-23 but the contract matters enough to pin.
        assert!(SystemClock.local_hour() < 24);
    }
}
