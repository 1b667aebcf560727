//! Percent to native-range scaling for contrast and brightness
//!
//! The display only understands a handful of discrete levels (1-50 for
//! contrast, 1-8 for backlight brightness). Callers think in percent, so
//! every level goes through [`NativeRange::from_percent`]:
//!
//! ```text
//! native = lo + round(percent / 100 * (hi - lo))
//! ```
//!
//! with `percent` clamped to 0..=100 first. Rounding is half-up and done in
//! integer arithmetic so the result is identical on every target.

/// Lowest accepted percent
pub const PERCENT_MIN: i32 = 0;

/// Highest accepted percent
pub const PERCENT_MAX: i32 = 100;

/// Contrast percent applied by `set_contrast_default`
pub const CONTRAST_PERCENT_DEFAULT: i32 = 80;

/// Brightness percent applied by `set_brightness_default`
pub const BRIGHTNESS_PERCENT_DEFAULT: i32 = 15;

/// Inclusive range of values a setting accepts on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NativeRange {
    pub min: u8,
    pub max: u8,
}

/// Native contrast levels
pub const CONTRAST: NativeRange = NativeRange { min: 1, max: 50 };

/// Native backlight levels
pub const BRIGHTNESS: NativeRange = NativeRange { min: 1, max: 8 };

impl NativeRange {
    /// Map a percent onto this range
    ///
    /// Out-of-range percents are clamped, never rejected.
    pub const fn from_percent(&self, percent: i32) -> u8 {
        let percent = if percent < PERCENT_MIN {
            PERCENT_MIN
        } else if percent > PERCENT_MAX {
            PERCENT_MAX
        } else {
            percent
        };

        let span = self.max.saturating_sub(self.min) as i32;
        let scaled = self.min as i32 + (percent * span + PERCENT_MAX / 2) / PERCENT_MAX;

        // Guard the boundaries against rounding
        if scaled < self.min as i32 {
            self.min
        } else if scaled > self.max as i32 {
            self.max
        } else {
            scaled as u8
        }
    }

    /// Check whether a native value is accepted by the device
    pub const fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Contrast level for a percent (1..=50)
pub const fn contrast_from_percent(percent: i32) -> u8 {
    CONTRAST.from_percent(percent)
}

/// Backlight level for a percent (1..=8)
pub const fn brightness_from_percent(percent: i32) -> u8 {
    BRIGHTNESS.from_percent(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contrast_endpoints() {
        assert_eq!(contrast_from_percent(0), 1);
        assert_eq!(contrast_from_percent(100), 50);
    }

    #[test]
    fn test_brightness_endpoints() {
        assert_eq!(brightness_from_percent(0), 1);
        assert_eq!(brightness_from_percent(100), 8);
    }

    #[test]
    fn test_defaults() {
        // 1 + round(0.80 * 49) = 1 + 39
        assert_eq!(contrast_from_percent(CONTRAST_PERCENT_DEFAULT), 40);
        // 1 + round(0.15 * 7) = 1 + 1
        assert_eq!(brightness_from_percent(BRIGHTNESS_PERCENT_DEFAULT), 2);
    }

    #[test]
    fn test_rounds_half_up() {
        // 0.5 * 7 = 3.5
        assert_eq!(brightness_from_percent(50), 5);
        // 0.5 * 49 = 24.5
        assert_eq!(contrast_from_percent(50), 26);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(contrast_from_percent(-10), contrast_from_percent(0));
        assert_eq!(contrast_from_percent(150), contrast_from_percent(100));
        assert_eq!(brightness_from_percent(-10), brightness_from_percent(0));
        assert_eq!(brightness_from_percent(150), brightness_from_percent(100));
        assert_eq!(brightness_from_percent(i32::MIN), 1);
        assert_eq!(brightness_from_percent(i32::MAX), 8);
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let inverted = NativeRange { min: 10, max: 5 };
        assert_eq!(inverted.from_percent(0), 5);
        assert_eq!(inverted.from_percent(50), 5);
        assert_eq!(inverted.from_percent(100), 5);
    }

    proptest! {
        #[test]
        fn contrast_stays_in_native_range(percent in PERCENT_MIN..=PERCENT_MAX) {
            prop_assert!(CONTRAST.contains(contrast_from_percent(percent)));
        }

        #[test]
        fn brightness_stays_in_native_range(percent in PERCENT_MIN..=PERCENT_MAX) {
            prop_assert!(BRIGHTNESS.contains(brightness_from_percent(percent)));
        }

        #[test]
        fn contrast_is_monotonic(a in PERCENT_MIN..=PERCENT_MAX, b in PERCENT_MIN..=PERCENT_MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(contrast_from_percent(lo) <= contrast_from_percent(hi));
        }

        #[test]
        fn brightness_is_monotonic(a in PERCENT_MIN..=PERCENT_MAX, b in PERCENT_MIN..=PERCENT_MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(brightness_from_percent(lo) <= brightness_from_percent(hi));
        }

        #[test]
        fn out_of_range_matches_endpoints(below in i32::MIN..PERCENT_MIN, above in (PERCENT_MAX + 1)..i32::MAX) {
            prop_assert_eq!(contrast_from_percent(below), contrast_from_percent(PERCENT_MIN));
            prop_assert_eq!(contrast_from_percent(above), contrast_from_percent(PERCENT_MAX));
            prop_assert_eq!(brightness_from_percent(below), brightness_from_percent(PERCENT_MIN));
            prop_assert_eq!(brightness_from_percent(above), brightness_from_percent(PERCENT_MAX));
        }
    }
}
