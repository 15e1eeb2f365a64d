//! Mapping from provider condition codes to icon names.
//!
//! Codes follow the OpenWeatherMap condition groups
//! (see <https://openweathermap.org/weather-conditions>).

use std::ops::RangeInclusive;

pub const DEFAULT_ICON: &str = "default";

/// Ordered code ranges; the first range containing a code wins.
pub const CONDITION_ICONS: &[(RangeInclusive<i32>, &str)] = &[
    (200..=232, "thunder"),
    (300..=321, "drizzle"),
    (500..=531, "rain"),
    (600..=622, "snow"),
    (701..=781, "fog"),
    (800..=800, "clear"),
    (801..=804, "cloudy"),
];

pub fn icon_for_condition(code: i32) -> &'static str {
    CONDITION_ICONS
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(icon_for_condition(800), "clear");
        assert_eq!(icon_for_condition(210), "thunder");
        assert_eq!(icon_for_condition(999), "default");
    }

    #[test]
    fn range_boundaries() {
        let cases = [
            (199, "default"),
            (200, "thunder"),
            (232, "thunder"),
            (233, "default"),
            (300, "drizzle"),
            (321, "drizzle"),
            (500, "rain"),
            (531, "rain"),
            (600, "snow"),
            (622, "snow"),
            (700, "default"),
            (701, "fog"),
            (781, "fog"),
            (801, "cloudy"),
            (804, "cloudy"),
            (805, "default"),
        ];

        for (code, icon) in cases {
            assert_eq!(icon_for_condition(code), icon, "code {code}");
        }
    }

    #[test]
    fn missing_code_falls_back() {
        assert_eq!(icon_for_condition(0), DEFAULT_ICON);
        assert_eq!(icon_for_condition(-1), DEFAULT_ICON);
    }
}
