use clima_core::{FetchError, WeatherReading};

/// City, temperature and icon, one per line.
pub fn render_reading(reading: &WeatherReading) -> String {
    format!(
        "{}\n{}°\n{}",
        reading.city(),
        reading.temperature_celsius(),
        reading.icon_name()
    )
}

pub fn render_error(err: &FetchError) -> String {
    format!("{} ({err})", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_core::LocationError;

    #[test]
    fn renders_three_lines() {
        let reading = WeatherReading::from_kelvin("London".into(), 300.0, 210);

        assert_eq!(render_reading(&reading), "London\n26°\nthunder");
    }

    #[test]
    fn renders_negative_temperature() {
        let reading = WeatherReading::from_kelvin("Oslo".into(), 263.0, 600);

        assert_eq!(render_reading(&reading), "Oslo\n-10°\nsnow");
    }

    #[test]
    fn error_leads_with_user_message() {
        let err = FetchError::MalformedPayload("missing numeric main.temp".into());
        assert!(render_error(&err).starts_with("Weather Unavailable"));

        let err = FetchError::LocationUnavailable(LocationError::NoFix);
        assert!(render_error(&err).starts_with("Location Unavailable"));
    }
}
