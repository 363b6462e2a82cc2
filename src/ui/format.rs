//! Number formatting for the sidebar.

use crate::i18n::{Locale, format_integer, format_number};

/// Energy with a unit that keeps the mantissa readable.
pub fn energy(locale: Locale, megatons: f64) -> String {
    if megatons < 1e-3 {
        format!("{} t TNT", format_number(locale, megatons * 1e6, 1))
    } else if megatons < 1.0 {
        format!("{} kt TNT", format_number(locale, megatons * 1e3, 1))
    } else if megatons < 1e3 {
        format!("{} Mt TNT", format_number(locale, megatons, 2))
    } else {
        format!("{} Gt TNT", format_number(locale, megatons / 1e3, 2))
    }
}

/// Distance in km, switching to meters below one kilometer.
pub fn distance_km(locale: Locale, km: f64) -> String {
    if km < 1.0 {
        format!("{} m", format_number(locale, km * 1000.0, 0))
    } else {
        format!("{} km", format_number(locale, km, 1))
    }
}

pub fn meters(locale: Locale, m: f64) -> String {
    format!("{} m", format_number(locale, m, 1))
}

pub fn velocity(locale: Locale, km_s: f64) -> String {
    format!("{} km/s", format_number(locale, km_s, 1))
}

pub fn magnitude(locale: Locale, m: f64) -> String {
    format_number(locale, m, 1)
}

/// Head count, rounded to a sensible precision for an estimate.
pub fn population(locale: Locale, people: u64) -> String {
    let rounded = match people {
        0..=999 => people,
        1_000..=999_999 => (people + 50) / 100 * 100,
        _ => (people + 5_000) / 10_000 * 10_000,
    };
    format_integer(locale, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_units() {
        assert_eq!(energy(Locale::En, 0.0005), "500.0 t TNT");
        assert_eq!(energy(Locale::En, 0.5), "500.0 kt TNT");
        assert_eq!(energy(Locale::En, 12.346), "12.35 Mt TNT");
        assert_eq!(energy(Locale::En, 75_000_000.0), "75,000.00 Gt TNT");
    }

    #[test]
    fn test_distance_switches_to_meters() {
        assert_eq!(distance_km(Locale::En, 0.25), "250 m");
        assert_eq!(distance_km(Locale::Es, 1234.5), "1.234,5 km");
    }

    #[test]
    fn test_population_rounding() {
        assert_eq!(population(Locale::En, 999), "999");
        assert_eq!(population(Locale::En, 123_456), "123,500");
        assert_eq!(population(Locale::En, 12_345_678), "12,350,000");
    }
}
