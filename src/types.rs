//! Core types, physical constants and unit conversions.

use serde::{Deserialize, Serialize};

/// Physical constants (SI units)

/// Bulk density assumed for every impactor (kg/m³), typical of stony asteroids.
pub const IMPACTOR_DENSITY: f64 = 3000.0;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Meters per kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: i64 = 86400;

/// A geographic position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite and inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Returns the same point with longitude wrapped into [-180, 180].
    pub fn wrapped(self) -> Self {
        let mut lng = (self.lng + 180.0).rem_euclid(360.0) - 180.0;
        if lng == -180.0 && self.lng > 0.0 {
            lng = 180.0;
        }
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lng,
        }
    }

    /// Great-circle distance to another point in kilometers (haversine).
    pub fn distance_km(&self, other: &LatLng) -> f64 {
        let phi1 = self.lat * DEG_TO_RAD;
        let phi2 = other.lat * DEG_TO_RAD;
        let d_phi = (other.lat - self.lat) * DEG_TO_RAD;
        let d_lambda = (other.lng - self.lng) * DEG_TO_RAD;

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lng >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.3}°{} {:.3}°{}",
            self.lat.abs(),
            ns,
            self.lng.abs(),
            ew
        )
    }
}

/// Convert km/s to m/s
pub fn km_s_to_m_s(velocity_km_s: f64) -> f64 {
    velocity_km_s * METERS_PER_KM
}

/// Convert joules to megatons of TNT
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

/// A calendar date (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// Today's date according to the system clock (UTC).
    pub fn today() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let unix_now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Self::from_unix_days(unix_now.div_euclid(SECONDS_PER_DAY))
    }

    /// Date for the given number of days since the Unix epoch.
    pub fn from_unix_days(days: i64) -> Self {
        let (year, month, day) = days_to_ymd(days);
        Self { year, month, day }
    }

    /// Days since the Unix epoch.
    pub fn to_unix_days(self) -> i64 {
        ymd_to_days(self.year, self.month, self.day)
    }

    /// The date `days` days later.
    pub fn plus_days(self, days: i64) -> Self {
        Self::from_unix_days(self.to_unix_days() + days)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Convert days since Unix epoch to year, month, day
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Algorithm for Gregorian calendar
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

/// Inverse of `days_to_ymd`.
fn ymd_to_days(year: i32, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let mp = i64::from(if month > 2 { month - 3 } else { month + 9 });
    let day_of_year = (153 * mp + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146097 + day_of_era - 719468
}
