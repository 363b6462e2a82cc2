//! Static country table and affected-population estimates.
//!
//! Density is the country-wide average (population / area). The affected
//! population is that density spread over the devastation disc, which is
//! crude but matches what a country-level table can support.

/// A row of the country table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    pub name: &'static str,
    pub population: u64,
    /// Total area in km².
    pub area_km2: f64,
}

impl Country {
    /// People per km².
    pub fn density(&self) -> f64 {
        if self.area_km2 <= 0.0 {
            return 0.0;
        }
        self.population as f64 / self.area_km2
    }
}

const fn c(code: &'static str, name: &'static str, population: u64, area_km2: f64) -> Country {
    Country {
        code,
        name,
        population,
        area_km2,
    }
}

/// Population and area by country (2023 estimates, rounded).
pub static COUNTRIES: &[Country] = &[
    c("AR", "Argentina", 46_650_000, 2_780_400.0),
    c("AU", "Australia", 26_640_000, 7_692_024.0),
    c("AT", "Austria", 9_130_000, 83_879.0),
    c("BD", "Bangladesh", 172_950_000, 147_570.0),
    c("BE", "Belgium", 11_820_000, 30_689.0),
    c("BO", "Bolivia", 12_390_000, 1_098_581.0),
    c("BR", "Brazil", 216_420_000, 8_515_767.0),
    c("CA", "Canada", 40_100_000, 9_984_670.0),
    c("CL", "Chile", 19_630_000, 756_102.0),
    c("CN", "China", 1_410_710_000, 9_596_961.0),
    c("CO", "Colombia", 52_090_000, 1_141_748.0),
    c("CD", "DR Congo", 102_260_000, 2_344_858.0),
    c("CZ", "Czechia", 10_870_000, 78_871.0),
    c("DK", "Denmark", 5_950_000, 42_933.0),
    c("DZ", "Algeria", 45_610_000, 2_381_741.0),
    c("EG", "Egypt", 112_720_000, 1_002_450.0),
    c("ES", "Spain", 48_370_000, 505_990.0),
    c("ET", "Ethiopia", 126_530_000, 1_104_300.0),
    c("FI", "Finland", 5_580_000, 338_455.0),
    c("FR", "France", 68_170_000, 643_801.0),
    c("DE", "Germany", 84_480_000, 357_588.0),
    c("GB", "United Kingdom", 68_350_000, 243_610.0),
    c("GH", "Ghana", 34_120_000, 238_533.0),
    c("GR", "Greece", 10_360_000, 131_957.0),
    c("ID", "Indonesia", 277_530_000, 1_904_569.0),
    c("IN", "India", 1_428_630_000, 3_287_263.0),
    c("IR", "Iran", 89_170_000, 1_648_195.0),
    c("IQ", "Iraq", 45_500_000, 438_317.0),
    c("IE", "Ireland", 5_260_000, 70_273.0),
    c("IL", "Israel", 9_750_000, 22_145.0),
    c("IT", "Italy", 58_870_000, 301_340.0),
    c("JP", "Japan", 124_520_000, 377_975.0),
    c("KE", "Kenya", 55_100_000, 580_367.0),
    c("KR", "South Korea", 51_710_000, 100_210.0),
    c("KZ", "Kazakhstan", 19_900_000, 2_724_900.0),
    c("MA", "Morocco", 37_840_000, 446_550.0),
    c("MG", "Madagascar", 30_330_000, 587_041.0),
    c("MN", "Mongolia", 3_450_000, 1_564_116.0),
    c("MX", "Mexico", 128_460_000, 1_964_375.0),
    c("MY", "Malaysia", 34_310_000, 330_803.0),
    c("NG", "Nigeria", 223_800_000, 923_768.0),
    c("NL", "Netherlands", 17_880_000, 41_850.0),
    c("NO", "Norway", 5_520_000, 385_207.0),
    c("NZ", "New Zealand", 5_220_000, 268_021.0),
    c("PE", "Peru", 34_350_000, 1_285_216.0),
    c("PH", "Philippines", 117_340_000, 300_000.0),
    c("PK", "Pakistan", 240_490_000, 881_913.0),
    c("PL", "Poland", 36_750_000, 312_696.0),
    c("PT", "Portugal", 10_520_000, 92_212.0),
    c("RO", "Romania", 19_050_000, 238_397.0),
    c("RU", "Russia", 143_830_000, 17_098_246.0),
    c("SA", "Saudi Arabia", 36_950_000, 2_149_690.0),
    c("SD", "Sudan", 48_110_000, 1_861_484.0),
    c("SE", "Sweden", 10_550_000, 450_295.0),
    c("SG", "Singapore", 5_920_000, 734.0),
    c("CH", "Switzerland", 8_850_000, 41_285.0),
    c("TH", "Thailand", 71_800_000, 513_120.0),
    c("TR", "Turkey", 85_820_000, 783_562.0),
    c("TZ", "Tanzania", 67_440_000, 945_087.0),
    c("UA", "Ukraine", 36_740_000, 603_550.0),
    c("US", "United States", 334_910_000, 9_833_520.0),
    c("VE", "Venezuela", 28_840_000, 916_445.0),
    c("VN", "Vietnam", 98_860_000, 331_212.0),
    c("ZA", "South Africa", 60_410_000, 1_221_037.0),
];

/// Find a country by ISO code (case-insensitive).
pub fn find_by_code(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}

/// Find a country by name (case-insensitive).
pub fn find_by_name(name: &str) -> Option<&'static Country> {
    let name = name.trim();
    COUNTRIES
        .iter()
        .find(|country| country.name.eq_ignore_ascii_case(name))
}

/// Look up a country by code first, then by name.
pub fn lookup(code: Option<&str>, name: Option<&str>) -> Option<&'static Country> {
    code.and_then(find_by_code)
        .or_else(|| name.and_then(find_by_name))
}

/// Estimated number of people inside a disc of the given radius.
pub fn affected_population(density_per_km2: f64, radius_km: f64) -> u64 {
    if !(density_per_km2.is_finite() && radius_km.is_finite()) {
        return 0;
    }
    let area = std::f64::consts::PI * radius_km.max(0.0).powi(2);
    (density_per_km2.max(0.0) * area).round() as u64
}

/// Affected population for an impact, given the country under the impact point.
///
/// Open-ocean impacts (no country) affect nobody directly.
pub fn estimate_for_impact(country: Option<&Country>, devastation_radius_km: f64) -> u64 {
    country
        .map(|country| affected_population(country.density(), devastation_radius_km))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_codes_unique() {
        for (i, a) in COUNTRIES.iter().enumerate() {
            for b in &COUNTRIES[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate code {}", a.code);
            }
        }
    }

    #[test]
    fn test_table_sane() {
        for country in COUNTRIES {
            assert_eq!(country.code.len(), 2, "bad code for {}", country.name);
            assert!(country.population > 0);
            assert!(country.area_km2 > 0.0);
        }
    }

    #[test]
    fn test_lookup_by_code_and_name() {
        assert_eq!(find_by_code("fr").map(|c| c.name), Some("France"));
        assert_eq!(find_by_name("germany").map(|c| c.code), Some("DE"));
        assert_eq!(lookup(Some("XX"), Some("Japan")).map(|c| c.code), Some("JP"));
        assert!(lookup(None, None).is_none());
    }

    #[test]
    fn test_density() {
        let country = find_by_code("NL").expect("Netherlands in table");
        assert_relative_eq!(country.density(), 17_880_000.0 / 41_850.0);
    }

    #[test]
    fn test_affected_population_disc() {
        // 100 people/km² over a 10 km disc
        assert_eq!(affected_population(100.0, 10.0), 31_416);
        assert_eq!(affected_population(100.0, 0.0), 0);
        assert_eq!(affected_population(f64::NAN, 10.0), 0);
    }

    #[test]
    fn test_open_ocean_affects_nobody() {
        assert_eq!(estimate_for_impact(None, 100.0), 0);
    }
}
