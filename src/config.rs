//! Launch parameters and persisted preferences.
//!
//! Launch parameters come from the command line (clap), with API keys also
//! read from the environment. Preferences are a small JSON file that survives
//! restarts; a missing or corrupt file yields defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::neo::DEMO_API_KEY;
use crate::share::{self, SharedProjectile, SharedState};
use crate::types::LatLng;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preferences file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no home directory to store preferences in")]
    NoHomeDir,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Asteroid impact consequence estimator")]
struct CliArgs {
    /// Impact latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Impact longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Impactor diameter in meters.
    #[arg(long)]
    diameter: Option<f64>,

    /// Impact velocity in km/s.
    #[arg(long)]
    velocity: Option<f64>,

    /// Restore state from a share link.
    #[arg(long)]
    share: Option<String>,

    /// Print a JSON impact report and exit instead of opening a window.
    #[arg(long)]
    report: bool,

    /// Interface language.
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    /// OpenCage reverse-geocoding key. Without one every impact is assumed
    /// to hit water.
    #[arg(long, env = "OPENCAGE_API_KEY", hide_env_values = true)]
    opencage_key: Option<String>,

    /// NASA API key for the near-Earth object feed.
    #[arg(long, env = "NASA_API_KEY", default_value = DEMO_API_KEY, hide_env_values = true)]
    nasa_key: String,

    /// Preferences file.
    #[arg(long)]
    prefs: Option<PathBuf>,
}

/// Launch parameters for the application.
#[derive(Resource, Debug, Clone)]
pub struct LaunchParams {
    pub position: Option<LatLng>,
    pub diameter: Option<f64>,
    pub velocity: Option<f64>,
    pub share: Option<SharedState>,
    pub report: bool,
    pub locale: Option<Locale>,
    pub opencage_key: Option<String>,
    pub nasa_key: String,
    pub prefs_path: Option<PathBuf>,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            position: None,
            diameter: None,
            velocity: None,
            share: None,
            report: false,
            locale: None,
            opencage_key: None,
            nasa_key: DEMO_API_KEY.to_string(),
            prefs_path: None,
        }
    }
}

impl From<CliArgs> for LaunchParams {
    fn from(args: CliArgs) -> Self {
        let position = match (args.lat, args.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)).filter(LatLng::is_valid),
            _ => None,
        };
        if position.is_none() && (args.lat.is_some() || args.lng.is_some()) {
            warn!("Ignoring incomplete or out-of-range --lat/--lng");
        }

        Self {
            position,
            diameter: args.diameter,
            velocity: args.velocity,
            share: args.share.as_deref().map(share::decode),
            report: args.report,
            locale: args.locale,
            opencage_key: args.opencage_key.filter(|key| !key.trim().is_empty()),
            nasa_key: args.nasa_key,
            prefs_path: args.prefs,
        }
    }
}

impl LaunchParams {
    /// Parse from an explicit argument list (first item is the binary name).
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CliArgs::try_parse_from(args).map(Self::from)
    }

    /// The state to start from: the share link, overridden by explicit flags.
    pub fn initial_state(&self) -> SharedState {
        let mut state = self.share.clone().unwrap_or_default();

        if let Some(position) = self.position {
            state.position = Some(position);
        }

        if self.diameter.is_some() || self.velocity.is_some() {
            let (base_d, base_v) = match &state.projectile {
                Some(SharedProjectile::Custom { diameter, velocity }) => (*diameter, *velocity),
                _ => (
                    crate::state::DEFAULT_DIAMETER_M,
                    crate::state::DEFAULT_VELOCITY_KM_S,
                ),
            };
            state.projectile = Some(SharedProjectile::Custom {
                diameter: self.diameter.unwrap_or(base_d),
                velocity: self.velocity.unwrap_or(base_v),
            });
        }

        state
    }
}

/// Parse launch parameters from the process arguments.
pub fn parse() -> LaunchParams {
    CliArgs::parse().into()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Base layer drawn under the impact circles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapLayer {
    #[default]
    Political,
    Terrain,
    Night,
}

impl MapLayer {
    pub const ALL: [MapLayer; 3] = [MapLayer::Political, MapLayer::Terrain, MapLayer::Night];
}

/// User preferences persisted between runs.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub map_layer: MapLayer,
    pub map_3d: bool,
    pub locale: Locale,
}

impl Preferences {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load, or fall back to defaults when the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                warn!("No preferences at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Using default preferences: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `$HOME/.config/impact-lab/preferences.json`.
pub fn default_preferences_path() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .ok_or(ConfigError::NoHomeDir)?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("impact-lab")
        .join("preferences.json"))
}

/// Where preferences are written back to, if anywhere.
#[derive(Resource, Clone, Debug, Default)]
pub struct PreferencesPath(pub Option<PathBuf>);

fn save_preferences(prefs: Res<Preferences>, path: Res<PreferencesPath>) {
    if !prefs.is_changed() || prefs.is_added() {
        return;
    }
    let Some(path) = &path.0 else {
        return;
    };
    match prefs.save(path) {
        Ok(()) => debug!("Saved preferences to {}", path.display()),
        Err(e) => warn!("Could not save preferences: {e}"),
    }
}

/// Loads preferences at build time and writes them back when they change.
pub struct PreferencesPlugin {
    pub path: Option<PathBuf>,
    /// Overrides the stored locale for this run.
    pub locale: Option<Locale>,
}

impl Plugin for PreferencesPlugin {
    fn build(&self, app: &mut App) {
        let path = self.path.clone().or_else(|| match default_preferences_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Preferences will not persist: {e}");
                None
            }
        });

        let mut prefs = path
            .as_deref()
            .map(Preferences::load_or_default)
            .unwrap_or_default();
        if let Some(locale) = self.locale {
            prefs.locale = locale;
        }

        app.insert_resource(prefs)
            .insert_resource(PreferencesPath(path))
            .add_systems(Last, save_preferences);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("impact-lab-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_parse_position_and_projectile() {
        let params = LaunchParams::try_parse_from([
            "impact-lab",
            "--lat",
            "-33.9",
            "--lng",
            "18.4",
            "--diameter",
            "120",
        ])
        .expect("valid args");

        assert_eq!(params.position, Some(LatLng::new(-33.9, 18.4)));
        let state = params.initial_state();
        assert_eq!(
            state.projectile,
            Some(SharedProjectile::Custom {
                diameter: 120.0,
                velocity: crate::state::DEFAULT_VELOCITY_KM_S,
            })
        );
    }

    #[test]
    fn test_out_of_range_position_dropped() {
        let params = LaunchParams::try_parse_from(["impact-lab", "--lat", "95", "--lng", "0"])
            .expect("valid args");
        assert!(params.position.is_none());
    }

    #[test]
    fn test_share_link_with_flag_override() {
        let params = LaunchParams::try_parse_from([
            "impact-lab",
            "--share",
            "https://impact-lab.app/?lat=10&lng=20&type=custom&diameter=50&velocity=30",
            "--velocity",
            "15",
        ])
        .expect("valid args");

        let state = params.initial_state();
        assert_eq!(state.position, Some(LatLng::new(10.0, 20.0)));
        assert_eq!(
            state.projectile,
            Some(SharedProjectile::Custom {
                diameter: 50.0,
                velocity: 15.0,
            })
        );
    }

    #[test]
    fn test_locale_flag() {
        let params = LaunchParams::try_parse_from(["impact-lab", "--locale", "es"])
            .expect("valid args");
        assert_eq!(params.locale, Some(Locale::Es));
    }

    #[test]
    fn test_preferences_round_trip_on_disk() {
        let path = temp_path("round_trip/preferences.json");
        let prefs = Preferences {
            theme: Theme::Light,
            map_layer: MapLayer::Night,
            map_3d: true,
            locale: Locale::Es,
        };
        prefs.save(&path).expect("writable temp dir");
        assert_eq!(Preferences::load(&path).expect("just written"), prefs);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_preferences_yield_defaults() {
        let path = temp_path("corrupt/preferences.json");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("writable temp dir");
        }
        std::fs::write(&path, "{ not json").expect("writable temp dir");

        assert!(matches!(Preferences::load(&path), Err(ConfigError::Json(_))));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_preferences_yield_defaults() {
        let path = temp_path("missing/preferences.json");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            Preferences::load(&path),
            Err(ConfigError::Io { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound
        ));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }

    #[test]
    fn test_partial_preferences_fill_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme": "light"}"#).expect("valid");
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.map_layer, MapLayer::Political);
        assert!(!prefs.map_3d);
    }
}
