//! User-facing text in English and Spanish.
//!
//! Every [`TextKey`] is matched exhaustively per locale, so adding a key
//! without translating it is a compile error.

use serde::{Deserialize, Serialize};

use crate::config::{self, MapLayer};
use crate::impact::RecommendedAction;
use crate::physics::{self, ThreatLevel};
use crate::surface::{self, SurfaceType};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// ISO 639-1 code, also sent to the geocoder.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    fn separators(self) -> (char, char) {
        match self {
            Locale::En => (',', '.'),
            Locale::Es => ('.', ','),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppTitle,
    ClickToImpact,
    Computing,
    ImpactDetails,
    Projectile,
    Custom,
    Diameter,
    Velocity,
    Energy,
    SeismicMagnitude,
    AirBlastRadius,
    DevastationRadius,
    EvacuationRadius,
    ThreatLevel,
    RecommendedAction,
    Surface,
    Location,
    Confidence,
    AssumedWater,
    AffectedPopulation,
    Tsunami,
    WaveHeight,
    TsunamiRange,
    Crater,
    CraterDiameter,
    CraterDepth,
    FireballRadius,
    SeismicRange,
    Severity,
    Sliders,
    AsteroidList,
    Presets,
    Refresh,
    Loading,
    FeedError,
    NoAsteroids,
    Hazardous,
    CloseApproach,
    MissDistance,
    Reset,
    CopyShareLink,
    LinkCopied,
    Theme,
    Dark,
    Light,
    MapLayer,
    Political,
    Terrain,
    Night,
    View2d,
    View3d,
    Language,
    Land,
    Water,
    ConfidenceLow,
    ConfidenceMedium,
    ConfidenceHigh,
    ThreatLow,
    ThreatModerate,
    ThreatHigh,
    ThreatExtreme,
    ActionShelterInPlace,
    ActionLocalEvacuation,
    ActionRegionalEvacuation,
    ActionDeflection,
    SeverityLocal,
    SeverityRegional,
    SeverityContinental,
    SeverityGlobal,
}

impl TextKey {
    pub const ALL: [TextKey; 69] = [
        TextKey::AppTitle,
        TextKey::ClickToImpact,
        TextKey::Computing,
        TextKey::ImpactDetails,
        TextKey::Projectile,
        TextKey::Custom,
        TextKey::Diameter,
        TextKey::Velocity,
        TextKey::Energy,
        TextKey::SeismicMagnitude,
        TextKey::AirBlastRadius,
        TextKey::DevastationRadius,
        TextKey::EvacuationRadius,
        TextKey::ThreatLevel,
        TextKey::RecommendedAction,
        TextKey::Surface,
        TextKey::Location,
        TextKey::Confidence,
        TextKey::AssumedWater,
        TextKey::AffectedPopulation,
        TextKey::Tsunami,
        TextKey::WaveHeight,
        TextKey::TsunamiRange,
        TextKey::Crater,
        TextKey::CraterDiameter,
        TextKey::CraterDepth,
        TextKey::FireballRadius,
        TextKey::SeismicRange,
        TextKey::Severity,
        TextKey::Sliders,
        TextKey::AsteroidList,
        TextKey::Presets,
        TextKey::Refresh,
        TextKey::Loading,
        TextKey::FeedError,
        TextKey::NoAsteroids,
        TextKey::Hazardous,
        TextKey::CloseApproach,
        TextKey::MissDistance,
        TextKey::Reset,
        TextKey::CopyShareLink,
        TextKey::LinkCopied,
        TextKey::Theme,
        TextKey::Dark,
        TextKey::Light,
        TextKey::MapLayer,
        TextKey::Political,
        TextKey::Terrain,
        TextKey::Night,
        TextKey::View2d,
        TextKey::View3d,
        TextKey::Language,
        TextKey::Land,
        TextKey::Water,
        TextKey::ConfidenceLow,
        TextKey::ConfidenceMedium,
        TextKey::ConfidenceHigh,
        TextKey::ThreatLow,
        TextKey::ThreatModerate,
        TextKey::ThreatHigh,
        TextKey::ThreatExtreme,
        TextKey::ActionShelterInPlace,
        TextKey::ActionLocalEvacuation,
        TextKey::ActionRegionalEvacuation,
        TextKey::ActionDeflection,
        TextKey::SeverityLocal,
        TextKey::SeverityRegional,
        TextKey::SeverityContinental,
        TextKey::SeverityGlobal,
    ];
}

/// Translate a key.
pub fn tr(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Es => spanish(key),
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Impact Lab",
        TextKey::ClickToImpact => "Click anywhere on the map to simulate an impact",
        TextKey::Computing => "Computing impact...",
        TextKey::ImpactDetails => "Impact details",
        TextKey::Projectile => "Projectile",
        TextKey::Custom => "Custom",
        TextKey::Diameter => "Diameter",
        TextKey::Velocity => "Velocity",
        TextKey::Energy => "Impact energy",
        TextKey::SeismicMagnitude => "Seismic magnitude",
        TextKey::AirBlastRadius => "Air blast radius",
        TextKey::DevastationRadius => "Devastation radius",
        TextKey::EvacuationRadius => "Evacuation radius",
        TextKey::ThreatLevel => "Threat level",
        TextKey::RecommendedAction => "Recommended action",
        TextKey::Surface => "Surface",
        TextKey::Location => "Location",
        TextKey::Confidence => "Confidence",
        TextKey::AssumedWater => "Unknown location (assumed water)",
        TextKey::AffectedPopulation => "Affected population",
        TextKey::Tsunami => "Tsunami",
        TextKey::WaveHeight => "Wave height",
        TextKey::TsunamiRange => "Tsunami range",
        TextKey::Crater => "Crater",
        TextKey::CraterDiameter => "Crater diameter",
        TextKey::CraterDepth => "Crater depth",
        TextKey::FireballRadius => "Fireball radius",
        TextKey::SeismicRange => "Seismic range",
        TextKey::Severity => "Severity",
        TextKey::Sliders => "Parameters",
        TextKey::AsteroidList => "Near-Earth objects",
        TextKey::Presets => "Famous impacts",
        TextKey::Refresh => "Refresh",
        TextKey::Loading => "Loading...",
        TextKey::FeedError => "Could not load the asteroid feed",
        TextKey::NoAsteroids => "No approaches this week",
        TextKey::Hazardous => "Potentially hazardous",
        TextKey::CloseApproach => "Close approach",
        TextKey::MissDistance => "Miss distance",
        TextKey::Reset => "Reset",
        TextKey::CopyShareLink => "Copy share link",
        TextKey::LinkCopied => "Link copied",
        TextKey::Theme => "Theme",
        TextKey::Dark => "Dark",
        TextKey::Light => "Light",
        TextKey::MapLayer => "Map layer",
        TextKey::Political => "Political",
        TextKey::Terrain => "Terrain",
        TextKey::Night => "Night",
        TextKey::View2d => "2D map",
        TextKey::View3d => "3D globe",
        TextKey::Language => "Language",
        TextKey::Land => "Land",
        TextKey::Water => "Water",
        TextKey::ConfidenceLow => "Low",
        TextKey::ConfidenceMedium => "Medium",
        TextKey::ConfidenceHigh => "High",
        TextKey::ThreatLow => "Low",
        TextKey::ThreatModerate => "Moderate",
        TextKey::ThreatHigh => "High",
        TextKey::ThreatExtreme => "Extreme",
        TextKey::ActionShelterInPlace => "Shelter in place and monitor updates",
        TextKey::ActionLocalEvacuation => "Evacuate the area around the impact point",
        TextKey::ActionRegionalEvacuation => "Evacuate the region and prepare emergency services",
        TextKey::ActionDeflection => "Deflection mission required",
        TextKey::SeverityLocal => "Local",
        TextKey::SeverityRegional => "Regional",
        TextKey::SeverityContinental => "Continental",
        TextKey::SeverityGlobal => "Global",
    }
}

fn spanish(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Impact Lab",
        TextKey::ClickToImpact => "Haz clic en el mapa para simular un impacto",
        TextKey::Computing => "Calculando impacto...",
        TextKey::ImpactDetails => "Detalles del impacto",
        TextKey::Projectile => "Proyectil",
        TextKey::Custom => "Personalizado",
        TextKey::Diameter => "Diámetro",
        TextKey::Velocity => "Velocidad",
        TextKey::Energy => "Energía del impacto",
        TextKey::SeismicMagnitude => "Magnitud sísmica",
        TextKey::AirBlastRadius => "Radio de onda expansiva",
        TextKey::DevastationRadius => "Radio de devastación",
        TextKey::EvacuationRadius => "Radio de evacuación",
        TextKey::ThreatLevel => "Nivel de amenaza",
        TextKey::RecommendedAction => "Acción recomendada",
        TextKey::Surface => "Superficie",
        TextKey::Location => "Ubicación",
        TextKey::Confidence => "Confianza",
        TextKey::AssumedWater => "Ubicación desconocida (se asume agua)",
        TextKey::AffectedPopulation => "Población afectada",
        TextKey::Tsunami => "Tsunami",
        TextKey::WaveHeight => "Altura de ola",
        TextKey::TsunamiRange => "Alcance del tsunami",
        TextKey::Crater => "Cráter",
        TextKey::CraterDiameter => "Diámetro del cráter",
        TextKey::CraterDepth => "Profundidad del cráter",
        TextKey::FireballRadius => "Radio de la bola de fuego",
        TextKey::SeismicRange => "Alcance sísmico",
        TextKey::Severity => "Gravedad",
        TextKey::Sliders => "Parámetros",
        TextKey::AsteroidList => "Objetos cercanos a la Tierra",
        TextKey::Presets => "Impactos famosos",
        TextKey::Refresh => "Actualizar",
        TextKey::Loading => "Cargando...",
        TextKey::FeedError => "No se pudo cargar la lista de asteroides",
        TextKey::NoAsteroids => "Sin aproximaciones esta semana",
        TextKey::Hazardous => "Potencialmente peligroso",
        TextKey::CloseApproach => "Aproximación",
        TextKey::MissDistance => "Distancia mínima",
        TextKey::Reset => "Reiniciar",
        TextKey::CopyShareLink => "Copiar enlace",
        TextKey::LinkCopied => "Enlace copiado",
        TextKey::Theme => "Tema",
        TextKey::Dark => "Oscuro",
        TextKey::Light => "Claro",
        TextKey::MapLayer => "Capa del mapa",
        TextKey::Political => "Político",
        TextKey::Terrain => "Relieve",
        TextKey::Night => "Nocturno",
        TextKey::View2d => "Mapa 2D",
        TextKey::View3d => "Globo 3D",
        TextKey::Language => "Idioma",
        TextKey::Land => "Tierra",
        TextKey::Water => "Agua",
        TextKey::ConfidenceLow => "Baja",
        TextKey::ConfidenceMedium => "Media",
        TextKey::ConfidenceHigh => "Alta",
        TextKey::ThreatLow => "Bajo",
        TextKey::ThreatModerate => "Moderado",
        TextKey::ThreatHigh => "Alto",
        TextKey::ThreatExtreme => "Extremo",
        TextKey::ActionShelterInPlace => "Refugiarse en el lugar y seguir las noticias",
        TextKey::ActionLocalEvacuation => "Evacuar la zona del punto de impacto",
        TextKey::ActionRegionalEvacuation => "Evacuar la región y preparar los servicios de emergencia",
        TextKey::ActionDeflection => "Se requiere una misión de desvío",
        TextKey::SeverityLocal => "Local",
        TextKey::SeverityRegional => "Regional",
        TextKey::SeverityContinental => "Continental",
        TextKey::SeverityGlobal => "Global",
    }
}

pub fn threat_key(level: ThreatLevel) -> TextKey {
    match level {
        ThreatLevel::Low => TextKey::ThreatLow,
        ThreatLevel::Moderate => TextKey::ThreatModerate,
        ThreatLevel::High => TextKey::ThreatHigh,
        ThreatLevel::Extreme => TextKey::ThreatExtreme,
    }
}

pub fn action_key(action: RecommendedAction) -> TextKey {
    match action {
        RecommendedAction::ShelterInPlace => TextKey::ActionShelterInPlace,
        RecommendedAction::LocalEvacuation => TextKey::ActionLocalEvacuation,
        RecommendedAction::RegionalEvacuation => TextKey::ActionRegionalEvacuation,
        RecommendedAction::Deflection => TextKey::ActionDeflection,
    }
}

pub fn severity_key(severity: physics::Severity) -> TextKey {
    match severity {
        physics::Severity::Local => TextKey::SeverityLocal,
        physics::Severity::Regional => TextKey::SeverityRegional,
        physics::Severity::Continental => TextKey::SeverityContinental,
        physics::Severity::Global => TextKey::SeverityGlobal,
    }
}

pub fn confidence_key(confidence: surface::Confidence) -> TextKey {
    match confidence {
        surface::Confidence::Low => TextKey::ConfidenceLow,
        surface::Confidence::Medium => TextKey::ConfidenceMedium,
        surface::Confidence::High => TextKey::ConfidenceHigh,
    }
}

pub fn surface_key(surface: SurfaceType) -> TextKey {
    match surface {
        SurfaceType::Land => TextKey::Land,
        SurfaceType::Water => TextKey::Water,
    }
}

pub fn theme_key(theme: config::Theme) -> TextKey {
    match theme {
        config::Theme::Dark => TextKey::Dark,
        config::Theme::Light => TextKey::Light,
    }
}

pub fn layer_key(layer: MapLayer) -> TextKey {
    match layer {
        MapLayer::Political => TextKey::Political,
        MapLayer::Terrain => TextKey::Terrain,
        MapLayer::Night => TextKey::Night,
    }
}

/// Format a number with `decimals` fraction digits and thousands separators.
pub fn format_number(locale: Locale, value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (thousands, decimal) = locale.separators();
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    // "-0" and "-0.00" are printed without the sign.
    if value < 0.0 && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(thousands);
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push(decimal);
        out.push_str(frac_part);
    }
    out
}

pub fn format_integer(locale: Locale, value: u64) -> String {
    format_number(locale, value as f64, 0)
}
