//! Core data models for the wayfinding system.

use serde::{Deserialize, Serialize};

/// A position on the fixed 800x600 logical floor-plan canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cosmetic crowding indicator attached to a step. Assigned by step role,
/// not derived from any simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Low,
    Medium,
    High,
}

/// Physical wayfinding feature positioned on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Stairs,
    Escalator,
    Lift,
    Ramp,
    #[serde(rename = "narrow")]
    NarrowPassage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Gate,
    Service,
    CheckIn,
    Security,
}

/// Travel profile. Affects only whether a lift waypoint is inserted and
/// which fixed distance/ETA label pair is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Wheelchair,
    Standard,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Wheelchair => "wheelchair",
            TravelMode::Standard => "standard",
        }
    }
}

/// Supported display/narration languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
    Ta,
    Ml,
}

impl Language {
    /// English name, used when asking the advice source for localized output.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Te => "Telugu",
            Language::Ta => "Tamil",
            Language::Ml => "Malayalam",
        }
    }

    /// BCP-47 tag handed to the speech backend.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
            Language::Te => "te-IN",
            Language::Ta => "ta-IN",
            Language::Ml => "ml-IN",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Ta => "ta",
            Language::Ml => "ml",
        }
    }
}

/// Icon tag rendered next to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    MapPin,
    Navigation,
    Shield,
    Elevator,
    Flag,
    AlertTriangle,
    DoorOpen,
}

/// An authored physical obstacle in an airport's static dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub point: Point,
    pub label: String,
}

/// A named, typed location in an airport. Ids are unique within the airport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub point: Point,
    pub kind: LocationKind,
}

/// A fixed airport record with pre-positioned locations and obstacles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    pub name: String,
    pub city: String,
    pub code: String,
    pub locations: Vec<Location>,
    pub obstacles: Vec<Obstacle>,
}

impl Airport {
    /// Look up a location by id.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// First Security-kind location in list order, if any.
    pub fn security_checkpoint(&self) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.kind == LocationKind::Security)
    }

    /// First Lift-kind obstacle in list order, if any.
    pub fn first_lift(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| o.kind == ObstacleKind::Lift)
    }
}

/// One instructed waypoint. Created exclusively by the path generator and
/// immutable once inserted into a [`Path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavStep {
    pub id: String,
    pub instruction: String,
    pub point: Point,
    pub density: Density,
    pub icon: Icon,
    #[serde(default)]
    pub is_elevator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obstacle_found: Option<ObstacleKind>,
}

/// A generated journey: ordered steps plus summary metrics.
///
/// Constructed atomically on each navigation request or language change;
/// replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// Opaque UI key. Varies between calls and must not be compared.
    pub id: String,
    pub from: String,
    pub to: String,
    pub steps: Vec<NavStep>,
    pub mode: TravelMode,
    pub distance: String,
    pub estimated_time: String,
}

/// Per-step tip/caution pair from the advice source. Ephemeral; refetched
/// on every step change and never persisted as part of a path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialAdvice {
    pub tip: String,
    pub caution: String,
}
