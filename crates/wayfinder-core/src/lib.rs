pub mod advice;
pub mod catalog;
pub mod error;
pub mod locale;
pub mod models;
pub mod routing;

pub use advice::{fallback_advice, fallback_instructions};
pub use error::RouteError;
pub use models::{
    Airport, Density, Icon, Language, Location, LocationKind, NavStep, Obstacle, ObstacleKind,
    Path, Point, SpatialAdvice, TravelMode,
};
pub use routing::{emergency_route, generate_path, plan_route};
