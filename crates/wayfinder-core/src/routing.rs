//! Template-based step generation.
//!
//! Not a graph search: every route is the same 3-5 step skeleton (start,
//! corridor waypoint, security if present, lift if required, destination),
//! and the summary metrics are fixed per travel mode.

use uuid::Uuid;

use crate::catalog;
use crate::error::RouteError;
use crate::locale;
use crate::models::{
    Airport, Density, Icon, Language, Location, NavStep, ObstacleKind, Path, Point, TravelMode,
};

/// Lateral offset applied to the synthetic corridor waypoint so the drawn
/// route suggests a non-straight path.
const CORRIDOR_OFFSET: f64 = 50.0;

/// Fixed summary labels keyed by mode only.
fn mode_metrics(mode: TravelMode) -> (&'static str, &'static str) {
    match mode {
        TravelMode::Wheelchair => ("850m", "14m"),
        TravelMode::Standard => ("620m", "8m"),
    }
}

/// Generate a route between two locations of an airport.
///
/// Deterministic: identical inputs yield identical step content and order.
/// Only the path id (an opaque UI key) varies between calls. `start == end`
/// is tolerated and produces the degenerate template.
pub fn generate_path(
    airport: &Airport,
    start: &Location,
    end: &Location,
    mode: TravelMode,
    language: Language,
) -> Path {
    let t = locale::strings(language);
    let mut steps = Vec::with_capacity(5);

    steps.push(NavStep {
        id: "s1".into(),
        instruction: format!("{}{}", t.step_start, start.name),
        point: start.point,
        density: Density::Low,
        icon: Icon::MapPin,
        is_elevator: false,
        obstacle_found: None,
    });

    let corridor = Point::new(
        (start.point.x + end.point.x) / 2.0 + CORRIDOR_OFFSET,
        (start.point.y + end.point.y) / 2.0 - CORRIDOR_OFFSET,
    );
    steps.push(NavStep {
        id: "s-turn1".into(),
        instruction: t.step_head.into(),
        point: corridor,
        density: Density::Medium,
        icon: Icon::Navigation,
        is_elevator: false,
        obstacle_found: None,
    });

    if let Some(security) = airport.security_checkpoint() {
        steps.push(NavStep {
            id: "s-sec".into(),
            instruction: t.step_security.into(),
            point: security.point,
            density: Density::High,
            icon: Icon::Shield,
            is_elevator: false,
            obstacle_found: None,
        });
    }

    if mode == TravelMode::Wheelchair {
        if let Some(lift) = airport.first_lift() {
            steps.push(NavStep {
                id: "s-lift".into(),
                instruction: format!("{}{}{}", t.step_use, lift.label, t.step_accessibility),
                point: lift.point,
                density: Density::Low,
                icon: Icon::Elevator,
                is_elevator: true,
                obstacle_found: Some(ObstacleKind::Lift),
            });
        }
    }

    steps.push(NavStep {
        id: "s-end".into(),
        instruction: format!("{}{}", t.step_arrive, end.name),
        point: end.point,
        density: Density::Low,
        icon: Icon::Flag,
        is_elevator: false,
        obstacle_found: None,
    });

    let (distance, estimated_time) = mode_metrics(mode);
    Path {
        id: format!("p-{}-{}", mode.as_str(), Uuid::new_v4().simple()),
        from: start.name.clone(),
        to: end.name.clone(),
        steps,
        mode,
        distance: distance.into(),
        estimated_time: estimated_time.into(),
    }
}

/// Resolve ids against the catalog and generate a route.
///
/// This is the caller-side validation layer: the generator tolerates
/// degenerate input, but identical endpoints are rejected here the way the
/// planning UI disables the action.
pub fn plan_route(
    airport_id: &str,
    start_id: &str,
    end_id: &str,
    mode: TravelMode,
    language: Language,
) -> Result<Path, RouteError> {
    let airport = catalog::airport(airport_id)
        .ok_or_else(|| RouteError::UnknownAirport(airport_id.into()))?;
    let start = airport
        .location(start_id)
        .ok_or_else(|| RouteError::UnknownLocation {
            airport: airport_id.into(),
            location: start_id.into(),
        })?;
    let end = airport
        .location(end_id)
        .ok_or_else(|| RouteError::UnknownLocation {
            airport: airport_id.into(),
            location: end_id.into(),
        })?;
    if start.id == end.id {
        return Err(RouteError::IdenticalEndpoints(start_id.into()));
    }
    Ok(generate_path(airport, start, end, mode, language))
}

/// The static evacuation route. Not generated and never retranslated; its
/// instruction text doubles as fixed signage wording.
pub fn emergency_route() -> Path {
    Path {
        id: "emergency-1".into(),
        from: "Current".into(),
        to: "Exit".into(),
        steps: vec![
            NavStep {
                id: "e1".into(),
                instruction: "EMERGENCY: Follow priority lane.".into(),
                point: Point::new(400.0, 300.0),
                density: Density::Low,
                icon: Icon::AlertTriangle,
                is_elevator: false,
                obstacle_found: None,
            },
            NavStep {
                id: "e2".into(),
                instruction: "Exit via nearest safe zone.".into(),
                point: Point::new(50.0, 50.0),
                density: Density::Low,
                icon: Icon::DoorOpen,
                is_elevator: false,
                obstacle_found: None,
            },
        ],
        mode: TravelMode::Wheelchair,
        distance: "180m".into(),
        estimated_time: "2m".into(),
    }
}
