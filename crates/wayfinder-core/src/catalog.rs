//! Authored airport dataset.
//!
//! Fixed data positioned on the logical canvas. Initialized once at startup
//! and never mutated.

use std::sync::LazyLock;

use crate::models::{Airport, Location, LocationKind, Obstacle, ObstacleKind, Point};

/// Logical canvas the whole dataset is positioned on.
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 600.0;

/// All supported airports, in display order.
pub fn airports() -> &'static [Airport] {
    &AIRPORTS
}

/// Look up an airport by id.
pub fn airport(id: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.id == id)
}

fn loc(id: &str, name: &str, x: f64, y: f64, kind: LocationKind) -> Location {
    Location {
        id: id.into(),
        name: name.into(),
        point: Point::new(x, y),
        kind,
    }
}

fn obs(kind: ObstacleKind, x: f64, y: f64, label: &str) -> Obstacle {
    Obstacle {
        kind,
        point: Point::new(x, y),
        label: label.into(),
    }
}

static AIRPORTS: LazyLock<Vec<Airport>> = LazyLock::new(|| {
    vec![
        Airport {
            id: "del-t3".into(),
            name: "Delhi IGI Terminal 3".into(),
            city: "Delhi".into(),
            code: "DEL".into(),
            locations: vec![
                loc("del-e1", "Main Entry Gate 1", 50.0, 300.0, LocationKind::Service),
                loc("del-check-a", "Check-in Counter A", 150.0, 100.0, LocationKind::CheckIn),
                loc("del-sec-intl", "Security Check-In", 300.0, 300.0, LocationKind::Security),
                loc("del-g1", "Gate 01", 700.0, 50.0, LocationKind::Gate),
                loc("del-g15", "Gate 15", 750.0, 300.0, LocationKind::Gate),
                loc("del-lounge", "Plaza Premium Lounge", 450.0, 150.0, LocationKind::Service),
            ],
            obstacles: vec![
                obs(ObstacleKind::Escalator, 400.0, 200.0, "Main Escalator"),
                obs(ObstacleKind::Lift, 420.0, 400.0, "Priority Lift"),
            ],
        },
        Airport {
            id: "bom-t2".into(),
            name: "Mumbai CSMIA T2".into(),
            city: "Mumbai".into(),
            code: "BOM".into(),
            locations: vec![
                loc("bom-e", "Level 4 Departure Entry", 100.0, 300.0, LocationKind::Service),
                loc("bom-check-b", "Check-in Island B", 200.0, 150.0, LocationKind::CheckIn),
                loc("bom-sec", "Central Security", 350.0, 300.0, LocationKind::Security),
                loc("bom-g65", "Gate 65", 700.0, 100.0, LocationKind::Gate),
                loc("bom-g80", "Gate 80", 720.0, 500.0, LocationKind::Gate),
            ],
            obstacles: vec![obs(ObstacleKind::Lift, 300.0, 150.0, "Elevator 4B")],
        },
        Airport {
            id: "blr-t2".into(),
            name: "Bengaluru Kempegowda T2".into(),
            city: "Bengaluru".into(),
            code: "BLR".into(),
            locations: vec![
                loc("blr-e", "Main Entry Forest Plaza", 50.0, 300.0, LocationKind::Service),
                loc("blr-check", "Island D Check-in", 180.0, 120.0, LocationKind::CheckIn),
                loc("blr-sec", "Domestic Security", 320.0, 300.0, LocationKind::Security),
                loc("blr-g201", "Gate 201", 680.0, 80.0, LocationKind::Gate),
                loc("blr-g215", "Gate 215", 740.0, 450.0, LocationKind::Gate),
            ],
            obstacles: vec![
                obs(ObstacleKind::Ramp, 250.0, 300.0, "Garden Ramp"),
                obs(ObstacleKind::Lift, 400.0, 100.0, "Lift L3"),
            ],
        },
        Airport {
            id: "hyd-rgi".into(),
            name: "Hyderabad Rajiv Gandhi Intl".into(),
            city: "Hyderabad".into(),
            code: "HYD".into(),
            locations: vec![
                loc("hyd-e", "Departure Entry 3", 80.0, 300.0, LocationKind::Service),
                loc("hyd-sec", "Domestic Security South", 350.0, 300.0, LocationKind::Security),
                loc("hyd-g22", "Gate 22", 710.0, 120.0, LocationKind::Gate),
                loc("hyd-g30", "Gate 30", 750.0, 400.0, LocationKind::Gate),
            ],
            obstacles: vec![obs(ObstacleKind::Lift, 450.0, 200.0, "Main Concourse Lift")],
        },
        Airport {
            id: "maa-t4".into(),
            name: "Chennai International T4".into(),
            city: "Chennai".into(),
            code: "MAA".into(),
            locations: vec![
                loc("maa-e", "Departure Entry 1", 60.0, 300.0, LocationKind::Service),
                loc("maa-sec", "Domestic Security", 300.0, 300.0, LocationKind::Security),
                loc("maa-g4", "Gate 4", 650.0, 90.0, LocationKind::Gate),
                loc("maa-g12", "Gate 12", 730.0, 480.0, LocationKind::Gate),
            ],
            obstacles: vec![obs(ObstacleKind::Lift, 350.0, 150.0, "Elevator Alpha")],
        },
        Airport {
            id: "cok-t3".into(),
            name: "Kochi International T3".into(),
            city: "Kochi".into(),
            code: "COK".into(),
            locations: vec![
                loc("cok-e", "Main Departure Porch", 40.0, 300.0, LocationKind::Service),
                loc("cok-check", "Check-in Row C", 150.0, 150.0, LocationKind::CheckIn),
                loc("cok-sec", "International Security", 320.0, 300.0, LocationKind::Security),
                loc("cok-g1", "Gate 1", 700.0, 70.0, LocationKind::Gate),
                loc("cok-g9", "Gate 9", 760.0, 420.0, LocationKind::Gate),
            ],
            obstacles: vec![obs(ObstacleKind::Ramp, 280.0, 300.0, "Kerala Heritage Ramp")],
        },
        Airport {
            id: "ccu-t2".into(),
            name: "Kolkata Netaji Subhash T2".into(),
            city: "Kolkata".into(),
            code: "CCU".into(),
            locations: vec![
                loc("ccu-e", "Departure Gate 3", 70.0, 300.0, LocationKind::Service),
                loc("ccu-sec", "Security Hold Area", 340.0, 300.0, LocationKind::Security),
                loc("ccu-g18", "Gate 18", 690.0, 100.0, LocationKind::Gate),
                loc("ccu-g25", "Gate 25", 740.0, 510.0, LocationKind::Gate),
            ],
            obstacles: vec![obs(ObstacleKind::Lift, 380.0, 120.0, "Concourse Lift")],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn airport_ids_are_globally_unique() {
        let ids: HashSet<&str> = airports().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), airports().len());
    }

    #[test]
    fn location_ids_are_unique_within_each_airport() {
        for airport in airports() {
            let ids: HashSet<&str> = airport.locations.iter().map(|l| l.id.as_str()).collect();
            assert_eq!(ids.len(), airport.locations.len(), "{}", airport.id);
        }
    }

    #[test]
    fn every_airport_fits_the_canvas() {
        for airport in airports() {
            for location in &airport.locations {
                assert!(location.point.x >= 0.0 && location.point.x <= MAP_WIDTH);
                assert!(location.point.y >= 0.0 && location.point.y <= MAP_HEIGHT);
            }
            for obstacle in &airport.obstacles {
                assert!(obstacle.point.x >= 0.0 && obstacle.point.x <= MAP_WIDTH);
                assert!(obstacle.point.y >= 0.0 && obstacle.point.y <= MAP_HEIGHT);
            }
        }
    }

    #[test]
    fn del_t3_first_lift_is_the_priority_lift() {
        // del-t3 also has an escalator; the lift lookup must skip it.
        let airport = airport("del-t3").unwrap();
        let lift = airport.first_lift().unwrap();
        assert_eq!(lift.label, "Priority Lift");
        assert_eq!(lift.point, Point::new(420.0, 400.0));
    }

    #[test]
    fn unknown_airport_id_returns_none() {
        assert!(airport("lax-t1").is_none());
    }
}
