mod campus;

use std::io::Write;

use approx::assert_abs_diff_eq;
use campus_paths::{CampusMap, DatasetError, Direction, Length, Point, RouteError};
use rayon::prelude::*;
use test_log::test;

use crate::campus::{BUILDINGS, CAMPUS_MAP, CROSSING, CSE, KNE, MGH, ODE, PATHS};

#[test]
fn route_service_find_route_001() {
    let map: &CampusMap = &CAMPUS_MAP;

    let route = map.find_route("CSE", "ODE").unwrap();

    assert_eq!(route.start, CSE);
    assert_eq!(route.waypoints, [CROSSING, ODE]);
    assert_abs_diff_eq!(route.length, Length::from_feet(485.4102), epsilon = 1e-9);
}

#[test]
fn route_service_find_route_002() {
    let map: &CampusMap = &CAMPUS_MAP;

    let route = map.find_route("CSE", "MGH").unwrap();
    assert_eq!(route.waypoints, [CROSSING, MGH]);
    assert_eq!(route.length, Length::from_feet(300.0), "never the 170 feet segment");

    let route = map.find_route("MGH", "KNE").unwrap();
    assert_eq!(route.waypoints, [ODE, KNE]);
    assert_eq!(route.length, Length::from_feet(600.0));

    let route = map.find_route("KNE", "CSE").unwrap();
    assert_eq!(route.waypoints, [CSE]);
    assert_eq!(route.length, Length::from_feet(310.0));
}

#[test]
fn route_service_find_route_003() {
    let map: &CampusMap = &CAMPUS_MAP;

    let route = map.find_route("ODE", "ODE").unwrap();

    assert!(route.is_empty());
    assert_eq!(route.start, ODE);
    assert_eq!(route.end(), ODE);
    assert_eq!(route.length, Length::ZERO);
}

#[test]
fn route_service_find_route_004() {
    let map: &CampusMap = &CAMPUS_MAP;

    assert_eq!(
        map.find_route("CSE", "ISL"),
        Err(RouteError::RouteNotFound {
            start: "CSE".into(),
            end: "ISL".into(),
        })
    );
    assert_eq!(
        map.find_route("CSE", "XYZ"),
        Err(RouteError::UnknownBuilding("XYZ".into()))
    );
    assert_eq!(
        map.find_route("ABC", "CSE"),
        Err(RouteError::UnknownBuilding("ABC".into()))
    );
    assert_eq!(
        map.find_route("XYZ", "XYZ"),
        Err(RouteError::UnknownBuilding("XYZ".into()))
    );
}

#[test]
fn route_service_legs_001() {
    let map: &CampusMap = &CAMPUS_MAP;

    let route = map.find_route("CSE", "ODE").unwrap();
    let legs = route.legs(map).unwrap();

    let directions: Vec<Direction> = legs.iter().map(|leg| leg.direction).collect();
    assert_eq!(directions, [Direction::East, Direction::SouthEast]);

    let lines: Vec<String> = legs.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "Walk 150 feet E to (250, 100)",
            "Walk 335 feet SE to (400, 400)"
        ]
    );

    let total: Length = legs.iter().map(|leg| leg.distance).sum();
    assert_abs_diff_eq!(total, route.length, epsilon = 1e-9);
}

#[test]
fn route_service_legs_002() {
    let map: &CampusMap = &CAMPUS_MAP;

    let route = map.find_route("MGH", "KNE").unwrap();
    let directions: Vec<Direction> = route
        .legs(map)
        .unwrap()
        .iter()
        .map(|leg| leg.direction)
        .collect();

    assert_eq!(directions, [Direction::South, Direction::West]);
}

#[test]
fn route_service_distance_between_001() {
    let map: &CampusMap = &CAMPUS_MAP;

    assert_eq!(map.distance_between(CSE, CROSSING), Some(Length::from_feet(150.0)));
    assert_eq!(map.distance_between(CROSSING, CSE), Some(Length::from_feet(150.0)));
    assert_eq!(map.distance_between(CSE, MGH), None);
    assert_eq!(map.distance_between(CSE, Point::new(1.0, 1.0)), None);
}

#[test]
fn route_service_buildings_001() {
    let map: &CampusMap = &CAMPUS_MAP;

    assert_eq!(
        map.building_ids().collect::<Vec<_>>(),
        ["CSE", "ISL", "KNE", "MGH", "ODE"]
    );
    assert!(map.has_building("MGH"));
    assert!(!map.has_building("mgh"));
    assert_eq!(map.full_name("MGH"), Some("Mary Gates Hall"));
    assert_eq!(map.full_name("XYZ"), None);
    assert_eq!(map.location_of("KNE"), Some(KNE));
    assert_eq!(map.location_of("XYZ"), None);
    assert_eq!(map.buildings().count(), 5);
}

#[test]
fn route_service_graph_001() {
    let map: &CampusMap = &CAMPUS_MAP;
    let graph = map.graph();

    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.edge_count(), 15);
    assert_eq!(graph.labels_between(&CSE, &CROSSING).len(), 2);
    assert!(graph.has_edge(&ODE, &CROSSING));
}

#[test]
fn route_service_concurrent_readers_001() {
    let map: &CampusMap = &CAMPUS_MAP;

    let ids: Vec<&str> = map.building_ids().collect();
    let pairs: Vec<(&str, &str)> = ids
        .iter()
        .flat_map(|&start| ids.iter().map(move |&end| (start, end)))
        .collect();

    let sequential: Vec<_> = pairs
        .iter()
        .map(|(start, end)| map.find_route(start, end))
        .collect();

    let parallel: Vec<_> = pairs
        .par_iter()
        .map(|(start, end)| map.find_route(start, end))
        .collect();

    assert_eq!(sequential.len(), 25);
    assert_eq!(parallel, sequential);
}

#[test]
fn route_service_open_001() {
    let dir = tempfile::tempdir().unwrap();
    let buildings = dir.path().join("campus_buildings.dat");
    let paths = dir.path().join("campus_paths.dat");

    std::fs::File::create(&buildings)
        .unwrap()
        .write_all(BUILDINGS.as_bytes())
        .unwrap();
    std::fs::File::create(&paths)
        .unwrap()
        .write_all(PATHS.as_bytes())
        .unwrap();

    let map = CampusMap::open(&buildings, &paths).unwrap();
    assert_eq!(
        map.find_route("CSE", "ODE").unwrap().waypoints,
        [CROSSING, ODE]
    );

    assert_eq!(
        CampusMap::open(dir.path().join("missing.dat"), &paths).unwrap_err(),
        DatasetError::IO(std::io::ErrorKind::NotFound)
    );
}
