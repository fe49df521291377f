use std::fmt;

use crate::{CampusMap, Direction, Length, Point};

/// Walking route between two buildings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Location of the starting building, it is not one of the waypoints.
    pub start: Point,
    /// Locations to walk through in order, the last one is the destination building.
    /// Empty if the route starts and ends at the same building.
    pub waypoints: Vec<Point>,
    /// Total walking distance.
    pub length: Length,
}

/// Single step of a route, walking straight from one location to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub from: Point,
    pub to: Point,
    pub distance: Length,
    pub direction: Direction,
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Gets the location where the route ends.
    pub fn end(&self) -> Point {
        self.waypoints.last().copied().unwrap_or(self.start)
    }

    /// Splits the route into the legs between consecutive waypoints.
    /// Returns None if any two consecutive waypoints are not adjacent in the map.
    pub fn legs(&self, map: &CampusMap) -> Option<Vec<Leg>> {
        let mut from = self.start;

        self.waypoints
            .iter()
            .map(|&to| {
                let distance = map.distance_between(from, to)?;
                let leg = Leg {
                    from,
                    to,
                    distance,
                    direction: Direction::between(from, to),
                };
                from = to;
                Some(leg)
            })
            .collect()
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Walk {} {} to {}", self.distance, self.direction, self.to)
    }
}
