//! Route service over a campus map: buildings are looked up by their short identifier and the
//! walking route between them is found on the graph of path segments.

mod route;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::format::{Adjacency, read_buildings, read_paths};
use crate::{Building, DatasetError, LabeledMultigraph, Length, Point, RouteError, shortest_path};

pub use route::{Leg, Route};

/// Graph of the campus locations connected by walkable path segments.
pub type CampusGraph = LabeledMultigraph<Point, Length>;

#[derive(Debug, Clone)]
pub struct CampusMap {
    graph: CampusGraph,
    buildings: BTreeMap<String, Building>,
}

impl CampusMap {
    /// Creates the map from the buildings and the path segments connecting the campus locations.
    pub fn new(buildings: BTreeMap<String, Building>, paths: Adjacency) -> Self {
        let mut graph = CampusGraph::new();

        for (from, segments) in paths {
            graph.add_node(from);

            for (to, lengths) in segments {
                graph.add_node(to);

                for length in lengths {
                    // both endpoints are nodes already, the edge is always accepted
                    let _ = graph.add_edge(from, to, length);
                }
            }
        }

        debug!(
            "Created campus map with {} buildings, {} locations and {} path segments",
            buildings.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Self { graph, buildings }
    }

    /// Reads the buildings and the paths datasets and creates the map.
    pub fn from_readers(buildings: impl BufRead, paths: impl BufRead) -> Result<Self, DatasetError> {
        let buildings = read_buildings(buildings)?;
        let paths = read_paths(paths)?;
        Ok(Self::new(buildings, paths))
    }

    /// Opens the buildings and the paths dataset files and creates the map.
    pub fn open(
        buildings: impl AsRef<Path>,
        paths: impl AsRef<Path>,
    ) -> Result<Self, DatasetError> {
        debug!(
            "Opening campus datasets {} and {}",
            buildings.as_ref().display(),
            paths.as_ref().display()
        );

        let buildings = BufReader::new(File::open(buildings)?);
        let paths = BufReader::new(File::open(paths)?);
        Self::from_readers(buildings, paths)
    }

    /// Finds the shortest walking route from one building to another.
    ///
    /// The route is empty if start and end are the same building.
    pub fn find_route(&self, start: &str, end: &str) -> Result<Route, RouteError> {
        let origin = self.lookup(start)?;
        let destination = self.lookup(end)?;

        let path = shortest_path(&self.graph, &origin.location, &destination.location)
            .ok_or_else(|| RouteError::RouteNotFound {
                start: start.to_owned(),
                end: end.to_owned(),
            })?;

        Ok(Route {
            start: origin.location,
            waypoints: path.vertices,
            length: path.cost,
        })
    }

    /// Gets the length of the shortest path segment between two adjacent locations.
    /// Returns None if there is no segment from `a` to `b`.
    pub fn distance_between(&self, a: Point, b: Point) -> Option<Length> {
        self.graph.min_label_between(&a, &b)
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.get(id)
    }

    pub fn has_building(&self, id: &str) -> bool {
        self.buildings.contains_key(id)
    }

    /// Gets all the building identifiers in alphabetical order.
    pub fn building_ids(&self) -> impl Iterator<Item = &str> {
        self.buildings.keys().map(String::as_str)
    }

    /// Gets all the buildings sorted by their identifier.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    pub fn full_name(&self, id: &str) -> Option<&str> {
        self.building(id).map(|building| building.name.as_str())
    }

    pub fn location_of(&self, id: &str) -> Option<Point> {
        self.building(id).map(|building| building.location)
    }

    pub const fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    fn lookup(&self, id: &str) -> Result<&Building, RouteError> {
        self.building(id)
            .ok_or_else(|| RouteError::UnknownBuilding(id.to_owned()))
    }
}
