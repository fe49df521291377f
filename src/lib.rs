#![doc = include_str!("../README.md")]

mod campus;
mod error;
mod format;
mod graph;
mod model;
mod routing;

pub use campus::{CampusGraph, CampusMap, Leg, Route};
pub use error::{DatasetError, GraphError, RouteError};
pub use format::{Adjacency, read_buildings, read_paths};
pub use graph::multigraph::LabeledMultigraph;
pub use graph::{DirectedGraph, Weight};
pub use model::{Building, Direction, Length, Point};
pub use routing::{ShortestPath, ShortestPathConfig, shortest_path, shortest_path_with};
