use std::io::ErrorKind;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GraphError<N> {
    #[error("No such node in graph: {0:?}")]
    NoSuchNode(N),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("Unknown building: {0}")]
    UnknownBuilding(String),
    #[error("Cannot find route between {start} and {end}")]
    RouteNotFound { start: String, end: String },
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DatasetError {
    #[error("Dataset I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Missing tabs and/or data at line {line}: {content:?}")]
    MissingFields { line: usize, content: String },
    #[error("Invalid number at line {line}: {content:?}")]
    InvalidNumber { line: usize, content: String },
    #[error("Path segment without starting location at line {line}")]
    OrphanSegment { line: usize },
    #[error("Negative distance at line {line}")]
    NegativeDistance { line: usize },
}

impl From<std::io::Error> for DatasetError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
