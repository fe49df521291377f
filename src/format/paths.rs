use std::io::BufRead;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::format::{DatasetLines, parse_number};
use crate::{DatasetError, Length, Point};

/// For each location (key) the locations it is directly connected to, each one with the length
/// of every path segment leading to it.
pub type Adjacency = FxHashMap<Point, FxHashMap<Point, FxHashSet<Length>>>;

/// Reads the path segments dataset.
///
/// Every location is listed on its own line as a pair of coordinates, followed by one tab
/// indented line for each location it is connected to by a path segment, with the segment length:
///
/// ```text
/// 2259.7112,1715.5273
/// 	2257.0,1700.0: 15.7296
/// 	2270.5,1730.25: 18.5
/// 2257.0,1700.0
/// 	2259.7112,1715.5273: 15.7296
/// ```
///
/// Segments are directed; the same pair of locations can be connected by multiple segments.
pub fn read_paths(reader: impl BufRead) -> Result<Adjacency, DatasetError> {
    let mut paths = Adjacency::default();
    let mut current: Option<Point> = None;
    let mut segments = 0;

    for line in DatasetLines::new(reader) {
        let (number, line) = line?;

        if let Some(segment) = line.strip_prefix('\t') {
            let Some(from) = current else {
                return Err(DatasetError::OrphanSegment { line: number });
            };

            let (to, length) = parse_segment(segment, number)?;
            paths
                .entry(from)
                .or_default()
                .entry(to)
                .or_default()
                .insert(length);
            segments += 1;
        } else {
            let location = parse_point(&line, number)?;
            paths.entry(location).or_default();
            current = Some(location);
        }
    }

    debug!("Loaded {segments} path segments from {} locations", paths.len());
    Ok(paths)
}

/// Parses `x,y: length`.
fn parse_segment(segment: &str, line: usize) -> Result<(Point, Length), DatasetError> {
    let Some((point, length)) = segment.split_once(':') else {
        return Err(DatasetError::MissingFields {
            line,
            content: segment.trim().to_owned(),
        });
    };

    let length = parse_number(length, line)?;
    if length < 0.0 {
        return Err(DatasetError::NegativeDistance { line });
    }

    Ok((parse_point(point, line)?, Length::from_feet(length)))
}

/// Parses `x,y`.
fn parse_point(point: &str, line: usize) -> Result<Point, DatasetError> {
    let Some((x, y)) = point.split_once(',') else {
        return Err(DatasetError::MissingFields {
            line,
            content: point.trim().to_owned(),
        });
    };

    Ok(Point::new(parse_number(x, line)?, parse_number(y, line)?))
}
