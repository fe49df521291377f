use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::format::{DatasetLines, parse_number};
use crate::{Building, DatasetError, Point};

/// Reads the buildings dataset, returning the buildings sorted by their identifier.
///
/// Each line contains the building identifier, its full name, and the x and y coordinates of the
/// building, separated by a single tab:
///
/// ```text
/// # id	name	x	y
/// CSE	Paul G. Allen Center for Computer Science & Engineering	2259.7112	1715.5273
/// ```
///
/// A building listed twice replaces the previous record.
pub fn read_buildings(reader: impl BufRead) -> Result<BTreeMap<String, Building>, DatasetError> {
    let mut buildings = BTreeMap::new();

    for line in DatasetLines::new(reader) {
        let (number, line) = line?;

        let fields: Vec<&str> = line.split('\t').collect();
        let &[id, name, x, y] = fields.as_slice() else {
            return Err(DatasetError::MissingFields {
                line: number,
                content: line.clone(),
            });
        };

        let location = Point::new(parse_number(x, number)?, parse_number(y, number)?);
        let building = Building::new(id.trim(), name.trim(), location);

        if let Some(previous) = buildings.insert(building.id.clone(), building) {
            warn!("Building {} redefined at line {number}", previous.id);
        }
    }

    debug!("Loaded {} buildings", buildings.len());
    Ok(buildings)
}
