//! Readers of the line oriented text datasets that describe a campus.
//!
//! Both formats ignore blank lines and lines starting with `#`.

mod buildings;
mod paths;

use std::io::BufRead;

use crate::DatasetError;

pub use buildings::read_buildings;
pub use paths::{Adjacency, read_paths};

/// Iterates over the meaningful lines of a dataset together with their (1-based) line number.
struct DatasetLines<R> {
    lines: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> DatasetLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }
}

impl<R: BufRead> Iterator for DatasetLines<R> {
    type Item = Result<(usize, String), DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.number += 1;

            let line = line.trim_end_matches('\r');
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            return Some(Ok((self.number, line.to_owned())));
        }
    }
}

fn parse_number(field: &str, line: usize) -> Result<f64, DatasetError> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DatasetError::InvalidNumber {
            line,
            content: field.to_owned(),
        })
}
