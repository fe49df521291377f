use std::f64::consts::PI;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use approx::AbsDiffEq;
use ordered_float::OrderedFloat;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Walking distance measured in feet.
///
/// Distances are totally ordered and hashable so they can be used both as graph edge labels and
/// as the accumulated cost of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(OrderedFloat<f64>);

impl Length {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const MAX: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_feet(feet: f64) -> Self {
        Self(OrderedFloat(feet))
    }

    pub const fn feet(&self) -> f64 {
        self.0.0
    }

    /// Rounds the distance to the closest whole foot, halfway distances are rounded up.
    pub fn round(&self) -> Self {
        Self::from_feet(self.feet().round())
    }
}

impl Add for Length {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, length| acc + length)
    }
}

impl AbsDiffEq for Length {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.feet().abs_diff_eq(&other.feet(), epsilon)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} feet", self.round().feet())
    }
}

/// Pixel coordinate on the campus map.
/// The origin is the upper left corner of the map, x grows to the right and y grows downwards.
///
/// Equality is exact so that points can be used as graph vertices: two points only identify the
/// same location if their components are bitwise equal (except for the sign of zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    pub const fn x(&self) -> f64 {
        self.x.0
    }

    pub const fn y(&self) -> f64 {
        self.y.0
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x().abs_diff_eq(&other.x(), epsilon) && self.y().abs_diff_eq(&other.y(), epsilon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // adding zero turns -0 into 0
        write!(f, "({}, {})", self.x().round() + 0.0, self.y().round() + 0.0)
    }
}

#[cfg(feature = "geo")]
impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

#[cfg(feature = "geo")]
impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        geo::coord! { x: point.x(), y: point.y() }
    }
}

/// One of the eight 45° compass sectors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Direction {
    #[strum(serialize = "N")]
    North,
    #[strum(serialize = "NE")]
    NorthEast,
    #[strum(serialize = "E")]
    East,
    #[strum(serialize = "SE")]
    SouthEast,
    #[strum(serialize = "S")]
    South,
    #[strum(serialize = "SW")]
    SouthWest,
    #[strum(serialize = "W")]
    West,
    #[strum(serialize = "NW")]
    NorthWest,
}

impl Direction {
    /// Gets the compass direction to follow to go from one point to another.
    ///
    /// The map y axis grows downwards, therefore it is inverted before computing the angle.
    pub fn between(from: Point, to: Point) -> Self {
        let dx = to.x() - from.x();
        let dy = from.y() - to.y();
        Self::from_angle(dy.atan2(dx))
    }

    /// Gets the compass sector of an angle in radians within [-π, π], where 0 points East and π/2
    /// points North.
    ///
    /// Sector boundaries sit at odd multiples of π/8; an angle that falls exactly on a boundary
    /// belongs to the sector it closes: 7π/8 is North-West, π/8 is East and -7π/8 is West.
    pub fn from_angle(theta: f64) -> Self {
        const SECTORS: [(f64, Direction); 8] = [
            (-7.0, Direction::West),
            (-5.0, Direction::SouthWest),
            (-3.0, Direction::South),
            (-1.0, Direction::SouthEast),
            (1.0, Direction::East),
            (3.0, Direction::NorthEast),
            (5.0, Direction::North),
            (7.0, Direction::NorthWest),
        ];

        SECTORS
            .iter()
            .find(|(bound, _)| theta <= bound * PI / 8.0)
            .map_or(Self::West, |&(_, direction)| direction)
    }
}

/// A named location on the campus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Building {
    /// Short identifier used to look the building up (e.g. "CSE").
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Location of the building entrance on the map.
    pub location: Point,
}

impl Building {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Point) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }
}
