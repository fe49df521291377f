#![allow(dead_code)]

use std::sync::LazyLock;

use campus_paths::{CampusMap, Point};

/// ```text
///  CSE (100,100) ==150,170==> (250,100) <--150--> MGH (400,100)
///        ^                        ^                    ^
///        | 310                    |  335.4102          | 300
///        v                        +--------------+     v
///  KNE (100,400) <-------300--------------------> ODE (400,400)
///
///  ISL (900,900) <--50--> (950,900)
/// ```
pub const BUILDINGS: &str = "\
# id\tname\tx\ty
CSE\tPaul G. Allen Center for Computer Science & Engineering\t100\t100
MGH\tMary Gates Hall\t400\t100
ODE\tOdegaard Undergraduate Library\t400\t400
KNE\tKane Hall\t100\t400
ISL\tIsland Pavilion\t900\t900
";

pub const PATHS: &str = "\
# campus paths
100,100
\t250,100: 150
\t250,100: 170
\t100,400: 310
250,100
\t100,100: 150
\t400,100: 150
\t400,400: 335.4102
400,100
\t250,100: 150
\t400,400: 300
400,400
\t400,100: 300
\t100,400: 300
\t250,100: 335.4102

100,400
\t100,100: 310
\t400,400: 300
900,900
\t950,900: 50
950,900
\t900,900: 50
";

pub const CSE: Point = Point::new(100.0, 100.0);
pub const CROSSING: Point = Point::new(250.0, 100.0);
pub const MGH: Point = Point::new(400.0, 100.0);
pub const ODE: Point = Point::new(400.0, 400.0);
pub const KNE: Point = Point::new(100.0, 400.0);

pub static CAMPUS_MAP: LazyLock<CampusMap> = LazyLock::new(|| {
    CampusMap::from_readers(BUILDINGS.as_bytes(), PATHS.as_bytes())
        .unwrap_or_else(|e| panic!("{e}"))
});
