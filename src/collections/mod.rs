pub use self::grid::{Coord, Grid};

mod grid;
