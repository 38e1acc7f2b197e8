//! Cartesian sampling grid.

mod cartesian;


pub use cartesian::{Axis, CartesianGrid, GridNode};
