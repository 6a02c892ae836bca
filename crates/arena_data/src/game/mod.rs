pub mod coord;
pub mod direction;
pub mod region;
