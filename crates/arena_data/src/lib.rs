pub mod display;
pub mod game;
pub mod math;
