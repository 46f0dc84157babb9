pub mod states;
pub mod params;
pub mod geometry;
pub mod potential;
pub mod grid;
pub mod scenario;
pub mod sampler;
