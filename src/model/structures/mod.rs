pub mod fixture;
pub mod processing;
pub mod target;
