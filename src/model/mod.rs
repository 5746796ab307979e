pub mod config;
pub mod constants;
pub mod crunch;
pub mod elo_model;
pub mod error;
pub mod rating_tracker;
pub mod rating_utils;
pub mod structures;
