pub mod config;
pub mod error;
pub mod ocean;
pub mod organism;
pub mod render;
pub mod simulation;
pub mod stats;
