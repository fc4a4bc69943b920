//! Tile-grid fire hazard simulation: ignition, fuel-driven growth,
//! probabilistic spread to adjacent tiles, extinguishing, and expiration,
//! with side effects on occupants and flammable liquid puddles.

pub mod cli;
pub mod config;
pub mod simulation;
pub mod world;
