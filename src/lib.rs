//! Monsim - Persistent Virtual Pet Simulation Engine

pub mod care;
pub mod core;
pub mod entity;
pub mod evolution;
pub mod lifecycle;
pub mod simulation;
pub mod training;
