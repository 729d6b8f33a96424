//! Bridge Simulation Library
//!
//! The simulation core of an interactive bridge-engineering demo: vehicle
//! traffic with a car-following model, load aggregation, and damage
//! classification. Runs headless; rendering layers consume its snapshots.

pub mod simulation;
