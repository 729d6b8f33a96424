//! Standalone bridge simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of any rendering layer. It can be tested via console
//! without needing to boot up the full demo.

mod capacity;
mod crack;
mod damage;
mod stats;
mod traffic;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use capacity::BridgeCapacityProfile;
#[allow(unused_imports)]
pub use crack::{generate as generate_cracks, CrackData, CrackKind};
#[allow(unused_imports)]
pub use damage::{classify, DamageState, FailureMode, WarningLevel};
#[allow(unused_imports)]
pub use stats::SimulationStats;
#[allow(unused_imports)]
pub use traffic::{TrafficRegistry, DEFAULT_FLEET};
#[allow(unused_imports)]
pub use types::{
    BridgeType, CrackId, LoadId, LoadKind, LoadPoint, Position, SimId, VehicleId, VehicleKind,
    CRACK_INTEGRITY_THRESHOLD, LANE_OFFSET, LANE_TOLERANCE, LEADER_SIGHT_DISTANCE,
    ON_STRUCTURE_SPEED_FACTOR, SPAN_HALF_LENGTH, TRACK_LIMIT,
};
#[allow(unused_imports)]
pub use vehicle::{deck_height, weather_factor, SimVehicle, VehicleUpdateResult};
pub use world::SimWorld;
