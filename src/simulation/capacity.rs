//! Static load capacity table for the bridge archetypes
//!
//! Each archetype carries compiled-in thresholds. The ordering invariant
//! `safe_load < critical_load < max_load` is what keeps the damage
//! classifier's band interpolation free of zero-width divisions.

use super::types::BridgeType;

/// Load thresholds for one bridge archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeCapacityProfile {
    /// Load beyond which the structure is in outright failure
    pub max_load: f32,
    /// Load the structure carries with no visible distress
    pub safe_load: f32,
    /// Load at which damage becomes critical
    pub critical_load: f32,
}

const TRUSS_CAPACITY: BridgeCapacityProfile = BridgeCapacityProfile {
    max_load: 1800.0,
    safe_load: 1200.0,
    critical_load: 1500.0,
};

const ARCH_CAPACITY: BridgeCapacityProfile = BridgeCapacityProfile {
    max_load: 2400.0,
    safe_load: 1600.0,
    critical_load: 2000.0,
};

const BEAM_CAPACITY: BridgeCapacityProfile = BridgeCapacityProfile {
    max_load: 1200.0,
    safe_load: 800.0,
    critical_load: 1000.0,
};

impl BridgeType {
    /// Look up the capacity profile for this archetype
    pub fn capacity(&self) -> BridgeCapacityProfile {
        match self {
            BridgeType::Truss => TRUSS_CAPACITY,
            BridgeType::Arch => ARCH_CAPACITY,
            BridgeType::Beam => BEAM_CAPACITY,
        }
    }
}
