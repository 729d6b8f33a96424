//! Damage classification for the loaded structure
//!
//! Classification is a pure function of the current total load and the
//! bridge archetype. Nothing here accumulates between ticks: removing load
//! restores integrity immediately, which is the intended behavior of the
//! demo rather than a damage-history model.

use super::crack::CrackData;
use super::types::BridgeType;

/// UX-facing severity tier, correlated with but distinct from integrity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningLevel {
    Safe,
    Caution,
    Danger,
    Critical,
    Failure,
}

/// Dominant physical mechanism attributed to overload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    None,
    Bending,
    Shear,
    Buckling,
    Collapse,
}

/// Full structural health snapshot for one tick
#[derive(Debug, Clone)]
pub struct DamageState {
    pub cracks: Vec<CrackData>,
    /// 1.0 = undamaged, 0.0 = fully failed
    pub overall_integrity: f32,
    pub failure_mode: FailureMode,
    pub warning_level: WarningLevel,
}

impl Default for DamageState {
    fn default() -> Self {
        Self {
            cracks: Vec::new(),
            overall_integrity: 1.0,
            failure_mode: FailureMode::None,
            warning_level: WarningLevel::Safe,
        }
    }
}

/// Classify the structure under `total_load`
///
/// Four load bands relative to the archetype's capacity profile, plus the
/// outright-failure region above `max_load`. Cracks are left empty here;
/// the crack generator fills them in when integrity is low enough.
///
/// Note the integrity discontinuity at `max_load`: just above it the
/// formula restarts near 1.0 while the warning level jumps to Failure.
/// The mismatched cue (label says failure, number says nearly intact) is
/// carried over from the demo's visual design on purpose.
pub fn classify(bridge_type: BridgeType, total_load: f32) -> DamageState {
    let profile = bridge_type.capacity();
    let safe = profile.safe_load;
    let critical = profile.critical_load;
    let max = profile.max_load;

    if total_load <= safe * 0.8 {
        DamageState {
            cracks: Vec::new(),
            overall_integrity: 1.0,
            failure_mode: FailureMode::None,
            warning_level: WarningLevel::Safe,
        }
    } else if total_load <= safe {
        DamageState {
            cracks: Vec::new(),
            overall_integrity: 1.0,
            failure_mode: FailureMode::None,
            warning_level: WarningLevel::Caution,
        }
    } else if total_load <= critical {
        let integrity = 0.7 + 0.3 * (critical - total_load) / (critical - safe);
        DamageState {
            cracks: Vec::new(),
            overall_integrity: integrity,
            failure_mode: FailureMode::None,
            warning_level: WarningLevel::Danger,
        }
    } else if total_load <= max {
        let integrity = 0.3 + 0.7 * (max - total_load) / (max - critical);
        DamageState {
            cracks: Vec::new(),
            overall_integrity: integrity,
            failure_mode: overload_failure_mode(bridge_type),
            warning_level: WarningLevel::Critical,
        }
    } else {
        let integrity = (1.0 - (total_load - max) / max).max(0.0);
        DamageState {
            cracks: Vec::new(),
            overall_integrity: integrity,
            failure_mode: FailureMode::Collapse,
            warning_level: WarningLevel::Failure,
        }
    }
}

/// Which mechanism dominates when an archetype is overloaded past critical
fn overload_failure_mode(bridge_type: BridgeType) -> FailureMode {
    match bridge_type {
        BridgeType::Beam => FailureMode::Bending,
        BridgeType::Truss => FailureMode::Buckling,
        BridgeType::Arch => FailureMode::Shear,
    }
}
