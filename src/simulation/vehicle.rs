//! Vehicle movement logic for the traffic stream
//!
//! Each vehicle runs a car-following controller once per tick: sense the
//! nearest leader in its lane, pick a target speed from piecewise braking
//! bands, integrate position along the track, and recycle at the track
//! bounds. Vehicles are never destroyed, only repositioned.

use ordered_float::OrderedFloat;
use std::collections::HashMap;

use super::types::{
    approach, BridgeType, Position, VehicleId, VehicleKind, LANE_OFFSET, LANE_TOLERANCE,
    LEADER_SIGHT_DISTANCE, ON_STRUCTURE_SPEED_FACTOR, SPAN_HALF_LENGTH, TRACK_LIMIT,
};

/// Result of a vehicle update indicating what happened this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleUpdateResult {
    /// Vehicle kept driving along the track
    Continue,
    /// Vehicle passed the track limit and was wrapped to the opposite rail
    Recycled,
}

/// Vertical lerp rate multiplier toward the deck surface
const DECK_FOLLOW_RATE: f32 = 5.0;

/// Lane-keeping lerp rate in free traffic
const LANE_KEEP_RATE: f32 = 2.0;

/// Lane-keeping lerp rate with a leader inside the safe distance
const LANE_KEEP_RATE_CONGESTED: f32 = 4.0;

/// Rise of the arch deck at midspan above the approach level
const ARCH_DECK_RISE: f32 = 1.5;

/// An autonomous vehicle in the traffic stream
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pub id: VehicleId,
    pub position: Position,
    /// Travel direction along the track axis: +1.0 or -1.0
    pub direction: f32,
    pub kind: VehicleKind,
    /// Weight contributed to the structure while on the span
    pub weight: f32,
    /// Current speed, kept for analytics and rendering
    pub speed: f32,
    /// Lane center this vehicle steers toward
    pub lane_target_z: f32,
    /// Whether the vehicle is currently within the structure span
    pub on_structure: bool,
}

impl SimVehicle {
    pub fn new(id: VehicleId, kind: VehicleKind, direction: f32, start_x: f32) -> Self {
        let lane_target_z = direction * LANE_OFFSET;
        Self {
            id,
            position: Position::new(start_x, 0.0, lane_target_z),
            direction,
            kind,
            weight: kind.weight(),
            speed: 0.0,
            lane_target_z,
            on_structure: start_x.abs() <= SPAN_HALF_LENGTH,
        }
    }

    /// Advance this vehicle by one tick
    ///
    /// `others` is the rest of the registry; for agents iterated earlier
    /// this tick it already holds their updated positions, which is the
    /// intended (order-dependent) behavior of the model.
    pub fn update(
        &mut self,
        delta_secs: f32,
        elapsed: f32,
        bridge_type: BridgeType,
        others: &HashMap<VehicleId, SimVehicle>,
    ) -> VehicleUpdateResult {
        let leader_distance = self.find_leader_distance(others);

        self.speed = self.target_speed(elapsed, leader_distance);

        let new_x = self.position.x + self.direction * self.speed * delta_secs;

        if new_x.abs() > TRACK_LIMIT {
            // Wrap to the start of the opposite rail for this direction
            let recycled_x = -TRACK_LIMIT * self.direction;
            self.position.x = recycled_x;
            self.position.y = deck_height(bridge_type, recycled_x);
            self.on_structure = false;
            return VehicleUpdateResult::Recycled;
        }

        self.position.x = new_x;
        self.position.y = approach(
            self.position.y,
            deck_height(bridge_type, new_x),
            DECK_FOLLOW_RATE * delta_secs,
        );

        // Lane keeping tightens when a leader is close
        let lane_rate = match leader_distance {
            Some(d) if d < self.kind.safe_distance() => LANE_KEEP_RATE_CONGESTED,
            _ => LANE_KEEP_RATE,
        };
        self.position.z = approach(self.position.z, self.lane_target_z, lane_rate * delta_secs);

        self.on_structure = new_x.abs() <= SPAN_HALF_LENGTH;
        VehicleUpdateResult::Continue
    }

    /// Distance to the nearest same-lane, same-direction vehicle ahead
    ///
    /// Distances are measured along the travel direction; anything beyond
    /// the sight horizon is ignored and the vehicle drives free.
    fn find_leader_distance(&self, others: &HashMap<VehicleId, SimVehicle>) -> Option<f32> {
        others
            .values()
            .filter(|other| {
                other.direction == self.direction
                    && (other.position.z - self.position.z).abs() < LANE_TOLERANCE
            })
            .filter_map(|other| {
                let ahead = (other.position.x - self.position.x) * self.direction;
                (ahead > 0.0 && ahead < LEADER_SIGHT_DISTANCE).then_some(OrderedFloat(ahead))
            })
            .min()
            .map(|d| d.into_inner())
    }

    /// Car-following speed law
    fn target_speed(&self, elapsed: f32, leader_distance: Option<f32>) -> f32 {
        let base = self.kind.base_speed() + self.speed_jitter(elapsed);

        let follow_factor = match leader_distance {
            Some(d) => following_factor(d, self.kind.safe_distance()),
            None => 1.0,
        };

        let structure_factor = if self.on_structure {
            ON_STRUCTURE_SPEED_FACTOR
        } else {
            1.0
        };

        base * follow_factor * structure_factor * weather_factor(elapsed)
    }

    /// Small deterministic sinusoidal wobble in the base speed
    ///
    /// Phase is derived from the vehicle id so the fleet doesn't oscillate
    /// in lockstep.
    fn speed_jitter(&self, elapsed: f32) -> f32 {
        let (amplitude, frequency) = match self.kind {
            VehicleKind::Car => (0.15, 1.1),
            VehicleKind::Bus => (0.10, 0.8),
            VehicleKind::Truck => (0.08, 0.7),
        };
        let phase = self.id.0 .0 as f32 * 0.7;
        amplitude * (elapsed * frequency + phase).sin()
    }
}

/// Piecewise speed factor over leader distance, in units of safe distance
///
/// Bands, nearest first: emergency stop, heavy braking, a linear ramp of
/// moderate braking, a linear ramp of cautious following, then normal
/// following out to 2.5x safe distance, then free driving.
fn following_factor(distance: f32, safe: f32) -> f32 {
    if distance < 0.3 * safe {
        0.1
    } else if distance < 0.6 * safe {
        0.2
    } else if distance < 1.0 * safe {
        0.2 + 0.4 * (distance - 0.3 * safe) / (0.7 * safe)
    } else if distance < 1.5 * safe {
        0.6 + 0.3 * (distance - 1.0 * safe) / (0.5 * safe)
    } else if distance < 2.5 * safe {
        0.9
    } else {
        1.0
    }
}

/// Global speed modulation standing in for wind and weather, within +/-5%
pub fn weather_factor(elapsed: f32) -> f32 {
    1.0 + 0.05 * (elapsed * 0.25).sin()
}

/// Height of the drivable surface at track coordinate `x`
///
/// The arch deck bows upward inside the span; truss and beam decks are
/// flat, as are the approach roads on either side.
pub fn deck_height(bridge_type: BridgeType, x: f32) -> f32 {
    if bridge_type == BridgeType::Arch && x.abs() <= SPAN_HALF_LENGTH {
        let t = x / SPAN_HALF_LENGTH;
        ARCH_DECK_RISE * (1.0 - t * t)
    } else {
        0.0
    }
}
