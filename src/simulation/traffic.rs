//! Vehicle registry and dynamic load aggregation
//!
//! The registry is the only shared mutable resource in the simulation. All
//! vehicle controllers within a tick read from it and write their own slot
//! back; iteration is in ascending id order so the (intentional) same-tick
//! staleness is at least deterministic.

use log::debug;
use std::collections::HashMap;

use super::types::{
    BridgeType, LoadId, LoadKind, LoadPoint, VehicleId, VehicleKind, SPAN_HALF_LENGTH,
};
use super::vehicle::{SimVehicle, VehicleUpdateResult};

/// Fixed starting fleet: (kind, direction, start x)
///
/// Entries are spaced so no vehicle starts inside another's safe distance.
pub const DEFAULT_FLEET: &[(VehicleKind, f32, f32)] = &[
    (VehicleKind::Car, 1.0, -32.0),
    (VehicleKind::Car, 1.0, -20.0),
    (VehicleKind::Truck, 1.0, -16.0),
    (VehicleKind::Car, 1.0, 6.0),
    (VehicleKind::Bus, -1.0, 30.0),
    (VehicleKind::Car, -1.0, 18.0),
    (VehicleKind::Truck, -1.0, 2.0),
    (VehicleKind::Car, -1.0, -12.0),
];

/// The shared collection of all vehicle agents
///
/// Invariant: exactly one authoritative record per vehicle id.
#[derive(Debug, Default)]
pub struct TrafficRegistry {
    vehicles: HashMap<VehicleId, SimVehicle>,
}

impl TrafficRegistry {
    pub fn new() -> Self {
        Self {
            vehicles: HashMap::new(),
        }
    }

    /// Add a vehicle to the registry
    pub fn spawn(&mut self, id: VehicleId, kind: VehicleKind, direction: f32, start_x: f32) {
        self.vehicles
            .insert(id, SimVehicle::new(id, kind, direction, start_x));
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: VehicleId) -> Option<&SimVehicle> {
        self.vehicles.get(&id)
    }

    /// Snapshot of all vehicles, sorted by id for stable consumption
    pub fn snapshot(&self) -> Vec<SimVehicle> {
        let mut vehicles: Vec<SimVehicle> = self.vehicles.values().cloned().collect();
        vehicles.sort_by_key(|v| v.id);
        vehicles
    }

    /// Advance every vehicle by one tick; returns the number of recycles
    ///
    /// Each vehicle is taken out of the map, updated against the rest of
    /// the registry, and written back by id. Vehicles updated earlier in
    /// the pass are visible at their new positions to later ones.
    pub fn update_all(&mut self, delta_secs: f32, elapsed: f32, bridge_type: BridgeType) -> usize {
        let mut vehicle_ids: Vec<VehicleId> = self.vehicles.keys().copied().collect();
        vehicle_ids.sort();

        let mut recycled = 0;
        for vehicle_id in vehicle_ids {
            if let Some(mut vehicle) = self.vehicles.remove(&vehicle_id) {
                let result = vehicle.update(delta_secs, elapsed, bridge_type, &self.vehicles);
                if result == VehicleUpdateResult::Recycled {
                    debug!(
                        "Vehicle {:?} recycled to x={:.1}",
                        vehicle_id.0, vehicle.position.x
                    );
                    recycled += 1;
                }
                self.vehicles.insert(vehicle_id, vehicle);
            }
        }
        recycled
    }

    /// Ephemeral load points for every vehicle currently on the span
    ///
    /// Rebuilt from scratch each tick and never stored; load ids reuse the
    /// vehicle's underlying sim id so they can't collide with manual loads.
    pub fn span_load_points(&self) -> Vec<LoadPoint> {
        let mut loads: Vec<LoadPoint> = self
            .vehicles
            .values()
            .filter(|v| v.position.x.abs() <= SPAN_HALF_LENGTH)
            .map(|v| LoadPoint {
                id: LoadId(v.id.0),
                position: v.position,
                weight: v.weight,
                kind: LoadKind::Vehicle,
            })
            .collect();
        loads.sort_by_key(|l| l.id);
        loads
    }

    /// Total weight of vehicles currently on the span
    pub fn dynamic_load(&self) -> f32 {
        self.vehicles
            .values()
            .filter(|v| v.position.x.abs() <= SPAN_HALF_LENGTH)
            .map(|v| v.weight)
            .sum()
    }
}
