//! Core types for the bridge simulation
//!
//! These are standalone types that don't depend on any rendering layer.

/// A unique identifier for simulation entities
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimId(pub usize);

/// A wrapper type for vehicle IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(pub SimId);

/// A wrapper type for load point IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadId(pub SimId);

/// A wrapper type for crack IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CrackId(pub SimId);

/// The bridge archetype currently loaded in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeType {
    Truss,
    Arch,
    Beam,
}

/// Type of vehicle in the traffic stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
}

impl VehicleKind {
    /// Free-driving base speed in world units per second
    pub fn base_speed(&self) -> f32 {
        match self {
            VehicleKind::Car => 3.2,
            VehicleKind::Truck => 1.9,
            VehicleKind::Bus => 2.1,
        }
    }

    /// Distance at which a follower starts reacting to its leader
    pub fn safe_distance(&self) -> f32 {
        match self {
            VehicleKind::Car => 3.5,
            VehicleKind::Truck => 5.0,
            VehicleKind::Bus => 4.5,
        }
    }

    /// Weight contributed to the structure while on the span
    pub fn weight(&self) -> f32 {
        match self {
            VehicleKind::Car => 100.0,
            VehicleKind::Truck => 400.0,
            VehicleKind::Bus => 300.0,
        }
    }
}

/// How a load point came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Placed by a user click; persists until explicitly cleared
    Manual,
    /// Synthesized from an on-span vehicle; recomputed every tick
    Vehicle,
}

/// A point load acting on the structure
#[derive(Debug, Clone)]
pub struct LoadPoint {
    pub id: LoadId,
    pub position: Position,
    pub weight: f32,
    pub kind: LoadKind,
}

/// A 3D position in the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn lerp(&self, other: &Position, t: f32) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Move a scalar toward a target by a rate-limited fraction
///
/// The fraction is clamped to 1 so large deltas never overshoot.
pub fn approach(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction.min(1.0)
}

/// Half-length of the structure span; vehicles inside `[-SPAN, SPAN]` load it
pub const SPAN_HALF_LENGTH: f32 = 14.0;

/// Vehicles past this x magnitude are recycled to the opposite rail start
pub const TRACK_LIMIT: f32 = 35.0;

/// How far ahead a vehicle looks for a leader
pub const LEADER_SIGHT_DISTANCE: f32 = 12.0;

/// Two vehicles within this lateral distance share a lane
pub const LANE_TOLERANCE: f32 = 0.8;

/// Lateral offset of each lane center from the deck centerline
pub const LANE_OFFSET: f32 = 0.6;

/// Speed multiplier applied while a vehicle is on the span
pub const ON_STRUCTURE_SPEED_FACTOR: f32 = 0.9;

/// Crack generation only kicks in below this integrity
pub const CRACK_INTEGRITY_THRESHOLD: f32 = 0.8;
