//! Main simulation world that ties everything together
//!
//! This is the entry point for running the bridge simulation without any
//! rendering dependencies. Each tick: advance every vehicle, aggregate
//! manual and vehicle loads, classify damage, and regenerate cracks.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::crack;
use super::damage::{classify, DamageState};
use super::stats::SimulationStats;
use super::traffic::{TrafficRegistry, DEFAULT_FLEET};
use super::types::{
    BridgeType, LoadId, LoadKind, LoadPoint, Position, SimId, VehicleId,
    CRACK_INTEGRITY_THRESHOLD,
};
use super::vehicle::SimVehicle;

/// The main simulation world
pub struct SimWorld {
    /// Bridge archetype the capacity lookup runs against
    bridge_type: BridgeType,

    /// Staged archetype switch; applied at the start of the next tick
    pending_bridge_type: Option<BridgeType>,

    /// User-placed loads; persist until explicitly cleared
    manual_loads: Vec<LoadPoint>,

    /// All vehicle agents
    registry: TrafficRegistry,

    /// Next ID to assign
    next_id: usize,

    /// Simulation time
    pub time: f32,

    /// Optional seeded RNG for reproducible crack geometry
    rng: Option<StdRng>,

    /// Last computed damage snapshot; replaced wholesale every tick
    damage: DamageState,

    /// Total load behind the last damage snapshot
    total_load: f32,

    /// Run statistics
    pub stats: SimulationStats,
}

impl SimWorld {
    fn new_internal(bridge_type: BridgeType, rng: Option<StdRng>) -> Self {
        let mut world = Self {
            bridge_type,
            pending_bridge_type: None,
            manual_loads: Vec::new(),
            registry: TrafficRegistry::new(),
            next_id: 0,
            time: 0.0,
            rng,
            damage: DamageState::default(),
            total_load: 0.0,
            stats: SimulationStats::default(),
        };

        for &(kind, direction, start_x) in DEFAULT_FLEET {
            let id = VehicleId(world.next_sim_id());
            world.registry.spawn(id, kind, direction, start_x);
        }

        world
    }

    pub fn new(bridge_type: BridgeType) -> Self {
        Self::new_internal(bridge_type, None)
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(bridge_type: BridgeType, seed: u64) -> Self {
        Self::new_internal(bridge_type, Some(StdRng::seed_from_u64(seed)))
    }

    fn next_sim_id(&mut self) -> SimId {
        let id = SimId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Place a manual load at a world position
    ///
    /// Any position is accepted; physically meaningless placements simply
    /// contribute like any other point load.
    pub fn add_load(&mut self, position: Position, weight: f32) -> LoadId {
        let id = LoadId(self.next_sim_id());
        self.manual_loads.push(LoadPoint {
            id,
            position,
            weight,
            kind: LoadKind::Manual,
        });
        id
    }

    /// Remove all manual loads
    pub fn clear_loads(&mut self) {
        self.manual_loads.clear();
    }

    /// Switch the bridge archetype; takes effect at the next tick
    pub fn set_bridge_type(&mut self, bridge_type: BridgeType) {
        self.pending_bridge_type = Some(bridge_type);
    }

    pub fn bridge_type(&self) -> BridgeType {
        self.bridge_type
    }

    /// Main simulation tick
    pub fn tick(&mut self, delta_secs: f32) {
        if let Some(bridge_type) = self.pending_bridge_type.take() {
            self.bridge_type = bridge_type;
        }

        self.time += delta_secs;

        // Advance all vehicles against the shared registry
        let recycled = self
            .registry
            .update_all(delta_secs, self.time, self.bridge_type);

        // Aggregate static and dynamic loads
        let mut loads = self.manual_loads.clone();
        loads.extend(self.registry.span_load_points());
        let total_load: f32 = loads.iter().map(|l| l.weight).sum();

        // Classification is a pure function of the current total load;
        // removing load restores integrity immediately by design
        let mut damage = classify(self.bridge_type, total_load);

        if damage.overall_integrity < CRACK_INTEGRITY_THRESHOLD {
            let integrity = damage.overall_integrity;
            damage.cracks = match &mut self.rng {
                Some(rng) => crack::generate(&loads, integrity, rng),
                None => crack::generate(&loads, integrity, &mut rand::rng()),
            };
        }

        if damage.warning_level != self.damage.warning_level {
            info!(
                "Warning level changed: {:?} -> {:?} (load {:.0}, integrity {:.2})",
                self.damage.warning_level, damage.warning_level, total_load,
                damage.overall_integrity
            );
        }

        self.stats
            .record_tick(total_load, damage.warning_level, recycled);
        self.total_load = total_load;
        self.damage = damage;
    }

    /// Read-only snapshot of the current damage state
    ///
    /// Stable between ticks: crack randomness is embedded at generation
    /// time, so repeated reads return identical data.
    pub fn damage_state(&self) -> &DamageState {
        &self.damage
    }

    /// Snapshot of all vehicles for rendering and analytics, sorted by id
    pub fn vehicles(&self) -> Vec<SimVehicle> {
        self.registry.snapshot()
    }

    /// Total load behind the last damage snapshot
    pub fn total_load(&self) -> f32 {
        self.total_load
    }

    /// Weight of vehicles currently on the span
    pub fn dynamic_load(&self) -> f32 {
        self.registry.dynamic_load()
    }

    /// Currently placed manual loads
    pub fn manual_loads(&self) -> &[LoadPoint] {
        &self.manual_loads
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Bridge Simulation Summary ===");
        println!("Time: {:.2}s, Bridge: {:?}", self.time, self.bridge_type);
        println!(
            "Total load: {:.0} (manual: {:.0}, vehicles on span: {:.0})",
            self.total_load,
            self.manual_loads.iter().map(|l| l.weight).sum::<f32>(),
            self.registry.dynamic_load()
        );
        println!(
            "Integrity: {:.2}, Warning: {:?}, Failure mode: {:?}, Cracks: {}",
            self.damage.overall_integrity,
            self.damage.warning_level,
            self.damage.failure_mode,
            self.damage.cracks.len()
        );

        println!("--- Vehicles ---");
        for vehicle in self.registry.snapshot() {
            println!(
                "  {:?} {:?}: x={:.1}, speed={:.2}, dir={:+.0}, on_structure={}",
                vehicle.kind,
                vehicle.id.0,
                vehicle.position.x,
                vehicle.speed,
                vehicle.direction,
                vehicle.on_structure
            );
        }
    }
}
