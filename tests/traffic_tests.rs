//! Car-following model and registry validation

use bridge_sim::simulation::{
    BridgeType, SimId, TrafficRegistry, VehicleId, VehicleKind, LoadKind, SPAN_HALF_LENGTH,
    TRACK_LIMIT,
};

fn vehicle_id(raw: usize) -> VehicleId {
    VehicleId(SimId(raw))
}

#[test]
fn test_lone_vehicle_reaches_base_speed() {
    let mut registry = TrafficRegistry::new();
    registry.spawn(vehicle_id(0), VehicleKind::Car, 1.0, -30.0);

    let delta = 0.1;
    let mut elapsed = 0.0;
    for _ in 0..10 {
        elapsed += delta;
        registry.update_all(delta, elapsed, BridgeType::Truss);
    }

    let car = registry.get(vehicle_id(0)).expect("car should persist");
    assert!(!car.on_structure, "car should still be on the approach");

    // Base 3.2 with jitter amplitude 0.15 and weather within +/-5%
    let lower = (3.2 - 0.15) * 0.95;
    let upper = (3.2 + 0.15) * 1.05;
    assert!(
        car.speed >= lower && car.speed <= upper,
        "free-driving speed {:.3} outside [{:.3}, {:.3}]",
        car.speed,
        lower,
        upper
    );
}

#[test]
fn test_slow_leader_reduces_follower_speed() {
    let delta = 0.05;
    let elapsed = delta;

    let mut free = TrafficRegistry::new();
    free.spawn(vehicle_id(0), VehicleKind::Car, 1.0, 20.0);
    free.update_all(delta, elapsed, BridgeType::Truss);
    let free_speed = free.get(vehicle_id(0)).unwrap().speed;

    // Same car, same clock, but a truck two units ahead in the same lane
    let mut congested = TrafficRegistry::new();
    congested.spawn(vehicle_id(0), VehicleKind::Car, 1.0, 20.0);
    congested.spawn(vehicle_id(1), VehicleKind::Truck, 1.0, 22.0);
    congested.update_all(delta, elapsed, BridgeType::Truss);
    let follower_speed = congested.get(vehicle_id(0)).unwrap().speed;

    assert!(
        follower_speed < free_speed,
        "leader at 2.0 units should brake the follower ({:.3} vs {:.3})",
        follower_speed,
        free_speed
    );
}

#[test]
fn test_oncoming_vehicle_is_not_a_leader() {
    let delta = 0.05;
    let elapsed = delta;

    let mut free = TrafficRegistry::new();
    free.spawn(vehicle_id(0), VehicleKind::Car, 1.0, 20.0);
    free.update_all(delta, elapsed, BridgeType::Truss);
    let free_speed = free.get(vehicle_id(0)).unwrap().speed;

    // An oncoming vehicle occupies the other lane and is ignored
    let mut oncoming = TrafficRegistry::new();
    oncoming.spawn(vehicle_id(0), VehicleKind::Car, 1.0, 20.0);
    oncoming.spawn(vehicle_id(1), VehicleKind::Car, -1.0, 22.0);
    oncoming.update_all(delta, elapsed, BridgeType::Truss);
    let speed = oncoming.get(vehicle_id(0)).unwrap().speed;

    assert!((speed - free_speed).abs() < 1e-6);
}

#[test]
fn test_vehicle_recycles_at_track_limit() {
    let mut registry = TrafficRegistry::new();
    registry.spawn(vehicle_id(0), VehicleKind::Car, 1.0, 34.0);
    registry.spawn(vehicle_id(1), VehicleKind::Car, -1.0, -34.0);

    // A large delta pushes both past the limit within one tick
    let recycled = registry.update_all(1.0, 1.0, BridgeType::Truss);
    assert_eq!(recycled, 2);

    let forward = registry.get(vehicle_id(0)).unwrap();
    assert_eq!(forward.position.x, -TRACK_LIMIT);
    assert!(!forward.on_structure);

    let backward = registry.get(vehicle_id(1)).unwrap();
    assert_eq!(backward.position.x, TRACK_LIMIT);
    assert!(!backward.on_structure);
}

#[test]
fn test_on_structure_flag_tracks_span() {
    let mut registry = TrafficRegistry::new();
    registry.spawn(vehicle_id(0), VehicleKind::Car, 1.0, SPAN_HALF_LENGTH - 1.0);

    registry.update_all(0.05, 0.05, BridgeType::Truss);
    assert!(registry.get(vehicle_id(0)).unwrap().on_structure);

    // Drive it well past the far end of the span
    for i in 1..20 {
        registry.update_all(0.2, 0.05 + i as f32 * 0.2, BridgeType::Truss);
    }
    assert!(!registry.get(vehicle_id(0)).unwrap().on_structure);
}

#[test]
fn test_dynamic_load_counts_only_span_vehicles() {
    let mut registry = TrafficRegistry::new();
    registry.spawn(vehicle_id(0), VehicleKind::Car, 1.0, 0.0);
    registry.spawn(vehicle_id(1), VehicleKind::Truck, 1.0, 20.0);
    registry.spawn(vehicle_id(2), VehicleKind::Bus, -1.0, -5.0);

    assert_eq!(
        registry.dynamic_load(),
        VehicleKind::Car.weight() + VehicleKind::Bus.weight()
    );

    let loads = registry.span_load_points();
    assert_eq!(loads.len(), 2);
    assert!(loads.iter().all(|l| l.kind == LoadKind::Vehicle));
    assert!(loads
        .iter()
        .all(|l| l.position.x.abs() <= SPAN_HALF_LENGTH));
}

#[test]
fn test_arch_deck_lifts_vehicles_inside_span() {
    let mut registry = TrafficRegistry::new();
    registry.spawn(vehicle_id(0), VehicleKind::Car, 1.0, -2.0);

    let mut elapsed = 0.0;
    for _ in 0..20 {
        elapsed += 0.05;
        registry.update_all(0.05, elapsed, BridgeType::Arch);
    }

    let car = registry.get(vehicle_id(0)).unwrap();
    assert!(
        car.position.y > 0.5,
        "arch deck should lift the vehicle near midspan, y={:.2}",
        car.position.y
    );
}
