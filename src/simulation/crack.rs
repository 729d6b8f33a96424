//! Crack artifact generation
//!
//! Cracks are ephemeral: the full set is rebuilt every time the generator
//! runs and is never merged with a previous tick's output. Randomness is
//! confined to surface-crack segment length so tests can pin down counts
//! and severities against a seeded RNG.

use rand::Rng;
use std::f32::consts::TAU;

use super::types::{CrackId, LoadPoint, Position, SimId};

/// Visual class of a crack, from cosmetic to load-bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackKind {
    Surface,
    Structural,
    Critical,
}

/// A single crack artifact handed to the renderer
#[derive(Debug, Clone)]
pub struct CrackData {
    pub id: CrackId,
    /// Polyline vertices in world coordinates
    pub points: Vec<Position>,
    /// 0.0 = hairline, 1.0 = fully open
    pub severity: f32,
    pub kind: CrackKind,
}

/// Half-length of a structural crack segment
const STRUCTURAL_CRACK_EXTENT: f32 = 1.0;

/// Half-length of a critical crack segment
const CRITICAL_CRACK_EXTENT: f32 = 0.5;

/// Generate the full crack set for one tick
///
/// Each load point contributes independently based on
/// `damage_level = 1 - integrity`:
/// - above 0.2: `floor(damage_level * 5)` surface cracks radiating from
///   the load position at evenly spaced angles
/// - above 0.5: one horizontal structural crack through the load position
/// - above 0.8: one vertical critical crack through the load position
pub fn generate<R: Rng>(loads: &[LoadPoint], integrity: f32, rng: &mut R) -> Vec<CrackData> {
    let damage_level = 1.0 - integrity;
    let mut cracks = Vec::new();
    let mut next_id = 0usize;

    for load in loads {
        if damage_level > 0.2 {
            let count = (damage_level * 5.0).floor() as usize;
            for i in 0..count {
                let angle = i as f32 / count as f32 * TAU;
                let length = (load.weight / 200.0) * damage_level * rng.random_range(0.5..1.0);
                cracks.push(CrackData {
                    id: alloc_id(&mut next_id),
                    points: vec![
                        load.position,
                        Position::new(
                            load.position.x + angle.cos() * length,
                            load.position.y,
                            load.position.z + angle.sin() * length,
                        ),
                    ],
                    severity: (damage_level * 1.5).min(1.0),
                    kind: CrackKind::Surface,
                });
            }
        }

        if damage_level > 0.5 {
            cracks.push(CrackData {
                id: alloc_id(&mut next_id),
                points: vec![
                    Position::new(
                        load.position.x - STRUCTURAL_CRACK_EXTENT,
                        load.position.y,
                        load.position.z,
                    ),
                    Position::new(
                        load.position.x + STRUCTURAL_CRACK_EXTENT,
                        load.position.y,
                        load.position.z,
                    ),
                ],
                severity: damage_level,
                kind: CrackKind::Structural,
            });
        }

        if damage_level > 0.8 {
            cracks.push(CrackData {
                id: alloc_id(&mut next_id),
                points: vec![
                    Position::new(
                        load.position.x,
                        load.position.y - CRITICAL_CRACK_EXTENT,
                        load.position.z,
                    ),
                    Position::new(
                        load.position.x,
                        load.position.y + CRITICAL_CRACK_EXTENT,
                        load.position.z,
                    ),
                ],
                severity: 1.0,
                kind: CrackKind::Critical,
            });
        }
    }

    cracks
}

/// Crack ids only need to be unique within one generated set
fn alloc_id(next: &mut usize) -> CrackId {
    let id = CrackId(SimId(*next));
    *next += 1;
    id
}
