//! World layout generation.
//!
//! Buildings and terrain derive every sample from the seeded hash in
//! [`crate::rng`], so they replay identically for a given (width, height,
//! seed). Loot counts and spawner building picks use an entropy source
//! instead: scavenging stays different run to run even on the same map.

use glam::Vec3;
use rand::prelude::*;
use thiserror::Error;

use sim_core::ZombieType;

use crate::rng::seeded_random;

/// Distance between building scan tiles, world units.
const BUILDING_TILE: u32 = 50;
/// Minimum hash sample for a tile to receive a building (~70% occupancy).
const BUILDING_THRESHOLD: f64 = 0.3;
/// Distance between terrain elevation samples, world units.
const TERRAIN_PITCH: u32 = 20;
/// Radius every spawner covers, world units.
const SPAWNER_RADIUS: f32 = 50.0;

/// Error from invalid world-generation input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldGenError {
    #[error("world dimensions must be positive (got {width}x{height})")]
    EmptyWorld { width: u32, height: u32 },
}

/// Structural subtype of a generated building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    House,
    Apartment,
}

/// Category of loot a building (and its loot sites) yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootType {
    Supermarket,
    Hospital,
    Police,
    Military,
    House,
}

/// A generated building footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: u32,
    pub position: Vec3,
    pub kind: BuildingKind,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub loot_type: LootType,
}

/// One loot pickup location, tied to its owning building.
#[derive(Debug, Clone, PartialEq)]
pub struct LootSite {
    pub position: Vec3,
    pub building_id: u32,
    pub loot_type: LootType,
}

/// A zombie spawn anchor produced by world generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerSite {
    pub position: Vec3,
    pub radius: f32,
    pub zombie_type: ZombieType,
    pub max_zombies: u32,
}

/// One terrain elevation sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainSample {
    pub x: f32,
    pub z: f32,
    pub elevation: f32,
}

/// Immutable snapshot of a generated world.
///
/// Produced once per seed and never mutated; consumers copy what they need.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldLayout {
    pub width: u32,
    pub height: u32,
    pub seed: i64,
    pub buildings: Vec<Building>,
    pub loot_sites: Vec<LootSite>,
    pub spawners: Vec<SpawnerSite>,
    pub terrain: Vec<TerrainSample>,
}

/// Loot category ladder over the tile hash sample.
fn select_loot_type(sample: f64) -> LootType {
    if sample < 0.2 {
        LootType::Supermarket
    } else if sample < 0.4 {
        LootType::Hospital
    } else if sample < 0.6 {
        LootType::Police
    } else if sample < 0.8 {
        LootType::Military
    } else {
        LootType::House
    }
}

/// Procedural world generator.
pub struct WorldGenerator {
    rng: StdRng,
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate a world layout. Buildings and terrain are pure functions of
    /// (width, height, seed); loot counts and spawner anchors draw from the
    /// generator's entropy rng.
    pub fn generate(
        &mut self,
        width: u32,
        height: u32,
        seed: i64,
    ) -> Result<WorldLayout, WorldGenError> {
        if width == 0 || height == 0 {
            return Err(WorldGenError::EmptyWorld { width, height });
        }

        let buildings = generate_buildings(width, height, seed);
        let loot_sites = self.generate_loot_sites(&buildings);
        let spawners = self.generate_spawners(&buildings);
        let terrain = generate_terrain(width, height, seed);

        log::debug!(
            "generated world {}x{} (seed {}): {} buildings, {} loot sites, {} spawners, {} terrain samples",
            width,
            height,
            seed,
            buildings.len(),
            loot_sites.len(),
            spawners.len(),
            terrain.len()
        );

        Ok(WorldLayout {
            width,
            height,
            seed,
            buildings,
            loot_sites,
            spawners,
            terrain,
        })
    }

    /// 3–7 loot drops per building, jittered within ±5 units of the footprint.
    fn generate_loot_sites(&mut self, buildings: &[Building]) -> Vec<LootSite> {
        let mut sites = Vec::new();

        for building in buildings {
            let item_count = 3 + self.rng.gen_range(0..5);
            for _ in 0..item_count {
                sites.push(LootSite {
                    position: Vec3::new(
                        building.position.x + (self.rng.gen::<f32>() - 0.5) * 10.0,
                        1.0,
                        building.position.z + (self.rng.gen::<f32>() - 0.5) * 10.0,
                    ),
                    building_id: building.id,
                    loot_type: building.loot_type,
                });
            }
        }

        sites
    }

    /// One spawner per five buildings, each anchored at a random building.
    /// Archetypes cycle by spawner index; capacity grows with the index.
    fn generate_spawners(&mut self, buildings: &[Building]) -> Vec<SpawnerSite> {
        let spawn_count = buildings.len() / 5;
        let mut spawners = Vec::with_capacity(spawn_count);

        for i in 0..spawn_count {
            let anchor = &buildings[self.rng.gen_range(0..buildings.len())];
            spawners.push(SpawnerSite {
                position: anchor.position,
                radius: SPAWNER_RADIUS,
                zombie_type: ZombieType::from_index(i),
                max_zombies: 5 + i as u32,
            });
        }

        spawners
    }
}

/// Scan the map at the building tile pitch and place a building wherever the
/// tile hash clears the threshold. Subtype, jitter, dimensions, and loot
/// category all derive from the same sample, so size, type, and placement
/// are correlated.
fn generate_buildings(width: u32, height: u32, seed: i64) -> Vec<Building> {
    let mut buildings = Vec::new();
    let mut id = 0;

    for x in (0..width).step_by(BUILDING_TILE as usize) {
        for z in (0..height).step_by(BUILDING_TILE as usize) {
            let sample = seeded_random((x as i64 * z as i64 + seed) as f64);
            if sample <= BUILDING_THRESHOLD {
                continue;
            }

            let kind = if sample > 0.7 {
                BuildingKind::House
            } else {
                BuildingKind::Apartment
            };
            let jitter = (sample * 30.0 - 15.0) as f32;

            buildings.push(Building {
                id,
                position: Vec3::new(x as f32 + jitter, 0.0, z as f32 + jitter),
                kind,
                width: 15.0 + sample as f32 * 10.0,
                height: 10.0 + sample as f32 * 8.0,
                depth: 15.0 + sample as f32 * 10.0,
                loot_type: select_loot_type(sample),
            });
            id += 1;
        }
    }

    buildings
}

/// Coarse elevation grid: one sample every [`TERRAIN_PITCH`] units, scaled
/// to a 0–5 unit height range.
fn generate_terrain(width: u32, height: u32, seed: i64) -> Vec<TerrainSample> {
    let mut terrain = Vec::new();

    for x in (0..width).step_by(TERRAIN_PITCH as usize) {
        for z in (0..height).step_by(TERRAIN_PITCH as usize) {
            let sample = seeded_random((x as i64 + z as i64 * width as i64 + seed) as f64);
            terrain.push(TerrainSample {
                x: x as f32,
                z: z as f32,
                elevation: (sample * 5.0) as f32,
            });
        }
    }

    terrain
}
