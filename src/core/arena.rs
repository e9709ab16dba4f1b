//=========================================================================
// Arena
//=========================================================================
//
// Imported terrain, placed in the world and registered with physics.
//
//=========================================================================

use glam::Vec3;
use log::info;

use crate::core::assets::{AssetSource, TerrainMesh};
use crate::core::capabilities::{Aabb, CollisionMask, PhysicsWorld};
use crate::core::config::ArenaConfig;
use crate::core::error::AssetLoadError;

/// Collision group of terrain bodies.
pub const TERRAIN_GROUP: CollisionMask = 1;

/// One placed terrain part and its physics handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaPart {
    pub name: String,
    pub bounds: Aabb,
    pub body: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    name: String,
    position: Vec3,
    scale: f32,
    parts: Vec<ArenaPart>,
}

impl Arena {
    /// Loads the terrain and registers one mass-0 body per sub-mesh.
    ///
    /// Each part is scaled about the model origin, then moved to the arena
    /// position.
    pub fn load(
        config: &ArenaConfig,
        assets: &mut dyn AssetSource,
        physics: &mut dyn PhysicsWorld,
    ) -> Result<Self, AssetLoadError> {
        let mesh = assets.load_terrain(&config.terrain_asset)?;
        Self::from_mesh(mesh, config, physics)
    }

    pub fn from_mesh(
        mesh: TerrainMesh,
        config: &ArenaConfig,
        physics: &mut dyn PhysicsWorld,
    ) -> Result<Self, AssetLoadError> {
        if mesh.parts.is_empty() {
            return Err(AssetLoadError::Empty { name: mesh.name });
        }

        let parts = mesh
            .parts
            .into_iter()
            .map(|part| {
                let bounds = part.bounds.scaled_then_offset(config.scale, config.position);
                let body = physics.add_static_body(&part.name, bounds, TERRAIN_GROUP);
                ArenaPart {
                    name: part.name,
                    bounds,
                    body,
                }
            })
            .collect::<Vec<_>>();

        info!("Arena '{}' placed: {} static bodies, scale {}", mesh.name, parts.len(), config.scale);
        Ok(Self {
            name: mesh.name,
            position: config.position,
            scale: config.scale,
            parts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn parts(&self) -> &[ArenaPart] {
        &self.parts
    }
}
