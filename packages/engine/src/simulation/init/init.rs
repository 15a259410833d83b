use std::collections::HashSet;

use crate::core::math::Vec3;
use crate::domain::config::SimulationConfig;
use crate::domain::level::LevelLayout;
use crate::systems::body::{Body, Placement};
use crate::systems::collision::{CollisionShape, ResolveParams};

use super::aim::AimState;
use super::perf_stats::PerfStats;
use super::random::random_spin_axis;
use super::{Column, RenderBuffers, TanksCore};

pub(super) fn create_core(config: SimulationConfig, layout: LevelLayout) -> TanksCore {
    let mut rng_state = layout.seed;
    let columns = build_columns(&layout, &mut rng_state);
    let bricks: usize = columns.iter().map(Vec::len).sum();

    TanksCore {
        resolve: ResolveParams::from(&config),
        collider: build_collider(&config),
        config,
        layout,
        columns,
        free_bodies: Vec::new(),
        projectiles: Vec::new(),
        free_body_hits: HashSet::new(),
        aim: AimState::default(),
        time_accumulator: 0.0,
        t: 0.0,
        steps_taken: 0,
        rng_state,
        cleared_announced: false,
        cap_warned: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers {
            transforms: Vec::with_capacity(bricks * 16),
            handles: Vec::with_capacity(bricks * 2),
        },
    }
}

pub(super) fn build_collider(config: &SimulationConfig) -> CollisionShape {
    CollisionShape::for_kind(config.collider, config.sphere_subdivisions, config.collider_leeway)
}

/// Stack each column bottom-up from the layout
pub(super) fn build_columns(layout: &LevelLayout, rng_state: &mut u32) -> Vec<Column> {
    layout
        .column_heights()
        .iter()
        .enumerate()
        .map(|(c, &height)| {
            (0..height)
                .map(|row| {
                    let spin_axis = if layout.randomize_spin {
                        random_spin_axis(rng_state)
                    } else {
                        Vec3::new(1.0, 0.0, 0.0)
                    };
                    Body::new(
                        layout.brick_shape,
                        layout.brick_material,
                        layout.brick_size,
                        Placement::at(layout.brick_location(c as u32, row)).with_spin(0.0, spin_axis),
                    )
                })
                .collect()
        })
        .collect()
}
