//! Simulation tuning loaded from JSON
//!
//! Every field is optional; missing fields keep the scene defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DT: f32 = 1.0 / 20.0;
pub const DEFAULT_MAX_FRAME_TIME: f32 = 0.1;
pub const GRAVITY: f32 = 9.8;

pub const BODY_FLOOR_HEIGHT: f32 = -4.0;
pub const BODY_FLOOR_RESTITUTION: f32 = 0.8;
pub const PROJECTILE_FLOOR_HEIGHT: f32 = -9.0;
pub const PROJECTILE_FLOOR_RESTITUTION: f32 = 0.7;

pub const BRICK_MASS: f32 = 5.0;
pub const BALL_MASS: f32 = 20.0;
pub const POWER: f32 = 40.0;
pub const PROJECTILE_Z_KICK: f32 = -10.0;
pub const BOTTOM_BRICK_Z_DAMPING: f32 = 1.2;

pub const FREE_BODY_Z_DECAY: f32 = 1.004;
pub const FREE_BODY_X_DECAY: f32 = 1.002;
pub const FREE_BODY_ANGULAR_DECAY: f32 = 1.01;
pub const SETTLE_Z_THRESHOLD: f32 = 2.0;
pub const SETTLE_X_THRESHOLD: f32 = 1.0;

pub const COLLIDER_LEEWAY: f32 = 0.1;
pub const SPHERE_SUBDIVISIONS: u32 = 4;

/// How much sideways (x) motion a hit transfers.
///
/// The two wall scenes disagree here; `DampedCarry` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolveVariant {
    /// Brick takes 1/15 of the projectile's x velocity; projectile x stops.
    #[default]
    DampedCarry,
    /// Brick takes the projectile's full x velocity; projectile x is divided by 1.5.
    FullCarry,
}

impl ResolveVariant {
    pub fn brick_x_velocity(self, projectile_vx: f32) -> f32 {
        match self {
            ResolveVariant::DampedCarry => projectile_vx / 15.0,
            ResolveVariant::FullCarry => projectile_vx,
        }
    }

    pub fn projectile_x_velocity(self, projectile_vx: f32) -> f32 {
        match self {
            ResolveVariant::DampedCarry => 0.0,
            ResolveVariant::FullCarry => projectile_vx / 1.5,
        }
    }
}

/// Which analytic volume the scene probes against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColliderKind {
    #[default]
    Box,
    Sphere,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    pub dt: f32,
    pub time_scale: f32,
    pub max_frame_time: f32,
    pub gravity: f32,

    pub body_floor_height: f32,
    pub body_floor_restitution: f32,
    pub projectile_floor_height: f32,
    pub projectile_floor_restitution: f32,

    pub brick_mass: f32,
    pub ball_mass: f32,
    pub power: f32,
    pub projectile_z_kick: f32,
    pub bottom_brick_z_damping: f32,

    pub free_body_z_decay: f32,
    pub free_body_x_decay: f32,
    pub free_body_angular_decay: f32,
    pub settle_z_threshold: f32,
    pub settle_x_threshold: f32,

    pub resolve_variant: ResolveVariant,
    pub collider: ColliderKind,
    pub collider_leeway: f32,
    pub sphere_subdivisions: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            time_scale: 1.0,
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
            gravity: GRAVITY,
            body_floor_height: BODY_FLOOR_HEIGHT,
            body_floor_restitution: BODY_FLOOR_RESTITUTION,
            projectile_floor_height: PROJECTILE_FLOOR_HEIGHT,
            projectile_floor_restitution: PROJECTILE_FLOOR_RESTITUTION,
            brick_mass: BRICK_MASS,
            ball_mass: BALL_MASS,
            power: POWER,
            projectile_z_kick: PROJECTILE_Z_KICK,
            bottom_brick_z_damping: BOTTOM_BRICK_Z_DAMPING,
            free_body_z_decay: FREE_BODY_Z_DECAY,
            free_body_x_decay: FREE_BODY_X_DECAY,
            free_body_angular_decay: FREE_BODY_ANGULAR_DECAY,
            settle_z_threshold: SETTLE_Z_THRESHOLD,
            settle_x_threshold: SETTLE_X_THRESHOLD,
            resolve_variant: ResolveVariant::default(),
            collider: ColliderKind::default(),
            collider_leeway: COLLIDER_LEEWAY,
            sphere_subdivisions: SPHERE_SUBDIVISIONS,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(format!("dt must be positive and finite, got {}", self.dt));
        }
        if !(self.max_frame_time.is_finite() && self.max_frame_time > 0.0) {
            return Err(format!(
                "maxFrameTime must be positive and finite, got {}",
                self.max_frame_time
            ));
        }
        if !self.time_scale.is_finite() {
            return Err("timeScale must be finite".to_string());
        }
        if self.brick_mass <= 0.0 || self.ball_mass <= 0.0 {
            return Err(format!(
                "masses must be positive: brick={} ball={}",
                self.brick_mass, self.ball_mass
            ));
        }
        for (name, v) in [
            ("freeBodyZDecay", self.free_body_z_decay),
            ("freeBodyXDecay", self.free_body_x_decay),
            ("freeBodyAngularDecay", self.free_body_angular_decay),
            ("bottomBrickZDamping", self.bottom_brick_z_damping),
        ] {
            if v == 0.0 || !v.is_finite() {
                return Err(format!("{} must be a non-zero finite divisor, got {}", name, v));
            }
        }
        if self.sphere_subdivisions > 6 {
            return Err(format!(
                "sphereSubdivisions too high: {} (max 6)",
                self.sphere_subdivisions
            ));
        }
        Ok(())
    }

    /// Most fixed ticks a single `simulate` call can run; the budget,
    /// leftover included, never exceeds `max_frame_time`
    pub fn max_ticks_per_frame(&self) -> u32 {
        (self.max_frame_time / self.dt).floor() as u32
    }
}
