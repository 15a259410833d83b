//! Level layout: where the wall stands, where the tank sits, and which
//! render handles new bodies carry.

use serde::{Deserialize, Serialize};

use crate::core::math::{Mat4, Vec3};

use super::handles::{MaterialHandle, ShapeHandle};

pub const MAX_COLUMNS: u32 = 256;
pub const MAX_BRICKS_PER_COLUMN: u32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelLayout {
    /// Center of the bottom brick of the first column
    pub origin: Vec3,
    pub columns: u32,
    pub bricks_per_column: u32,
    /// Per-column brick counts; overrides `columns`/`bricksPerColumn` when set
    pub heights: Option<Vec<u32>>,
    pub column_spacing: f32,
    pub row_spacing: f32,
    pub brick_size: Vec3,
    pub tank_origin: Vec3,
    pub randomize_spin: bool,
    pub seed: u32,
    pub brick_shape: ShapeHandle,
    pub brick_material: MaterialHandle,
    pub projectile_shape: ShapeHandle,
    pub projectile_material: MaterialHandle,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            origin: Vec3::new(-40.0, -6.0, 0.0),
            columns: 12,
            bricks_per_column: 3,
            heights: None,
            column_spacing: 8.0,
            row_spacing: 8.0,
            brick_size: Vec3::new(4.0, 4.0, 1.0),
            tank_origin: Vec3::new(10.0 - 4.75, -9.0, -80.0),
            randomize_spin: false,
            seed: 12345,
            brick_shape: ShapeHandle(0),
            brick_material: MaterialHandle(0),
            projectile_shape: ShapeHandle(1),
            projectile_material: MaterialHandle(1),
        }
    }
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let layout: LevelLayout = serde_json::from_str(json).map_err(|e| e.to_string())?;
        layout.validate()?;
        Ok(layout)
    }

    /// A single column of `bricks` bricks standing at `origin`
    pub fn single_column(origin: Vec3, bricks: u32) -> Self {
        Self {
            origin,
            columns: 1,
            bricks_per_column: bricks,
            ..Self::default()
        }
    }

    /// No wall at all; useful for projectile-only scenes
    pub fn empty() -> Self {
        Self {
            columns: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let column_count = match &self.heights {
            Some(h) => h.len(),
            None => self.columns as usize,
        };
        if column_count > MAX_COLUMNS as usize {
            return Err(format!("too many columns: {} (max {})", column_count, MAX_COLUMNS));
        }
        let heights = self.column_heights();
        if let Some(h) = heights.iter().find(|&&h| h > MAX_BRICKS_PER_COLUMN) {
            return Err(format!(
                "column too tall: {} bricks (max {})",
                h, MAX_BRICKS_PER_COLUMN
            ));
        }
        if !(self.origin.is_finite() && self.tank_origin.is_finite() && self.brick_size.is_finite()) {
            return Err("layout positions must be finite".to_string());
        }
        if self.brick_size.x == 0.0 || self.brick_size.y == 0.0 || self.brick_size.z == 0.0 {
            return Err("brickSize components must be non-zero".to_string());
        }
        if !(self.column_spacing.is_finite() && self.row_spacing.is_finite()) {
            return Err("spacing must be finite".to_string());
        }
        Ok(())
    }

    pub fn column_heights(&self) -> Vec<u32> {
        match &self.heights {
            Some(h) => h.clone(),
            None => vec![self.bricks_per_column; self.columns as usize],
        }
    }

    pub fn brick_count(&self) -> u32 {
        self.column_heights().iter().sum()
    }

    /// World transform of brick `row` (0 = bottom) in column `column`
    pub fn brick_location(&self, column: u32, row: u32) -> Mat4 {
        Mat4::translation(Vec3::new(
            self.origin.x + column as f32 * self.column_spacing,
            self.origin.y + row as f32 * self.row_spacing,
            self.origin.z,
        ))
    }
}
