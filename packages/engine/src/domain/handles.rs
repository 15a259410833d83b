//! Opaque render handles
//!
//! The renderer owns shapes and materials; bodies only carry the ids it
//! hands out and give them back unchanged in the draw list.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeHandle(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialHandle(pub u32);
