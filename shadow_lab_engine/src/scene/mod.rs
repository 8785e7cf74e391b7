//! Scene data: camera, lights and mesh geometry.
//!
//! Camera and lights are mutated by the input layer between frames and read
//! by the techniques during `update`. Meshes arrive parsed and are merged
//! into a single drawable mesh before a technique is initialized.

pub mod camera;
pub mod light;
pub mod mesh;
pub mod mesh_aggregator;

pub use camera::Camera;
pub use light::{Light, LightType, LightColor, LightIntervals, AxisInterval};
pub use mesh::{Mesh, IndexList};
pub use mesh_aggregator::{merge, merge_meshes};

use std::sync::{Arc, RwLock};

/// Camera shared between the input layer and the techniques
pub type SharedCamera = Arc<RwLock<Camera>>;

/// Light shared between the input layer and the techniques
pub type SharedLight = Arc<RwLock<Light>>;
