//! Stage objects: transforms, camera, model, screen texture, materials.

pub mod camera;
pub mod material;
pub mod model;
pub mod stage;
pub mod texture;
pub mod transform;

pub use camera::Camera;
pub use material::{MaterialSet, MaterialSpec};
pub use model::{DeviceMesh, DeviceModel, SCREEN_MESH};
pub use stage::Stage;
pub use texture::{ScreenTexture, WrapMode};
pub use transform::Transform;
