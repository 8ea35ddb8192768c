pub mod camera;
pub mod constants;
pub mod curve;
pub mod media;
pub mod scene;
pub mod spectrum;
pub mod tunnel;

pub use camera::CameraProgression;
pub use curve::{frame_at, wrap_unit, ClosedCurve, LocalFrame};
pub use scene::SceneAnimationState;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
