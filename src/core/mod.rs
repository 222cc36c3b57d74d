pub mod camera;
pub mod constants;
pub mod geometry;
pub mod intro;
pub mod math;
pub mod params;
pub mod scene;
pub mod schedule;
pub mod scroll;
pub mod stage;
pub mod tween;

pub use camera::Camera;
pub use constants::*;
pub use params::{ParamSettings, ParameterRange, Uniform};
pub use scene::{Reveal, SceneValues};
pub use schedule::{start_loop, FrameScheduler, FrameTask};
pub use scroll::{ScrollSettings, ScrollSurface, ViewportState};
pub use stage::{Gateway, Page, Stage};

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
