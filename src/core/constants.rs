// Shared tuning constants for the scroll stage.

// Smooth scrolling
pub const SCROLL_EASE: f32 = 0.05; // fraction of the remaining distance covered per frame
pub const SCROLL_SNAP_EPSILON: f32 = 0.01; // soft offsets below this snap to 0
pub const NORMALIZE_DECIMALS: Option<u32> = Some(1); // stepping of the normalized position

// Mesh motion
pub const IDLE_SPIN_PER_SEC: f32 = 0.05; // Y rotation in radians per second of elapsed time
pub const SCROLL_ROTATION_SPAN: f32 = std::f32::consts::PI; // X rotation at the bottom of the page
pub const PORTRAIT_SCALE: f32 = 0.75;
pub const LANDSCAPE_SCALE: f32 = 1.0;
pub const MESH_DETAIL: u32 = 64; // icosphere subdivision level

// Rendering surface
pub const MAX_PIXEL_RATIO: f64 = 1.5;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10.0;
pub const CAMERA_Z: f32 = 2.5;

// Transitions (seconds)
pub const DEFAULT_TWEEN_SEC: f32 = 6.6;
pub const LINE_TWEEN_SEC: f32 = 1.5;

// Intro timeline
pub const INTRO_CAMERA_FROM_Z: f32 = 4.0;
pub const INTRO_CAMERA_SEC: f32 = 3.0;
pub const INTRO_REVEAL_OFFSET_PX: f32 = -100.0;
pub const INTRO_REVEAL_SEC: f32 = 1.6;
pub const INTRO_REVEAL_STAGGER_SEC: f32 = 0.2;
pub const INTRO_REVEAL_LEAD_SEC: f32 = 0.3; // first reveal starts this long after the camera

// Soundcheck pointer mapping
pub const SOUNDCHECK_X_SPAN: f32 = 4.0;
pub const SOUNDCHECK_Y_SPAN: f32 = 2.0;
