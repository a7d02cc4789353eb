use glam::Vec3;

// Shared scene/audio tuning constants used by the web frontend.

// Audio
pub const FFT_SIZE: u32 = 2048;
pub const SPECTRUM_BINS: usize = (FFT_SIZE / 2) as usize; // analyser frequencyBinCount
pub const DEFAULT_MUSIC_PATH: &str = "music/lastChristmas.mp3";

// Particle counts
pub const TREE_POINTS: usize = 4000;
pub const PLANE_POINTS: usize = 3000;
pub const SNOW_POINTS_PER_SET: usize = 300;
pub const SNOW_SET_COUNT: usize = 5; // one set per snowflake sprite
pub const MAX_FIELD_POINTS: usize = 100_000;

// Scene layout (world-space origins of each field)
pub const TREE_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, -5.0);
pub const PLANE_ORIGIN: Vec3 = Vec3::new(0.0, -8.0, 0.0);

// Tree shape
pub const TREE_Y_MIN: f32 = -8.0;
pub const TREE_Y_MAX: f32 = 10.0;
pub const TREE_BASE_RADIUS: f32 = 5.0;
pub const TREE_TURNS: f32 = 6.0;
pub const TREE_JITTER: f32 = 0.3; // scaled down toward the tip

// Scatter volume shared by the snow sets and the ground plane
pub const SCATTER_X: (f32, f32) = (-25.0, 25.0);
pub const SCATTER_Z: (f32, f32) = (-150.0, 15.0);

// Random phase range; also the snow fall period in steps
pub const PHASE_MAX: f32 = 1000.0;

// Frame clock
pub const TIME_PER_FRAME: f32 = 0.1;
pub const STEP_PERIOD: f32 = 1000.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_EYE: Vec3 =
    Vec3::new(-0.093_974_57, -2.559_708_7, 24.420_79);

// Orbit controls
pub const AUTO_ROTATE_SPEED: f32 = 2.0; // 30 seconds per orbit at 60fps
pub const ROTATE_SPEED: f32 = 1.0;

// Auto-scroll after the first play
pub const SCROLL_DELAY_MS: f64 = 3000.0;
pub const SCROLL_DURATION_MS: f64 = 300_000.0;
pub const SCROLL_AUTO_KILL_PX: f64 = 7.0;

// Sprite textures
pub const SPRITE_SIZE: u32 = 64;

// Palettes
pub const SNOW_PALETTE: [&str; 4] = ["#f1d4d4", "#f1f6f9", "#eeeeee", "#f1f1e8"];
pub const PLANE_PALETTE: [&str; 3] = ["#93abd3", "#f2f4c0", "#9ddfd3"];
