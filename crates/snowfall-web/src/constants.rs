// Page wiring and renderer constants for the web frontend.

// DOM hooks expected in index.html
pub const CONTAINER_ID: &str = "container";
pub const PLAY_BUTTON_SELECTOR: &str = ".btn";

// HTMLMediaElement.HAVE_ENOUGH_DATA
pub const MEDIA_HAVE_ENOUGH_DATA: u16 = 4;
// Longest the scene waits on the music before rendering without it
pub const AUDIO_READY_TIMEOUT_MS: i32 = 4000;

// Renderer
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;
