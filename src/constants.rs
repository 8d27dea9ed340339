use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MONTH_COUNT: u32 = 12;              // One slide per month of the first year

pub const AUTOPLAY_MIN_MS: u32 = 2000;        // Speed slider lower bound
pub const AUTOPLAY_MAX_MS: u32 = 8000;        // Speed slider upper bound
pub const AUTOPLAY_STEP_MS: u32 = 1000;       // Speed slider step
pub const AUTOPLAY_DEFAULT_MS: u32 = 4000;    // 4 seconds per slide

pub const CONFETTI_COUNT: usize = 200;        // Fixed pool size, pieces are recycled
pub const CONFETTI_GRAVITY: f32 = 0.1;        // Added to vertical speed each tick
pub const CONFETTI_DURATION: f32 = 5.0;       // Seconds the overlay stays mounted

// Confetti palette (blues, teals and greens)
pub const CONFETTI_PALETTE: [Color; 7] = [
    Color::new(0x42, 0x99, 0xe1, 255),
    Color::new(0x38, 0xb2, 0xac, 255),
    Color::new(0x68, 0xd3, 0x91, 255),
    Color::new(0x90, 0xcd, 0xf4, 255),
    Color::new(0x81, 0xe6, 0xd9, 255),
    Color::new(0x9a, 0xe6, 0xb4, 255),
    Color::new(0x31, 0x82, 0xce, 255),
];
