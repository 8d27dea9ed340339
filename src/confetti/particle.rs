use rand::Rng;
use raylib::prelude::*;

use crate::constants::{CONFETTI_GRAVITY, CONFETTI_PALETTE};

// One confetti piece. Size, gravity and color are fixed at creation; the
// field recycles pieces instead of ever deallocating them.
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    pub speed_x: f32,
    pub speed_y: f32,
    pub gravity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        // Pieces start above the top edge so the burst rains in instead of
        // popping into view.
        Self {
            x: rng.random_range(0.0..width.max(1.0)),
            y: rng.random_range(-height.max(1.0)..0.0),
            size: rng.random_range(5.0..20.0),
            color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
            speed_x: rng.random_range(-3.0..3.0),
            speed_y: rng.random_range(2.0..4.0),
            gravity: CONFETTI_GRAVITY,
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-5.0..5.0),
        }
    }

    // One animation tick. Bounds handling belongs to the field.
    pub fn update(&mut self) {
        self.y += self.speed_y;
        self.x += self.speed_x;
        self.speed_y += self.gravity;
        self.rotation += self.rotation_speed;
    }

    // Re-enter just above the top edge once the piece has fallen past the
    // bottom. Horizontal drift, spin, color and size all survive the reset.
    pub fn recycle(&mut self, rng: &mut impl Rng, width: f32) {
        self.y = -self.size;
        self.speed_y = rng.random_range(2.0..4.0);
        self.x = rng.random_range(0.0..width.max(1.0));
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        // A flat rectangle twice as wide as tall, rotated around its center.
        d.draw_rectangle_pro(
            Rectangle::new(self.x, self.y, self.size, self.size / 2.0),
            Vector2::new(self.size / 2.0, self.size / 4.0),
            self.rotation,
            self.color,
        );
    }
}
