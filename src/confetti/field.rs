use raylib::prelude::*;

use crate::confetti::particle::Particle;
use crate::constants::CONFETTI_COUNT;

// A fixed pool of confetti pieces falling over the whole window. The field
// owns its particles outright; off-screen pieces are recycled, never freed.
pub struct ConfettiField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ConfettiField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_count(width, height, CONFETTI_COUNT)
    }

    fn with_count(width: f32, height: f32, count: usize) -> Self {
        let mut rng = rand::rng();
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self { particles, width, height }
    }

    // Advance every piece one tick and recycle the ones that left through
    // the bottom edge. There is no inter-particle interaction, so order
    // does not matter.
    pub fn tick(&mut self) {
        let mut rng = rand::rng();
        for p in &mut self.particles {
            p.update();
            if p.y > self.height {
                p.recycle(&mut rng, self.width);
            }
        }
    }

    // A resize only changes the extent; pieces already in flight keep
    // falling from wherever they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for p in &self.particles {
            p.draw(d);
        }
    }

    #[cfg(test)]
    fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_holds_the_full_pool_with_spawn_ranges() {
        let field = ConfettiField::new(800.0, 600.0);
        assert_eq!(field.particles().len(), CONFETTI_COUNT);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= -600.0 && p.y < 0.0);
        }
    }

    #[test]
    fn tick_recycles_pieces_below_the_bottom_edge() {
        let mut field = ConfettiField::with_count(800.0, 100.0, 50);
        // Any piece that ends a tick below the bottom edge is recycled in
        // that same tick, so y <= height holds after every tick.
        for _ in 0..200 {
            field.tick();
            for p in field.particles() {
                assert!(p.y <= 100.0, "piece escaped: y = {}", p.y);
            }
        }
        assert_eq!(field.particles().len(), 50);
    }

    #[test]
    fn resize_keeps_pieces_where_they_are() {
        let mut field = ConfettiField::with_count(800.0, 600.0, 10);
        let before: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

        field.resize(1920.0, 1080.0);

        let after: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn recycled_pieces_respect_the_new_extent_after_resize() {
        let mut field = ConfettiField::with_count(300.0, 100.0, 50);
        field.resize(1200.0, 50.0);
        for _ in 0..200 {
            field.tick();
            for p in field.particles() {
                assert!(p.y <= 50.0, "recycle used the stale height: y = {}", p.y);
            }
        }
    }
}
