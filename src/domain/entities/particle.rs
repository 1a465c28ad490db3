//! Particle simulation entity.

use crate::domain::ports::RandomSource;

/// Particles spawned per burst.
pub const BURST_SIZE: usize = 100;

/// Downward acceleration added to vertical velocity each tick.
pub const GRAVITY: f64 = 0.5;

/// Constant upward impulse subtracted from every initial vertical velocity,
/// giving the burst its fountain shape.
pub const LAUNCH_IMPULSE: f64 = 7.0;

/// Half-width of the uniform initial velocity range on each axis.
pub const VELOCITY_SPREAD: f64 = 7.5;

/// Number of colors in the fixed palette. Indices into it are drawn at
/// spawn time; mapping an index to an actual color is the renderer's job.
pub const PALETTE_SIZE: usize = 5;

const SIZE_MIN: f64 = 3.0;
const SIZE_MAX: f64 = 8.0;

/// One ephemeral simulation entity. Coordinates grow rightward and
/// downward; a particle is dead once its y reaches the surface bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity per tick.
    pub vx: f64,
    /// Vertical velocity per tick.
    pub vy: f64,
    /// Draw radius.
    pub size: f64,
    /// Index into the fixed color palette.
    pub color_index: usize,
}

impl Particle {
    /// Spawns one particle at the given point. Draw order per particle is
    /// size, color, vx, vy, so a fixed random sequence maps predictably.
    fn spawn(x: f64, y: f64, rng: &mut dyn RandomSource) -> Self {
        let size = rng.range(SIZE_MIN, SIZE_MAX);
        let color_index = rng.index(PALETTE_SIZE);
        let vx = rng.range(-VELOCITY_SPREAD, VELOCITY_SPREAD);
        let vy = rng.range(-VELOCITY_SPREAD, VELOCITY_SPREAD) - LAUNCH_IMPULSE;

        Self {
            x,
            y,
            vx,
            vy,
            size,
            color_index,
        }
    }

    /// Spawns a full burst batch at the surface center.
    #[must_use]
    pub fn burst(center_x: f64, center_y: f64, rng: &mut dyn RandomSource) -> Vec<Self> {
        (0..BURST_SIZE)
            .map(|_| Self::spawn(center_x, center_y, rng))
            .collect()
    }

    /// Advances position by velocity, then applies gravity.
    pub fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
    }

    /// Whether the particle is still above the bottom edge.
    #[must_use]
    pub fn is_live(&self, bottom: f64) -> bool {
        self.y < bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::random_source::FixedRandomSource;

    #[test]
    fn test_burst_spawns_full_batch_at_center() {
        let mut rng = FixedRandomSource::new(vec![0.5]);
        let particles = Particle::burst(40.0, 12.0, &mut rng);

        assert_eq!(particles.len(), BURST_SIZE);
        assert!(particles.iter().all(|p| p.x == 40.0 && p.y == 12.0));
    }

    #[test]
    fn test_spawn_ranges() {
        // Alternating extremes of the unit interval exercise both ends of
        // every derived range.
        let mut rng = FixedRandomSource::new(vec![0.0, 0.999, 0.25, 0.75]);
        let particles = Particle::burst(0.0, 0.0, &mut rng);

        for p in &particles {
            assert!((3.0..8.0).contains(&p.size), "size {}", p.size);
            assert!(p.color_index < PALETTE_SIZE);
            assert!((-7.5..7.5).contains(&p.vx), "vx {}", p.vx);
            // Upward launch bias preserved: observed range is [-14.5, 0.5).
            assert!((-14.5..0.5).contains(&p.vy), "vy {}", p.vy);
        }
    }

    #[test]
    fn test_step_applies_velocity_then_gravity() {
        let mut p = Particle {
            x: 10.0,
            y: 10.0,
            vx: 2.0,
            vy: -3.0,
            size: 4.0,
            color_index: 0,
        };

        p.step();
        assert_eq!(p.x, 12.0);
        assert_eq!(p.y, 7.0);
        assert_eq!(p.vy, -2.5);
    }

    #[test]
    fn test_gravity_defeats_any_launch() {
        // Worst case: maximum upward velocity from the observed range.
        let mut p = Particle {
            x: 0.0,
            y: 50.0,
            vx: 0.0,
            vy: -14.5,
            size: 3.0,
            color_index: 0,
        };

        let mut ticks = 0;
        while p.is_live(100.0) {
            p.step();
            ticks += 1;
            assert!(ticks < 1_000, "particle never crossed the bottom edge");
        }
    }
}
