//! Particle burst overlay.
//!
//! Each successful send ignites one [`BurstSession`]: an owned, tick-driven
//! simulation of a fixed particle batch. Sessions are independent; two
//! bursts in flight simply layer on the same overlay. The owner drops
//! finished sessions and may cancel one early on teardown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::entities::Particle;
use crate::domain::ports::RandomSource;

/// Horizontal simulation dots per terminal cell (braille density).
const DOTS_PER_CELL_X: f64 = 2.0;
/// Vertical simulation dots per terminal cell (braille density).
const DOTS_PER_CELL_Y: f64 = 4.0;

/// The fixed particle palette, indexed by `Particle::color_index`.
const PALETTE: [Color; 5] = [
    Color::Rgb(0x3b, 0x82, 0xf6),
    Color::Rgb(0x10, 0xb9, 0x81),
    Color::Rgb(0xf5, 0x9e, 0x0b),
    Color::Rgb(0xef, 0x44, 0x44),
    Color::Rgb(0x8b, 0x5c, 0xf6),
];

/// One burst: a batch of particles over a surface sampled at ignition.
///
/// The surface is the frame measured in simulation dots, so the physics
/// constants keep pixel-scale proportions on a cell grid.
pub struct BurstSession {
    particles: Vec<Particle>,
    bottom: f64,
}

impl BurstSession {
    /// Ignites a burst at the center of the given frame area.
    #[must_use]
    pub fn ignite(area: Rect, rng: &mut dyn RandomSource) -> Self {
        let width = f64::from(area.width) * DOTS_PER_CELL_X;
        let bottom = f64::from(area.height) * DOTS_PER_CELL_Y;
        let particles = Particle::burst(width / 2.0, bottom / 2.0, rng);

        Self { particles, bottom }
    }

    /// Advances every particle still above the bottom edge by one tick.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            if particle.is_live(self.bottom) {
                particle.step();
            }
        }
    }

    /// Whether no particle remains above the bottom edge.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.particles.iter().any(|p| p.is_live(self.bottom))
    }

    /// Stops the session early; it reports finished from now on.
    pub fn cancel(&mut self) {
        self.particles.clear();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw(&self, area: Rect, buf: &mut Buffer) {
        for particle in self.particles.iter().filter(|p| p.is_live(self.bottom)) {
            let color = PALETTE[particle.color_index % PALETTE.len()];

            // Fill every cell whose dot-space center falls inside the
            // particle's radius.
            let min_col = ((particle.x - particle.size) / DOTS_PER_CELL_X).floor();
            let max_col = ((particle.x + particle.size) / DOTS_PER_CELL_X).ceil();
            let min_row = ((particle.y - particle.size) / DOTS_PER_CELL_Y).floor();
            let max_row = ((particle.y + particle.size) / DOTS_PER_CELL_Y).ceil();

            let mut col = min_col;
            while col <= max_col {
                let mut row = min_row;
                while row <= max_row {
                    let dot_x = (col + 0.5) * DOTS_PER_CELL_X;
                    let dot_y = (row + 0.5) * DOTS_PER_CELL_Y;
                    let dx = dot_x - particle.x;
                    let dy = dot_y - particle.y;

                    if dx * dx + dy * dy <= particle.size * particle.size
                        && col >= 0.0
                        && row >= 0.0
                    {
                        let x = area.x + col as u16;
                        let y = area.y + row as u16;
                        if x < area.right() && y < area.bottom() {
                            buf[(x, y)]
                                .set_symbol("\u{25cf}")
                                .set_style(Style::default().fg(color));
                        }
                    }
                    row += 1.0;
                }
                col += 1.0;
            }
        }
    }
}

/// Full-frame overlay painting every active burst over the current screen.
pub struct ConfettiOverlay<'a> {
    sessions: &'a [BurstSession],
}

impl<'a> ConfettiOverlay<'a> {
    /// Creates an overlay over the given sessions.
    #[must_use]
    pub const fn new(sessions: &'a [BurstSession]) -> Self {
        Self { sessions }
    }
}

impl Widget for ConfettiOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for session in self.sessions {
            session.draw(area, buf);
        }
    }
}
