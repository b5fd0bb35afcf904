//! gui/visualizer.rs
//! Frequency bars + drifting particles, drawn on an iced canvas.
//!
//! The canvas only reads: `bars` is whatever the analyser returned on the
//! last frame tick, particles are stepped by the frame handler.

use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, mouse};
use rand::Rng;

use crate::core::spectrum::BIN_COUNT;

pub(crate) const VISUALIZER_H: f32 = 260.0;

const PARTICLE_COUNT: usize = 70;
const BAR_W: f32 = 4.0;
const BAR_STEP: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Particle {
    /// Horizontal position as a fraction of the canvas width.
    pub x: f32,
    /// Pixels from the top.
    pub y: f32,
    pub r: f32,
    /// Pixels per frame, upwards.
    pub speed: f32,
}

impl Particle {
    /// Drift up one frame, wrapping to the bottom.
    pub fn step(&mut self, height: f32) {
        self.y -= self.speed;
        if self.y < 0.0 {
            self.y = height;
        }
    }
}

pub(crate) fn spawn_particles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            x: rng.random::<f32>(),
            y: rng.random::<f32>() * VISUALIZER_H,
            r: rng.random::<f32>() * 3.0 + 1.0,
            speed: rng.random::<f32>() * 0.6 + 0.2,
        })
        .collect()
}

/// `hsl(h, s%, l%)` -> Color. Hue wraps.
pub(crate) fn hsl(h: f32, s: f32, l: f32) -> Color {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::from_rgb(r + m, g + m, b + m)
}

pub(crate) struct Visualizer<'a> {
    pub bars: &'a [u8; BIN_COUNT],
    pub particles: &'a [Particle],
}

impl<Message> Program<Message> for Visualizer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb(0.06, 0.04, 0.1));

        let particle_color = Color::from_rgba(1.0, 150.0 / 255.0, 1.0, 0.3);
        for p in self.particles {
            let center = Point::new(p.x * bounds.width, p.y.min(bounds.height));
            frame.fill(&Path::circle(center, p.r), particle_color);
        }

        let mut x = 0.0;
        for &h in self.bars.iter() {
            if x >= bounds.width {
                break;
            }
            let h = f32::from(h).min(bounds.height);
            if h > 0.0 {
                frame.fill_rectangle(
                    Point::new(x, bounds.height - h),
                    Size::new(BAR_W, h),
                    hsl(250.0 + h, 0.85, 0.6),
                );
            }
            x += BAR_STEP;
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-3 && (a.g - b.g).abs() < 1e-3 && (a.b - b.b).abs() < 1e-3
    }

    #[test]
    fn hsl_primaries_and_wrap() {
        assert!(close(hsl(0.0, 1.0, 0.5), Color::from_rgb(1.0, 0.0, 0.0)));
        assert!(close(hsl(120.0, 1.0, 0.5), Color::from_rgb(0.0, 1.0, 0.0)));
        assert!(close(hsl(240.0, 1.0, 0.5), Color::from_rgb(0.0, 0.0, 1.0)));
        assert!(close(hsl(480.0, 1.0, 0.5), hsl(120.0, 1.0, 0.5)));
    }

    #[test]
    fn particles_spawn_in_range() {
        let particles = spawn_particles(&mut StdRng::seed_from_u64(5));
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..VISUALIZER_H).contains(&p.y));
            assert!((1.0..4.0).contains(&p.r));
            assert!((0.2..0.8).contains(&p.speed));
        }
    }

    #[test]
    fn particle_wraps_to_bottom() {
        let mut p = Particle {
            x: 0.5,
            y: 0.3,
            r: 1.0,
            speed: 0.5,
        };
        p.step(VISUALIZER_H);
        assert_eq!(p.y, VISUALIZER_H);
        p.step(VISUALIZER_H);
        assert_eq!(p.y, VISUALIZER_H - 0.5);
    }
}
