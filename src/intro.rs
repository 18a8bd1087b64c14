//! Particle intro shown on the home page.
//!
//! A scene is generated once from a seed; [`IntroScene::frame`] is a pure
//! function of elapsed time so any renderer can sample it at whatever rate it
//! likes. [`IntroTimeline`] owns the clock and the completion callback.

use std::f64::consts::PI;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 180;
pub const EMBER_COUNT: usize = 50;
pub const TOTAL_DURATION: Duration = Duration::from_millis(3400);

const GOLD: [(u8, u8, u8); 5] = [
    (197, 160, 89),
    (219, 193, 132),
    (184, 147, 74),
    (229, 212, 161),
    (168, 137, 61),
];

// frames per second the motion constants were tuned at
const FPS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Swirl,
    Coalesce,
    Solidify,
    Reveal,
}

pub fn phase_at(progress: f64) -> Phase {
    if progress < 0.35 {
        Phase::Swirl
    } else if progress < 0.75 {
        Phase::Coalesce
    } else if progress < 1.0 {
        Phase::Solidify
    } else {
        Phase::Reveal
    }
}

pub fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(2)
}

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Overshooting ease, `back.out(1.7)` style.
pub fn ease_out_back(t: f64) -> f64 {
    let c1 = 1.70158;
    let c3 = c1 + 1.0;
    let t = t.clamp(0.0, 1.0) - 1.0;
    1.0 + c3 * t.powi(3) + c1 * t.powi(2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    angle: f64,
    distance: f64,
    target: (f64, f64),
    size: f64,
    color: usize,
    glow: f64,
    orbit_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Ember {
    x: f64,
    y: f64,
    size: f64,
    speed: f64,
    wobble: f64,
    wobble_speed: f64,
    opacity: f64,
    color: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub fill: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub phase: Phase,
    pub dots: Vec<Dot>,
    /// Opacity of the full-screen flash at the end of the solidify phase.
    pub flash: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntroScene {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    embers: Vec<Ember>,
}

fn k_shape_points(rng: &mut SmallRng, cx: f64, cy: f64, scale: f64) -> Vec<(f64, f64)> {
    let s = scale * 50.0;
    let mut points = Vec::with_capacity(105);
    // upright
    for i in 0..35 {
        points.push((
            cx - s * 1.5 + (rng.gen::<f64>() - 0.5) * s * 0.25,
            cy - s * 2.0 + (i as f64 / 35.0) * s * 4.0,
        ));
    }
    // upper and lower arms
    for sign in [-1.0, 1.0] {
        for i in 0..25 {
            let t = i as f64 / 25.0;
            points.push((cx - s * 1.3 + t * s * 2.0, cy + sign * t * s * 2.0));
        }
    }
    for _ in 0..20 {
        points.push((
            cx - s * 1.2 + rng.gen::<f64>() * s * 0.5,
            cy + (rng.gen::<f64>() - 0.5) * s * 3.0,
        ));
    }
    points
}

impl IntroScene {
    pub fn new(seed: u64, width: f64, height: f64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (cx, cy) = (width / 2.0, height / 2.0);
        let scale = width.min(height) * 0.003;
        let shape = k_shape_points(&mut rng, cx, cy, scale);

        let particles = (0..PARTICLE_COUNT)
            .map(|i| {
                let (tx, ty) = shape[i % shape.len()];
                Particle {
                    angle: rng.gen::<f64>() * PI * 2.0,
                    distance: 200.0 + rng.gen::<f64>() * width.max(height) * 0.6,
                    target: (
                        tx + (rng.gen::<f64>() - 0.5) * 15.0,
                        ty + (rng.gen::<f64>() - 0.5) * 15.0,
                    ),
                    size: rng.gen::<f64>() * 3.0 + 2.0,
                    color: rng.gen_range(0..GOLD.len()),
                    glow: rng.gen::<f64>() * 0.5 + 0.5,
                    orbit_speed: (rng.gen::<f64>() - 0.5) * 0.02,
                }
            })
            .collect();

        let embers = (0..EMBER_COUNT)
            .map(|_| Ember {
                x: rng.gen::<f64>() * width,
                y: height + rng.gen::<f64>() * 100.0,
                size: rng.gen::<f64>() * 2.0 + 1.0,
                speed: rng.gen::<f64>() * 1.5 + 0.5,
                wobble: rng.gen::<f64>() * PI * 2.0,
                wobble_speed: rng.gen::<f64>() * 0.03 + 0.01,
                opacity: rng.gen::<f64>() * 0.6 + 0.2,
                color: rng.gen_range(0..GOLD.len()),
            })
            .collect();

        Self {
            width,
            height,
            particles,
            embers,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Position of a particle at the end of the swirl phase.
    fn swirl_position(&self, p: &Particle, u: f64) -> (f64, f64) {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let swirl_frames = TOTAL_DURATION.as_secs_f64() * 0.35 * FPS;
        let angle = p.angle + p.orbit_speed * (1.0 + u) * u * swirl_frames;
        let dist = p.distance * (1.0 - u * 0.3);
        (cx + angle.cos() * dist, cy + angle.sin() * dist)
    }

    pub fn frame(&self, elapsed: Duration) -> Frame {
        let progress = (elapsed.as_secs_f64() / TOTAL_DURATION.as_secs_f64()).min(1.0);
        let phase = phase_at(progress);
        let frames = elapsed.as_secs_f64() * FPS;

        let ember_fade = if progress > 0.8 {
            1.0 - (progress - 0.8) / 0.2
        } else {
            1.0
        };
        let wrap = self.height + 120.0;
        let mut dots = self
            .embers
            .iter()
            .map(|e| {
                let y = (e.y - e.speed * frames + 10.0).rem_euclid(wrap) - 10.0;
                let x = e.x + (e.wobble + e.wobble_speed * frames).sin() * 0.3 * FPS / 10.0;
                Dot {
                    x,
                    y,
                    r: e.size,
                    fill: rgb(GOLD[e.color]),
                    opacity: e.opacity * ember_fade,
                }
            })
            .collect::<Vec<_>>();

        let mut flash = 0.0;
        for p in &self.particles {
            let (x, y, r, glow) = match phase {
                Phase::Swirl => {
                    let (x, y) = self.swirl_position(p, progress / 0.35);
                    (x, y, p.size, p.glow)
                }
                Phase::Coalesce => {
                    let u = (progress - 0.35) / 0.4;
                    let (sx, sy) = self.swirl_position(p, 1.0);
                    let e = ease_out_quart(u);
                    (
                        sx + (p.target.0 - sx) * e,
                        sy + (p.target.1 - sy) * e,
                        p.size,
                        p.glow * (1.0 - u * 0.4),
                    )
                }
                Phase::Solidify => {
                    let u = (progress - 0.75) / 0.25;
                    let pulse = (u * PI * 6.0).sin() * 0.2 + 0.8;
                    if u > 0.7 {
                        flash = (u - 0.7) / 0.3 * 0.4;
                    }
                    (p.target.0, p.target.1, p.size * pulse, p.glow * pulse)
                }
                Phase::Reveal => (p.target.0, p.target.1, p.size, p.glow),
            };
            dots.push(Dot {
                x,
                y,
                r,
                fill: rgb(GOLD[p.color]),
                opacity: glow.clamp(0.0, 1.0),
            });
        }

        Frame { phase, dots, flash }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({r}, {g}, {b})")
}

/// Clock for the intro. The completion callback runs exactly once, either
/// when the duration elapses or when the intro is skipped.
pub struct IntroTimeline<F: FnOnce()> {
    elapsed: Duration,
    total: Duration,
    on_complete: Option<F>,
}

impl<F: FnOnce()> IntroTimeline<F> {
    pub fn new(total: Duration, on_complete: F) -> Self {
        Self {
            elapsed: Duration::ZERO,
            total,
            on_complete: Some(on_complete),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn progress(&self) -> f64 {
        if self.total.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.total.as_secs_f64()).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.on_complete.is_none()
    }

    pub fn tick(&mut self, delta: Duration) -> Phase {
        self.elapsed = (self.elapsed + delta).min(self.total);
        if self.elapsed >= self.total {
            self.finish();
        }
        phase_at(self.progress())
    }

    pub fn skip(&mut self) {
        self.elapsed = self.total;
        self.finish();
    }

    fn finish(&mut self) {
        if let Some(cb) = self.on_complete.take() {
            cb();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(phase_at(0.0), Phase::Swirl);
        assert_eq!(phase_at(0.35), Phase::Coalesce);
        assert_eq!(phase_at(0.75), Phase::Solidify);
        assert_eq!(phase_at(1.0), Phase::Reveal);

        let mut last = Phase::Swirl;
        for i in 0..=100 {
            let phase = phase_at(i as f64 / 100.0);
            assert!(phase >= last);
            last = phase;
        }
    }

    #[test]
    fn test_easing_endpoints() {
        for ease in [ease_out_quad, ease_out_quart, ease_in_out_cubic, ease_out_back] {
            assert!(ease(0.0).abs() < 1e-9);
            assert!((ease(1.0) - 1.0).abs() < 1e-9);
        }
        // back overshoots before settling
        assert!(ease_out_back(0.7) > 1.0);
    }

    #[test]
    fn test_scene_is_deterministic() {
        let a = IntroScene::new(7, 1280.0, 720.0);
        let b = IntroScene::new(7, 1280.0, 720.0);
        let c = IntroScene::new(8, 1280.0, 720.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.particle_count(), PARTICLE_COUNT);
        let t = Duration::from_millis(1500);
        assert_eq!(a.frame(t), b.frame(t));
    }

    #[test]
    fn test_frame_settles_on_targets() {
        let scene = IntroScene::new(1, 800.0, 600.0);
        let end = scene.frame(TOTAL_DURATION);
        assert_eq!(end.phase, Phase::Reveal);
        assert_eq!(end.dots.len(), PARTICLE_COUNT + EMBER_COUNT);
        let start = scene.frame(Duration::ZERO);
        assert_eq!(start.phase, Phase::Swirl);
        assert_eq!(start.flash, 0.0);

        let late = scene.frame(Duration::from_millis(3350));
        assert_eq!(late.phase, Phase::Solidify);
        assert!(late.flash > 0.0);
    }

    #[test]
    fn test_completion_fires_once() {
        let calls = Cell::new(0);
        let mut timeline = IntroTimeline::new(TOTAL_DURATION, || calls.set(calls.get() + 1));
        assert_eq!(timeline.tick(Duration::from_millis(1000)), Phase::Swirl);
        assert!(!timeline.is_complete());
        assert_eq!(timeline.tick(Duration::from_millis(3000)), Phase::Reveal);
        timeline.tick(Duration::from_millis(16));
        timeline.skip();
        assert!(timeline.is_complete());
        assert_eq!(timeline.elapsed(), TOTAL_DURATION);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_skip_completes_early() {
        let calls = Cell::new(0);
        let mut timeline = IntroTimeline::new(TOTAL_DURATION, || calls.set(calls.get() + 1));
        timeline.skip();
        timeline.skip();
        assert_eq!(calls.get(), 1);
        assert_eq!(timeline.progress(), 1.0);
    }
}
