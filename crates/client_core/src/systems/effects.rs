//! Cosmetic dust bursts for jumps and landings.
//!
//! Pure simulation: the renderer draws `particles()` using `opacity()` and
//! `scale()`. Bursts live in bounded queues; spawning into a full queue
//! evicts the oldest burst. Nothing here feeds back into the controller.

use crate::controller::{ControllerEvent, impact_strength};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use tracing::trace;

/// Landings softer than this impact strength spawn nothing.
pub const LANDING_EFFECT_THRESHOLD: f32 = 0.05;
pub const MAX_LANDING_BURSTS: usize = 3;
pub const MAX_JUMP_BURSTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstKind {
    Landing,
    Jump,
}

impl BurstKind {
    /// Downward acceleration applied to this burst's particles (m/s²).
    #[must_use]
    pub fn gravity(self) -> f32 {
        match self {
            Self::Landing => 20.0,
            Self::Jump => 15.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub base_opacity: f32,
}

impl Particle {
    #[must_use]
    pub fn life_ratio(&self) -> f32 {
        (self.life / self.max_life).max(0.0)
    }
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.base_opacity * self.life_ratio()
    }
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.life_ratio()
    }
    #[must_use]
    pub fn alive(&self) -> bool {
        self.life > 0.0
    }

    fn step(&mut self, gravity: f32, dt: f32) {
        self.position += self.velocity * dt;
        self.velocity.y -= gravity * dt;
        self.life -= dt;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub kind: BurstKind,
    pub particles: Vec<Particle>,
}

/// Landing dust: more, larger and faster particles for harder impacts.
#[must_use]
pub fn landing_burst<R: Rng>(origin: Vec3, strength: f32, rng: &mut R) -> Burst {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (5.0 + strength * 8.0).floor() as usize;
    let particles = (0..count)
        .map(|_| Particle {
            position: origin,
            velocity: Vec3::new(
                (rng.random::<f32>() - 0.5) * 6.0 * strength,
                rng.random::<f32>() * 3.0 * strength,
                (rng.random::<f32>() - 0.5) * 6.0 * strength,
            ),
            life: 1.5,
            max_life: 1.5,
            size: 0.1 + rng.random::<f32>() * 0.3 * strength,
            base_opacity: 0.9 * strength,
        })
        .collect();
    Burst {
        kind: BurstKind::Landing,
        particles,
    }
}

/// Take-off puff: six small particles kicked upward.
#[must_use]
pub fn jump_burst<R: Rng>(origin: Vec3, rng: &mut R) -> Burst {
    let particles = (0..6)
        .map(|_| Particle {
            position: origin,
            velocity: Vec3::new(
                (rng.random::<f32>() - 0.5) * 2.0,
                rng.random::<f32>() * 3.0 + 1.0,
                (rng.random::<f32>() - 0.5) * 2.0,
            ),
            life: 1.0,
            max_life: 1.0,
            size: 0.08 + rng.random::<f32>() * 0.12,
            base_opacity: 0.7,
        })
        .collect();
    Burst {
        kind: BurstKind::Jump,
        particles,
    }
}

/// Fixed-capacity queue of bursts; oldest evicted on overflow.
#[derive(Clone, Debug)]
pub struct BurstQueue {
    capacity: usize,
    bursts: VecDeque<Burst>,
}

impl BurstQueue {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            bursts: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Add a burst, returning the evicted one when the queue was full.
    pub fn push(&mut self, burst: Burst) -> Option<Burst> {
        let evicted = if self.bursts.len() >= self.capacity {
            self.bursts.pop_front()
        } else {
            None
        };
        self.bursts.push_back(burst);
        evicted
    }

    /// Integrate every particle and drop dead particles and empty bursts.
    pub fn update(&mut self, dt: f32) {
        for burst in &mut self.bursts {
            let g = burst.kind.gravity();
            for p in &mut burst.particles {
                p.step(g, dt);
            }
            burst.particles.retain(Particle::alive);
        }
        self.bursts.retain(|b| !b.particles.is_empty());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    #[must_use]
    pub fn bursts(&self) -> impl Iterator<Item = &Burst> {
        self.bursts.iter()
    }

    #[must_use]
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.bursts.iter().flat_map(|b| b.particles.iter())
    }
}

/// Owns both burst queues and the RNG that seeds particle motion.
#[derive(Clone, Debug)]
pub struct EffectsLayer {
    pub landing: BurstQueue,
    pub jump: BurstQueue,
    rng: ChaCha8Rng,
}

impl EffectsLayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            landing: BurstQueue::new(MAX_LANDING_BURSTS),
            jump: BurstQueue::new(MAX_JUMP_BURSTS),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// React to a controller signal; `origin` is the player's current position.
    pub fn on_event(&mut self, event: ControllerEvent, origin: Vec3) {
        match event {
            ControllerEvent::Jump => {
                self.jump.push(jump_burst(origin, &mut self.rng));
                trace!(target: "effects", "jump burst");
            }
            ControllerEvent::Landing { fall_speed } => {
                let strength = impact_strength(fall_speed);
                if strength > LANDING_EFFECT_THRESHOLD {
                    self.landing.push(landing_burst(origin, strength, &mut self.rng));
                    trace!(target: "effects", strength, "landing burst");
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.landing.update(dt);
        self.jump.update(dt);
    }
}
