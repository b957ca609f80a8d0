//! Damped spring integration

use std::time::Duration;

/// Longest time a spring is simulated before it is considered at rest
const MAX_DURATION_MS: u64 = 10_000;

/// Integration step in seconds (one millisecond)
const STEP: f64 = 0.001;

/// Physical parameters of a spring moving from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    /// Displacement and velocity below which the spring is at rest
    pub precision: f64,
}

impl SpringConfig {
    pub const DEFAULT: Self = Self::new(170.0, 26.0);
    pub const GENTLE: Self = Self::new(120.0, 14.0);
    pub const WOBBLY: Self = Self::new(180.0, 12.0);
    pub const STIFF: Self = Self::new(210.0, 20.0);
    pub const SLOW: Self = Self::new(280.0, 60.0);
    pub const MOLASSES: Self = Self::new(280.0, 120.0);

    pub const fn new(tension: f64, friction: f64) -> Self {
        Self {
            tension,
            friction,
            mass: 1.0,
            precision: 0.01,
        }
    }

    /// Progress of the spring `elapsed` after release.
    ///
    /// Starts at 0, ends at exactly 1 once at rest, and may overshoot 1 in
    /// between for under-damped springs.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        let steps = u64::try_from(elapsed.as_millis())
            .unwrap_or(u64::MAX)
            .min(MAX_DURATION_MS);
        let mut state = State::default();

        for _ in 0..steps {
            state = self.step(state);
            if self.is_at_rest(state) {
                return 1.0;
            }
        }

        if steps == MAX_DURATION_MS {
            1.0
        } else {
            state.position
        }
    }

    /// Time until the spring comes to rest
    pub fn settle_duration(&self) -> Duration {
        let mut state = State::default();

        for ms in 1..=MAX_DURATION_MS {
            state = self.step(state);
            if self.is_at_rest(state) {
                return Duration::from_millis(ms);
            }
        }

        Duration::from_millis(MAX_DURATION_MS)
    }

    fn step(&self, state: State) -> State {
        let spring = self.tension * (1.0 - state.position);
        let damping = -self.friction * state.velocity;
        let acceleration = (spring + damping) / self.mass;
        let velocity = state.velocity + acceleration * STEP;

        State {
            position: state.position + velocity * STEP,
            velocity,
        }
    }

    fn is_at_rest(&self, state: State) -> bool {
        (1.0 - state.position).abs() < self.precision && state.velocity.abs() < self.precision
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    position: f64,
    velocity: f64,
}
