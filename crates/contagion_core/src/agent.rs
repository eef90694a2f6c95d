//! A single simulated individual and its per-tick state machine.

use contagion_data::{AgentSnapshot, EpiState, Vector};
use rand::Rng;
use std::f64::consts::TAU;

/// What changed for an agent during one [`Agent::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub recovered: bool,
    pub reflected_x: bool,
    pub reflected_y: bool,
}

/// Parameters every agent needs to advance one tick.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    pub infection_duration: u32,
    pub field_extent: Vector,
    pub tick_magnitude: f64,
}

/// A moving individual with an epidemiological state.
///
/// State only moves forward through `New -> Infected -> Immune`; the only
/// ways to change it are [`Agent::infect`] and [`Agent::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    position: Vector,
    direction: Vector,
    state: EpiState,
    time_in_state: u32,
}

impl Agent {
    #[must_use]
    pub fn new(position: Vector, direction: Vector) -> Self {
        Self {
            position,
            direction,
            state: EpiState::New,
            time_in_state: 0,
        }
    }

    /// Uniformly random position inside `[0, extent.x] x [0, extent.y]`,
    /// uniformly random heading over `[0, 2π)`.
    pub fn random<R: Rng + ?Sized>(field_extent: Vector, rng: &mut R) -> Self {
        let position = Vector::new(
            rng.gen_range(0.0..=field_extent.x),
            rng.gen_range(0.0..=field_extent.y),
        );
        let direction = Vector::unit_in_direction(rng.gen_range(0.0..TAU));
        Self::new(position, direction)
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    #[must_use]
    pub fn state(&self) -> EpiState {
        self.state
    }

    #[must_use]
    pub fn time_in_state(&self) -> u32 {
        self.time_in_state
    }

    #[must_use]
    pub fn is_infected(&self) -> bool {
        self.state == EpiState::Infected
    }

    /// Display colour, a pure function of the state.
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        self.state.rgb()
    }

    #[must_use]
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            position: self.position,
            state: self.state,
        }
    }

    /// Infects a `New` agent. Returns whether the state changed; agents that
    /// are already infected or immune are left untouched.
    pub fn infect(&mut self) -> bool {
        self.state == EpiState::New && self.advance()
    }

    /// Advances one tick: state timer, then movement, then reflection.
    ///
    /// Reflection flips the heading on each axis whose coordinate left
    /// `[0, extent]`. The position itself is not clamped, so an agent can sit
    /// just outside the field for a tick before the new heading brings it back.
    pub fn update(&mut self, ctx: &UpdateContext) -> UpdateOutcome {
        let recovered = self.update_state(ctx.infection_duration);
        let (reflected_x, reflected_y) = self.update_position(ctx);
        UpdateOutcome {
            recovered,
            reflected_x,
            reflected_y,
        }
    }

    /// Deflects away from `other`: `direction = normalize(direction - other.direction)`.
    pub fn bounce_off(&mut self, other: &Agent) {
        self.deflect(other.direction);
    }

    pub(crate) fn deflect(&mut self, other_direction: Vector) {
        self.direction = self.direction.minus(other_direction).normalize();
    }

    #[must_use]
    pub fn distance_to(&self, other: &Agent) -> f64 {
        self.position.minus(other.position).magnitude()
    }

    /// Moves to the next state in the chain and restarts the timer.
    /// Returns false for a terminal state.
    fn advance(&mut self) -> bool {
        match self.state.successor() {
            Some(next) => {
                self.state = next;
                self.time_in_state = 0;
                true
            }
            None => false,
        }
    }

    fn update_state(&mut self, infection_duration: u32) -> bool {
        self.time_in_state = self.time_in_state.saturating_add(1);
        self.state == EpiState::Infected
            && self.time_in_state >= infection_duration
            && self.advance()
    }

    fn update_position(&mut self, ctx: &UpdateContext) -> (bool, bool) {
        self.position = self.position.plus(self.direction.times(ctx.tick_magnitude));

        let out_x = self.position.x < 0.0 || self.position.x > ctx.field_extent.x;
        if out_x {
            self.direction = self.direction.reverse_x();
        }
        let out_y = self.position.y < 0.0 || self.position.y > ctx.field_extent.y;
        if out_y {
            self.direction = self.direction.reverse_y();
        }
        (out_x, out_y)
    }
}
