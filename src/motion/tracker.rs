//! Position bookkeeping for a stepper.
//!
//! The internal position is advanced when a step is *started*, so while a
//! move is in progress it runs one step ahead of the coils. Reported
//! positions subtract the direction to compensate.

use crate::config::units::Steps;

use super::Direction;

/// Motion intent and position of one motor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionState {
    /// Position counter, advanced as each step is initiated.
    position: i64,
    /// Steps still owed toward the target, signed.
    remaining: i64,
    /// Direction of the pending move; `Still` iff nothing is pending.
    direction: Direction,
}

impl MotionState {
    /// Idle at the reference position.
    #[inline]
    pub const fn new() -> Self {
        Self {
            position: 0,
            remaining: 0,
            direction: Direction::Still,
        }
    }

    /// Request a relative move, replacing any move in progress.
    pub fn move_by(&mut self, delta: Steps) {
        self.remaining = delta.0;
        self.direction = Direction::from_delta(delta.0);
    }

    /// Request a move to an absolute position, measured from the internal
    /// counter. Distances beyond the `i64` range are clamped to it.
    pub fn move_to(&mut self, target: Steps) {
        self.move_by(Steps(target.0.saturating_sub(self.position)));
    }

    /// Drop the pending move.
    pub fn stop(&mut self) {
        self.remaining = 0;
        self.direction = Direction::Still;
    }

    /// Redefine the current position without moving.
    pub fn reset_reference(&mut self, position: Steps) {
        self.position = position.0;
    }

    /// Best estimate of the physical position: internal counter minus the
    /// direction of the step in flight.
    #[inline]
    pub fn current_position(&self) -> Steps {
        Steps(self.position.saturating_sub(self.direction.sign()))
    }

    /// Raw position counter.
    #[inline]
    pub fn internal_position(&self) -> Steps {
        Steps(self.position)
    }

    /// Whether no move is pending or in progress.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.direction == Direction::Still
    }

    /// Direction of the pending move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Signed steps still owed.
    #[inline]
    pub fn distance_to_go(&self) -> Steps {
        Steps(self.remaining)
    }

    /// Position the pending move ends at.
    #[inline]
    pub fn target_position(&self) -> Steps {
        Steps(self.position.saturating_add(self.remaining))
    }

    /// If the move has no steps left, clear the direction. Returns whether
    /// the state is now ready.
    pub fn settle(&mut self) -> bool {
        if self.remaining == 0 {
            self.direction = Direction::Still;
        }
        self.is_ready()
    }

    /// Account for one step being initiated in the current direction.
    pub fn advance(&mut self) {
        let sign = self.direction.sign();
        self.position = self.position.saturating_add(sign);
        self.remaining = self.remaining.saturating_sub(sign);
    }
}
