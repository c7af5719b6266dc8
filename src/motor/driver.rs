//! Four-phase stepper driver.
//!
//! Generic over the coil output port and the scheduler that re-invokes it.

use crate::config::units::Steps;
use crate::error::{MotorError, Result};
use crate::motion::{Direction, MotionState};
use crate::phase::state::wrap_step;
use crate::phase::{PhaseOutput, PhasePattern, PhaseState};
use crate::schedule::Scheduler;

use super::builder::StepperBuilder;
use super::pulse::PulseWidth;

/// Non-blocking driver for a 4-wire bipolar stepper.
///
/// Generic over:
/// - `O`: Coil output port (must implement [`PhaseOutput`])
/// - `S`: Scheduler holding the sequencer state between invocations
///
/// Commands only record intent. Steps happen in [`Stepper::update`], which
/// the application calls from a polling loop or timer interrupt; at most one
/// step is taken per call and never sooner than the minimum pulse width after
/// the previous one.
pub struct Stepper<O, S>
where
    O: PhaseOutput,
    S: Scheduler,
{
    /// Coil lines.
    output: O,

    /// Holds the next sequencer state and the wake time.
    scheduler: S,

    /// Position, remaining steps and direction.
    motion: MotionState,

    /// Minimum time between two steps.
    pulse_width: PulseWidth,

    /// Direction the scheduler's pending state was computed with.
    scheduled: Direction,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,
}

impl<O, S> Stepper<O, S>
where
    O: PhaseOutput,
    S: Scheduler,
{
    /// Create a driver at position zero with nothing pending.
    pub(crate) fn new(
        output: O,
        scheduler: S,
        pulse_width: PulseWidth,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            output,
            scheduler,
            motion: MotionState::new(),
            pulse_width,
            scheduled: Direction::Still,
            name,
        }
    }

    /// Start building a driver.
    pub fn builder() -> StepperBuilder<O, S> {
        StepperBuilder::new()
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Minimum time between two physical steps.
    #[inline]
    pub fn min_pulse_width(&self) -> PulseWidth {
        self.pulse_width
    }

    /// Direction of the pending move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.motion.direction()
    }

    /// Signed steps still owed toward the target.
    #[inline]
    pub fn distance_to_go(&self) -> Steps {
        self.motion.distance_to_go()
    }

    /// Position the pending move ends at.
    #[inline]
    pub fn target_position(&self) -> Steps {
        self.motion.target_position()
    }

    /// Bookkeeping snapshot.
    #[inline]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// The coil output port.
    #[inline]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// The scheduler.
    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, e.g. for an interrupt handler that
    /// owns the wake-up timer.
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Tear down the driver and give back the port and scheduler.
    pub fn release(self) -> (O, S) {
        (self.output, self.scheduler)
    }

    /// Move by `delta` steps, replacing any move in progress.
    ///
    /// `move_by(Steps(0))` cancels the pending move like [`Stepper::stop_hold`].
    pub fn move_by(&mut self, delta: Steps) {
        self.motion.move_by(delta);
        debug!("{}: move by {} steps", self.name.as_str(), delta.0);
    }

    /// Move to an absolute position, replacing any move in progress.
    ///
    /// The distance is measured from the internal counter, which runs one
    /// step ahead of [`Stepper::current_position`] while moving.
    pub fn move_to(&mut self, target: Steps) {
        self.motion.move_to(target);
        debug!("{}: move to {}", self.name.as_str(), target.0);
    }

    /// Stop and keep the last pattern energized (holding torque).
    pub fn stop_hold(&mut self) {
        self.motion.stop();
        debug!("{}: stop, holding", self.name.as_str());
    }

    /// Stop and de-energize all coils.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::PinError`] if the port rejects the write.
    pub fn stop_off(&mut self) -> Result<()> {
        self.stop_hold();
        self.power_down()
    }

    /// Alias of [`Stepper::stop_hold`].
    #[inline]
    pub fn stop(&mut self) {
        self.stop_hold();
    }

    /// Redefine the current position without moving (homing, calibration).
    pub fn reset_reference_position(&mut self, position: Steps) {
        self.motion.reset_reference(position);
    }

    /// Alias of [`Stepper::reset_reference_position`].
    #[inline]
    pub fn set_current_position(&mut self, position: Steps) {
        self.reset_reference_position(position);
    }

    /// Best estimate of the physical position.
    ///
    /// The internal counter is advanced when a step is started, so while
    /// moving this reports the counter minus the direction. Exact when idle.
    #[inline]
    pub fn current_position(&self) -> Steps {
        self.motion.current_position()
    }

    /// Whether no move is pending or in progress.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.motion.is_ready()
    }

    /// Write the all-low pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::PinError`] if the port rejects the write.
    pub fn power_down(&mut self) -> Result<()> {
        self.output
            .write(PhasePattern::OFF)
            .map_err(|_| MotorError::PinError)?;
        debug!("{}: coils off", self.name.as_str());
        Ok(())
    }

    /// Advance the driver.
    ///
    /// Does nothing while the scheduler is still sleeping or no move is
    /// pending. A move whose steps are all taken is finalized here, one pulse
    /// width after its last step. Otherwise exactly one pattern is written and
    /// the scheduler is asked to come back after the minimum pulse width.
    ///
    /// Safe to call arbitrarily often.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::PinError`] if the port rejects setup or the
    /// write. Position and scheduler state are only touched once the write
    /// went through, so the same step is retried on the next call.
    pub fn update(&mut self) -> Result<()> {
        let state = match self.scheduler.poll_state() {
            Some(state) => state,
            None => return Ok(()),
        };

        if !self.motion.direction().is_moving() {
            return Ok(());
        }
        if self.motion.settle() {
            debug!(
                "{}: move complete at {}",
                self.name.as_str(),
                self.motion.current_position().0
            );
            return Ok(());
        }

        if state.is_idle() {
            self.output.setup().map_err(|_| MotorError::PinError)?;
        }

        let step = self.resolve(state);
        self.output
            .write(PhasePattern::for_step(step))
            .map_err(|_| MotorError::PinError)?;

        let entered = PhaseState::from_index(step as i8);
        if entered != state {
            self.scheduler.set_state(entered);
        }
        self.motion.advance();

        let direction = self.motion.direction();
        self.scheduled = direction;
        self.scheduler.go_after_sleep(
            PhaseState::after(step, direction.offset()),
            self.pulse_width.as_duration(),
        );

        trace!(
            "{}: step {} at {}",
            self.name.as_str(),
            step,
            self.motion.internal_position().0
        );
        Ok(())
    }

    // Step index (1..=4) to emit for the state the scheduler reported.
    fn resolve(&self, state: PhaseState) -> u8 {
        let direction = self.motion.direction();
        match state.resolve() {
            // First step ever: enter the cycle from below.
            None => 1,
            // The pending state was aimed by a superseded move in the other
            // direction. Re-aim it from the last emitted pattern.
            Some(step) if self.scheduled.is_moving() && self.scheduled != direction => {
                wrap_step(step as i8 - self.scheduled.offset() + direction.offset())
            }
            Some(step) => step,
        }
    }
}
