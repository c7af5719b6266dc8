//! Sequencer states.
//!
//! Step states carry their position in the four-phase cycle as a small integer
//! so the next state is plain arithmetic: `index + direction`. Stepping past
//! either end lands on a boundary marker that is resolved back into the cycle
//! the next time the state is entered.

/// State stored by the scheduler between two driver invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseState {
    /// Never stepped: the output port has not been set up yet.
    #[default]
    Idle,
    /// Decremented past `Step1`, continues at `Step4`.
    StepUnderflow,
    /// First pattern of the cycle.
    Step1,
    /// Second pattern of the cycle.
    Step2,
    /// Third pattern of the cycle.
    Step3,
    /// Fourth pattern of the cycle.
    Step4,
    /// Incremented past `Step4`, continues at `Step1`.
    StepOverflow,
}

impl PhaseState {
    /// Integer index of the state: 0 for the underflow marker, 1..=4 for the
    /// step states, 5 for the overflow marker. `Idle` has no index.
    #[inline]
    pub const fn index(self) -> Option<i8> {
        match self {
            PhaseState::Idle => None,
            PhaseState::StepUnderflow => Some(0),
            PhaseState::Step1 => Some(1),
            PhaseState::Step2 => Some(2),
            PhaseState::Step3 => Some(3),
            PhaseState::Step4 => Some(4),
            PhaseState::StepOverflow => Some(5),
        }
    }

    /// State for an index produced by [`PhaseState::index`] arithmetic.
    ///
    /// # Panics
    ///
    /// Indices outside 0..=5 cannot come out of a single `±1` advance and mean
    /// the caller broke the sequencing contract.
    pub fn from_index(index: i8) -> Self {
        match index {
            0 => PhaseState::StepUnderflow,
            1 => PhaseState::Step1,
            2 => PhaseState::Step2,
            3 => PhaseState::Step3,
            4 => PhaseState::Step4,
            5 => PhaseState::StepOverflow,
            _ => unreachable!("phase index {} outside the sequencer range", index),
        }
    }

    /// State that follows step `step` (1..=4) when travelling by `direction`.
    ///
    /// Unclamped: `Step4 + 1` yields `StepOverflow`, `Step1 - 1` yields
    /// `StepUnderflow`.
    #[inline]
    pub fn after(step: u8, direction: i8) -> Self {
        debug_assert!((1..=4).contains(&step));
        debug_assert!(direction.abs() <= 1);
        Self::from_index(step as i8 + direction)
    }

    /// Step index (1..=4) to emit when this state is entered, with the
    /// boundary markers folded back into the cycle. `None` for `Idle`.
    #[inline]
    pub fn resolve(self) -> Option<u8> {
        match self {
            PhaseState::Idle => None,
            PhaseState::StepUnderflow => Some(4),
            PhaseState::StepOverflow => Some(1),
            other => other.index().map(|i| i as u8),
        }
    }

    /// Whether this is the initial, never-stepped state.
    #[inline]
    pub fn is_idle(self) -> bool {
        self == PhaseState::Idle
    }
}

/// Fold any step offset back into 1..=4.
#[inline]
pub(crate) fn wrap_step(index: i8) -> u8 {
    ((index - 1).rem_euclid(4) + 1) as u8
}
