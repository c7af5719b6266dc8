//! Four-phase coil sequencing.
//!
//! Coil patterns, the cyclic sequencer states and the output port the
//! patterns are written to.

mod pattern;
mod port;
pub(crate) mod state;

pub use pattern::PhasePattern;
pub use port::{FourPinPort, PhaseOutput};
pub use state::PhaseState;
