//! Coil energization patterns.

/// Levels of the four coil lines, `true` meaning driven high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhasePattern(pub [bool; 4]);

/// Full-step table. Lines 1/2 feed coil A, lines 3/4 feed coil B; neighbouring
/// rows (cyclically) reverse exactly one coil.
const FULL_STEP: [PhasePattern; 4] = [
    PhasePattern([false, true, false, true]),
    PhasePattern([false, true, true, false]),
    PhasePattern([true, false, true, false]),
    PhasePattern([true, false, false, true]),
];

impl PhasePattern {
    /// All four lines low: coils de-energized, no holding torque.
    pub const OFF: PhasePattern = PhasePattern([false; 4]);

    /// Pattern for step index 1..=4.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside 1..=4.
    #[inline]
    pub fn for_step(index: u8) -> Self {
        match index {
            1..=4 => FULL_STEP[(index - 1) as usize],
            _ => unreachable!("step index {} outside 1..=4", index),
        }
    }

    /// Raw line levels.
    #[inline]
    pub const fn lines(self) -> [bool; 4] {
        self.0
    }

    /// Whether every line is low.
    #[inline]
    pub fn is_off(self) -> bool {
        self == Self::OFF
    }

    /// Number of lines whose level differs between `self` and `other`.
    pub fn toggled_lines(self, other: PhasePattern) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count() as u32
    }

    /// Number of coils (A = lines 1/2, B = lines 3/4) whose drive changed
    /// between `self` and `other`.
    pub fn changed_coils(self, other: PhasePattern) -> u32 {
        let a = self.0[0..2] != other.0[0..2];
        let b = self.0[2..4] != other.0[2..4];
        a as u32 + b as u32
    }
}
