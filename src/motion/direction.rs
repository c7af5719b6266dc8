//! Direction of travel.

/// Tri-state direction sign. `Still` means no move is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Negative step count, phase cycle traversed downwards.
    Reverse,
    /// No motion pending.
    #[default]
    Still,
    /// Positive step count, phase cycle traversed upwards.
    Forward,
}

impl Direction {
    /// Direction from a signed step count; zero maps to `Still`.
    #[inline]
    pub fn from_delta(steps: i64) -> Self {
        match steps.signum() {
            1 => Direction::Forward,
            -1 => Direction::Reverse,
            _ => Direction::Still,
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        self.offset() as i64
    }

    /// Sign as a phase index offset.
    #[inline]
    pub fn offset(self) -> i8 {
        match self {
            Direction::Reverse => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    /// Whether this direction means motion is pending.
    #[inline]
    pub fn is_moving(self) -> bool {
        self != Direction::Still
    }
}
