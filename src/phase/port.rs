//! Output port for coil patterns.

use embedded_hal::digital::OutputPin;

use crate::error::MotorError;

use super::PhasePattern;

/// Four-line output the driver writes coil patterns to.
///
/// One call to [`PhaseOutput::write`] is one logical update of all four lines.
pub trait PhaseOutput {
    /// Error reported by the underlying lines.
    type Error;

    /// One-time line configuration, run before the first step.
    fn setup(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drive all four lines to `pattern`.
    fn write(&mut self, pattern: PhasePattern) -> Result<(), Self::Error>;
}

/// [`PhaseOutput`] over four embedded-hal output pins.
///
/// Lines are written in order 1 to 4. embedded-hal pin types are outputs by
/// construction, so the default no-op setup is kept.
pub struct FourPinPort<P1, P2, P3, P4> {
    line1: P1,
    line2: P2,
    line3: P3,
    line4: P4,
}

impl<P1, P2, P3, P4> FourPinPort<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    /// Bind the four coil lines.
    pub fn new(line1: P1, line2: P2, line3: P3, line4: P4) -> Self {
        Self {
            line1,
            line2,
            line3,
            line4,
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (P1, P2, P3, P4) {
        (self.line1, self.line2, self.line3, self.line4)
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), MotorError> {
    if high {
        pin.set_high().map_err(|_| MotorError::PinError)
    } else {
        pin.set_low().map_err(|_| MotorError::PinError)
    }
}

impl<P1, P2, P3, P4> PhaseOutput for FourPinPort<P1, P2, P3, P4>
where
    P1: OutputPin,
    P2: OutputPin,
    P3: OutputPin,
    P4: OutputPin,
{
    type Error = MotorError;

    fn write(&mut self, pattern: PhasePattern) -> Result<(), Self::Error> {
        let [b1, b2, b3, b4] = pattern.lines();
        drive(&mut self.line1, b1)?;
        drive(&mut self.line2, b2)?;
        drive(&mut self.line3, b3)?;
        drive(&mut self.line4, b4)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_write_drives_each_line() {
        let mut l1 = PinMock::new(&[Transaction::set(State::Low)]);
        let mut l2 = PinMock::new(&[Transaction::set(State::High)]);
        let mut l3 = PinMock::new(&[Transaction::set(State::Low)]);
        let mut l4 = PinMock::new(&[Transaction::set(State::High)]);

        let mut port = FourPinPort::new(l1.clone(), l2.clone(), l3.clone(), l4.clone());
        port.write(PhasePattern::for_step(1)).unwrap();

        l1.done();
        l2.done();
        l3.done();
        l4.done();
    }

    #[test]
    fn test_off_drives_all_lines_low() {
        let expect = [Transaction::set(State::Low)];
        let (a, b, c, d) = (
            PinMock::new(&expect),
            PinMock::new(&expect),
            PinMock::new(&expect),
            PinMock::new(&expect),
        );

        let mut port = FourPinPort::new(a, b, c, d);
        port.setup().unwrap();
        port.write(PhasePattern::OFF).unwrap();

        let (mut a, mut b, mut c, mut d) = port.release();
        a.done();
        b.done();
        c.done();
        d.done();
    }
}
